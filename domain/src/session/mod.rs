//! Chat messages exchanged inside the agent event loop.
//!
//! - [`entities::ChatMessage`]: a finalized message (role + content blocks)
//! - [`entities::ContentBlock`]: text, reasoning, tool use or tool result

pub mod entities;
