//! Domain layer for strands
//!
//! This crate contains the callback records an agent event loop emits, the
//! chat message shapes they carry, per-tool invocation state, and the
//! knowledge-base and welcome-text value objects. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Callback record**: one event-loop callback; any subset of fields set
//! - **Tool invocation**: a tool seen starting and not yet resolved
//! - **Conversation record**: a user/assistant exchange stored for retrieval

pub mod callback;
pub mod core;
pub mod knowledge;
pub mod session;
pub mod tool;
pub mod welcome;

// Re-export commonly used types
pub use callback::{CallbackRecord, ConsoleTarget, CurrentToolUse, Structured, ToolUseId};
pub use core::error::DomainError;
pub use knowledge::{ConversationRecord, KnowledgeBaseId, KnowledgeDocument};
pub use session::entities::{
    ChatMessage, ContentBlock, Role, ToolResult, ToolResultStatus, ToolUse,
};
pub use tool::invocation::{ToolInvocation, ToolOutcome, preparing_label, starting_label};
pub use welcome::{DEFAULT_WELCOME_TEXT, WelcomeAction, present_welcome};
