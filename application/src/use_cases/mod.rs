//! Use cases for the application layer.
//!
//! - [`present_callbacks`]: render event-loop callbacks in the terminal
//! - [`store_in_kb`]: fire-and-forget knowledge-base storage
//! - [`store_conversation`]: capture a user/assistant exchange
//! - [`manage_welcome`]: view or edit the welcome scratchpad

pub mod manage_welcome;
pub mod present_callbacks;
pub mod store_conversation;
pub mod store_in_kb;
