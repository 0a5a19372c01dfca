//! Event-loop callback records.
//!
//! An agent runtime reports progress by invoking a callback with a loosely
//! shaped bag of optional fields. [`CallbackRecord`] is the typed form of that
//! bag: every field is optional, any subset may be present.
//!
//! - [`record::CallbackRecord`]: one callback invocation
//! - [`record::ConsoleTarget`]: rendering target handle
//! - [`structured::Structured`]: nested payload that may be malformed
//! - [`tool_use::CurrentToolUse`]: incremental view of the tool being invoked
//! - [`tool_use::ToolUseId`]: correlates a tool start with its result

pub mod record;
pub mod structured;
pub mod tool_use;

pub use record::{CallbackRecord, ConsoleTarget};
pub use structured::Structured;
pub use tool_use::{CurrentToolUse, ToolUseId};
