//! Tool invocation tracking.
//!
//! A [`ToolInvocation`] is created when a tool-use id is first observed in a
//! streaming `current_tool_use` and lives until its `toolResult` arrives.
//!
//! ```text
//! current_tool_use(id) ──> ToolInvocation ──> toolResult(id) ──> ToolOutcome
//!                           (input grows)
//! ```

pub mod invocation;

pub use invocation::{ToolInvocation, ToolOutcome};
