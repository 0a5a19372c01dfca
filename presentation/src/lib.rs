//! Presentation layer for strands
//!
//! This crate contains the CLI definition, the indicatif/colored terminal
//! adapters for the rendering port, and console output helpers.

pub mod cli;
pub mod output;
pub mod terminal;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use output::notifier::ConsoleNotifier;
pub use output::panel::Panel;
pub use terminal::{TerminalRenderer, ThinkingIndicator, ToolProgressSpinner};
