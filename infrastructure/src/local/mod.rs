//! Adapters for files in the working directory.
//!
//! - [`FileWelcomeStore`]: the `.welcome` scratchpad
//! - [`SystemPromptLoader`]: `.prompt` with environment/config override

mod system_prompt;
mod welcome_file;

pub use system_prompt::{DEFAULT_SYSTEM_PROMPT, SystemPromptLoader};
pub use welcome_file::FileWelcomeStore;
