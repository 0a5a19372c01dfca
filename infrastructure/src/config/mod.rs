//! Configuration file loading for strands
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./strands.toml` or `./.strands.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/strands/config.toml`
//! 4. Fallback: `~/.config/strands/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileKnowledgeBaseConfig, FilePresenterConfig, FilePromptConfig};
pub use loader::ConfigLoader;
