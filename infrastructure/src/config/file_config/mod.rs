//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod knowledge_base;
mod presenter;
mod prompt;

pub use knowledge_base::FileKnowledgeBaseConfig;
pub use presenter::FilePresenterConfig;
pub use prompt::FilePromptConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Spinner and notification settings
    pub presenter: FilePresenterConfig,
    /// Knowledge base settings
    pub knowledge_base: FileKnowledgeBaseConfig,
    /// System prompt settings
    pub prompt: FilePromptConfig,
}
