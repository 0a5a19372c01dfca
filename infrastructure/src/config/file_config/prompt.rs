//! Prompt configuration from TOML (`[prompt]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePromptConfig {
    pub system_prompt: Option<String>,
}
