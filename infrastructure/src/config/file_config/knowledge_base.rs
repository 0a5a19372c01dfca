//! Knowledge base configuration from TOML (`[knowledge_base]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw knowledge base configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileKnowledgeBaseConfig {
    /// Default knowledge base id
    pub id: Option<String>,
    /// Directory holding the local `<id>.jsonl` files
    pub directory: PathBuf,
}

impl Default for FileKnowledgeBaseConfig {
    fn default() -> Self {
        Self {
            id: None,
            directory: PathBuf::from(".strands").join("knowledge_base"),
        }
    }
}
