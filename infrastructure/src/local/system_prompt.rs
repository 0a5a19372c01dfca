//! System prompt resolution.
//!
//! Priority (highest to lowest):
//! 1. Explicit prompt (`STRANDS_SYSTEM_PROMPT` or `[prompt].system_prompt`)
//! 2. `.prompt` file in the working directory, trimmed
//! 3. [`DEFAULT_SYSTEM_PROMPT`]

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";

const PROMPT_FILE: &str = ".prompt";

#[derive(Debug, Clone)]
pub struct SystemPromptLoader {
    dir: PathBuf,
}

impl SystemPromptLoader {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn resolve(&self, explicit: Option<&str>) -> String {
        if let Some(prompt) = explicit.filter(|p| !p.is_empty()) {
            debug!("Using explicit system prompt");
            return prompt.to_string();
        }

        let path = self.dir.join(PROMPT_FILE);
        if path.is_file() {
            match std::fs::read_to_string(&path) {
                Ok(text) => {
                    debug!("Using system prompt from {}", path.display());
                    return text.trim().to_string();
                }
                Err(e) => warn!("Could not read {}: {}", path.display(), e),
            }
        }

        DEFAULT_SYSTEM_PROMPT.to_string()
    }
}
