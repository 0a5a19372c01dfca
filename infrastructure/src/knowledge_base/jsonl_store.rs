//! Local knowledge base backed by JSONL files.
//!
//! Each knowledge base is one file, `<directory>/<id>.jsonl`, and each
//! stored document is appended as a single JSON line:
//!
//! ```json
//! {"id":"memory_20250101_120000_1a2b3c4d","title":"...","action":"store","content":"...","timestamp":"..."}
//! ```

use async_trait::async_trait;
use serde::Serialize;
use std::path::{Path, PathBuf};
use strands_application::ports::knowledge_base::{KnowledgeBaseError, KnowledgeBaseStore};
use strands_domain::{KnowledgeBaseId, KnowledgeDocument};
use tokio::io::AsyncWriteExt;
use tracing::debug;

#[derive(Serialize)]
struct StoredLine<'a> {
    id: &'a str,
    title: &'a str,
    action: &'static str,
    content: &'a str,
    timestamp: String,
}

/// Appends documents to per-knowledge-base JSONL files.
#[derive(Debug, Clone)]
pub struct JsonlKnowledgeBase {
    directory: PathBuf,
}

impl JsonlKnowledgeBase {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// File holding the given knowledge base.
    ///
    /// Path separators in the id are replaced so the file stays inside
    /// the directory.
    pub fn path_for(&self, id: &KnowledgeBaseId) -> PathBuf {
        let name: String = id
            .as_str()
            .chars()
            .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
            .collect();
        self.directory.join(format!("{}.jsonl", name))
    }
}

#[async_trait]
impl KnowledgeBaseStore for JsonlKnowledgeBase {
    async fn ingest(&self, document: &KnowledgeDocument) -> Result<(), KnowledgeBaseError> {
        let line = StoredLine {
            id: &document.id,
            title: &document.title,
            action: "store",
            content: &document.content,
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        };
        let mut encoded = serde_json::to_string(&line)?;
        encoded.push('\n');

        tokio::fs::create_dir_all(&self.directory).await?;
        let path = self.path_for(&document.knowledge_base_id);
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;
        file.write_all(encoded.as_bytes()).await?;
        file.flush().await?;

        debug!("Appended document {} to {}", document.id, path.display());
        Ok(())
    }
}
