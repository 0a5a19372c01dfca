//! Store content in a knowledge base without blocking the caller.
//!
//! Validation happens synchronously in [`StoreInKnowledgeBaseUseCase::store`];
//! the write itself runs on a spawned task and its outcome is only logged.
//! The returned [`StoreReceipt`] describes what was scheduled.

use crate::ports::knowledge_base::KnowledgeBaseStore;
use std::sync::Arc;
use strands_domain::{DomainError, KnowledgeBaseId, KnowledgeDocument};
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Invalid(#[from] DomainError),

    #[error("No async runtime available for background storage")]
    NoRuntime,
}

/// Input for [`StoreInKnowledgeBaseUseCase::store`]
#[derive(Debug, Clone, Default)]
pub struct StoreInput {
    pub content: String,
    pub title: Option<String>,
    pub knowledge_base_id: Option<String>,
}

impl StoreInput {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_knowledge_base(mut self, id: impl Into<String>) -> Self {
        self.knowledge_base_id = Some(id.into());
        self
    }
}

/// What was scheduled for background storage.
#[derive(Debug)]
pub struct StoreReceipt {
    pub document_id: String,
    pub title: String,
    pub knowledge_base_id: KnowledgeBaseId,
    task: JoinHandle<()>,
}

impl StoreReceipt {
    /// Human-readable status lines for the caller.
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            "Started background task to store content in knowledge base:".to_string(),
            format!("Title: {}", self.title),
            format!("Knowledge Base ID: {}", self.knowledge_base_id),
            "Processing in background...".to_string(),
        ]
    }

    /// Wait for the background write to finish.
    ///
    /// Only needed by callers about to exit; the outcome is never reported.
    pub async fn wait(self) {
        if let Err(e) = self.task.await {
            error!("Knowledge base task did not complete: {}", e);
        }
    }
}

/// Use case for fire-and-forget knowledge-base storage.
pub struct StoreInKnowledgeBaseUseCase {
    store: Arc<dyn KnowledgeBaseStore>,
    default_knowledge_base: Option<String>,
}

impl StoreInKnowledgeBaseUseCase {
    pub fn new(store: Arc<dyn KnowledgeBaseStore>) -> Self {
        Self {
            store,
            default_knowledge_base: None,
        }
    }

    /// Knowledge base used when the input names none.
    pub fn with_default_knowledge_base(mut self, id: Option<String>) -> Self {
        self.default_knowledge_base = id;
        self
    }

    /// Resolve the target knowledge base: explicit id first, then the default.
    pub fn resolve_knowledge_base(
        &self,
        explicit: Option<&str>,
    ) -> Result<KnowledgeBaseId, DomainError> {
        KnowledgeBaseId::resolve([explicit, self.default_knowledge_base.as_deref()])
    }

    /// Validate, schedule the write, and return immediately.
    ///
    /// Must be called from within a tokio runtime.
    pub fn store(&self, input: StoreInput) -> Result<StoreReceipt, StoreError> {
        if input.content.trim().is_empty() {
            return Err(DomainError::EmptyContent.into());
        }
        let knowledge_base_id = self.resolve_knowledge_base(input.knowledge_base_id.as_deref())?;
        let runtime = Handle::try_current().map_err(|_| StoreError::NoRuntime)?;

        let now = chrono::Local::now();
        let stamp = now.format("%Y%m%d_%H%M%S").to_string();
        let title = input
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| format!("Strands Memory {}", stamp));
        let document_id = format!("memory_{}_{}", stamp, short_uuid());

        let document = KnowledgeDocument::new(
            document_id.clone(),
            knowledge_base_id.clone(),
            title.clone(),
            input.content,
        )?;

        let store = Arc::clone(&self.store);
        let task = runtime.spawn(async move {
            match store.ingest(&document).await {
                Ok(()) => info!(
                    "Stored document {} in knowledge base {}",
                    document.id, document.knowledge_base_id
                ),
                Err(e) => error!(
                    "Error ingesting into knowledge base {}: {}",
                    document.knowledge_base_id, e
                ),
            }
        });

        Ok(StoreReceipt {
            document_id,
            title,
            knowledge_base_id,
            task,
        })
    }
}

fn short_uuid() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..8].to_string()
}
