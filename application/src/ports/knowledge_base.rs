//! Knowledge-base storage port.
//!
//! [`KnowledgeBaseStore::ingest`] performs the actual write. It runs on a
//! background task spawned by
//! [`StoreInKnowledgeBaseUseCase`](crate::use_cases::store_in_kb::StoreInKnowledgeBaseUseCase),
//! never on the caller's path.

use async_trait::async_trait;
use strands_domain::KnowledgeDocument;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KnowledgeBaseError {
    #[error("Knowledge base I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Knowledge base {0} is unavailable")]
    Unavailable(String),
}

/// Destination for knowledge documents.
#[async_trait]
pub trait KnowledgeBaseStore: Send + Sync {
    async fn ingest(&self, document: &KnowledgeDocument) -> Result<(), KnowledgeBaseError>;
}
