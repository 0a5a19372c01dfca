//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Content cannot be empty")]
    EmptyContent,

    #[error(
        "No knowledge base ID provided or found in environment variable STRANDS_KNOWLEDGE_BASE_ID"
    )]
    MissingKnowledgeBaseId,

    #[error("content is required for edit action")]
    MissingWelcomeContent,

    #[error("Unknown action: {0}")]
    UnknownWelcomeAction(String),
}

impl DomainError {
    /// Whether the error was caused by missing or blank caller input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::EmptyContent
                | DomainError::MissingKnowledgeBaseId
                | DomainError::MissingWelcomeContent
        )
    }
}
