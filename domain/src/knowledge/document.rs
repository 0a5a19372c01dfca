//! Knowledge document value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Identifier of a knowledge base. Never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnowledgeBaseId(String);

impl KnowledgeBaseId {
    pub fn parse(id: &str) -> Result<Self, DomainError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(DomainError::MissingKnowledgeBaseId);
        }
        Ok(Self(id.to_string()))
    }

    /// First non-blank candidate, in priority order.
    pub fn resolve<'a>(
        candidates: impl IntoIterator<Item = Option<&'a str>>,
    ) -> Result<Self, DomainError> {
        candidates
            .into_iter()
            .flatten()
            .find_map(|id| Self::parse(id).ok())
            .ok_or(DomainError::MissingKnowledgeBaseId)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for KnowledgeBaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A document to store in a knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeDocument {
    pub id: String,
    pub knowledge_base_id: KnowledgeBaseId,
    pub title: String,
    pub content: String,
}

impl KnowledgeDocument {
    /// Build a document, rejecting blank content.
    pub fn new(
        id: impl Into<String>,
        knowledge_base_id: KnowledgeBaseId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::EmptyContent);
        }
        Ok(Self {
            id: id.into(),
            knowledge_base_id,
            title: title.into(),
            content,
        })
    }
}
