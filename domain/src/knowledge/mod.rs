//! Knowledge-base documents and conversation capture.
//!
//! - [`document::KnowledgeDocument`]: a validated document ready for ingestion
//! - [`conversation::ConversationRecord`]: a user/assistant exchange rendered
//!   as document content

pub mod conversation;
pub mod document;

pub use conversation::ConversationRecord;
pub use document::{KnowledgeBaseId, KnowledgeDocument};
