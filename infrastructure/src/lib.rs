//! Infrastructure layer for strands
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading and the
//! callback record reader used by replay.

pub mod config;
pub mod knowledge_base;
pub mod local;
pub mod records;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileKnowledgeBaseConfig, FilePresenterConfig, FilePromptConfig,
};
pub use knowledge_base::JsonlKnowledgeBase;
pub use local::{DEFAULT_SYSTEM_PROMPT, FileWelcomeStore, SystemPromptLoader};
pub use records::{JsonlRecordSource, RecordSourceError};
