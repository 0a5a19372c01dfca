//! Knowledge base adapters.

mod jsonl_store;

pub use jsonl_store::JsonlKnowledgeBase;
