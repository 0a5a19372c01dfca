//! Callback record sources for replaying recorded sessions.

mod jsonl_source;

pub use jsonl_source::{JsonlRecordSource, RecordSourceError};
