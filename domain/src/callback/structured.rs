//! Nested callback payloads that may not have the expected shape.

use serde::{Deserialize, Serialize};

/// A nested record that either matched its expected structure or did not.
///
/// The runtime is trusted to send well-formed payloads, but a malformed
/// `message` or `current_tool_use` must only skip that sub-update, never the
/// whole record. Deserialization therefore keeps the raw value instead of
/// failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Structured<T> {
    Valid(T),
    Malformed(serde_json::Value),
}

impl<T> Structured<T> {
    pub fn valid(&self) -> Option<&T> {
        match self {
            Structured::Valid(value) => Some(value),
            Structured::Malformed(_) => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Structured::Malformed(_))
    }
}

impl<T> From<T> for Structured<T> {
    fn from(value: T) -> Self {
        Structured::Valid(value)
    }
}
