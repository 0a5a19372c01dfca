//! Tool-use identity and streaming tool input.

use crate::core::string::char_count;
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque identifier correlating a tool invocation's start with its result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolUseId(String);

impl ToolUseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ToolUseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<T: Into<String>> From<T> for ToolUseId {
    fn from(s: T) -> Self {
        Self::new(s)
    }
}

/// Incremental view of the tool currently being invoked.
///
/// `input` accumulates as the model streams the tool arguments, so
/// successive records for the same id usually carry growing input text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentToolUse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_use_id: Option<ToolUseId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "input_text")]
    pub input: String,
}

impl CurrentToolUse {
    pub fn new(
        tool_use_id: impl Into<ToolUseId>,
        name: impl Into<String>,
        input: impl Into<String>,
    ) -> Self {
        Self {
            tool_use_id: Some(tool_use_id.into()),
            name: Some(name.into()),
            input: input.into(),
        }
    }

    pub fn has_input(&self) -> bool {
        !self.input.is_empty()
    }

    /// Input size in characters, the unit of progress shown to the user.
    pub fn input_size(&self) -> usize {
        char_count(&self.input)
    }
}

/// Partial input usually arrives as raw JSON text; structured input is
/// measured on its serialized form. Empty containers count as no input.
fn input_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        serde_json::Value::Object(map) if map.is_empty() => String::new(),
        serde_json::Value::Array(items) if items.is_empty() => String::new(),
        other => other.to_string(),
    })
}
