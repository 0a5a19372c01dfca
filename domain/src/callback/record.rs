//! The callback record delivered on each event-loop callback.

use super::structured::Structured;
use super::tool_use::{CurrentToolUse, ToolUseId};
use crate::session::entities::ChatMessage;
use serde::{Deserialize, Serialize};

/// Rendering target for indicators and console notices.
///
/// The runtime hands the presenter an opaque console handle; here the handle
/// names the stream the terminal layer should draw on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
}

/// One event-loop callback invocation.
///
/// Any subset of fields may be present. Boolean flags default to `false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallbackRecord {
    /// Incremental reasoning text
    #[serde(
        default,
        rename = "reasoningText",
        alias = "reasoning_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub reasoning_text: Option<String>,
    /// Incremental assistant output text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Whether `data` is the final chunk of a streamed message
    #[serde(default)]
    pub complete: bool,
    /// Abort signal: all live indicators must stop
    #[serde(default)]
    pub force_stop: bool,
    /// A finalized chat message (tool invocation or tool result)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Structured<ChatMessage>>,
    /// Incremental view of the tool currently being invoked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_tool_use: Option<Structured<CurrentToolUse>>,
    /// The event loop is starting
    #[serde(default)]
    pub init_event_loop: bool,
    /// The event loop has begun processing
    #[serde(default)]
    pub start_event_loop: bool,
    /// The loop is backing off for this many seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_loop_throttled_delay: Option<f64>,
    /// Rendering target for the thinking indicator and notices
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub console: Option<ConsoleTarget>,
}

impl CallbackRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reasoning(mut self, text: impl Into<String>) -> Self {
        self.reasoning_text = Some(text.into());
        self
    }

    pub fn with_data(mut self, text: impl Into<String>, complete: bool) -> Self {
        self.data = Some(text.into());
        self.complete = complete;
        self
    }

    pub fn with_tool_use(
        mut self,
        tool_use_id: impl Into<ToolUseId>,
        name: impl Into<String>,
        input: impl Into<String>,
    ) -> Self {
        self.current_tool_use = Some(CurrentToolUse::new(tool_use_id, name, input).into());
        self
    }

    pub fn with_message(mut self, message: ChatMessage) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_init_event_loop(mut self) -> Self {
        self.init_event_loop = true;
        self
    }

    pub fn with_start_event_loop(mut self) -> Self {
        self.start_event_loop = true;
        self
    }

    pub fn with_force_stop(mut self) -> Self {
        self.force_stop = true;
        self
    }

    pub fn with_throttle(mut self, delay_secs: f64) -> Self {
        self.event_loop_throttled_delay = Some(delay_secs);
        self
    }

    pub fn with_console(mut self, console: ConsoleTarget) -> Self {
        self.console = Some(console);
        self
    }

    /// Streamed output text, treating an empty chunk as absent.
    pub fn output_text(&self) -> Option<&str> {
        self.data.as_deref().filter(|d| !d.is_empty())
    }

    /// Streamed reasoning text, treating an empty chunk as absent.
    pub fn reasoning(&self) -> Option<&str> {
        self.reasoning_text.as_deref().filter(|r| !r.is_empty())
    }

    /// Throttle delay, treating a zero or negative delay as absent.
    pub fn throttle_delay(&self) -> Option<f64> {
        self.event_loop_throttled_delay.filter(|d| *d > 0.0)
    }

    /// Whether the record carries a non-empty tool-use update.
    ///
    /// A malformed payload still counts: something tool-related arrived.
    pub fn has_tool_use(&self) -> bool {
        match &self.current_tool_use {
            Some(Structured::Valid(tool)) => {
                tool.tool_use_id.is_some() || tool.name.is_some() || tool.has_input()
            }
            Some(Structured::Malformed(raw)) => !raw.is_null(),
            None => false,
        }
    }
}
