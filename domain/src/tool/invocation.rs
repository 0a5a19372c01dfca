//! Per-tool timing and progress state.

use crate::session::entities::ToolResult;
use std::time::Instant;

/// Transient record for one in-flight tool invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolInvocation {
    name: String,
    started_at: Instant,
    max_input_size_seen: usize,
}

impl ToolInvocation {
    pub fn new(name: impl Into<String>, started_at: Instant) -> Self {
        Self {
            name: name.into(),
            started_at,
            max_input_size_seen: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_input_size_seen(&self) -> usize {
        self.max_input_size_seen
    }

    /// Record an observed input size.
    ///
    /// Returns `true` only when the size exceeds everything seen so far, so
    /// progress never moves backwards on duplicated or reordered deliveries.
    pub fn observe_input(&mut self, size: usize) -> bool {
        if size > self.max_input_size_seen {
            self.max_input_size_seen = size;
            true
        } else {
            false
        }
    }

    /// Seconds elapsed since start, rounded to 2 decimal places.
    pub fn elapsed_secs(&self, now: Instant) -> f64 {
        let secs = now.saturating_duration_since(self.started_at).as_secs_f64();
        (secs * 100.0).round() / 100.0
    }

    /// Label shown while the tool input is still being streamed.
    pub fn progress_label(&self) -> String {
        format!("{}: {} chars", self.name, self.max_input_size_seen)
    }
}

/// How a tracked invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolOutcome {
    Succeeded,
    Failed,
}

impl ToolOutcome {
    pub fn from_result(result: &ToolResult) -> Self {
        if result.succeeded() {
            ToolOutcome::Succeeded
        } else {
            ToolOutcome::Failed
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ToolOutcome::Succeeded)
    }

    /// `"{name} completed in {d}s"` or `"{name} failed after {d}s"`.
    ///
    /// `d` is printed as the shortest decimal that round-trips, keeping one
    /// fractional digit for whole seconds (`1.5s`, `2.0s`).
    pub fn message(&self, name: &str, duration_secs: f64) -> String {
        let secs = format_secs(duration_secs);
        match self {
            ToolOutcome::Succeeded => format!("{} completed in {}s", name, secs),
            ToolOutcome::Failed => format!("{} failed after {}s", name, secs),
        }
    }
}

fn format_secs(secs: f64) -> String {
    let text = secs.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

/// Label for a tool spinner that has just started.
pub fn preparing_label(name: &str) -> String {
    format!("{}: Preparing...", name)
}

/// Label posted when the assistant message announces a tool call.
pub fn starting_label(name: &str) -> String {
    format!("Starting {}...", name)
}
