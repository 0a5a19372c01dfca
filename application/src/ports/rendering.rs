//! Terminal rendering port.
//!
//! The [`CallbackPresenter`](crate::use_cases::present_callbacks::CallbackPresenter)
//! drives two kinds of live displays through this port and treats both as
//! black boxes:
//!
//! - [`Indicator`]: the single rotating "retrieving/thinking" status line
//! - [`ToolSpinner`]: the progress display bound to one in-flight tool
//!
//! Rendering calls return [`RenderResult`] so the presenter can decide which
//! failures to tolerate. The terminal layer refuses a second simultaneous live
//! display with [`RenderError::LiveDisplayActive`].

use strands_domain::ConsoleTarget;
use thiserror::Error;

/// Errors raised by the terminal layer.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Only one live display may be active at once")]
    LiveDisplayActive,

    #[error("Terminal write failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type RenderResult = Result<(), RenderError>;

/// Cosmetic style tag a display is constructed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStyle {
    /// Status line of the event loop (blue)
    Thinking,
    /// A tool that is still running (green)
    Running,
}

/// Which stream of text is being written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    /// Model reasoning, written as-is
    Reasoning,
    /// Assistant output
    Output,
}

/// Rotating status indicator.
pub trait Indicator: Send {
    fn start(&mut self, label: &str) -> RenderResult;
    fn update(&mut self, label: &str) -> RenderResult;
    /// Stop the indicator. Stopping a stopped indicator is a no-op.
    fn stop(&mut self) -> RenderResult;
}

/// Progress display for a single tool invocation.
///
/// `succeed`, `fail` and `info` persist a final line and end the animation.
pub trait ToolSpinner: Send {
    fn start(&mut self, label: &str) -> RenderResult;
    fn update(&mut self, label: &str) -> RenderResult;
    fn succeed(&mut self, label: &str) -> RenderResult;
    fn fail(&mut self, label: &str) -> RenderResult;
    fn info(&mut self, label: &str) -> RenderResult;
    /// Stop the spinner. Stopping a stopped spinner is a no-op.
    fn stop(&mut self) -> RenderResult;
}

/// Factory for live displays plus plain console writes.
pub trait Renderer: Send + Sync {
    /// Create an indicator bound to `console`. It is not started yet.
    fn indicator(&self, console: ConsoleTarget, style: DisplayStyle) -> Box<dyn Indicator>;

    /// Create a tool spinner. It is not started yet.
    fn tool_spinner(&self, style: DisplayStyle) -> Box<dyn ToolSpinner>;

    /// Write streamed text to standard output, ending the line if asked.
    fn write_stream(&self, kind: StreamKind, text: &str, end_line: bool) -> RenderResult;

    /// Print the highlighted "throttled, waiting N seconds" notice.
    fn throttle_notice(&self, console: ConsoleTarget, delay_secs: f64) -> RenderResult;
}
