//! indicatif-backed adapters for the rendering port.
//!
//! - [`ThinkingIndicator`]: the event loop's rotating status line
//! - [`ToolProgressSpinner`]: one in-flight tool
//! - [`TerminalRenderer`]: factory for both plus streamed text

mod indicator;
mod live;
mod renderer;
mod tool_spinner;

pub use indicator::ThinkingIndicator;
pub use renderer::TerminalRenderer;
pub use tool_spinner::ToolProgressSpinner;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;
use strands_application::DisplayStyle;
use strands_domain::ConsoleTarget;

/// Where and how live displays draw.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DrawSettings {
    pub tick_interval: Duration,
    pub color: bool,
    pub hidden: bool,
}

impl DrawSettings {
    fn draw_target(&self, console: ConsoleTarget) -> ProgressDrawTarget {
        if self.hidden {
            return ProgressDrawTarget::hidden();
        }
        match console {
            ConsoleTarget::Stdout => ProgressDrawTarget::stdout(),
            ConsoleTarget::Stderr => ProgressDrawTarget::stderr(),
        }
    }

    fn spinner_style(&self, style: DisplayStyle) -> ProgressStyle {
        let template = match (self.color, style) {
            (false, _) => "{spinner} {msg}",
            (true, DisplayStyle::Thinking) => "{spinner:.blue} {msg:.blue}",
            (true, DisplayStyle::Running) => "{spinner:.green} {msg}",
        };
        ProgressStyle::default_spinner().template(template).unwrap()
    }

    /// A started spinner showing `label`.
    pub(crate) fn spawn(
        &self,
        console: ConsoleTarget,
        style: DisplayStyle,
        label: &str,
    ) -> ProgressBar {
        let pb = ProgressBar::with_draw_target(None, self.draw_target(console));
        pb.set_style(self.spinner_style(style));
        pb.set_message(label.to_string());
        pb.enable_steady_tick(self.tick_interval);
        pb
    }
}
