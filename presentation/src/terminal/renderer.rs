//! Terminal implementation of the [`Renderer`] port.

use super::DrawSettings;
use super::indicator::ThinkingIndicator;
use super::live::LiveSlot;
use super::tool_spinner::ToolProgressSpinner;
use colored::Colorize;
use std::io::Write;
use strands_application::{
    DisplayStyle, Indicator, PresenterParams, RenderResult, Renderer, StreamKind, ToolSpinner,
};
use strands_domain::ConsoleTarget;

/// Draws live displays with indicatif and writes streamed text to stdout.
pub struct TerminalRenderer {
    settings: DrawSettings,
    slot: LiveSlot,
}

impl TerminalRenderer {
    pub fn new(params: &PresenterParams) -> Self {
        Self {
            settings: DrawSettings {
                tick_interval: params.tick_interval,
                color: params.color,
                hidden: false,
            },
            slot: LiveSlot::default(),
        }
    }

    /// Renderer whose live displays never draw. Streamed text is still written.
    pub fn hidden(params: &PresenterParams) -> Self {
        let mut renderer = Self::new(params);
        renderer.settings.hidden = true;
        renderer
    }

    fn throttle_message(&self, delay_secs: f64) -> String {
        let delay = delay_secs.to_string();
        if self.settings.color {
            format!(
                "{} {} {}",
                "Throttled! Waiting".red(),
                delay.red().bold(),
                "seconds before retrying...".red()
            )
        } else {
            format!("Throttled! Waiting {} seconds before retrying...", delay)
        }
    }
}

impl Renderer for TerminalRenderer {
    fn indicator(&self, console: ConsoleTarget, style: DisplayStyle) -> Box<dyn Indicator> {
        Box::new(ThinkingIndicator::new(
            console,
            style,
            self.settings,
            self.slot.clone(),
        ))
    }

    fn tool_spinner(&self, style: DisplayStyle) -> Box<dyn ToolSpinner> {
        Box::new(ToolProgressSpinner::new(style, self.settings))
    }

    fn write_stream(&self, kind: StreamKind, text: &str, end_line: bool) -> RenderResult {
        let mut out = std::io::stdout().lock();
        match kind {
            StreamKind::Reasoning if self.settings.color => write!(out, "{}", text.dimmed())?,
            StreamKind::Reasoning | StreamKind::Output => write!(out, "{}", text)?,
        }
        if end_line {
            writeln!(out)?;
        }
        out.flush()?;
        Ok(())
    }

    fn throttle_notice(&self, console: ConsoleTarget, delay_secs: f64) -> RenderResult {
        let message = self.throttle_message(delay_secs);
        match console {
            ConsoleTarget::Stdout => writeln!(std::io::stdout().lock(), "{}", message)?,
            ConsoleTarget::Stderr => writeln!(std::io::stderr().lock(), "{}", message)?,
        }
        Ok(())
    }
}
