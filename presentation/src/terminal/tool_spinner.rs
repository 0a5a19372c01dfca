//! Per-tool progress spinner.
//!
//! Finishing a spinner (`succeed`, `fail`, `info`) clears the animation and
//! leaves one persisted status line behind.

use super::DrawSettings;
use colored::Colorize;
use indicatif::ProgressBar;
use std::io::Write;
use strands_application::{DisplayStyle, RenderResult, ToolSpinner};
use strands_domain::ConsoleTarget;

const RUNNING_PREFIX: &str = "🛠️  ";
const INFO_PREFIX: &str = "🔧 ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Finish {
    Succeeded,
    Failed,
    Info,
}

/// Spinner bound to a single tool invocation.
pub struct ToolProgressSpinner {
    style: DisplayStyle,
    settings: DrawSettings,
    label: String,
    bar: Option<ProgressBar>,
}

impl ToolProgressSpinner {
    pub(crate) fn new(style: DisplayStyle, settings: DrawSettings) -> Self {
        Self {
            style,
            settings,
            label: String::new(),
            bar: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.bar.is_some()
    }

    /// Most recent label, including updates made after stopping.
    pub fn label(&self) -> &str {
        &self.label
    }

    fn finish(&mut self, finish: Finish, label: &str) -> RenderResult {
        self.label = label.to_string();
        if let Some(pb) = self.bar.take() {
            pb.finish_and_clear();
        }
        if self.settings.hidden {
            return Ok(());
        }
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", persisted_line(finish, label, self.settings.color))?;
        out.flush()?;
        Ok(())
    }
}

impl ToolSpinner for ToolProgressSpinner {
    fn start(&mut self, label: &str) -> RenderResult {
        self.label = label.to_string();
        if let Some(pb) = &self.bar {
            pb.set_message(format!("{}{}", RUNNING_PREFIX, label));
            return Ok(());
        }
        if !self.settings.hidden {
            let mut out = std::io::stdout().lock();
            writeln!(out)?;
        }
        let message = format!("{}{}", RUNNING_PREFIX, label);
        self.bar = Some(
            self.settings
                .spawn(ConsoleTarget::Stdout, self.style, &message),
        );
        Ok(())
    }

    fn update(&mut self, label: &str) -> RenderResult {
        self.label = label.to_string();
        if let Some(pb) = &self.bar {
            pb.set_message(format!("{}{}", RUNNING_PREFIX, label));
        }
        Ok(())
    }

    fn succeed(&mut self, label: &str) -> RenderResult {
        self.finish(Finish::Succeeded, label)
    }

    fn fail(&mut self, label: &str) -> RenderResult {
        self.finish(Finish::Failed, label)
    }

    fn info(&mut self, label: &str) -> RenderResult {
        self.finish(Finish::Info, label)
    }

    fn stop(&mut self) -> RenderResult {
        if let Some(pb) = self.bar.take() {
            pb.finish_and_clear();
        }
        Ok(())
    }
}

impl Drop for ToolProgressSpinner {
    fn drop(&mut self) {
        if let Some(pb) = self.bar.take() {
            pb.finish_and_clear();
        }
    }
}

fn persisted_line(finish: Finish, label: &str, color: bool) -> String {
    match (finish, color) {
        (Finish::Succeeded, true) => format!("{} {}", "✔".green(), label),
        (Finish::Succeeded, false) => format!("✔ {}", label),
        (Finish::Failed, true) => format!("{} {}", "✖".red(), label.red()),
        (Finish::Failed, false) => format!("✖ {}", label),
        (Finish::Info, true) => format!("{} {}{}", "ℹ".blue(), INFO_PREFIX, label),
        (Finish::Info, false) => format!("ℹ {}{}", INFO_PREFIX, label),
    }
}
