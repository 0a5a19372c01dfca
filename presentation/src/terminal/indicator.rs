//! Thinking indicator.

use super::DrawSettings;
use super::live::{LiveClaim, LiveSlot};
use indicatif::ProgressBar;
use strands_application::{DisplayStyle, Indicator, RenderResult};
use strands_domain::ConsoleTarget;

/// Rotating status line bound to one console stream.
pub struct ThinkingIndicator {
    console: ConsoleTarget,
    style: DisplayStyle,
    settings: DrawSettings,
    slot: LiveSlot,
    live: Option<(ProgressBar, LiveClaim)>,
}

impl ThinkingIndicator {
    pub(crate) fn new(
        console: ConsoleTarget,
        style: DisplayStyle,
        settings: DrawSettings,
        slot: LiveSlot,
    ) -> Self {
        Self {
            console,
            style,
            settings,
            slot,
            live: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.live.is_some()
    }
}

impl Indicator for ThinkingIndicator {
    fn start(&mut self, label: &str) -> RenderResult {
        if let Some((pb, _)) = &self.live {
            pb.set_message(label.to_string());
            return Ok(());
        }
        let claim = self.slot.claim()?;
        let pb = self.settings.spawn(self.console, self.style, label);
        self.live = Some((pb, claim));
        Ok(())
    }

    fn update(&mut self, label: &str) -> RenderResult {
        if let Some((pb, _)) = &self.live {
            pb.set_message(label.to_string());
        }
        Ok(())
    }

    fn stop(&mut self) -> RenderResult {
        if let Some((pb, _claim)) = self.live.take() {
            pb.finish_and_clear();
        }
        Ok(())
    }
}

impl Drop for ThinkingIndicator {
    fn drop(&mut self) {
        if let Some((pb, _)) = self.live.take() {
            pb.finish_and_clear();
        }
    }
}
