//! Presenter parameters: rendering control for the callback presenter.
//!
//! [`PresenterParams`] groups the settings the terminal adapters and the
//! [`CallbackPresenter`](crate::use_cases::present_callbacks::CallbackPresenter)
//! need. These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Rendering control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenterParams {
    /// Interval between spinner frames.
    pub tick_interval: Duration,
    /// Send a notification when a tracked tool completes.
    pub notify_on_completion: bool,
    /// Colorize spinner labels and notices.
    pub color: bool,
}

impl Default for PresenterParams {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(80),
            notify_on_completion: false,
            color: true,
        }
    }
}

impl PresenterParams {
    // ==================== Builder Methods ====================

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn with_notify_on_completion(mut self, notify: bool) -> Self {
        self.notify_on_completion = notify;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}
