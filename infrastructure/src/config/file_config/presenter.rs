//! Presenter configuration from TOML (`[presenter]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;
use strands_application::PresenterParams;

/// Raw presenter configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePresenterConfig {
    /// Spinner frame interval in milliseconds
    pub tick_interval_ms: u64,
    /// Send a notification when a tool finishes
    pub notify_on_completion: bool,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FilePresenterConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 80,
            notify_on_completion: false,
            color: true,
        }
    }
}

impl FilePresenterConfig {
    /// Convert to application-level presenter params.
    ///
    /// A zero interval falls back to the default.
    pub fn to_params(&self) -> PresenterParams {
        let params = PresenterParams::default();
        let params = if self.tick_interval_ms > 0 {
            params.with_tick_interval(Duration::from_millis(self.tick_interval_ms))
        } else {
            params
        };
        params
            .with_notify_on_completion(self.notify_on_completion)
            .with_color(self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_params() {
        let config = FilePresenterConfig {
            tick_interval_ms: 150,
            notify_on_completion: true,
            color: false,
        };
        let params = config.to_params();
        assert_eq!(params.tick_interval, Duration::from_millis(150));
        assert!(params.notify_on_completion);
        assert!(!params.color);
    }

    #[test]
    fn test_zero_interval_keeps_default() {
        let config = FilePresenterConfig {
            tick_interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(
            config.to_params().tick_interval,
            PresenterParams::default().tick_interval
        );
    }
}
