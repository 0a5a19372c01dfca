//! Notification port.
//!
//! A best-effort, fire-and-forget notification (title, message). Delivery
//! failures are the sink's problem; callers never wait on or inspect them.

/// Sink for user-facing notifications.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, title: &str, message: &str);
}

/// No-op implementation for when notifications are disabled
pub struct NoNotification;

impl NotificationSink for NoNotification {
    fn notify(&self, _title: &str, _message: &str) {}
}
