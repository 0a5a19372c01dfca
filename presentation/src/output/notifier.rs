//! Console notification sink

use colored::Colorize;
use strands_application::NotificationSink;

/// Prints notifications as a single console line.
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    fn line(title: &str, message: &str) -> String {
        format!("Notification: {} - {}", title, message)
    }
}

impl NotificationSink for ConsoleNotifier {
    fn notify(&self, title: &str, message: &str) {
        println!("{}", Self::line(title, message).cyan());
    }
}
