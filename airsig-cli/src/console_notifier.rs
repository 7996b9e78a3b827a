use std::time::Duration;

use airsig_core::{Notifier, Severity};

/// Prints notifications to stderr, one per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn show(&self, message: &str, severity: Severity, _duration: Duration) {
        eprintln!("{}", format_notification(message, severity));
    }
}

pub fn format_notification(message: &str, severity: Severity) -> String {
    format!("[{}] {message}", severity.as_str())
}
