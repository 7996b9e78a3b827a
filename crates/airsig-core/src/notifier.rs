//! Notification sink consumed by the application context.
//!
//! Notifications are fire-and-forget: nothing in the core reads a return
//! value from the sink.

use std::fmt::Debug;
use std::time::Duration;

use log::{error, info, warn};
use serde::Serialize;

#[cfg(any(test, feature = "testing"))]
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub trait Notifier: Send + Sync + Debug {
    fn show(&self, message: &str, severity: Severity, duration: Duration);
}

/// Writes notifications to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn show(&self, message: &str, severity: Severity, _duration: Duration) {
        match severity {
            Severity::Info | Severity::Success => info!("[{severity}] {message}"),
            Severity::Warning => warn!("[{severity}] {message}"),
            Severity::Error => error!("[{severity}] {message}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub duration: Duration,
}

/// Captures notifications so tests can assert on them.
#[cfg(any(test, feature = "testing"))]
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    shown: Mutex<Vec<Notification>>,
}

#[cfg(any(test, feature = "testing"))]
impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.shown.lock().unwrap().clone()
    }

    pub fn with_severity(&self, severity: Severity) -> Vec<Notification> {
        self.notifications()
            .into_iter()
            .filter(|n| n.severity == severity)
            .collect()
    }

    pub fn last(&self) -> Option<Notification> {
        self.shown.lock().unwrap().last().cloned()
    }

    pub fn clear(&self) {
        self.shown.lock().unwrap().clear();
    }
}

#[cfg(any(test, feature = "testing"))]
impl Notifier for RecordingNotifier {
    fn show(&self, message: &str, severity: Severity, duration: Duration) {
        self.shown.lock().unwrap().push(Notification {
            message: message.to_string(),
            severity,
            duration,
        });
    }
}
