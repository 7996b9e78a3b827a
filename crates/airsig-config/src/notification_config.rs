use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_NOTIFY_DURATION_MS, DEFAULT_NOTIFY_ERROR_DURATION_MS,
    MAX_NOTIFY_DURATION_MS, MIN_NOTIFY_DURATION_MS,
};

use std::time::Duration;

use serde::Deserialize;

/// How long notifications stay on screen.
///
/// Errors get their own, usually longer, duration so failures are not
/// missed.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Duration for info/success/warning notifications
    pub duration_ms: u64,
    /// Duration for error notifications
    pub error_duration_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_NOTIFY_DURATION_MS,
            error_duration_ms: DEFAULT_NOTIFY_ERROR_DURATION_MS,
        }
    }
}

impl NotificationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn error_duration(&self) -> Duration {
        Duration::from_millis(self.error_duration_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_NOTIFY_DURATION_MS..=MAX_NOTIFY_DURATION_MS).contains(&self.duration_ms) {
            return Err(ConfigError::out_of_range(
                "notifications.duration_ms",
                self.duration_ms,
                MIN_NOTIFY_DURATION_MS,
                MAX_NOTIFY_DURATION_MS,
            ));
        }

        if !(MIN_NOTIFY_DURATION_MS..=MAX_NOTIFY_DURATION_MS).contains(&self.error_duration_ms) {
            return Err(ConfigError::out_of_range(
                "notifications.error_duration_ms",
                self.error_duration_ms,
                MIN_NOTIFY_DURATION_MS,
                MAX_NOTIFY_DURATION_MS,
            ));
        }

        Ok(())
    }
}
