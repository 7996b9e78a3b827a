use std::time::Duration;

use airsig_config::Config;

/// Timing knobs an [`crate::AppContext`] takes from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextSettings {
    pub attempt_delay: Duration,
    pub notify_duration: Duration,
    pub error_notify_duration: Duration,
}

impl Default for ContextSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ContextSettings {
    fn from(config: &Config) -> Self {
        Self {
            attempt_delay: config.auth.attempt_delay(),
            notify_duration: config.notifications.duration(),
            error_notify_duration: config.notifications.error_duration(),
        }
    }
}
