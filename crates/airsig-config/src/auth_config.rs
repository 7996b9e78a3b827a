use crate::{ConfigError, ConfigErrorResult, DEFAULT_ATTEMPT_DELAY_MS, MAX_ATTEMPT_DELAY_MS};

use std::time::Duration;

use serde::Deserialize;

/// Gesture authentication simulator settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Simulated analysis time before an attempt resolves
    pub attempt_delay_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            attempt_delay_ms: DEFAULT_ATTEMPT_DELAY_MS,
        }
    }
}

impl AuthConfig {
    pub fn attempt_delay(&self) -> Duration {
        Duration::from_millis(self.attempt_delay_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.attempt_delay_ms > MAX_ATTEMPT_DELAY_MS {
            return Err(ConfigError::out_of_range(
                "auth.attempt_delay_ms",
                self.attempt_delay_ms,
                0,
                MAX_ATTEMPT_DELAY_MS,
            ));
        }

        Ok(())
    }
}
