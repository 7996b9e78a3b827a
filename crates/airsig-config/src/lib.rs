mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod notification_config;
mod storage_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use notification_config::NotificationConfig;
pub use storage_config::{StorageBackend, StorageConfig};

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "AIRSIG_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".airsig";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_STORAGE_FILENAME: &str = "state.json";

// Matches the 3 second "analyzing" pause of the gesture check
const DEFAULT_ATTEMPT_DELAY_MS: u64 = 3000;
const MAX_ATTEMPT_DELAY_MS: u64 = 60_000;

const DEFAULT_NOTIFY_DURATION_MS: u64 = 3000;
const DEFAULT_NOTIFY_ERROR_DURATION_MS: u64 = 5000;
const MIN_NOTIFY_DURATION_MS: u64 = 500;
const MAX_NOTIFY_DURATION_MS: u64 = 30_000;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
