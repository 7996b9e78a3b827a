use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig, NotificationConfig, StorageBackend, StorageConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub auth: AuthConfig,
    pub notifications: NotificationConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for AIRSIG_CONFIG_DIR env var, else use ./.airsig/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply AIRSIG_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: AIRSIG_CONFIG_DIR env var > ./.airsig/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(ConfigError::working_dir)?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.storage.validate()?;
        self.auth.validate()?;
        self.notifications.validate()?;

        if let Some(file) = &self.logging.file
            && (Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigError::invalid_path(
                "logging.file",
                file,
                "must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Absolute path of the file store, or None for the memory backend.
    pub fn storage_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.storage.backend {
            StorageBackend::Memory => Ok(None),
            StorageBackend::File => Ok(Some(Self::config_dir()?.join(&self.storage.path))),
        }
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  storage: {} ({})",
            self.storage.backend.as_str(),
            self.storage.path
        );
        info!("  auth: attempt delay {}ms", self.auth.attempt_delay_ms);
        info!(
            "  notifications: {}ms (errors {}ms)",
            self.notifications.duration_ms, self.notifications.error_duration_ms
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Storage
        Self::apply_env_parse("AIRSIG_STORAGE_BACKEND", &mut self.storage.backend);
        Self::apply_env_string("AIRSIG_STORAGE_PATH", &mut self.storage.path);

        // Auth
        Self::apply_env_parse(
            "AIRSIG_AUTH_ATTEMPT_DELAY_MS",
            &mut self.auth.attempt_delay_ms,
        );

        // Notifications
        Self::apply_env_parse(
            "AIRSIG_NOTIFY_DURATION_MS",
            &mut self.notifications.duration_ms,
        );
        Self::apply_env_parse(
            "AIRSIG_NOTIFY_ERROR_DURATION_MS",
            &mut self.notifications.error_duration_ms,
        );

        // Logging
        Self::apply_env_parse("AIRSIG_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("AIRSIG_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("AIRSIG_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
