use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{key} must be {min}-{max}, got {value} {location}")]
    OutOfRange {
        key: &'static str,
        value: u64,
        min: u64,
        max: u64,
        location: ErrorLocation,
    },

    #[error("{key} {reason}, got '{path}' {location}")]
    InvalidPath {
        key: &'static str,
        path: String,
        reason: &'static str,
        location: ErrorLocation,
    },

    #[error("storage.backend must be 'file' or 'memory', got '{value}' {location}")]
    UnknownBackend {
        value: String,
        location: ErrorLocation,
    },

    #[error("Cannot determine current working directory: {source} {location}")]
    WorkingDir {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Millisecond setting outside its allowed range
    #[track_caller]
    pub fn out_of_range(key: &'static str, value: u64, min: u64, max: u64) -> Self {
        ConfigError::OutOfRange {
            key,
            value,
            min,
            max,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Path setting that is empty or escapes the config directory
    #[track_caller]
    pub fn invalid_path(key: &'static str, path: impl Into<String>, reason: &'static str) -> Self {
        ConfigError::InvalidPath {
            key,
            path: path.into(),
            reason,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown_backend(value: impl Into<String>) -> Self {
        ConfigError::UnknownBackend {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn working_dir(source: std::io::Error) -> Self {
        ConfigError::WorkingDir {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
