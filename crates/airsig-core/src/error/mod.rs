mod device_error_kind;

pub use device_error_kind::DeviceErrorKind;

// -------------------------------------------------------------------------- //

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AirsigError {
    #[error("Validation error on '{field}': {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Conflict: {field} '{value}' is already registered {location}")]
    Conflict {
        field: &'static str,
        value: String,
        location: ErrorLocation,
    },

    #[error("Authentication failed: {message} {location}")]
    Auth {
        message: String,
        location: ErrorLocation,
    },

    #[error("Camera unavailable ({kind}): {message} {location}")]
    Device {
        kind: DeviceErrorKind,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid state: {message} {location}")]
    State {
        message: String,
        location: ErrorLocation,
    },

    #[error("Precondition failed: {message} {location}")]
    Precondition {
        message: String,
        location: ErrorLocation,
    },

    #[error("Persistence error: {message} {location}")]
    Persistence {
        message: String,
        location: ErrorLocation,
    },
}

impl AirsigError {
    #[track_caller]
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict(field: &'static str, value: impl Into<String>) -> Self {
        Self::Conflict {
            field,
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn device(kind: DeviceErrorKind, message: impl Into<String>) -> Self {
        Self::Device {
            kind,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn state(message: impl Into<String>) -> Self {
        Self::State {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Stable machine-readable code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Conflict { .. } => "CONFLICT",
            Self::Auth { .. } => "AUTH_FAILED",
            Self::Device { .. } => "DEVICE_ERROR",
            Self::State { .. } => "INVALID_STATE",
            Self::Precondition { .. } => "PRECONDITION_FAILED",
            Self::Persistence { .. } => "PERSISTENCE_ERROR",
        }
    }

    /// Field the error refers to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } | Self::Conflict { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Message suitable for the notification sink (no source locations).
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::Conflict { field, .. } => format!("That {field} is already registered"),
            Self::Auth { message, .. } => message.clone(),
            Self::Device { kind, .. } => kind.user_message().to_string(),
            Self::State { message, .. } | Self::Precondition { message, .. } => message.clone(),
            Self::Persistence { .. } => {
                "Unable to access saved data. Your changes may not survive a reload.".to_string()
            }
        }
    }
}

pub type AirsigResult<T> = StdResult<T, AirsigError>;
