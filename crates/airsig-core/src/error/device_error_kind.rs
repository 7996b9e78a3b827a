use std::fmt;

/// Why the capture device could not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceErrorKind {
    /// The user (or platform policy) refused camera access.
    PermissionDenied,
    /// No camera is attached.
    NotFound,
    Other,
}

impl DeviceErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PermissionDenied => "permission_denied",
            Self::NotFound => "not_found",
            Self::Other => "other",
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            Self::PermissionDenied => {
                "Camera access was denied. Allow camera permissions and try again."
            }
            Self::NotFound => "No camera was found. Connect a camera and try again.",
            Self::Other => "The camera could not be started. Please try again.",
        }
    }
}

impl fmt::Display for DeviceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
