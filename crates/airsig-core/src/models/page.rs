use crate::{AirsigError, AirsigResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Pages of the application, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    Login,
    Register,
    Enrollment,
    AuthTest,
    Dashboard,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Login,
        Page::Register,
        Page::Enrollment,
        Page::AuthTest,
        Page::Dashboard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Login => "login",
            Self::Register => "register",
            Self::Enrollment => "enrollment",
            Self::AuthTest => "auth-test",
            Self::Dashboard => "dashboard",
        }
    }

    /// Pages that hold the camera while shown.
    pub fn uses_camera(&self) -> bool {
        matches!(self, Self::Enrollment | Self::AuthTest)
    }
}

impl FromStr for Page {
    type Err = AirsigError;

    #[track_caller]
    fn from_str(s: &str) -> AirsigResult<Self> {
        match s {
            "home" => Ok(Self::Home),
            "login" => Ok(Self::Login),
            "register" => Ok(Self::Register),
            "enrollment" => Ok(Self::Enrollment),
            "auth-test" => Ok(Self::AuthTest),
            "dashboard" => Ok(Self::Dashboard),
            _ => Err(AirsigError::validation(
                "page",
                format!("Unknown page '{s}'"),
            )),
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
