use crate::{AirsigError, AirsigResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How an authentication was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
    Password,
    Gesture,
}

impl AuthMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::Gesture => "gesture",
        }
    }
}

impl FromStr for AuthMethod {
    type Err = AirsigError;

    #[track_caller]
    fn from_str(s: &str) -> AirsigResult<Self> {
        match s {
            "password" => Ok(Self::Password),
            "gesture" => Ok(Self::Gesture),
            _ => Err(AirsigError::validation(
                "method",
                format!("Unknown authentication method '{s}'"),
            )),
        }
    }
}

impl std::fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
