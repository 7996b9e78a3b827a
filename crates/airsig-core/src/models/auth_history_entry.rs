use crate::AuthMethod;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Append-only record of one authentication attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthHistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub method: AuthMethod,
    pub success: bool,
    pub detail: String,
}

impl AuthHistoryEntry {
    pub fn new(
        timestamp: DateTime<Utc>,
        method: AuthMethod,
        success: bool,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            method,
            success,
            detail: detail.into(),
        }
    }
}
