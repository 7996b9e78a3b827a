//! Account entity - a registered user's profile, signatures and history.

use crate::{
    AirsigError, AirsigResult, AuthHistoryEntry, AuthMethod, REQUIRED_SIGNATURES,
    SignatureSample,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user.
///
/// The password is kept verbatim. Nothing in this crate hashes or encrypts
/// credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique login name (letters, digits, underscore)
    pub username: String,
    pub email: String,
    pub password: String,
    pub signatures: Vec<SignatureSample>,
    /// True iff `signatures.len() >= REQUIRED_SIGNATURES`
    pub enrollment_complete: bool,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
    pub auth_history: Vec<AuthHistoryEntry>,
}

impl Account {
    /// Create a new account with no signatures and no history
    pub fn new(username: String, email: String, password: String, now: DateTime<Utc>) -> Self {
        Self {
            username,
            email,
            password,
            signatures: Vec::new(),
            enrollment_complete: false,
            created_at: now,
            last_login: None,
            auth_history: Vec::new(),
        }
    }

    pub fn signature_count(&self) -> usize {
        self.signatures.len()
    }

    /// Signatures still needed before gesture authentication is allowed
    pub fn signatures_remaining(&self) -> usize {
        REQUIRED_SIGNATURES.saturating_sub(self.signatures.len())
    }

    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    /// Append a signature sample.
    ///
    /// Returns `true` when this sample completed enrollment. Once enrollment
    /// is complete further samples are rejected.
    #[track_caller]
    pub fn add_signature(&mut self, sample: SignatureSample) -> AirsigResult<bool> {
        if self.enrollment_complete || self.signatures.len() >= REQUIRED_SIGNATURES {
            return Err(AirsigError::state(format!(
                "Enrollment is already complete ({REQUIRED_SIGNATURES} signatures recorded)"
            )));
        }

        self.signatures.push(sample);

        if self.signatures.len() >= REQUIRED_SIGNATURES {
            self.enrollment_complete = true;
            return Ok(true);
        }

        Ok(false)
    }

    pub fn record_auth(&mut self, entry: AuthHistoryEntry) {
        self.auth_history.push(entry);
    }

    pub fn record_login(&mut self, now: DateTime<Utc>) {
        self.last_login = Some(now);
        self.record_auth(AuthHistoryEntry::new(
            now,
            AuthMethod::Password,
            true,
            "Password login succeeded",
        ));
    }

    pub fn record_failed_login(&mut self, now: DateTime<Utc>) {
        self.record_auth(AuthHistoryEntry::new(
            now,
            AuthMethod::Password,
            false,
            "Password login failed: incorrect password",
        ));
    }

    /// History entries for one method, in append order
    pub fn history_for(&self, method: AuthMethod) -> impl Iterator<Item = &AuthHistoryEntry> {
        self.auth_history
            .iter()
            .filter(move |entry| entry.method == method)
    }
}
