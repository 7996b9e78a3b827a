use crate::Account;

use serde::{Deserialize, Serialize};

/// The single active identity of an application context.
///
/// Holds the username of the active account rather than a copy of it; the
/// user directory stays the source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    pub username: Option<String>,
    pub authenticated: bool,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn for_account(account: &Account) -> Self {
        Self {
            username: Some(account.username.clone()),
            authenticated: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated && self.username.is_some()
    }
}
