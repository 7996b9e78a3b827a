//! Persisted layout of the user directory and the active session.
//!
//! | key             | value                                            |
//! |-----------------|--------------------------------------------------|
//! | `users`         | JSON list of `[username, Account]` pairs         |
//! | `current_user`  | JSON account snapshot, only while authenticated  |
//! | `authenticated` | `"true"`, or absent                              |

use crate::{KeyValueStore, LoadResult, StoreError, StoreResult};

use airsig_core::Account;
use log::{debug, warn};

pub const USERS_KEY: &str = "users";
pub const CURRENT_USER_KEY: &str = "current_user";
pub const AUTHENTICATED_KEY: &str = "authenticated";

const AUTHENTICATED_VALUE: &str = "true";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedState {
    pub users: Vec<(String, Account)>,
    pub current_user: Option<Account>,
    pub authenticated: bool,
}

/// Reads and writes [`PersistedState`] through a [`KeyValueStore`].
#[derive(Debug)]
pub struct Persistence {
    store: Box<dyn KeyValueStore>,
}

impl Persistence {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load state, falling back to empty defaults on any failure.
    pub fn load(&self) -> LoadResult {
        match self.try_load() {
            Ok(state) => LoadResult {
                state,
                load_error: None,
            },
            Err(e) => {
                warn!("Persisted state unreadable, starting empty: {e}");
                LoadResult {
                    state: PersistedState::default(),
                    load_error: Some(e.to_string()),
                }
            }
        }
    }

    pub fn try_load(&self) -> StoreResult<PersistedState> {
        let users = match self.store.get(USERS_KEY)? {
            Some(json) => serde_json::from_str::<Vec<(String, Account)>>(&json)
                .map_err(|e| StoreError::corrupted(USERS_KEY, e.to_string()))?,
            None => Vec::new(),
        };

        let current_user = match self.store.get(CURRENT_USER_KEY)? {
            Some(json) => Some(
                serde_json::from_str::<Account>(&json)
                    .map_err(|e| StoreError::corrupted(CURRENT_USER_KEY, e.to_string()))?,
            ),
            None => None,
        };

        let authenticated =
            self.store.get(AUTHENTICATED_KEY)?.as_deref() == Some(AUTHENTICATED_VALUE);

        debug!(
            "Loaded {} account(s), session {}",
            users.len(),
            if authenticated { "active" } else { "inactive" }
        );

        Ok(PersistedState {
            users,
            current_user,
            authenticated,
        })
    }

    /// Write the full user directory.
    pub fn save_users<'a, I>(&mut self, accounts: I) -> StoreResult<()>
    where
        I: IntoIterator<Item = &'a Account>,
    {
        let pairs: Vec<(&str, &Account)> = accounts
            .into_iter()
            .map(|account| (account.username.as_str(), account))
            .collect();

        let json = serde_json::to_string(&pairs)?;
        self.store.set(USERS_KEY, &json)
    }

    /// Write the session: a snapshot plus the flag, or neither.
    pub fn save_session(&mut self, current: Option<&Account>) -> StoreResult<()> {
        match current {
            Some(account) => {
                let json = serde_json::to_string(account)?;
                self.store.set(CURRENT_USER_KEY, &json)?;
                self.store.set(AUTHENTICATED_KEY, AUTHENTICATED_VALUE)
            }
            None => {
                self.store.remove(CURRENT_USER_KEY)?;
                self.store.remove(AUTHENTICATED_KEY)
            }
        }
    }
}
