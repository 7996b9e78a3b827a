use crate::UserDirectory;

use airsig_core::{Account, Session};
use airsig_store::PersistedState;
use log::{info, warn};

/// Owns the single active session of a context.
#[derive(Debug, Default)]
pub struct SessionManager {
    session: Session,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore from persisted state.
    ///
    /// The session is only restored when the flag is set, a snapshot exists,
    /// and the snapshot's account is still in the directory.
    pub fn restore(state: &PersistedState, directory: &UserDirectory) -> Self {
        if !state.authenticated {
            return Self::new();
        }

        let Some(snapshot) = &state.current_user else {
            warn!("Session flag set without a current user, starting logged out");
            return Self::new();
        };

        match directory.get(&snapshot.username) {
            Some(account) => {
                info!("Restored session for '{}'", account.username);
                Self {
                    session: Session::for_account(account),
                }
            }
            None => {
                warn!(
                    "Session user '{}' is not in the directory, starting logged out",
                    snapshot.username
                );
                Self::new()
            }
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Replace whatever session was active.
    pub fn begin(&mut self, account: &Account) {
        if let Some(previous) = self.current_username()
            && previous != account.username
        {
            info!("Session for '{previous}' replaced by '{}'", account.username);
        }
        self.session = Session::for_account(account);
    }

    /// Clear the session, returning the username that was active.
    pub fn end(&mut self) -> Option<String> {
        let previous = std::mem::take(&mut self.session);
        previous.username.filter(|_| previous.authenticated)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn current_username(&self) -> Option<&str> {
        if self.session.authenticated {
            self.session.username.as_deref()
        } else {
            None
        }
    }

    pub fn current<'a>(&self, directory: &'a UserDirectory) -> Option<&'a Account> {
        self.current_username()
            .and_then(|username| directory.get(username))
    }
}
