//! In-memory user directory keyed by username, with an email index.

use std::collections::{BTreeMap, HashMap};

use airsig_core::{
    Account, AirsigError, AirsigResult, REQUIRED_SIGNATURES, validate_registration,
};
use chrono::{DateTime, Utc};
use log::{info, warn};

const INVALID_CREDENTIALS: &str = "Invalid username/email or password";

/// Registered accounts. Usernames and emails are each unique.
#[derive(Debug, Default)]
pub struct UserDirectory {
    accounts: BTreeMap<String, Account>,
    emails: HashMap<String, String>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted `(username, account)` pairs.
    ///
    /// The account's own username wins over the stored key. Entries that
    /// would break username or email uniqueness are skipped. The enrollment
    /// flag is recomputed from the stored samples.
    pub fn from_pairs(pairs: Vec<(String, Account)>) -> Self {
        let mut directory = Self::new();

        for (key, mut account) in pairs {
            if key != account.username {
                warn!(
                    "Stored key '{key}' does not match username '{}'",
                    account.username
                );
            }

            if directory.accounts.contains_key(&account.username) {
                warn!("Skipping duplicate account '{}'", account.username);
                continue;
            }

            if directory.emails.contains_key(&account.email) {
                warn!(
                    "Skipping account '{}': email already in use",
                    account.username
                );
                continue;
            }

            let complete = account.signatures.len() >= REQUIRED_SIGNATURES;
            if account.enrollment_complete != complete {
                warn!(
                    "Account '{}' has {} signature(s) but stored complete={}; using {complete}",
                    account.username,
                    account.signatures.len(),
                    account.enrollment_complete
                );
                account.enrollment_complete = complete;
            }

            directory.insert(account);
        }

        directory
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Accounts ordered by username.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn get(&self, username: &str) -> Option<&Account> {
        self.accounts.get(username)
    }

    pub fn get_mut(&mut self, username: &str) -> Option<&mut Account> {
        self.accounts.get_mut(username)
    }

    /// Look up by username first, then by email.
    pub fn find(&self, identifier: &str) -> Option<&Account> {
        self.resolve_username(identifier)
            .and_then(|username| self.accounts.get(username))
    }

    pub fn contains_username(&self, username: &str) -> bool {
        self.accounts.contains_key(username)
    }

    pub fn contains_email(&self, email: &str) -> bool {
        self.emails.contains_key(email)
    }

    /// Validate, check uniqueness (username before email), then create.
    pub fn register(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
        now: DateTime<Utc>,
    ) -> AirsigResult<&Account> {
        validate_registration(username, email, password, confirm_password)?;

        if self.contains_username(username) {
            return Err(AirsigError::conflict("username", username));
        }

        if self.contains_email(email) {
            return Err(AirsigError::conflict("email", email));
        }

        let account = Account::new(
            username.to_string(),
            email.to_string(),
            password.to_string(),
            now,
        );
        info!("Registered account '{username}'");

        Ok(self.insert(account))
    }

    /// Password login by username or email.
    ///
    /// A wrong or empty password for a known account is recorded in that
    /// account's history. An unknown identifier records nothing.
    pub fn login(
        &mut self,
        identifier: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> AirsigResult<&Account> {
        if identifier.is_empty() {
            return Err(AirsigError::validation("identifier", "All fields are required"));
        }

        let Some(username) = self.resolve_username(identifier).map(str::to_owned) else {
            info!("Login rejected: unknown identifier");
            return Err(AirsigError::auth(INVALID_CREDENTIALS));
        };

        let account = self
            .accounts
            .get_mut(&username)
            .ok_or_else(|| AirsigError::auth(INVALID_CREDENTIALS))?;

        if !account.password_matches(password) {
            account.record_failed_login(now);
            info!("Login rejected for '{username}': incorrect password");
            return Err(AirsigError::auth(INVALID_CREDENTIALS));
        }

        account.record_login(now);
        info!("Login succeeded for '{username}'");
        Ok(&*account)
    }

    fn resolve_username<'a>(&'a self, identifier: &'a str) -> Option<&'a str> {
        if self.accounts.contains_key(identifier) {
            return Some(identifier);
        }
        self.emails.get(identifier).map(String::as_str)
    }

    fn insert(&mut self, account: Account) -> &Account {
        let username = account.username.clone();
        self.emails.insert(account.email.clone(), username.clone());
        self.accounts.entry(username).or_insert(account)
    }
}
