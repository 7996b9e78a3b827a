//! Unit tests for the store crate.

mod memory_store;

use airsig_core::{Account, AuthHistoryEntry, AuthMethod, SignatureSample};
use chrono::{Duration, TimeZone, Utc};

/// Account with a signature and some history so round trips cover every field.
pub(crate) fn populated_account(username: &str) -> Account {
    let created = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let mut account = Account::new(
        username.to_string(),
        format!("{username}@example.com"),
        "plaintext-password".to_string(),
        created,
    );

    let start = created + Duration::minutes(1);
    account
        .add_signature(SignatureSample::new(
            format!("blob:{username}/1"),
            2048,
            start,
            start + Duration::milliseconds(2750),
        ))
        .unwrap();
    account.record_login(created + Duration::minutes(5));
    account.record_auth(AuthHistoryEntry::new(
        created + Duration::minutes(6),
        AuthMethod::Gesture,
        false,
        "Gesture not recognized (confidence 41.7%)",
    ));
    account
}
