use crate::{Account, AuthMethod, REQUIRED_SIGNATURES, SignatureSample};

use chrono::{Duration, TimeZone, Utc};

fn account() -> Account {
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    Account::new(
        "alice_01".to_string(),
        "alice@example.com".to_string(),
        "correct horse".to_string(),
        now,
    )
}

fn sample(seconds: i64) -> SignatureSample {
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 5, 0).unwrap();
    SignatureSample::new(
        format!("blob:test/{seconds}"),
        1024,
        start,
        start + Duration::seconds(seconds),
    )
}

#[test]
fn test_account_new() {
    let account = account();

    assert_eq!(account.username, "alice_01");
    assert_eq!(account.email, "alice@example.com");
    assert_eq!(account.signature_count(), 0);
    assert_eq!(account.signatures_remaining(), REQUIRED_SIGNATURES);
    assert!(!account.enrollment_complete);
    assert!(account.last_login.is_none());
    assert!(account.auth_history.is_empty());
}

#[test]
fn test_account_password_matches_exactly() {
    let account = account();

    assert!(account.password_matches("correct horse"));
    assert!(!account.password_matches("Correct horse"));
    assert!(!account.password_matches(""));
}

#[test]
fn test_account_add_signature_completes_at_required_count() {
    let mut account = account();

    for i in 1..REQUIRED_SIGNATURES {
        assert!(!account.add_signature(sample(i as i64)).unwrap());
        assert!(!account.enrollment_complete);
    }

    assert!(account.add_signature(sample(9)).unwrap());
    assert!(account.enrollment_complete);
    assert_eq!(account.signature_count(), REQUIRED_SIGNATURES);
    assert_eq!(account.signatures_remaining(), 0);
}

#[test]
fn test_account_rejects_signature_after_completion() {
    let mut account = account();
    for i in 0..REQUIRED_SIGNATURES {
        account.add_signature(sample(i as i64)).unwrap();
    }

    let result = account.add_signature(sample(42));

    assert!(result.is_err());
    assert_eq!(result.unwrap_err().error_code(), "INVALID_STATE");
    assert_eq!(account.signature_count(), REQUIRED_SIGNATURES);
}

#[test]
fn test_account_record_login_sets_last_login_and_history() {
    let mut account = account();
    let at = Utc.with_ymd_and_hms(2024, 3, 2, 8, 0, 0).unwrap();

    account.record_login(at);

    assert_eq!(account.last_login, Some(at));
    assert_eq!(account.auth_history.len(), 1);
    let entry = &account.auth_history[0];
    assert_eq!(entry.method, AuthMethod::Password);
    assert!(entry.success);
    assert_eq!(entry.timestamp, at);
}

#[test]
fn test_account_record_failed_login_keeps_last_login() {
    let mut account = account();
    let at = Utc.with_ymd_and_hms(2024, 3, 2, 8, 0, 0).unwrap();

    account.record_failed_login(at);

    assert!(account.last_login.is_none());
    assert_eq!(account.auth_history.len(), 1);
    assert!(!account.auth_history[0].success);
}

#[test]
fn test_signature_sample_duration_from_timestamps() {
    let sample = sample(3);

    assert_eq!(sample.duration_ms, 3000);
    assert_eq!(sample.size_bytes, 1024);
}

#[test]
fn test_signature_sample_negative_span_clamps_to_zero() {
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 5, 0).unwrap();
    let sample = SignatureSample::new("blob:x".into(), 0, start, start - Duration::seconds(1));

    assert_eq!(sample.duration_ms, 0);
}

#[test]
fn test_account_serde_roundtrip_preserves_everything() {
    let mut account = account();
    account.add_signature(sample(2)).unwrap();
    account.record_login(Utc.with_ymd_and_hms(2024, 3, 2, 8, 0, 0).unwrap());

    let json = serde_json::to_string(&account).unwrap();
    let restored: Account = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, account);
}
