use crate::UserDirectory;
use crate::tests::{PASSWORD, account, account_with_signatures, fixed_clock, sample};

use airsig_core::{AirsigError, AuthMethod, Clock, REQUIRED_SIGNATURES};
use googletest::prelude::*;

fn directory_with_alice(clock: &dyn Clock) -> UserDirectory {
    let mut directory = UserDirectory::new();
    directory
        .register("alice", "alice@example.com", PASSWORD, PASSWORD, clock.now())
        .unwrap();
    directory
}

// =========================================================================
// Registration
// =========================================================================

#[test]
fn given_valid_fields_when_register_then_findable_by_username_and_email() {
    let clock = fixed_clock();
    let directory = directory_with_alice(&*clock);

    assert_that!(directory.len(), eq(1));
    let by_name = directory.find("alice").unwrap();
    let by_email = directory.find("alice@example.com").unwrap();
    assert_eq!(by_name, by_email);
    assert_that!(by_name.created_at, eq(clock.now()));
    assert_that!(by_name.signatures, is_empty());
    assert_that!(by_name.enrollment_complete, eq(false));
    assert_that!(by_name.last_login, none());
}

#[test]
fn given_taken_username_when_register_then_conflict_and_directory_unchanged() {
    let clock = fixed_clock();
    let mut directory = directory_with_alice(&*clock);

    let result = directory.register("alice", "other@example.com", PASSWORD, PASSWORD, clock.now());

    let error = result.unwrap_err();
    assert_that!(error.error_code(), eq("CONFLICT"));
    assert_that!(error.field(), some(eq("username")));
    assert_that!(directory.len(), eq(1));
    assert_that!(directory.contains_email("other@example.com"), eq(false));
}

#[test]
fn given_taken_email_when_register_then_conflict_on_email() {
    let clock = fixed_clock();
    let mut directory = directory_with_alice(&*clock);

    let result = directory.register("bob", "alice@example.com", PASSWORD, PASSWORD, clock.now());

    let error = result.unwrap_err();
    assert_that!(error.field(), some(eq("email")));
    assert_that!(directory.contains_username("bob"), eq(false));
}

#[test]
fn given_taken_username_and_email_when_register_then_username_reported_first() {
    let clock = fixed_clock();
    let mut directory = directory_with_alice(&*clock);

    let result = directory.register("alice", "alice@example.com", PASSWORD, PASSWORD, clock.now());

    assert_that!(result.unwrap_err().field(), some(eq("username")));
}

#[test]
fn given_invalid_fields_when_register_then_validation_error_before_conflict() {
    let clock = fixed_clock();
    let mut directory = directory_with_alice(&*clock);

    let result = directory.register("alice", "alice@example.com", "short", "short", clock.now());

    let error = result.unwrap_err();
    assert!(matches!(error, AirsigError::Validation { field: "password", .. }));
}

// =========================================================================
// Login
// =========================================================================

#[test]
fn given_correct_password_when_login_by_email_then_last_login_and_one_success_entry() {
    let clock = fixed_clock();
    let mut directory = directory_with_alice(&*clock);
    clock.advance(chrono::Duration::minutes(5));

    let account = directory
        .login("alice@example.com", PASSWORD, clock.now())
        .unwrap();

    assert_that!(account.last_login, some(eq(clock.now())));
    assert_that!(account.auth_history.len(), eq(1));
    let entry = &account.auth_history[0];
    assert_that!(entry.method, eq(AuthMethod::Password));
    assert_that!(entry.success, eq(true));
}

#[test]
fn given_wrong_password_when_login_then_auth_error_and_failed_entry() {
    let clock = fixed_clock();
    let mut directory = directory_with_alice(&*clock);

    let result = directory.login("alice", "wrong-password", clock.now());

    assert_that!(result.unwrap_err().error_code(), eq("AUTH_FAILED"));
    let account = directory.get("alice").unwrap();
    assert_that!(account.last_login, none());
    assert_that!(account.auth_history.len(), eq(1));
    assert_that!(account.auth_history[0].method, eq(AuthMethod::Password));
    assert_that!(account.auth_history[0].success, eq(false));
}

#[test]
fn given_unknown_identifier_when_login_then_same_message_and_no_history() {
    let clock = fixed_clock();
    let mut directory = directory_with_alice(&*clock);

    let unknown = directory.login("nobody", PASSWORD, clock.now()).unwrap_err();
    let wrong = directory.login("alice", "nope-nope", clock.now()).unwrap_err();

    assert_that!(unknown.user_message(), eq(&wrong.user_message()));
    assert_that!(directory.get("alice").unwrap().auth_history.len(), eq(1));
}

#[test]
fn given_empty_identifier_when_login_then_validation_error() {
    let clock = fixed_clock();
    let mut directory = directory_with_alice(&*clock);

    let result = directory.login("", PASSWORD, clock.now());

    assert_that!(result.unwrap_err().error_code(), eq("VALIDATION_ERROR"));
}

#[test]
fn given_empty_password_for_known_account_when_login_then_auth_error_and_failed_entry() {
    let clock = fixed_clock();
    let mut directory = directory_with_alice(&*clock);

    let result = directory.login("alice", "", clock.now());

    assert_that!(result.unwrap_err().error_code(), eq("AUTH_FAILED"));
    let account = directory.get("alice").unwrap();
    assert_that!(account.auth_history.len(), eq(1));
    assert_that!(account.auth_history[0].method, eq(AuthMethod::Password));
    assert_that!(account.auth_history[0].success, eq(false));
}

// =========================================================================
// Rebuild from persisted pairs
// =========================================================================

#[test]
fn given_pairs_with_duplicate_email_when_rebuilt_then_later_entry_skipped() {
    let clock = fixed_clock();
    let alice = account("alice", &*clock);
    let mut impostor = account("mallory", &*clock);
    impostor.email = alice.email.clone();

    let directory = UserDirectory::from_pairs(vec![
        ("alice".to_string(), alice),
        ("mallory".to_string(), impostor),
    ]);

    assert_that!(directory.len(), eq(1));
    assert_that!(directory.contains_username("mallory"), eq(false));
}

#[test]
fn given_stale_enrollment_flags_when_rebuilt_then_flag_follows_signature_count() {
    let clock = fixed_clock();
    let mut bob = account_with_signatures("bob", REQUIRED_SIGNATURES, &*clock);
    bob.enrollment_complete = false;
    let mut carl = account("carl", &*clock);
    carl.enrollment_complete = true;

    let mut directory = UserDirectory::from_pairs(vec![
        ("bob".to_string(), bob),
        ("carl".to_string(), carl),
    ]);

    assert_that!(directory.get("bob").unwrap().enrollment_complete, eq(true));
    assert_that!(directory.get("carl").unwrap().enrollment_complete, eq(false));

    let bob = directory.get_mut("bob").unwrap();
    let sixth = bob.add_signature(sample(&*clock));
    assert_that!(sixth, err(anything()));
    assert_that!(bob.signatures.len(), eq(REQUIRED_SIGNATURES));
}

#[test]
fn given_mismatched_key_when_rebuilt_then_account_username_wins() {
    let clock = fixed_clock();
    let alice = account("alice", &*clock);

    let directory = UserDirectory::from_pairs(vec![("stale".to_string(), alice)]);

    assert_that!(directory.get("alice"), some(anything()));
    assert_that!(directory.get("stale"), none());
}

#[test]
fn given_accounts_inserted_out_of_order_when_iterated_then_sorted_by_username() {
    let clock = fixed_clock();
    let mut directory = UserDirectory::new();
    for name in ["carol", "alice", "bob"] {
        directory
            .register(name, &format!("{name}@example.com"), PASSWORD, PASSWORD, clock.now())
            .unwrap();
    }

    let names: Vec<&str> = directory.accounts().map(|a| a.username.as_str()).collect();

    assert_eq!(names, vec!["alice", "bob", "carol"]);
}
