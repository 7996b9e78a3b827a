use crate::{Account, Session};

use chrono::Utc;

#[test]
fn test_session_anonymous_is_not_authenticated() {
    let session = Session::anonymous();
    assert!(!session.is_authenticated());
    assert!(session.username.is_none());
}

#[test]
fn test_session_for_account() {
    let account = Account::new(
        "bob".into(),
        "bob@example.com".into(),
        "password1".into(),
        Utc::now(),
    );

    let session = Session::for_account(&account);

    assert!(session.is_authenticated());
    assert_eq!(session.username.as_deref(), Some("bob"));
}

#[test]
fn test_session_flag_without_username_is_not_authenticated() {
    let session = Session {
        username: None,
        authenticated: true,
    };
    assert!(!session.is_authenticated());
}
