use crate::AuthMethod;

use std::str::FromStr;

#[test]
fn test_auth_method_as_str() {
    assert_eq!(AuthMethod::Password.as_str(), "password");
    assert_eq!(AuthMethod::Gesture.as_str(), "gesture");
}

#[test]
fn test_auth_method_from_str() {
    assert_eq!(
        AuthMethod::from_str("password").unwrap(),
        AuthMethod::Password
    );
    assert_eq!(AuthMethod::from_str("gesture").unwrap(), AuthMethod::Gesture);
    assert!(AuthMethod::from_str("face").is_err());
}

#[test]
fn test_auth_method_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&AuthMethod::Gesture).unwrap(),
        "\"gesture\""
    );
}
