use crate::{AirsigError, DeviceErrorKind};

#[test]
fn test_error_codes_are_distinct() {
    let errors = [
        AirsigError::validation("username", "bad"),
        AirsigError::conflict("email", "a@b.co"),
        AirsigError::auth("nope"),
        AirsigError::device(DeviceErrorKind::NotFound, "none"),
        AirsigError::state("wrong stage"),
        AirsigError::precondition("enroll first"),
        AirsigError::persistence("disk full"),
    ];

    let mut codes: Vec<&str> = errors.iter().map(AirsigError::error_code).collect();
    codes.sort_unstable();
    codes.dedup();

    assert_eq!(codes.len(), errors.len());
}

#[test]
fn test_conflict_user_message_names_field_not_value() {
    let err = AirsigError::conflict("username", "alice");

    assert_eq!(err.user_message(), "That username is already registered");
    assert_eq!(err.field(), Some("username"));
}

#[test]
fn test_device_user_message_depends_on_kind() {
    let denied = AirsigError::device(DeviceErrorKind::PermissionDenied, "NotAllowedError");
    let missing = AirsigError::device(DeviceErrorKind::NotFound, "NotFoundError");

    assert!(denied.user_message().contains("denied"));
    assert!(missing.user_message().contains("No camera"));
}

#[test]
fn test_display_includes_category_and_message() {
    let err = AirsigError::state("camera not ready");
    let rendered = err.to_string();

    assert!(rendered.starts_with("Invalid state: camera not ready"));
}

#[test]
fn test_user_message_has_no_location() {
    let err = AirsigError::precondition("Complete enrollment first");
    assert_eq!(err.user_message(), "Complete enrollment first");
}
