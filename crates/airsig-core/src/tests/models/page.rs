use crate::Page;

use std::str::FromStr;

#[test]
fn test_page_string_roundtrip() {
    for page in Page::ALL {
        assert_eq!(Page::from_str(page.as_str()).unwrap(), page);
    }
}

#[test]
fn test_page_auth_test_uses_kebab_case() {
    assert_eq!(Page::AuthTest.as_str(), "auth-test");
    assert_eq!(
        serde_json::to_string(&Page::AuthTest).unwrap(),
        "\"auth-test\""
    );
}

#[test]
fn test_page_unknown_is_validation_error() {
    let err = Page::from_str("settings").unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
    assert_eq!(err.field(), Some("page"));
}

#[test]
fn test_page_default_is_home() {
    assert_eq!(Page::default(), Page::Home);
}

#[test]
fn test_page_camera_pages() {
    let camera_pages: Vec<Page> = Page::ALL.into_iter().filter(Page::uses_camera).collect();
    assert_eq!(camera_pages, vec![Page::Enrollment, Page::AuthTest]);
}
