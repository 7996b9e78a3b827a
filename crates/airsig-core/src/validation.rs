//! Registration input rules.

use crate::{AirsigError, AirsigResult};

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Letters, digits and underscore only.
pub fn is_valid_username(username: &str) -> bool {
    username.chars().count() >= MIN_USERNAME_LENGTH
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Basic `local@domain.tld` shape check: no whitespace, a single `@`, and a
/// dot inside the domain with characters on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Check registration fields, reporting the first failing rule.
#[track_caller]
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> AirsigResult<()> {
    if username.is_empty() || email.is_empty() || password.is_empty() || confirm_password.is_empty()
    {
        return Err(AirsigError::validation("form", "All fields are required"));
    }

    if username.chars().count() < MIN_USERNAME_LENGTH {
        return Err(AirsigError::validation(
            "username",
            format!("Username must be at least {MIN_USERNAME_LENGTH} characters"),
        ));
    }

    if !is_valid_username(username) {
        return Err(AirsigError::validation(
            "username",
            "Username can only contain letters, numbers, and underscores",
        ));
    }

    if !is_valid_email(email) {
        return Err(AirsigError::validation(
            "email",
            "Please enter a valid email address",
        ));
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AirsigError::validation(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
        ));
    }

    if password != confirm_password {
        return Err(AirsigError::validation(
            "confirm_password",
            "Passwords do not match",
        ));
    }

    Ok(())
}
