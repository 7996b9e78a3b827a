use crate::{Config, ConfigError};
use crate::tests::{EnvGuard, setup_config_dir};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serial_test::serial;

const ABOVE_MAX_DELAY: u64 = crate::MAX_ATTEMPT_DELAY_MS + 1;

// =========================================================================
// Validation Tests - Auth Simulator
// =========================================================================

#[test]
#[serial]
fn given_zero_delay_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _delay = EnvGuard::set("AIRSIG_AUTH_ATTEMPT_DELAY_MS", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
    assert_that!(config.auth.attempt_delay(), eq(Duration::ZERO));
}

#[test]
#[serial]
fn given_max_delay_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _delay = EnvGuard::set(
        "AIRSIG_AUTH_ATTEMPT_DELAY_MS",
        &crate::MAX_ATTEMPT_DELAY_MS.to_string(),
    );

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_delay_above_max_when_validate_then_error_mentions_field() {
    // Given
    let _temp = setup_config_dir();
    let _delay = EnvGuard::set("AIRSIG_AUTH_ATTEMPT_DELAY_MS", &ABOVE_MAX_DELAY.to_string());

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("auth.attempt_delay_ms"));
}

#[test]
#[serial]
fn given_default_config_when_attempt_delay_then_three_seconds() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.auth.attempt_delay(), eq(Duration::from_secs(3)));
}

#[test]
#[serial]
fn given_delay_above_max_when_validate_then_out_of_range_carries_bounds() {
    // Given
    let _temp = setup_config_dir();
    let _delay = EnvGuard::set("AIRSIG_AUTH_ATTEMPT_DELAY_MS", &ABOVE_MAX_DELAY.to_string());

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert!(matches!(
        result,
        Err(ConfigError::OutOfRange { key: "auth.attempt_delay_ms", value, max, .. })
            if value == ABOVE_MAX_DELAY && max == crate::MAX_ATTEMPT_DELAY_MS
    ));
}
