mod directory;

use std::sync::Arc;

use airsig_core::{Account, Clock, FixedClock, REQUIRED_SIGNATURES, SignatureSample};

pub(crate) const PASSWORD: &str = "password123";

pub(crate) fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::default())
}

pub(crate) fn account(username: &str, clock: &dyn Clock) -> Account {
    Account::new(
        username.to_string(),
        format!("{username}@example.com"),
        PASSWORD.to_string(),
        clock.now(),
    )
}

pub(crate) fn sample(clock: &dyn Clock) -> SignatureSample {
    SignatureSample::new("blob:test".to_string(), 1024, clock.now(), clock.now())
}

/// An account holding `count` signatures.
pub(crate) fn account_with_signatures(username: &str, count: usize, clock: &dyn Clock) -> Account {
    let mut account = account(username, clock);
    for _ in 0..count.min(REQUIRED_SIGNATURES) {
        let _ = account.add_signature(sample(clock)).unwrap();
    }
    account
}
