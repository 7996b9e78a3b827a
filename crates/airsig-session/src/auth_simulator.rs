//! Simulated gesture authentication.
//!
//! An attempt waits for the configured analysis delay, then draws from the
//! random source: success iff the draw is above [`SUCCESS_THRESHOLD`]. A
//! second draw places the confidence inside the band for the outcome.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use airsig_core::{
    Account, AirsigError, AirsigResult, AuthHistoryEntry, AuthMethod, Clock, REQUIRED_SIGNATURES,
    RandomSource,
};
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::Serialize;

/// Draws above this value succeed (roughly 90% of attempts).
pub const SUCCESS_THRESHOLD: f64 = 0.1;

/// Confidence band, in percent, for successful attempts.
pub const SUCCESS_CONFIDENCE: (f64, f64) = (85.0, 95.0);

/// Confidence band, in percent, for failed attempts.
pub const FAILURE_CONFIDENCE: (f64, f64) = (30.0, 70.0);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthResult {
    pub success: bool,
    /// Percentage, 0-100
    pub confidence: f64,
    pub message: String,
    pub attempted_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct AuthSimulator {
    delay: Duration,
    random: Arc<dyn RandomSource>,
    clock: Arc<dyn Clock>,
    in_flight: AtomicBool,
}

impl AuthSimulator {
    pub fn new(delay: Duration, random: Arc<dyn RandomSource>, clock: Arc<dyn Clock>) -> Self {
        Self {
            delay,
            random,
            clock,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Fails with `Precondition` unless the account finished enrollment.
    #[track_caller]
    pub fn check_ready(account: &Account) -> AirsigResult<()> {
        if account.enrollment_complete {
            return Ok(());
        }

        Err(AirsigError::precondition(format!(
            "Complete enrollment before testing authentication ({} of {REQUIRED_SIGNATURES} signatures recorded)",
            account.signature_count()
        )))
    }

    /// Run one attempt and append its outcome to the account's history.
    ///
    /// Only one attempt may be in flight per simulator. Dropping the future
    /// mid-delay abandons the attempt without touching the account.
    pub async fn attempt(&self, account: &mut Account) -> AirsigResult<AuthResult> {
        Self::check_ready(account)?;
        let _guard = InFlightGuard::claim(&self.in_flight)?;

        debug!(
            "Analyzing gesture for '{}' ({:?})",
            account.username, self.delay
        );
        tokio::time::sleep(self.delay).await;

        let success = self.random.uniform() > SUCCESS_THRESHOLD;
        let (low, high) = if success {
            SUCCESS_CONFIDENCE
        } else {
            FAILURE_CONFIDENCE
        };
        let confidence = low + (high - low) * self.random.uniform().clamp(0.0, 1.0);
        let attempted_at = self.clock.now();

        let (message, detail) = if success {
            (
                format!("Authentication successful! Confidence: {confidence:.1}%"),
                format!("Gesture matched with {confidence:.1}% confidence"),
            )
        } else {
            (
                format!("Authentication failed. Gesture did not match (confidence: {confidence:.1}%)"),
                format!("Gesture rejected with {confidence:.1}% confidence"),
            )
        };

        account.record_auth(AuthHistoryEntry::new(
            attempted_at,
            AuthMethod::Gesture,
            success,
            detail,
        ));
        info!(
            "Gesture attempt for '{}': {} ({confidence:.1}%)",
            account.username,
            if success { "success" } else { "failure" }
        );

        Ok(AuthResult {
            success,
            confidence,
            message,
            attempted_at,
        })
    }
}

/// Holds the in-flight flag; cleared on drop, including cancellation.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn claim(flag: &'a AtomicBool) -> AirsigResult<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| AirsigError::state("An authentication attempt is already in progress"))?;
        Ok(Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
