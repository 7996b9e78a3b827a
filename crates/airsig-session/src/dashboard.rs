use airsig_core::{Account, AuthHistoryEntry, AuthMethod, REQUIRED_SIGNATURES};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Entries shown in the recent activity list.
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

/// Read-only view of an account for the dashboard page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub username: String,
    pub email: String,
    pub member_since: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
    pub signature_count: usize,
    pub signatures_required: usize,
    pub enrollment_complete: bool,
    pub gesture_attempts: usize,
    pub gesture_successes: usize,
    /// Percentage of successful gesture attempts; `None` before the first
    pub success_rate: Option<f64>,
    /// Newest first
    pub recent_activity: Vec<AuthHistoryEntry>,
}

impl DashboardSnapshot {
    pub fn from_account(account: &Account) -> Self {
        let gesture_attempts = account.history_for(AuthMethod::Gesture).count();
        let gesture_successes = account
            .history_for(AuthMethod::Gesture)
            .filter(|entry| entry.success)
            .count();
        let success_rate = (gesture_attempts > 0)
            .then(|| gesture_successes as f64 * 100.0 / gesture_attempts as f64);

        Self {
            username: account.username.clone(),
            email: account.email.clone(),
            member_since: account.created_at,
            last_login: account.last_login,
            signature_count: account.signature_count(),
            signatures_required: REQUIRED_SIGNATURES,
            enrollment_complete: account.enrollment_complete,
            gesture_attempts,
            gesture_successes,
            success_rate,
            recent_activity: account
                .auth_history
                .iter()
                .rev()
                .take(RECENT_ACTIVITY_LIMIT)
                .cloned()
                .collect(),
        }
    }
}
