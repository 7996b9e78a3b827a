//! One recorded air-signature capture.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureSample {
    pub id: Uuid,
    /// Opaque reference to the captured clip (e.g. a blob URL)
    pub payload_ref: String,
    pub size_bytes: u64,
    pub captured_at: DateTime<Utc>,
    /// Approximate clip length, start to stop
    pub duration_ms: u64,
}

impl SignatureSample {
    pub fn new(
        payload_ref: String,
        size_bytes: u64,
        started_at: DateTime<Utc>,
        captured_at: DateTime<Utc>,
    ) -> Self {
        let duration_ms = (captured_at - started_at).num_milliseconds().max(0) as u64;
        Self {
            id: Uuid::new_v4(),
            payload_ref,
            size_bytes,
            captured_at,
            duration_ms,
        }
    }
}
