//! Per-visit enrollment state machine.
//!
//! ```text
//! Idle -> CameraReady -> Recording -> Recorded -> CameraReady ... -> Complete
//! ```
//!
//! A failed stop returns to `CameraReady`, discarding the clip. The camera
//! lease is dropped on completion, on `release_camera`, and when the tracker
//! itself is dropped.

use crate::{CameraLease, CaptureDevice};

use std::sync::Arc;

use airsig_core::{
    Account, AirsigError, AirsigResult, Clock, REQUIRED_SIGNATURES, SignatureSample,
};
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStage {
    Idle,
    CameraReady,
    Recording,
    Recorded,
    Complete,
}

impl EnrollmentStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::CameraReady => "camera_ready",
            Self::Recording => "recording",
            Self::Recorded => "recorded",
            Self::Complete => "complete",
        }
    }
}

impl std::fmt::Display for EnrollmentStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SaveOutcome {
    /// Signatures stored on the account after this save
    pub saved: usize,
    pub required: usize,
    pub completed: bool,
}

#[derive(Debug)]
pub struct EnrollmentTracker {
    stage: EnrollmentStage,
    lease: Option<CameraLease>,
    recording_started: Option<DateTime<Utc>>,
    pending: Option<SignatureSample>,
}

impl EnrollmentTracker {
    /// Fresh tracker for one visit to the enrollment page.
    pub fn for_account(account: &Account) -> Self {
        let stage = if account.enrollment_complete {
            EnrollmentStage::Complete
        } else {
            EnrollmentStage::Idle
        };

        Self {
            stage,
            lease: None,
            recording_started: None,
            pending: None,
        }
    }

    pub fn stage(&self) -> EnrollmentStage {
        self.stage
    }

    pub fn has_camera(&self) -> bool {
        self.lease.is_some()
    }

    /// Clip recorded and awaiting save or discard.
    pub fn pending_sample(&self) -> Option<&SignatureSample> {
        self.pending.as_ref()
    }

    pub async fn start_camera(&mut self, device: Arc<dyn CaptureDevice>) -> AirsigResult<()> {
        match self.stage {
            EnrollmentStage::Idle => {}
            EnrollmentStage::Complete => {
                return Err(AirsigError::state("Enrollment is already complete"));
            }
            _ => return Err(AirsigError::state("Camera is already started")),
        }

        let lease = CameraLease::acquire(device).await?;
        self.lease = Some(lease);
        self.stage = EnrollmentStage::CameraReady;
        info!("Enrollment camera ready");
        Ok(())
    }

    pub async fn start_recording(&mut self, clock: &dyn Clock) -> AirsigResult<()> {
        if self.stage != EnrollmentStage::CameraReady {
            return Err(AirsigError::state(format!(
                "Camera not ready (stage: {})",
                self.stage
            )));
        }

        let lease = self
            .lease
            .as_ref()
            .ok_or_else(|| AirsigError::state("Camera not ready"))?;
        lease.start_recording().await?;

        self.recording_started = Some(clock.now());
        self.stage = EnrollmentStage::Recording;
        Ok(())
    }

    pub async fn stop_recording(&mut self, clock: &dyn Clock) -> AirsigResult<SignatureSample> {
        if self.stage != EnrollmentStage::Recording {
            return Err(AirsigError::state("No recording in progress"));
        }

        let lease = self
            .lease
            .as_ref()
            .ok_or_else(|| AirsigError::state("No recording in progress"))?;

        match lease.stop_recording().await {
            Ok(payload) => {
                let captured_at = clock.now();
                let started_at = self.recording_started.take().unwrap_or(captured_at);
                let sample = SignatureSample::new(
                    payload.reference,
                    payload.size_bytes,
                    started_at,
                    captured_at,
                );
                self.pending = Some(sample.clone());
                self.stage = EnrollmentStage::Recorded;
                Ok(sample)
            }
            Err(e) => {
                warn!("Recording failed, clip discarded: {e}");
                self.recording_started = None;
                self.stage = EnrollmentStage::CameraReady;
                Err(e)
            }
        }
    }

    /// Append the pending clip to `account`.
    ///
    /// Once the account holds the required number of signatures the tracker
    /// moves to `Complete` and releases the camera. Saving after completion
    /// is rejected.
    pub fn save_recording(&mut self, account: &mut Account) -> AirsigResult<SaveOutcome> {
        if self.stage == EnrollmentStage::Complete || account.enrollment_complete {
            return Err(AirsigError::state(format!(
                "Enrollment is already complete ({REQUIRED_SIGNATURES} signatures recorded)"
            )));
        }

        if self.stage != EnrollmentStage::Recorded {
            return Err(AirsigError::state("No recording to save"));
        }

        let sample = self
            .pending
            .take()
            .ok_or_else(|| AirsigError::state("No recording to save"))?;
        let completed = account.add_signature(sample)?;

        if completed {
            self.stage = EnrollmentStage::Complete;
            self.lease = None;
            info!("Enrollment complete for '{}'", account.username);
        } else {
            self.stage = EnrollmentStage::CameraReady;
        }

        Ok(SaveOutcome {
            saved: account.signature_count(),
            required: REQUIRED_SIGNATURES,
            completed,
        })
    }

    /// Drop the pending clip and return to `CameraReady` (retake).
    pub fn discard_recording(&mut self) -> AirsigResult<()> {
        if self.stage != EnrollmentStage::Recorded {
            return Err(AirsigError::state("No recording to discard"));
        }

        self.pending = None;
        self.stage = EnrollmentStage::CameraReady;
        Ok(())
    }

    /// Release the camera. Any in-progress or unsaved clip is lost.
    pub fn release_camera(&mut self) {
        if self.lease.take().is_none() {
            return;
        }

        self.recording_started = None;
        self.pending = None;
        if self.stage != EnrollmentStage::Complete {
            self.stage = EnrollmentStage::Idle;
        }
    }
}
