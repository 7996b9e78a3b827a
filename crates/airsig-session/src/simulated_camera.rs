use crate::{CaptureDevice, CapturePayload, StreamHandle};

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use airsig_core::{AirsigError, AirsigResult, DeviceErrorKind};
use async_trait::async_trait;
use uuid::Uuid;

const SIMULATED_LABEL: &str = "Simulated camera";
const SIMULATED_CLIP_BYTES: u64 = 48_000;

/// Camera stand-in for the CLI and tests.
///
/// Clones share state, so a test can hand one clone to a context and watch
/// acquisitions and releases through the other.
#[derive(Debug, Clone, Default)]
pub struct SimulatedCamera {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    failure: Mutex<Option<DeviceErrorKind>>,
    fail_capture: AtomicBool,
    live: Mutex<HashSet<Uuid>>,
    recording: Mutex<HashSet<Uuid>>,
    acquisitions: AtomicUsize,
    releases: AtomicUsize,
}

impl SimulatedCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// A camera whose acquisition always fails with `kind`.
    pub fn failing(kind: DeviceErrorKind) -> Self {
        let camera = Self::new();
        camera.set_failure(Some(kind));
        camera
    }

    pub fn set_failure(&self, kind: Option<DeviceErrorKind>) {
        *lock(&self.inner.failure) = kind;
    }

    /// Make the next stop_recording calls fail until reset.
    pub fn set_capture_failure(&self, fail: bool) {
        self.inner.fail_capture.store(fail, Ordering::SeqCst);
    }

    /// Streams acquired and not yet released.
    pub fn active_streams(&self) -> usize {
        lock(&self.inner.live).len()
    }

    pub fn is_recording(&self) -> bool {
        !lock(&self.inner.recording).is_empty()
    }

    pub fn acquisitions(&self) -> usize {
        self.inner.acquisitions.load(Ordering::SeqCst)
    }

    pub fn releases(&self) -> usize {
        self.inner.releases.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CaptureDevice for SimulatedCamera {
    async fn acquire(&self) -> AirsigResult<StreamHandle> {
        if let Some(kind) = *lock(&self.inner.failure) {
            return Err(AirsigError::device(kind, format!("simulated {kind}")));
        }

        let id = Uuid::new_v4();
        lock(&self.inner.live).insert(id);
        self.inner.acquisitions.fetch_add(1, Ordering::SeqCst);

        Ok(StreamHandle {
            id,
            label: SIMULATED_LABEL.to_string(),
        })
    }

    fn release(&self, stream: &StreamHandle) {
        lock(&self.inner.recording).remove(&stream.id);
        if lock(&self.inner.live).remove(&stream.id) {
            self.inner.releases.fetch_add(1, Ordering::SeqCst);
        }
    }

    async fn start_recording(&self, stream: &StreamHandle) -> AirsigResult<()> {
        if !lock(&self.inner.live).contains(&stream.id) {
            return Err(AirsigError::device(
                DeviceErrorKind::Other,
                "stream has been released",
            ));
        }

        if !lock(&self.inner.recording).insert(stream.id) {
            return Err(AirsigError::state("Recording already in progress"));
        }

        Ok(())
    }

    async fn stop_recording(&self, stream: &StreamHandle) -> AirsigResult<CapturePayload> {
        if !lock(&self.inner.recording).remove(&stream.id) {
            return Err(AirsigError::state("No recording in progress"));
        }

        if self.inner.fail_capture.load(Ordering::SeqCst) {
            return Err(AirsigError::device(
                DeviceErrorKind::Other,
                "recorder produced no data",
            ));
        }

        Ok(CapturePayload {
            reference: format!("blob:airsig/{}", Uuid::new_v4()),
            size_bytes: SIMULATED_CLIP_BYTES,
        })
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
