//! Capture device seam and the scoped camera lease.

use std::fmt::Debug;
use std::sync::Arc;

use airsig_core::AirsigResult;
use async_trait::async_trait;
use log::debug;
use uuid::Uuid;

/// An open camera stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamHandle {
    pub id: Uuid,
    pub label: String,
}

/// Result of one start/stop recording pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturePayload {
    /// Opaque reference to the recorded clip
    pub reference: String,
    pub size_bytes: u64,
}

/// Camera / media capture provider.
///
/// Acquisition failures are reported as `AirsigError::Device` with a
/// [`airsig_core::DeviceErrorKind`].
#[async_trait]
pub trait CaptureDevice: Send + Sync + Debug {
    async fn acquire(&self) -> AirsigResult<StreamHandle>;

    /// Stop all tracks of the stream. Must be safe to call while recording.
    fn release(&self, stream: &StreamHandle);

    async fn start_recording(&self, stream: &StreamHandle) -> AirsigResult<()>;

    async fn stop_recording(&self, stream: &StreamHandle) -> AirsigResult<CapturePayload>;
}

/// Holds an acquired stream; dropping the lease releases it.
#[derive(Debug)]
pub struct CameraLease {
    device: Arc<dyn CaptureDevice>,
    stream: StreamHandle,
}

impl CameraLease {
    pub async fn acquire(device: Arc<dyn CaptureDevice>) -> AirsigResult<Self> {
        let stream = device.acquire().await?;
        debug!("Camera stream {} acquired", stream.id);
        Ok(Self { device, stream })
    }

    pub fn stream(&self) -> &StreamHandle {
        &self.stream
    }

    pub async fn start_recording(&self) -> AirsigResult<()> {
        self.device.start_recording(&self.stream).await
    }

    pub async fn stop_recording(&self) -> AirsigResult<CapturePayload> {
        self.device.stop_recording(&self.stream).await
    }
}

impl Drop for CameraLease {
    fn drop(&mut self) {
        self.device.release(&self.stream);
        debug!("Camera stream {} released", self.stream.id);
    }
}
