use crate::CaptureDevice;

use std::sync::Arc;

use airsig_core::{Clock, Notifier, RandomSource, SystemClock, ThreadRandom};

/// External effects an [`crate::AppContext`] depends on.
#[derive(Debug, Clone)]
pub struct Capabilities {
    pub clock: Arc<dyn Clock>,
    pub random: Arc<dyn RandomSource>,
    pub notifier: Arc<dyn Notifier>,
    pub camera: Arc<dyn CaptureDevice>,
}

impl Capabilities {
    /// Wall clock and thread-local randomness.
    pub fn system(camera: Arc<dyn CaptureDevice>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            clock: Arc::new(SystemClock),
            random: Arc::new(ThreadRandom),
            notifier,
            camera,
        }
    }
}
