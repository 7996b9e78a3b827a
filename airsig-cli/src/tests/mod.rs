
use std::env;
use std::sync::Arc;
use std::time::Duration;

use airsig_core::{FixedClock, RecordingNotifier, SequenceRandom};
use airsig_session::{AppContext, Capabilities, ContextSettings, SimulatedCamera};
use airsig_store::MemoryStore;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Context over a fresh memory store with deterministic capabilities.
pub(crate) fn test_context() -> (AppContext, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::new());
    let capabilities = Capabilities {
        clock: Arc::new(FixedClock::default()),
        random: Arc::new(SequenceRandom::constant(0.5)),
        notifier: notifier.clone(),
        camera: Arc::new(SimulatedCamera::new()),
    };
    let settings = ContextSettings {
        attempt_delay: Duration::ZERO,
        ..ContextSettings::default()
    };

    let context = AppContext::initialize(Box::new(MemoryStore::new()), capabilities, settings);
    (context, notifier)
}
