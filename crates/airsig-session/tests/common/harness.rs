use std::sync::Arc;
use std::time::Duration;

use airsig_core::{FixedClock, RecordingNotifier, SequenceRandom};
use airsig_session::{AppContext, Capabilities, ContextSettings, SimulatedCamera};
use airsig_store::{KeyValueStore, MemoryStore};

pub const PASSWORD: &str = "password123";
pub const ATTEMPT_DELAY: Duration = Duration::from_millis(3000);

/// Shared capabilities for building contexts over one store.
pub struct Harness {
    pub store: MemoryStore,
    pub camera: SimulatedCamera,
    pub clock: Arc<FixedClock>,
    pub notifier: Arc<RecordingNotifier>,
    pub random: Arc<SequenceRandom>,
}

impl Harness {
    /// Draws of 0.5 make every gesture attempt succeed at 90% confidence.
    pub fn new() -> Self {
        Self::with_draws(vec![0.5])
    }

    pub fn with_draws(draws: Vec<f64>) -> Self {
        Self {
            store: MemoryStore::new(),
            camera: SimulatedCamera::new(),
            clock: Arc::new(FixedClock::default()),
            notifier: Arc::new(RecordingNotifier::new()),
            random: Arc::new(SequenceRandom::new(draws)),
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            clock: self.clock.clone(),
            random: self.random.clone(),
            notifier: self.notifier.clone(),
            camera: Arc::new(self.camera.clone()),
        }
    }

    pub fn settings(&self) -> ContextSettings {
        ContextSettings {
            attempt_delay: ATTEMPT_DELAY,
            ..ContextSettings::default()
        }
    }

    /// A context over this harness's memory store.
    pub fn context(&self) -> AppContext {
        self.context_with_store(Box::new(self.store.clone()))
    }

    pub fn context_with_store(&self, store: Box<dyn KeyValueStore>) -> AppContext {
        AppContext::initialize(store, self.capabilities(), self.settings())
    }
}

pub fn register(context: &mut AppContext, username: &str) {
    context
        .register(
            username,
            &format!("{username}@example.com"),
            PASSWORD,
            PASSWORD,
        )
        .unwrap();
}

/// Record and save one signature on the open enrollment page.
pub async fn record_and_save(context: &mut AppContext, harness: &Harness) {
    context.start_recording().await.unwrap();
    harness.clock.advance(chrono::Duration::seconds(2));
    context.stop_recording().await.unwrap();
    context.save_recording().unwrap();
}

/// Register `username` and complete enrollment.
pub async fn enrolled(context: &mut AppContext, harness: &Harness, username: &str) {
    register(context, username);
    context.navigate(airsig_core::Page::Enrollment);
    context.start_camera().await.unwrap();
    for _ in 0..airsig_core::REQUIRED_SIGNATURES {
        record_and_save(context, harness).await;
    }
}
