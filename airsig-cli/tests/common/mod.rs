#![allow(dead_code)]

//! Test infrastructure for running CLI commands against a file store

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use airsig_cli::{CliResult, Commands, execute};
use airsig_core::{FixedClock, RecordingNotifier, SequenceRandom};
use airsig_session::{AppContext, Capabilities, ContextSettings, SimulatedCamera};
use airsig_store::FileStore;
use serde_json::Value;

/// One CLI invocation: open the store, execute, shut down.
pub async fn run_once(state_path: &Path, command: Commands) -> CliResult<Value> {
    let store = FileStore::open(state_path)?;
    let capabilities = Capabilities {
        clock: Arc::new(FixedClock::default()),
        random: Arc::new(SequenceRandom::constant(0.5)),
        notifier: Arc::new(RecordingNotifier::new()),
        camera: Arc::new(SimulatedCamera::new()),
    };
    let settings = ContextSettings {
        attempt_delay: Duration::ZERO,
        ..ContextSettings::default()
    };

    let mut context = AppContext::initialize(Box::new(store), capabilities, settings);
    let result = execute(&mut context, command).await;
    context.shutdown();
    result
}

pub fn register(username: &str) -> Commands {
    Commands::Register {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password: "password123".to_string(),
        confirm_password: "password123".to_string(),
    }
}
