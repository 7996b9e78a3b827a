use crate::error::Result as CliErrorResult;

use airsig_config::{Config, StorageBackend};
use airsig_store::{FileStore, KeyValueStore, MemoryStore};
use log::{info, warn};

/// Open the store selected by `[storage]`.
pub fn open_store(config: &Config) -> CliErrorResult<Box<dyn KeyValueStore>> {
    match (config.storage.backend, config.storage_path()?) {
        (StorageBackend::File, Some(path)) => {
            let store = FileStore::open(path)?;
            if let Some(backup) = store.recovered_from() {
                warn!("Saved state was corrupted and moved to {}", backup.display());
            }
            info!("Using file store at {}", store.path().display());
            Ok(Box::new(store))
        }
        _ => {
            info!("Using in-memory store (state is discarded on exit)");
            Ok(Box::new(MemoryStore::new()))
        }
    }
}
