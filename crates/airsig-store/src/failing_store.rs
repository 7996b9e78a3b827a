use crate::{KeyValueStore, MemoryStore, StoreError, StoreResult};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Wraps a [`MemoryStore`] and fails reads and/or writes on demand.
#[derive(Debug, Clone, Default)]
pub struct FailingStore {
    inner: MemoryStore,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
}

impl FailingStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable(format!("read of '{key}' refused")));
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable(format!("write of '{key}' refused")));
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable(format!("removal of '{key}' refused")));
        }
        self.inner.remove(key)
    }
}
