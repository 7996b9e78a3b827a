use crate::StoreResult;

use std::fmt::Debug;

/// Durable string key-value storage.
pub trait KeyValueStore: Send + Debug {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}
