mod error;
mod file_store;
mod key_value_store;
mod load_result;
mod memory_store;
mod persistence;

#[cfg(any(test, feature = "testing"))]
mod failing_store;

pub use error::{StoreError, StoreResult};
pub use file_store::FileStore;
pub use key_value_store::KeyValueStore;
pub use load_result::LoadResult;
pub use memory_store::MemoryStore;
pub use persistence::{
    AUTHENTICATED_KEY, CURRENT_USER_KEY, PersistedState, Persistence, USERS_KEY,
};

#[cfg(any(test, feature = "testing"))]
pub use failing_store::FailingStore;

#[cfg(test)]
mod tests;
