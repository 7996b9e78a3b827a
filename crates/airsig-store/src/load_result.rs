use crate::PersistedState;

/// Result of loading persisted state - never fails, distinguishes a clean
/// load from a reset.
#[derive(Debug, Default)]
pub struct LoadResult {
    pub state: PersistedState,
    /// Present if stored data could not be read and defaults were used
    pub load_error: Option<String>,
}
