//! # In-Memory Store
//!
//! A `BaselineStore` backed by process memory. Used in tests and by
//! embedders that manage persistence themselves.

use std::sync::Mutex;

use crate::error::{StoreError, StoreResult};
use crate::snapshot::BaselineSnapshot;
use crate::BaselineStore;

/// Mutex-guarded in-memory snapshot storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Option<BaselineSnapshot>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BaselineStore for MemoryStore {
    fn load(&self) -> StoreResult<BaselineSnapshot> {
        let guard = self
            .inner
            .lock()
            .map_err(|_| StoreError::Backend("baseline store mutex poisoned".to_string()))?;
        Ok(guard.clone().unwrap_or_else(BaselineSnapshot::empty))
    }

    fn save(&self, snapshot: &BaselineSnapshot) -> StoreResult<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| StoreError::Backend("baseline store mutex poisoned".to_string()))?;
        *guard = Some(snapshot.clone());
        Ok(())
    }
}
