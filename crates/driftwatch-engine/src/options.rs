//! # Sync Options
//!
//! The explicit options struct that parameterizes a sync run. One pipeline,
//! one knob set — variants of the cycle are configuration, not copies.

use driftwatch_core::KeyPolicy;

/// Configuration for one sync run.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Tracked/excluded key sets for hashing.
    pub policy: KeyPolicy,
    /// Reuse the stored hash pair when an entity's upstream revision tag is
    /// unchanged, skipping recomputation. The diff itself always runs.
    pub etag_fast_path: bool,
    /// Save the rebuilt snapshot at the end of the run. Disable for
    /// check-only runs.
    pub persist: bool,
}

impl SyncOptions {
    /// Options with the given key policy, ETag fast path on, persistence on.
    pub fn new(policy: KeyPolicy) -> Self {
        Self {
            policy,
            etag_fast_path: true,
            persist: true,
        }
    }

    /// Toggle the ETag fast path.
    pub fn with_etag_fast_path(mut self, enabled: bool) -> Self {
        self.etag_fast_path = enabled;
        self
    }

    /// Disable persistence for a check-only run.
    pub fn check_only(mut self) -> Self {
        self.persist = false;
        self
    }
}
