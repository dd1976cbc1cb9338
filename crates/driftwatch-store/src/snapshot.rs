//! # Snapshot Envelope
//!
//! The persisted unit of state: the baseline plus the per-entity ETag cache
//! and enough metadata to version the format and date the run that wrote it.
//!
//! The envelope is replaced wholesale on every save. Entities that
//! disappeared upstream simply stop appearing in the next snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use driftwatch_core::{Baseline, EntityId, Timestamp};

/// Format version written by this build.
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// Everything a run persists between sync cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineSnapshot {
    /// Snapshot format version, for forward migration.
    pub format_version: u32,
    /// When the snapshot was written.
    pub generated_at: Timestamp,
    /// Entity id → hash pair comparison state.
    pub baseline: Baseline,
    /// Entity id → upstream revision tag, for the cheap pre-check that
    /// skips re-hashing when the upstream object is byte-identical.
    #[serde(default)]
    pub etags: BTreeMap<EntityId, String>,
}

impl BaselineSnapshot {
    /// Build a snapshot dated now from a baseline and its ETag cache.
    pub fn new(baseline: Baseline, etags: BTreeMap<EntityId, String>) -> Self {
        Self {
            format_version: SNAPSHOT_FORMAT_VERSION,
            generated_at: Timestamp::now(),
            baseline,
            etags,
        }
    }

    /// The snapshot a store hands out when nothing has been persisted yet.
    pub fn empty() -> Self {
        Self::new(Baseline::new(), BTreeMap::new())
    }

    /// Look up the cached ETag for an entity.
    pub fn etag(&self, id: &EntityId) -> Option<&str> {
        self.etags.get(id).map(String::as_str)
    }
}
