//! # Sync Runner
//!
//! The single parameterized pipeline: fetch → normalize → hash → diff →
//! persist → report.
//!
//! ## Execution Model
//!
//! Single-threaded, run-to-completion: one invocation per sync cycle, no
//! overlapping runs. The store's `load()` and `save()` are the only
//! suspension points; everything between them is pure CPU work. The runner
//! is the sole writer of the snapshot during a run — a documented
//! precondition, not a lock.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use driftwatch_core::{
    compute_hash_pair, diff_in_order, Baseline, CanonicalError, ChangeRecord, Timestamp,
};
use driftwatch_store::{BaselineSnapshot, BaselineStore, StoreError};

use crate::options::SyncOptions;
use crate::sink::{ChangeSink, SinkError};
use crate::source::{SettingsSource, SourceError};

/// Unique identifier for one sync run, carried through logs and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(Uuid);

impl RunId {
    /// Generate a new random run identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The outcome of one sync run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    /// This run's identifier.
    pub run_id: RunId,
    /// When the run started.
    pub started_at: Timestamp,
    /// Distinct entities processed.
    pub entities_seen: usize,
    /// Entities whose hash pair was reused via the ETag fast path.
    pub etag_hits: usize,
    /// Entities that changed, in fetch order.
    pub changes: Vec<ChangeRecord>,
}

impl SyncReport {
    /// Whether any entity changed in either projection.
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }
}

/// Errors raised by a sync run, tagged by the collaborator that failed.
#[derive(Error, Debug)]
pub enum SyncError {
    /// The source failed to produce the entity list.
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// The store failed to load or save the snapshot.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The sink failed to deliver the report.
    #[error("sink error: {0}")]
    Sink(#[from] SinkError),

    /// Hashing failed. Indicates a bug, not an operational condition.
    #[error("hashing error: {0}")]
    Canonical(#[from] CanonicalError),
}

/// Run one sync cycle.
///
/// Loads the previous snapshot, fetches the current entity list, computes
/// (or reuses) each entity's hash pair, diffs against the previous baseline
/// in fetch order, optionally persists the wholly rebuilt snapshot, and
/// delivers the report to the sink.
///
/// Duplicate ids in the fetch keep their first record; later occurrences
/// are skipped with a warning. Entities that disappeared upstream drop out
/// of the persisted snapshot without producing a change record.
pub fn run_sync(
    source: &mut dyn SettingsSource,
    store: &dyn BaselineStore,
    sink: &mut dyn ChangeSink,
    options: &SyncOptions,
) -> Result<SyncReport, SyncError> {
    let run_id = RunId::new();
    let started_at = Timestamp::now();

    let previous = store.load()?;
    let records = source.fetch()?;
    tracing::info!(
        run_id = %run_id,
        fetched = records.len(),
        known = previous.baseline.len(),
        "sync run started"
    );

    let mut baseline = Baseline::new();
    let mut etags: BTreeMap<_, _> = BTreeMap::new();
    let mut order = Vec::with_capacity(records.len());
    let mut etag_hits = 0usize;

    for record in &records {
        if baseline.contains(&record.id) {
            tracing::warn!(entity = %record.id, "duplicate entity id in fetch, keeping first");
            continue;
        }

        let reused = if options.etag_fast_path {
            match (&record.etag, previous.etag(&record.id)) {
                (Some(etag), Some(cached)) if etag.as_str() == cached => {
                    previous.baseline.get(&record.id).cloned()
                }
                _ => None,
            }
        } else {
            None
        };

        let pair = match reused {
            Some(pair) => {
                etag_hits += 1;
                tracing::debug!(entity = %record.id, "etag unchanged, reusing stored hash pair");
                pair
            }
            None => compute_hash_pair(&record.settings, &options.policy)?,
        };

        baseline.insert(record.id.clone(), pair);
        if let Some(etag) = &record.etag {
            etags.insert(record.id.clone(), etag.clone());
        }
        order.push(record.id.clone());
    }

    let changes = diff_in_order(&previous.baseline, &baseline, order.iter());
    let entities_seen = order.len();

    if options.persist {
        store.save(&BaselineSnapshot::new(baseline, etags))?;
    }

    let report = SyncReport {
        run_id,
        started_at,
        entities_seen,
        etag_hits,
        changes,
    };
    sink.report(&report)?;

    tracing::info!(
        run_id = %report.run_id,
        entities = report.entities_seen,
        changes = report.changes.len(),
        etag_hits = report.etag_hits,
        persisted = options.persist,
        "sync run complete"
    );
    Ok(report)
}
