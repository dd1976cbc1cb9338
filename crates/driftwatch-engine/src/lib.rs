//! # driftwatch-engine — The Sync Pipeline
//!
//! One parameterized cycle: fetch entities from a [`SettingsSource`],
//! normalize and hash each one through `driftwatch-core`, diff against the
//! previous baseline from a [`driftwatch_store::BaselineStore`], persist the
//! rebuilt snapshot, and deliver a [`SyncReport`] to a [`ChangeSink`].
//!
//! Sources and sinks own all upstream and downstream I/O. The engine itself
//! is synchronous and single-threaded: one run at a time, run to
//! completion, with the store's load/save as the only suspension points.
//!
//! Diffing and downstream policy checking are independent concerns — the
//! report always carries the full diff. The ETag fast path only skips
//! recomputation of hash pairs; a reused pair compares equal by
//! construction.

pub mod options;
pub mod runner;
pub mod sink;
pub mod source;

pub use options::SyncOptions;
pub use runner::{run_sync, RunId, SyncError, SyncReport};
pub use sink::{ChangeSink, JsonWriterSink, LogSink, SinkError};
pub use source::{EntityRecord, JsonSource, SettingsSource, SourceError};
