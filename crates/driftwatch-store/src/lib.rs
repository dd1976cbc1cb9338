//! # driftwatch-store — Baseline Persistence
//!
//! The storage adapter boundary between the pure hashing core and whatever
//! actually holds state between runs. Any backing store satisfying
//! [`BaselineStore`] is substitutable: the engine only ever calls `load()`
//! once at the start of a run and `save()` once at the end.
//!
//! ## Contract
//!
//! - `load()` returns an **empty snapshot** when nothing has been stored
//!   yet — absence is not an error.
//! - `save()` atomically replaces the entire stored snapshot; a concurrent
//!   reader never observes a partial write. The system runs one sync cycle
//!   at a time, so this is a documented invariant rather than one requiring
//!   distributed locking.
//! - I/O failures surface as [`StoreError`] untouched. The store never
//!   retries; retry policy belongs to the caller.

pub mod error;
pub mod json_file;
pub mod memory;
pub mod snapshot;

pub use error::{StoreError, StoreResult};
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use snapshot::{BaselineSnapshot, SNAPSHOT_FORMAT_VERSION};

/// Persist and retrieve the baseline snapshot between sync runs.
pub trait BaselineStore {
    /// Load the current snapshot, or an empty one if nothing is stored.
    fn load(&self) -> StoreResult<BaselineSnapshot>;

    /// Atomically replace the stored snapshot.
    fn save(&self, snapshot: &BaselineSnapshot) -> StoreResult<()>;
}
