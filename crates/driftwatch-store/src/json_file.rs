//! # JSON File Store
//!
//! A `BaselineStore` backed by a single canonical-JSON file.
//!
//! ## Atomicity Invariant
//!
//! `save()` writes the snapshot to a sibling temporary file and renames it
//! over the target. A reader can observe the old snapshot or the new one,
//! never a partial write.

use std::path::{Path, PathBuf};

use driftwatch_core::CanonicalBytes;

use crate::error::{StoreError, StoreResult};
use crate::snapshot::{BaselineSnapshot, SNAPSHOT_FORMAT_VERSION};
use crate::BaselineStore;

/// Snapshot storage at a filesystem path, written as canonical JSON with a
/// trailing newline.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the given snapshot path. The file need not exist
    /// yet; its parent directory must.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut os = self.path.as_os_str().to_os_string();
        os.push(".tmp");
        PathBuf::from(os)
    }
}

impl BaselineStore for JsonFileStore {
    fn load(&self) -> StoreResult<BaselineSnapshot> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no snapshot on disk, starting empty");
            return Ok(BaselineSnapshot::empty());
        }

        let bytes = std::fs::read(&self.path)?;
        let snapshot: BaselineSnapshot = serde_json::from_slice(&bytes)?;
        if snapshot.format_version > SNAPSHOT_FORMAT_VERSION {
            return Err(StoreError::UnsupportedVersion(snapshot.format_version));
        }
        tracing::debug!(
            path = %self.path.display(),
            entities = snapshot.baseline.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    fn save(&self, snapshot: &BaselineSnapshot) -> StoreResult<()> {
        let canonical = CanonicalBytes::new(snapshot)
            .map_err(|e| StoreError::Backend(format!("snapshot canonicalization failed: {e}")))?;
        let output = [canonical.as_bytes(), b"\n"].concat();

        let tmp = self.tmp_path();
        std::fs::write(&tmp, &output)?;
        std::fs::rename(&tmp, &self.path)?;
        tracing::debug!(
            path = %self.path.display(),
            entities = snapshot.baseline.len(),
            "wrote snapshot"
        );
        Ok(())
    }
}
