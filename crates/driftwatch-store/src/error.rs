//! # Storage Errors
//!
//! Failures at the storage adapter boundary. These surface to the caller
//! untouched — the store never retries on its own, because backing stores
//! differ wildly in retry semantics.

use thiserror::Error;

/// Result alias for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by a [`crate::BaselineStore`] implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O failure reading or writing the backing store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored snapshot exists but cannot be decoded.
    #[error("corrupt baseline snapshot: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// The stored snapshot uses a format version this build does not read.
    #[error("unsupported snapshot format version {0}")]
    UnsupportedVersion(u32),

    /// Backend-specific failure (quota exhaustion, poisoned lock, ...).
    #[error("storage backend error: {0}")]
    Backend(String),
}
