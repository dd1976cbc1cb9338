//! # Error Hierarchy
//!
//! Structured error types for the driftwatch core, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Digest computation is deterministic CPU work over well-formed input, so
//! a [`CanonicalError`] surfacing at runtime indicates a projection or
//! serialization bug rather than an operational condition callers are
//! expected to handle or retry.

use thiserror::Error;

/// Top-level error type for the driftwatch core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Canonicalization failure during digest computation.
    #[error("canonicalization error: {0}")]
    Canonical(#[from] CanonicalError),

    /// Domain primitive validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalError {
    /// JSON serialization failed during canonicalization.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Validation errors for domain primitive newtypes.
///
/// Each newtype enforces its format constraints at construction time.
/// These errors carry the invalid input so that operators can diagnose
/// misconfiguration without guesswork.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Entity identifier is empty or whitespace-only.
    #[error("invalid entity id: must be non-empty")]
    EmptyEntityId,

    /// Digest string is not 64 lowercase hex characters.
    #[error("invalid digest: \"{0}\" (expected 64 hex characters)")]
    InvalidDigest(String),

    /// Timestamp string is not valid UTC ISO 8601.
    #[error("invalid timestamp: \"{value}\" ({reason})")]
    InvalidTimestamp {
        /// The string that failed to parse.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}
