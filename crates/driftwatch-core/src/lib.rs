//! # driftwatch-core — Foundational Types for Settings Drift Detection
//!
//! This crate is the bedrock of driftwatch. It defines the pure algorithm:
//! a flat settings model, canonical serialization, SHA-256 content digests,
//! the dual business/full projections, and baseline diffing. Every other
//! crate in the workspace depends on `driftwatch-core`; it depends on
//! nothing internal and performs no I/O.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `EntityId`, `SettingsDigest`,
//!    `Timestamp` — all newtypes with validated constructors. No bare strings
//!    for identifiers.
//!
//! 2. **`CanonicalBytes` newtype.** ALL digest computation flows through
//!    `CanonicalBytes::new()`. No raw `serde_json::to_vec()` for digests.
//!    Two settings objects with equal key/value pairs hash identically no
//!    matter the insertion order of their source maps.
//!
//! 3. **Two projections, one hasher.** The business projection sees only the
//!    tracked policy keys; the full projection sees everything except the
//!    excluded volatile fields. Both feed the same canonicalize-then-digest
//!    path.
//!
//! 4. **Diffing is pure.** `diff()` compares two baselines and reports which
//!    entities changed in which projection. It never touches storage.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `driftwatch-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`, and implement
//!   `Serialize`/`Deserialize` where they cross a persistence boundary.

pub mod baseline;
pub mod canonical;
pub mod diff;
pub mod digest;
pub mod error;
pub mod hashpair;
pub mod projection;
pub mod settings;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use baseline::Baseline;
pub use canonical::CanonicalBytes;
pub use diff::{diff, diff_in_order, ChangeKind, ChangeRecord};
pub use digest::{sha256_digest, SettingsDigest};
pub use error::{CanonicalError, CoreError, ValidationError};
pub use hashpair::{compute_hash_pair, HashPair};
pub use projection::{project_business, project_full, KeyPolicy, ProjectedValue, Projection};
pub use settings::{EntityId, SettingsObject, SettingsValue};
pub use temporal::Timestamp;
