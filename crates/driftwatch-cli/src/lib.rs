//! # driftwatch-cli — Command-Line Interface
//!
//! Provides the `driftwatch` command for operating drift detection from
//! files: entity dumps in, baseline snapshots and change reports out.
//!
//! ## Subcommands
//!
//! - `driftwatch hash` — Business/full digest computation for one settings
//!   object.
//! - `driftwatch scan` — Full sync cycle over a JSON entity dump against a
//!   baseline snapshot file.
//! - `driftwatch diff` — Diff two persisted baseline snapshots.
//!
//! ## Exit Codes
//!
//! 0 on success, 1 when `scan --check` detects drift, 2 on operational
//! error (the process-level default for an `Err` return).

pub mod config;
pub mod diff;
pub mod hash;
pub mod scan;

/// How a subcommand renders its result on stdout.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines.
    Text,
    /// Pretty-printed JSON.
    Json,
}
