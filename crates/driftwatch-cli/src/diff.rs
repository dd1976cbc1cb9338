//! # Diff Subcommand
//!
//! Compares two persisted baseline snapshots without touching any source.
//! Useful for auditing what changed between two archived runs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use driftwatch_store::{BaselineStore, JsonFileStore};

use crate::OutputFormat;

/// Arguments for the `driftwatch diff` subcommand.
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Path to the older snapshot file.
    #[arg(value_name = "OLD_SNAPSHOT")]
    pub old: PathBuf,

    /// Path to the newer snapshot file.
    #[arg(value_name = "NEW_SNAPSHOT")]
    pub new: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Execute the diff subcommand. Returns the process exit code.
///
/// A missing snapshot file reads as empty, so diffing against a
/// not-yet-written baseline marks every entity as new.
pub fn run_diff(args: &DiffArgs) -> Result<u8> {
    let old = JsonFileStore::new(&args.old)
        .load()
        .with_context(|| format!("failed to load snapshot: {}", args.old.display()))?;
    let new = JsonFileStore::new(&args.new)
        .load()
        .with_context(|| format!("failed to load snapshot: {}", args.new.display()))?;

    let changes = driftwatch_core::diff(&old.baseline, &new.baseline);

    match args.format {
        OutputFormat::Text => {
            for change in &changes {
                println!(
                    "{:<9} {}  business={} full={}",
                    change.kind, change.entity_id, change.business_changed, change.full_changed
                );
            }
            println!("{} entities changed", changes.len());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&changes)?);
        }
    }
    Ok(0)
}
