//! # Scan Subcommand
//!
//! Runs the full sync cycle: a JSON entity dump in, the baseline snapshot
//! file loaded and (unless `--check`) replaced, drift printed out.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use driftwatch_engine::{run_sync, ChangeSink, JsonSource, JsonWriterSink, LogSink, SyncOptions};
use driftwatch_store::JsonFileStore;

use crate::config::WatchConfig;
use crate::OutputFormat;

/// Arguments for the `driftwatch scan` subcommand.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Path to a JSON file holding the entity array.
    #[arg(value_name = "ENTITIES_JSON")]
    pub entities: PathBuf,

    /// Path to the baseline snapshot file.
    #[arg(long, short)]
    pub baseline: PathBuf,

    /// Path to the watch config YAML.
    #[arg(long, short)]
    pub config: PathBuf,

    /// Detect drift without updating the baseline; exit 1 if any is found.
    #[arg(long)]
    pub check: bool,

    /// Rehash every entity even when its revision tag is unchanged.
    #[arg(long)]
    pub no_etag_fast_path: bool,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Execute the scan subcommand. Returns the process exit code.
pub fn run_scan(args: &ScanArgs) -> Result<u8> {
    let config = WatchConfig::load(&args.config)?;

    let bytes = std::fs::read(&args.entities)
        .with_context(|| format!("failed to read entities file: {}", args.entities.display()))?;
    let mut source = JsonSource::from_slice(&bytes)
        .with_context(|| format!("failed to parse entities JSON: {}", args.entities.display()))?;

    let store = JsonFileStore::new(&args.baseline);

    let mut options = SyncOptions::new(config.key_policy())
        .with_etag_fast_path(!args.no_etag_fast_path);
    if args.check {
        options = options.check_only();
    }

    let mut sink: Box<dyn ChangeSink> = match args.format {
        OutputFormat::Text => Box::new(LogSink::new()),
        OutputFormat::Json => Box::new(JsonWriterSink::new(std::io::stdout())),
    };

    let report = run_sync(&mut source, &store, sink.as_mut(), &options)?;

    if args.format == OutputFormat::Text {
        for change in &report.changes {
            println!(
                "{:<9} {}  business={} full={}",
                change.kind, change.entity_id, change.business_changed, change.full_changed
            );
        }
        println!(
            "{} entities scanned, {} changed, {} etag hits",
            report.entities_seen,
            report.changes.len(),
            report.etag_hits
        );
    }

    if args.check {
        if report.has_changes() {
            println!("FAIL: drift detected against {}", args.baseline.display());
            return Ok(1);
        }
        println!("OK: no drift against {}", args.baseline.display());
    }
    Ok(0)
}
