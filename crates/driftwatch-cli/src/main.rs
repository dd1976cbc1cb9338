//! # driftwatch CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Settings drift detection via dual content hashing.
///
/// Computes business/full digests for entity settings, scans entity dumps
/// against a persisted baseline, and diffs archived snapshots.
#[derive(Parser, Debug)]
#[command(name = "driftwatch", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Compute the business/full digest pair of one settings object.
    Hash(driftwatch_cli::hash::HashArgs),
    /// Run a sync cycle over a JSON entity dump.
    Scan(driftwatch_cli::scan::ScanArgs),
    /// Diff two persisted baseline snapshots.
    Diff(driftwatch_cli::diff::DiffArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Hash(args) => driftwatch_cli::hash::run_hash(&args)?,
        Commands::Scan(args) => driftwatch_cli::scan::run_scan(&args)?,
        Commands::Diff(args) => driftwatch_cli::diff::run_diff(&args)?,
    };

    if code != 0 {
        std::process::exit(i32::from(code));
    }
    Ok(())
}
