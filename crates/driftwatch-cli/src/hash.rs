//! # Hash Subcommand
//!
//! Computes the business/full digest pair for a single settings object,
//! for spot checks and fixture generation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use driftwatch_core::{compute_hash_pair, SettingsObject};

use crate::config::WatchConfig;
use crate::OutputFormat;

/// Arguments for the `driftwatch hash` subcommand.
#[derive(Args, Debug)]
pub struct HashArgs {
    /// Path to a JSON file holding one settings object.
    #[arg(value_name = "SETTINGS_JSON")]
    pub settings: PathBuf,

    /// Path to the watch config YAML.
    #[arg(long, short)]
    pub config: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Execute the hash subcommand. Returns the process exit code.
pub fn run_hash(args: &HashArgs) -> Result<u8> {
    let config = WatchConfig::load(&args.config)?;

    let bytes = std::fs::read(&args.settings)
        .with_context(|| format!("failed to read settings file: {}", args.settings.display()))?;
    let value: serde_json::Value = serde_json::from_slice(&bytes)
        .with_context(|| format!("failed to parse settings JSON: {}", args.settings.display()))?;
    let settings = SettingsObject::from_json(&value);

    let pair = compute_hash_pair(&settings, &config.key_policy())
        .context("failed to compute hash pair")?;

    match args.format {
        OutputFormat::Text => {
            println!("business: {}", pair.business);
            println!("full:     {}", pair.full);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&pair)?);
        }
    }
    Ok(0)
}
