//! Main entry point for the ssid-gbk CLI tool
//!
//! Converts GBK-encoded SSIDs from wireless scan output to UTF-8 and maps
//! UTF-8 names back to their original bytes.

use anyhow::Context;
use clap::Parser;
use log::info;

use ssid_gbk::cli::Cli;
use ssid_gbk::config::AppConfig;
use ssid_gbk::utils::path::expand_tilde;

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    info!("Starting ssid-gbk v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let loaded = match cli.config {
        Some(ref path) => AppConfig::load_from(&expand_tilde(path)),
        None => AppConfig::load(),
    };
    let config = loaded.unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {}, using defaults", e);
        AppConfig::default()
    });

    cli.run(config).context("ssid-gbk failed")?;

    Ok(())
}
