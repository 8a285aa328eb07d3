//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `tldgen` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting and exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use tldgen::initialization::init_logger_with;
use tldgen::{run_generation, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the generation pipeline using the library
    match run_generation(config).await {
        Ok(report) => {
            println!(
                "✅ Wrote {} TLD entr{} from {} source{} in {:.1}s",
                report.token_count,
                if report.token_count == 1 { "y" } else { "ies" },
                report.source_count,
                if report.source_count == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            println!("Generated list saved in {}", report.output_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("tldgen error: {:#}", e);
            process::exit(1);
        }
    }
}
