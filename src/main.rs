//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use seo_audit::initialization::init_logger_with;
use seo_audit::{run_audit, Config};

fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the analysis using the library
    match run_audit(config) {
        Ok(report) => {
            println!(
                "✅ Analyzed {} post{} (average score {:.1}/100, {} issue{})",
                report.posts_analyzed,
                if report.posts_analyzed == 1 { "" } else { "s" },
                report.average_score,
                report.total_issues,
                if report.total_issues == 1 { "" } else { "s" },
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("seo_audit error: {:#}", e);
            process::exit(1);
        }
    }
}
