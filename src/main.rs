//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `report_patch` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process;

use report_patch::initialization::init_logger_with;
use report_patch::{run_fix, Config, LogFormat, LogLevel};

/// Patch missing security headers and cookie flags into a source file,
/// driven by the findings in an HTML scan report.
#[derive(Debug, Parser)]
#[command(name = "report_patch")]
struct Cli {
    /// Path to the HTML scan report
    #[arg(default_value = "scan-results/burp-report.html")]
    report: PathBuf,

    /// Path to the source file to patch in place
    #[arg(default_value = "app1/index.js")]
    target: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let config = Config {
        report: cli.report,
        target: cli.target,
        log_level: cli.log_level,
        log_format: cli.log_format,
    };

    match run_fix(&config) {
        Ok(report) => {
            println!(
                "✅ {} finding{} in report, {} patch{} applied to {}",
                report.findings.len(),
                if report.findings.len() == 1 { "" } else { "s" },
                report.applied.len(),
                if report.applied.len() == 1 { "" } else { "es" },
                config.target.display()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("report_patch error: {:#}", anyhow::Error::from(e));
            process::exit(1);
        }
    }
}
