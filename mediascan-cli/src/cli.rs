// mediascan-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::Parser;
use mediascan_core::config::{DEFAULT_MIN_DURATION_SEC, DEFAULT_MIN_SIZE_MB};
use mediascan_core::external::ffprobe_executor::DEFAULT_FFPROBE;
use std::path::PathBuf;
use std::time::Duration;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "mediascan: batch video validation",
    long_about = "Validates every .mp4 in <ROOT>/input/videos against minimum size and \
                  duration thresholds using ffprobe, then writes a summary report to \
                  <ROOT>/output. The first invalid file stops the run."
)]
pub struct Cli {
    /// Base directory containing input/, output/ and logs/
    #[arg(short = 'r', long = "root", value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    // --- Thresholds ---
    /// Minimum file size in MiB
    #[arg(long, value_name = "MB", default_value_t = DEFAULT_MIN_SIZE_MB, value_parser = parse_threshold)]
    pub min_size_mb: f64,

    /// Minimum video stream duration in seconds
    #[arg(long = "min-duration", value_name = "SECONDS", default_value_t = DEFAULT_MIN_DURATION_SEC, value_parser = parse_threshold)]
    pub min_duration_sec: f64,

    // --- Probe Settings ---
    /// ffprobe executable (name resolved through PATH, or a full path)
    #[arg(long, value_name = "PATH", default_value = DEFAULT_FFPROBE)]
    pub ffprobe: String,

    /// Kill any single ffprobe call that runs longer than this (no limit by default)
    #[arg(long, value_name = "SECONDS", value_parser = parse_timeout)]
    pub probe_timeout: Option<Duration>,

    /// Write debug-level records to the run log
    #[arg(short, long)]
    pub verbose: bool,
}

/// Accepts finite, non-negative numbers.
fn parse_threshold(value: &str) -> Result<f64, String> {
    let parsed: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;

    if !parsed.is_finite() || parsed < 0.0 {
        return Err(format!("'{value}' must be a finite, non-negative number"));
    }
    Ok(parsed)
}

/// Accepts a positive number of seconds.
fn parse_timeout(value: &str) -> Result<Duration, String> {
    let secs = parse_threshold(value)?;
    if secs == 0.0 {
        return Err("timeout must be greater than zero".to_string());
    }
    Duration::try_from_secs_f64(secs).map_err(|e| format!("'{value}' is out of range: {e}"))
}
