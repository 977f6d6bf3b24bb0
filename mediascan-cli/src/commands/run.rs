//! Implementation of a validation run.
//!
//! Turns parsed arguments into a `CoreConfig` and hands it, together with an
//! ffprobe-backed prober, to the mediascan-core pipeline.

use crate::cli::Cli;

use mediascan_core::{CoreConfig, CoreResult, FfprobeProber, Pipeline, RunSummary, ValidationThresholds};

use log::debug;
use std::io;

/// Creates the run configuration from CLI arguments.
///
/// Fails only if the root cannot be made absolute (e.g. the current
/// directory is gone).
pub fn build_config(args: &Cli) -> io::Result<CoreConfig> {
    let mut config = CoreConfig::new(&args.root)?;
    config.thresholds = ValidationThresholds {
        min_size_mb: args.min_size_mb,
        min_duration_sec: args.min_duration_sec,
    };
    config.probe_timeout = args.probe_timeout;

    debug!("Root: {}", config.paths.root().display());
    debug!(
        "Thresholds: {} MB, {}s",
        config.thresholds.min_size_mb, config.thresholds.min_duration_sec
    );
    Ok(config)
}

/// Runs the pipeline with the ffprobe executable named `ffprobe`.
pub fn run_pipeline(config: &CoreConfig, ffprobe: &str) -> CoreResult<RunSummary> {
    let prober = FfprobeProber::new(ffprobe).with_timeout(config.probe_timeout);
    Pipeline::new(config, &prober).run()
}
