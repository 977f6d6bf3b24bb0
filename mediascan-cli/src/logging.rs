// ============================================================================
// mediascan-cli/src/logging.rs
// ============================================================================
//
// LOGGING: Run log installation
//
// All diagnostics go through the `log` facade. The only sink is the
// append-only `<root>/logs/automation.log` installed here; user-facing
// messages are printed separately by `output`.

use anyhow::{Context, Result};
use log::LevelFilter;
use mediascan_core::config::CoreConfig;
use mediascan_core::file_logging::setup_file_logging;

/// Level for the run log: `Info`, or `Debug` with `--verbose`.
pub fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs the run log for `config`. Call once, before the pipeline starts.
pub fn init_run_log(config: &CoreConfig, verbose: bool) -> Result<()> {
    let log_file = config.paths.log_file();
    setup_file_logging(&log_file, log_level(verbose))
        .with_context(|| format!("Failed to open log file '{}'", log_file.display()))?;

    log::debug!("Logging to {}", log_file.display());
    Ok(())
}
