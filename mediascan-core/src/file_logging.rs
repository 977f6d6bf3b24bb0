//! File logging for a run.
//!
//! The library only logs through the `log` facade; the binary decides where
//! records go by calling [`setup_file_logging`] once at startup.

use anyhow::Result;
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use std::path::Path;

/// Line layout of the run log: `2024-06-01 12:30:45 - INFO - message`.
pub const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} - {l} - {m}{n}";

/// Installs an append-only file logger writing to `log_file`.
///
/// The parent directory is created when missing. Can only succeed once per
/// process since it installs the global logger.
pub fn setup_file_logging(log_file: &Path, log_level: LevelFilter) -> Result<log4rs::Handle> {
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file_appender = FileAppender::builder()
        .append(true)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(log_file)?;

    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .build(Root::builder().appender("file").build(log_level))?;

    let handle = log4rs::init_config(config)?;

    Ok(handle)
}
