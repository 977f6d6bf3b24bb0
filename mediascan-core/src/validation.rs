//! Validation of every discovered file, in order.

use crate::analysis::{VideoMetadata, analyze_video};
use crate::config::ValidationThresholds;
use crate::error::CoreResult;
use crate::external::Prober;

use log::info;
use std::path::PathBuf;

/// Metadata of every accepted file, in discovery order.
///
/// There is no representation of a rejected file: one rejection fails the
/// whole run.
pub type RunResult = Vec<VideoMetadata>;

/// Analyzes `paths` one after another.
///
/// Stops at the first failure; the files after it are never probed and the
/// metadata gathered so far is dropped.
pub fn validate_all<P: Prober>(
    paths: &[PathBuf],
    prober: &P,
    thresholds: &ValidationThresholds,
) -> CoreResult<RunResult> {
    let mut results = Vec::with_capacity(paths.len());

    for path in paths {
        let metadata = analyze_video(path, prober, thresholds)?;
        info!("Processed video: {}", metadata.name());
        results.push(metadata);
    }

    Ok(results)
}
