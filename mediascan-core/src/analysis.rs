// ============================================================================
// mediascan-core/src/analysis.rs
// ============================================================================
//
// ANALYSIS: Per-file size/duration validation and metadata extraction
//
// `analyze_video` is the probe adapter of the pipeline. It applies the size
// threshold from filesystem metadata, probes the first video stream through
// a `Prober`, applies the duration threshold and returns a normalized
// `VideoMetadata`. Any failure is returned immediately; nothing is retried.

use crate::config::ValidationThresholds;
use crate::error::{CoreError, CoreResult, CorruptMediaError};
use crate::external::Prober;
use crate::util::{bytes_to_mb, round2};

use serde::Serialize;
use std::path::Path;

/// Container-level metadata of one accepted video.
///
/// Sizes are in MiB and durations in seconds, both rounded to two decimal
/// places. Fields are read-only once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoMetadata {
    name: String,
    size_mb: f64,
    duration_sec: f64,
    resolution: String,
}

impl VideoMetadata {
    /// Builds a value, rounding `size_mb` and `duration_sec` to two decimals.
    pub fn new(name: impl Into<String>, size_mb: f64, duration_sec: f64, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            size_mb: round2(size_mb),
            duration_sec: round2(duration_sec),
            resolution: format!("{width}x{height}"),
        }
    }

    /// File basename.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size_mb(&self) -> f64 {
        self.size_mb
    }

    pub fn duration_sec(&self) -> f64 {
        self.duration_sec
    }

    /// `"<width>x<height>"` as reported by the prober.
    pub fn resolution(&self) -> &str {
        &self.resolution
    }
}

/// Validates one video and extracts its metadata.
///
/// The size check runs first and does not invoke the prober; the duration
/// check runs on the first reported stream, with absent attributes treated
/// as zero.
pub fn analyze_video<P: Prober>(
    path: &Path,
    prober: &P,
    thresholds: &ValidationThresholds,
) -> CoreResult<VideoMetadata> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let size_mb = bytes_to_mb(std::fs::metadata(path)?.len());
    if size_mb < thresholds.min_size_mb {
        return Err(CorruptMediaError::TooSmall {
            name,
            size_mb,
            min_size_mb: thresholds.min_size_mb,
        }
        .into());
    }

    let output = prober.probe(path).map_err(|source| CoreError::Probe {
        path: path.to_path_buf(),
        source,
    })?;
    let stream = output
        .first_stream()
        .ok_or_else(|| CoreError::NoVideoStream {
            path: path.to_path_buf(),
        })?;

    let duration_sec = stream.duration.unwrap_or(0.0);
    let width = stream.width.unwrap_or(0);
    let height = stream.height.unwrap_or(0);

    if duration_sec < thresholds.min_duration_sec {
        return Err(CorruptMediaError::TooShort {
            path: path.to_path_buf(),
            duration_sec,
            min_duration_sec: thresholds.min_duration_sec,
        }
        .into());
    }

    log::debug!(
        "{}: {:.2} MB, {:.2}s, {}x{}",
        name,
        size_mb,
        duration_sec,
        width,
        height
    );

    Ok(VideoMetadata::new(name, size_mb, duration_sec, width, height))
}
