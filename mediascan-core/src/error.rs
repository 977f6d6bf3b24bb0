// ============================================================================
// mediascan-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error types for the validation pipeline
//
// Every failure in a run is fatal. The variants below only classify the
// failure so the caller can log a descriptive message; none of them is
// recovered from inside the library.

use crate::external::ProbeError;

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error returned by every fallible operation in mediascan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("{tool} is not installed or not available in PATH")]
    ToolUnavailable { tool: String },

    #[error(transparent)]
    Environment(#[from] EnvironmentError),

    #[error("No {} videos found in videos folder", extension.to_uppercase())]
    NoInput { dir: PathBuf, extension: String },

    #[error(transparent)]
    CorruptMedia(#[from] CorruptMediaError),

    #[error("ffprobe failed for video: {}: {source}", path.display())]
    Probe {
        path: PathBuf,
        #[source]
        source: ProbeError,
    },

    /// The tool ran cleanly but reported no video stream.
    #[error("No video stream found: {}", path.display())]
    NoVideoStream { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pipeline has already run (stage: {0})")]
    AlreadyRun(String),
}

/// A required input location or index file is missing.
#[derive(Error, Debug)]
pub enum EnvironmentError {
    #[error("Input folder does not exist: {}", .0.display())]
    MissingInputDir(PathBuf),

    #[error("Missing 'videos' folder: {}", .0.display())]
    MissingVideoDir(PathBuf),

    #[error("Missing 'metadata' folder: {}", .0.display())]
    MissingMetadataDir(PathBuf),

    #[error("No metadata CSV file found in {}", .0.display())]
    NoMetadataIndex(PathBuf),
}

/// A candidate file failed one of the size or duration thresholds.
#[derive(Error, Debug)]
pub enum CorruptMediaError {
    #[error("Video too small or corrupt: {name} ({size_mb:.2} MB, minimum {min_size_mb} MB)")]
    TooSmall {
        name: String,
        size_mb: f64,
        min_size_mb: f64,
    },

    #[error("Video duration too short: {} ({duration_sec}s, minimum {min_duration_sec}s)", path.display())]
    TooShort {
        path: PathBuf,
        duration_sec: f64,
        min_duration_sec: f64,
    },
}

/// Result type for mediascan-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
