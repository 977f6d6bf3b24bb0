// ============================================================================
// mediascan-core/src/config.rs
// ============================================================================
//
// CONFIGURATION: Run configuration structures and constants
//
// A `CoreConfig` is built once at startup (by mediascan-cli or a test) and
// passed by reference into every component of the pipeline. Nothing in the
// library mutates it afterwards.

// ---- Standard library imports ----
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// DEFAULT CONSTANTS
// ============================================================================

/// Files below this size (in MiB) are rejected before probing.
pub const DEFAULT_MIN_SIZE_MB: f64 = 1.0;

/// Video streams shorter than this (in seconds) are rejected after probing.
pub const DEFAULT_MIN_DURATION_SEC: f64 = 1.0;

/// Container extension accepted during discovery (case-insensitive).
pub const DEFAULT_VIDEO_EXTENSION: &str = "mp4";

/// Extensions recognized as metadata index files (case-insensitive).
pub const DEFAULT_METADATA_EXTENSIONS: &[&str] = &["csv"];

/// Name of the append-only run log inside the logs directory.
pub const LOG_FILE_NAME: &str = "automation.log";

// ============================================================================
// THRESHOLDS
// ============================================================================

/// Minimum size and duration a video must reach to be accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationThresholds {
    pub min_size_mb: f64,
    pub min_duration_sec: f64,
}

impl Default for ValidationThresholds {
    fn default() -> Self {
        Self {
            min_size_mb: DEFAULT_MIN_SIZE_MB,
            min_duration_sec: DEFAULT_MIN_DURATION_SEC,
        }
    }
}

// ============================================================================
// DIRECTORY LAYOUT
// ============================================================================

/// Directory layout of a run, derived once from a base directory.
///
/// ```text
/// <root>/input/videos     candidate video files
/// <root>/input/metadata   metadata index files (at least one required)
/// <root>/output           summary reports
/// <root>/logs             automation.log
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryPaths {
    root: PathBuf,
    input_dir: PathBuf,
    video_dir: PathBuf,
    metadata_dir: PathBuf,
    output_dir: PathBuf,
    log_dir: PathBuf,
}

impl DiscoveryPaths {
    /// Derives the layout from `root`, made absolute against the current
    /// working directory when it is relative.
    pub fn from_root(root: impl AsRef<Path>) -> io::Result<Self> {
        let root = std::path::absolute(root.as_ref())?;
        let input_dir = root.join("input");

        Ok(Self {
            video_dir: input_dir.join("videos"),
            metadata_dir: input_dir.join("metadata"),
            output_dir: root.join("output"),
            log_dir: root.join("logs"),
            input_dir,
            root,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn video_dir(&self) -> &Path {
        &self.video_dir
    }

    pub fn metadata_dir(&self) -> &Path {
        &self.metadata_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Path of the run log (`<root>/logs/automation.log`).
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }
}

// ============================================================================
// CORE CONFIGURATION
// ============================================================================

/// Main configuration structure for the mediascan-core library.
///
/// # Examples
///
/// ```rust,no_run
/// use mediascan_core::CoreConfig;
///
/// let mut config = CoreConfig::new("/srv/media").unwrap();
/// config.thresholds.min_duration_sec = 5.0;
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    // ---- Path Configuration ----
    pub paths: DiscoveryPaths,

    // ---- Validation Settings ----
    pub thresholds: ValidationThresholds,

    /// Extension (without dot) of candidate video files
    pub video_extension: String,

    /// Extensions (without dot) of metadata index files
    pub metadata_extensions: Vec<String>,

    // ---- Probe Settings ----
    /// Upper bound for a single probe call. `None` waits indefinitely.
    pub probe_timeout: Option<Duration>,
}

impl CoreConfig {
    /// Creates a configuration rooted at `root` with default thresholds.
    pub fn new(root: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self {
            paths: DiscoveryPaths::from_root(root)?,
            thresholds: ValidationThresholds::default(),
            video_extension: DEFAULT_VIDEO_EXTENSION.to_string(),
            metadata_extensions: DEFAULT_METADATA_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
            probe_timeout: None,
        })
    }
}
