//! Core library for batch validation of video files using ffprobe.
//!
//! This crate checks the input layout of a run, discovers candidate videos,
//! validates each against minimum size and duration thresholds, and writes a
//! consolidated text summary. The first failure ends the run.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mediascan_core::{CoreConfig, FfprobeProber, Pipeline};
//!
//! let mut config = CoreConfig::new("/srv/media").unwrap();
//! config.thresholds.min_duration_sec = 2.0;
//!
//! let prober = FfprobeProber::default().with_timeout(config.probe_timeout);
//! match Pipeline::new(&config, &prober).run() {
//!     Ok(summary) => println!("{} videos -> {}", summary.results.len(), summary.report_path.display()),
//!     Err(e) => eprintln!("[ERROR] {e}"),
//! }
//! ```

pub mod analysis;
pub mod config;
pub mod discovery;
pub mod environment;
pub mod error;
pub mod external;
pub mod file_logging;
pub mod pipeline;
pub mod reporting;
pub mod util;
pub mod validation;

// Re-exports for public API
pub use analysis::{VideoMetadata, analyze_video};
pub use config::{CoreConfig, DiscoveryPaths, ValidationThresholds};
pub use discovery::find_candidate_files;
pub use environment::validate_environment;
pub use error::{CoreError, CoreResult, CorruptMediaError, EnvironmentError};
pub use external::{FakeProber, FfprobeProber, ProbeError, ProbeOutput, Prober, StreamInfo};
pub use pipeline::{Pipeline, RunStage, RunSummary};
pub use reporting::{render_summary, write_summary};
pub use validation::{RunResult, validate_all};
