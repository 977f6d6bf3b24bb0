// ============================================================================
// mediascan-core/src/pipeline.rs
// ============================================================================
//
// PIPELINE: One full validation run
//
// Drives a run through its stages:
//
//   Idle -> ToolChecked -> EnvironmentValidated -> Discovered -> Validated
//        -> ReportWritten
//
// Any error moves the run to `Failed` and is returned as-is. Nothing is
// retried and partial output is left where it is. A `Pipeline` runs once.

use crate::analysis::VideoMetadata;
use crate::config::CoreConfig;
use crate::discovery::find_candidate_files;
use crate::environment::validate_environment;
use crate::error::{CoreError, CoreResult};
use crate::external::Prober;
use crate::reporting::write_summary;
use crate::validation::{RunResult, validate_all};

use log::{debug, info};
use std::fmt;
use std::path::PathBuf;

/// Progress of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    Idle,
    ToolChecked,
    EnvironmentValidated,
    Discovered,
    Validated,
    ReportWritten,
    Failed,
}

impl fmt::Display for RunStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunStage::Idle => "idle",
            RunStage::ToolChecked => "tool checked",
            RunStage::EnvironmentValidated => "environment validated",
            RunStage::Discovered => "discovered",
            RunStage::Validated => "validated",
            RunStage::ReportWritten => "report written",
            RunStage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub report_path: PathBuf,
    pub results: RunResult,
}

impl RunSummary {
    pub fn videos(&self) -> &[VideoMetadata] {
        &self.results
    }
}

/// A single validation run over the layout described by a `CoreConfig`.
///
/// # Examples
///
/// ```rust,no_run
/// use mediascan_core::{CoreConfig, FfprobeProber, Pipeline};
///
/// let config = CoreConfig::new("/srv/media").unwrap();
/// let prober = FfprobeProber::default();
/// let summary = Pipeline::new(&config, &prober).run().unwrap();
/// println!("Report: {}", summary.report_path.display());
/// ```
pub struct Pipeline<'a, P: Prober> {
    config: &'a CoreConfig,
    prober: &'a P,
    stage: RunStage,
}

impl<'a, P: Prober> Pipeline<'a, P> {
    pub fn new(config: &'a CoreConfig, prober: &'a P) -> Self {
        Self {
            config,
            prober,
            stage: RunStage::Idle,
        }
    }

    /// Current stage; `Failed` after an error.
    pub fn stage(&self) -> RunStage {
        self.stage
    }

    /// Executes the run. Fails with `CoreError::AlreadyRun` if this pipeline
    /// has left `Idle`.
    pub fn run(&mut self) -> CoreResult<RunSummary> {
        if self.stage != RunStage::Idle {
            return Err(CoreError::AlreadyRun(self.stage.to_string()));
        }

        info!("Media automation started");

        match self.execute() {
            Ok(summary) => {
                info!("Media automation completed successfully");
                Ok(summary)
            }
            Err(e) => {
                debug!("Run failed after stage '{}'", self.stage);
                self.stage = RunStage::Failed;
                Err(e)
            }
        }
    }

    fn execute(&mut self) -> CoreResult<RunSummary> {
        let config = self.config;

        self.prober.check_available().map_err(|e| {
            debug!("Availability check of {} failed: {}", self.prober.name(), e);
            CoreError::ToolUnavailable {
                tool: self.prober.name().to_string(),
            }
        })?;
        self.advance(RunStage::ToolChecked);

        validate_environment(config)?;
        self.advance(RunStage::EnvironmentValidated);

        let files = find_candidate_files(config.paths.video_dir(), &config.video_extension)?;
        info!("Found {} candidate video(s)", files.len());
        self.advance(RunStage::Discovered);

        let results = validate_all(&files, self.prober, &config.thresholds)?;
        self.advance(RunStage::Validated);

        std::fs::create_dir_all(config.paths.output_dir())?;
        let report_path = write_summary(config.paths.output_dir(), &results)?;
        info!("Summary written to {}", report_path.display());
        self.advance(RunStage::ReportWritten);

        Ok(RunSummary {
            report_path,
            results,
        })
    }

    fn advance(&mut self, next: RunStage) {
        debug!("Run stage: {} -> {}", self.stage, next);
        self.stage = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::FakeProber;
    use std::fs::{self, File};
    use tempfile::tempdir;

    #[test]
    fn test_unavailable_tool_fails_first() {
        let dir = tempdir().unwrap();
        let config = CoreConfig::new(dir.path()).unwrap();
        let prober = FakeProber::unavailable();

        let mut pipeline = Pipeline::new(&config, &prober);
        let err = pipeline.run().unwrap_err();
        assert!(matches!(err, CoreError::ToolUnavailable { .. }));
        assert_eq!(err.to_string(), "ffprobe is not installed or not available in PATH");
        assert_eq!(pipeline.stage(), RunStage::Failed);
    }

    #[test]
    fn test_pipeline_runs_once() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("input/videos")).unwrap();
        fs::create_dir_all(dir.path().join("input/metadata")).unwrap();
        File::create(dir.path().join("input/metadata/index.csv")).unwrap();
        let path = dir.path().join("input/videos/clip.mp4");
        File::create(&path).unwrap().set_len(2 * 1024 * 1024).unwrap();

        let config = CoreConfig::new(dir.path()).unwrap();
        let prober = FakeProber::new().with_stream("clip.mp4", 640, 360, 3.0);

        let mut pipeline = Pipeline::new(&config, &prober);
        pipeline.run().unwrap();
        assert_eq!(pipeline.stage(), RunStage::ReportWritten);

        let err = pipeline.run().unwrap_err();
        assert!(matches!(err, CoreError::AlreadyRun(_)));
        assert_eq!(prober.probe_count(), 1);
    }
}
