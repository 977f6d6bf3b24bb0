// mediascan-core/src/external/mocks.rs

// --- In-memory prober (for testing) ---

use super::ffprobe_executor::stderr_summary;
use super::{ProbeError, ProbeOutput, Prober, parse_probe_output};
use crate::util::CommandError;

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Scripted answer for one file name.
#[derive(Debug, Clone)]
pub enum FakeResponse {
    /// The tool succeeded and reported these streams.
    Streams(ProbeOutput),
    /// The tool exited non-zero with this stderr.
    ExitFailure(String),
    /// The tool succeeded but printed this (run through the real parser).
    RawOutput(String),
}

/// Prober that answers from a table keyed by file name and records every
/// path it was asked to probe.
///
/// Files without a scripted response fail with `ProbeError::Failed`.
#[derive(Debug, Default)]
pub struct FakeProber {
    responses: HashMap<String, FakeResponse>,
    unavailable: bool,
    probed: RefCell<Vec<PathBuf>>,
}

impl FakeProber {
    pub fn new() -> Self {
        Default::default()
    }

    /// Makes `check_available` fail as if the tool were not installed.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Default::default()
        }
    }

    pub fn with_response(mut self, file_name: &str, response: FakeResponse) -> Self {
        self.responses.insert(file_name.to_string(), response);
        self
    }

    /// Scripts a single video stream for `file_name`.
    pub fn with_stream(self, file_name: &str, width: u32, height: u32, duration: f64) -> Self {
        self.with_response(
            file_name,
            FakeResponse::Streams(ProbeOutput::single(width, height, duration)),
        )
    }

    /// Paths passed to `probe`, in call order.
    pub fn probed_paths(&self) -> Vec<PathBuf> {
        self.probed.borrow().clone()
    }

    pub fn probe_count(&self) -> usize {
        self.probed.borrow().len()
    }
}

impl Prober for FakeProber {
    fn name(&self) -> &str {
        "ffprobe"
    }

    fn check_available(&self) -> Result<(), ProbeError> {
        if self.unavailable {
            return Err(ProbeError::Command {
                tool: self.name().to_string(),
                source: CommandError::ProcessCreation(io::Error::from(io::ErrorKind::NotFound)),
            });
        }
        Ok(())
    }

    fn probe(&self, path: &Path) -> Result<ProbeOutput, ProbeError> {
        self.probed.borrow_mut().push(path.to_path_buf());

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match self.responses.get(&file_name) {
            Some(FakeResponse::Streams(output)) => Ok(output.clone()),
            Some(FakeResponse::RawOutput(text)) => parse_probe_output(text),
            Some(FakeResponse::ExitFailure(stderr)) => Err(ProbeError::Failed {
                tool: self.name().to_string(),
                status: "exit status: 1".to_string(),
                stderr: stderr_summary(stderr),
            }),
            None => Err(ProbeError::Failed {
                tool: self.name().to_string(),
                status: "exit status: 1".to_string(),
                stderr: format!("{file_name}: Invalid data found when processing input"),
            }),
        }
    }
}
