//! FFprobe integration for stream metadata extraction
//!
//! Runs `ffprobe` restricted to the first video stream and parses its JSON
//! output into a [`ProbeOutput`].

use super::{ProbeError, ProbeOutput, Prober, StreamInfo};
use crate::util::{CommandError, run_command};

use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;

/// Default program name, resolved through `PATH`.
pub const DEFAULT_FFPROBE: &str = "ffprobe";

/// Prober backed by the `ffprobe` executable.
#[derive(Debug, Clone)]
pub struct FfprobeProber {
    program: String,
    timeout: Option<Duration>,
}

impl Default for FfprobeProber {
    fn default() -> Self {
        Self::new(DEFAULT_FFPROBE)
    }
}

impl FfprobeProber {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            timeout: None,
        }
    }

    /// Kills any single probe that runs longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    fn probe_command(&self, path: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args([
            "-v",
            "error",
            "-select_streams",
            "v:0",
            "-show_entries",
            "stream=width,height,duration",
            "-of",
            "json",
        ]);
        cmd.arg(path);
        cmd
    }

    fn command_error(&self, source: CommandError) -> ProbeError {
        ProbeError::Command {
            tool: self.program.clone(),
            source,
        }
    }
}

impl Prober for FfprobeProber {
    fn name(&self) -> &str {
        &self.program
    }

    fn check_available(&self) -> Result<(), ProbeError> {
        let status = Command::new(&self.program)
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| self.command_error(CommandError::ProcessCreation(e)))?;

        if status.success() {
            log::debug!("Found dependency: {}", self.program);
            Ok(())
        } else {
            Err(ProbeError::Failed {
                tool: self.program.clone(),
                status: status.to_string(),
                stderr: String::new(),
            })
        }
    }

    fn probe(&self, path: &Path) -> Result<ProbeOutput, ProbeError> {
        log::debug!("Running ffprobe for stream info on: {}", path.display());

        let output = run_command(&mut self.probe_command(path), self.timeout)
            .map_err(|e| self.command_error(e))?;

        if !output.status.success() {
            let raw_stderr = String::from_utf8_lossy(&output.stderr);
            log::debug!("ffprobe failed on {}: {}", path.display(), raw_stderr.trim());
            let stderr = stderr_summary(&raw_stderr);
            return Err(ProbeError::Failed {
                tool: self.program.clone(),
                status: output.status.to_string(),
                stderr,
            });
        }

        parse_probe_output(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Folds multi-line tool diagnostics into one line, joining the non-empty
/// lines with `"; "`, so an error message always prints as a single line.
pub fn stderr_summary(stderr: &str) -> String {
    stderr
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}

// ============================================================================
// OUTPUT PARSING
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawProbeOutput {
    #[serde(default)]
    streams: Vec<RawStream>,
}

/// ffprobe reports `duration` as a decimal string; numbers are accepted too.
#[derive(Debug, Deserialize)]
struct RawStream {
    width: Option<u32>,
    height: Option<u32>,
    duration: Option<Value>,
}

/// Parses ffprobe's `-of json` output.
///
/// Missing `streams`, `width`, `height` or `duration` keys are not errors;
/// a `duration` that is not a number is.
pub fn parse_probe_output(json: &str) -> Result<ProbeOutput, ProbeError> {
    let raw: RawProbeOutput =
        serde_json::from_str(json).map_err(|e| ProbeError::Parse(e.to_string()))?;

    let streams = raw
        .streams
        .into_iter()
        .map(|stream| {
            Ok(StreamInfo {
                width: stream.width,
                height: stream.height,
                duration: stream.duration.as_ref().map(parse_duration).transpose()?,
            })
        })
        .collect::<Result<Vec<_>, ProbeError>>()?;

    Ok(ProbeOutput { streams })
}

fn parse_duration(value: &Value) -> Result<f64, ProbeError> {
    let parsed = match value {
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };

    parsed
        .filter(|d| d.is_finite())
        .ok_or_else(|| ProbeError::Parse(format!("invalid duration value: {value}")))
}
