// ============================================================================
// mediascan-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the metadata probing tool
//
// This module encapsulates the only external collaborator of the pipeline,
// the stream probing tool (ffprobe). The `Prober` trait is the seam: the
// pipeline only talks to the trait, `FfprobeProber` runs the real binary and
// `FakeProber` serves scripted answers to tests.
//
// KEY COMPONENTS:
// - Prober trait and its raw result types (ProbeOutput, StreamInfo)
// - ProbeError: failures of a single probe or availability check
// - FfprobeProber: subprocess implementation
// - FakeProber: in-memory implementation

// ---- Internal crate imports ----
use crate::util::CommandError;

// ---- External crate imports ----
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---- Standard library imports ----
use std::path::Path;

// ============================================================================
// SUBMODULES
// ============================================================================

/// Contains the subprocess-backed ffprobe implementation
pub mod ffprobe_executor;

/// Contains the scripted in-memory prober used by tests
pub mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffprobe_executor::{FfprobeProber, parse_probe_output};
pub use mocks::{FakeProber, FakeResponse};

// ============================================================================
// PROBE RESULT TYPES
// ============================================================================

/// Stream-level attributes reported for one stream. Absent attributes stay
/// `None`; defaulting is the caller's decision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamInfo {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub duration: Option<f64>,
}

/// Parsed result of one probe: the selected streams, in tool order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbeOutput {
    pub streams: Vec<StreamInfo>,
}

impl ProbeOutput {
    /// Convenience constructor for a single video stream.
    pub fn single(width: u32, height: u32, duration: f64) -> Self {
        Self {
            streams: vec![StreamInfo {
                width: Some(width),
                height: Some(height),
                duration: Some(duration),
            }],
        }
    }

    pub fn first_stream(&self) -> Option<&StreamInfo> {
        self.streams.first()
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// Failure of a tool availability check or of a single probe.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("failed to run {tool}: {source}")]
    Command {
        tool: String,
        #[source]
        source: CommandError,
    },

    #[error("{tool} exited with {status}: {stderr}")]
    Failed {
        tool: String,
        status: String,
        stderr: String,
    },

    #[error("unparsable probe output: {0}")]
    Parse(String),
}

// ============================================================================
// PROBER TRAIT
// ============================================================================

/// A stream prober capable of reporting the first video stream of a file.
pub trait Prober {
    /// Human-readable name of the underlying tool, used in messages.
    fn name(&self) -> &str;

    /// Verifies the tool can be executed at all.
    fn check_available(&self) -> Result<(), ProbeError>;

    /// Probes `path` for the width, height and duration of its first video
    /// stream.
    fn probe(&self, path: &Path) -> Result<ProbeOutput, ProbeError>;
}
