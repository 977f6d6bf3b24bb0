//! Summary reporting module
//!
//! Renders the accepted videos of a run into a fixed-format text report and
//! writes it to a timestamped file in the output directory.

use crate::analysis::VideoMetadata;
use crate::error::CoreResult;
use crate::util::format_decimal;

use chrono::Local;
use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const REPORT_TITLE: &str = "Media Automation Summary";

/// Highest numeric suffix tried before giving up on a free file name.
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
pub fn report_timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Renders the report body.
///
/// ```text
/// Media Automation Summary
/// ========================
///
/// Total Videos: 2
///
/// - a.mp4 | 10.5s | 1920x1080 | 5.25MB
/// - b.mp4 | 30.0s | 1280x720 | 12.0MB
/// ```
pub fn render_summary(results: &[VideoMetadata]) -> String {
    let mut report = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(report, "{REPORT_TITLE}");
    let _ = writeln!(report, "{}", "=".repeat(REPORT_TITLE.len()));
    let _ = writeln!(report);
    let _ = writeln!(report, "Total Videos: {}", results.len());
    let _ = writeln!(report);

    for video in results {
        let _ = writeln!(
            report,
            "- {} | {}s | {} | {}MB",
            video.name(),
            format_decimal(video.duration_sec()),
            video.resolution(),
            format_decimal(video.size_mb())
        );
    }

    report
}

/// Writes the report to `<output_dir>/summary_<timestamp>.txt`.
///
/// The output directory must already exist.
pub fn write_summary(output_dir: &Path, results: &[VideoMetadata]) -> CoreResult<PathBuf> {
    write_summary_with_timestamp(output_dir, results, &report_timestamp())
}

/// Like [`write_summary`] with an explicit timestamp.
///
/// An existing report is never overwritten: when
/// `summary_<timestamp>.txt` is taken, `summary_<timestamp>_1.txt`,
/// `summary_<timestamp>_2.txt`, ... are tried in turn.
pub fn write_summary_with_timestamp(
    output_dir: &Path,
    results: &[VideoMetadata],
    timestamp: &str,
) -> CoreResult<PathBuf> {
    let body = render_summary(results);

    for attempt in 0..MAX_NAME_ATTEMPTS {
        let file_name = if attempt == 0 {
            format!("summary_{timestamp}.txt")
        } else {
            format!("summary_{timestamp}_{attempt}.txt")
        };
        let path = output_dir.join(file_name);

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(body.as_bytes())?;
                file.flush()?;
                log::debug!("Wrote summary report to {}", path.display());
                return Ok(path);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                log::debug!("Report name {} is taken", path.display());
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!(
            "No free report name for timestamp {timestamp} in {}",
            output_dir.display()
        ),
    )
    .into())
}
