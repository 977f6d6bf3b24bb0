//! Utility functions and helpers module
//!
//! Subprocess execution plus the small numeric helpers shared by the
//! analysis and reporting code.

pub mod command;

// Re-export commonly used types and functions
pub use command::{CommandError, run_command};

/// Rounds to two decimal places using the same half-even rule as decimal
/// formatting, so `round2(x)` prints identically to `format!("{x:.2}")`.
#[must_use]
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Formats a number in shortest round-trip form, keeping at least one
/// fractional digit (`30.0`, `10.5`, `5.25`).
#[must_use]
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Converts a byte count to mebibytes.
#[must_use]
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}
