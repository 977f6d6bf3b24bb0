//! Command implementations for the CLI.

/// Module containing the validation run: configuration assembly and
/// delegation to the mediascan-core pipeline.
pub mod run;
