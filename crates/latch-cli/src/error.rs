//! Error handling for the latch CLI.
//!
//! Domain errors convert into [`CliError`] via `#[from]`; the binary
//! boundary turns the result into a miette report for display.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration loading or validation failed
    #[error("configuration error: {0}")]
    Config(#[from] latch_config::ConfigError),

    /// Plan normalization or runner handoff failed
    #[error("pipeline error: {0}")]
    Pipeline(#[from] latch_pipeline::PipelineError),

    /// Invalid command-line arguments or options
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The compared configurations are not structurally equivalent
    #[error("configurations differ in {0} field(s)")]
    NotEquivalent(usize),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using [`CliError`] as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert a CLI error into a miette report for display.
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    match err {
        CliError::Config(e) => miette::miette!(
            help = "run 'latch check' for a full validation pass",
            "{e}"
        ),
        CliError::NotEquivalent(count) => miette::miette!(
            help = "the differences are listed above",
            "configurations differ in {count} field(s)"
        ),
        other => miette::miette!("{other}"),
    }
}
