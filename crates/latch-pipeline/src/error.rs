//! Error types for plan normalization and runner handoff.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = PipelineError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("configuration error: {0}")]
    Config(#[from] latch_config::ConfigError),

    #[error("custom plugin '{name}' options must be a table")]
    InvalidPluginOptions { name: String },

    #[error("failed to encode plan: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("runner executable not found: {}", .path.display())]
    RunnerNotFound { path: PathBuf },

    #[error("runner '{command}' exited with status {status}")]
    RunnerFailed { command: String, status: i32 },

    #[error("runner '{command}' was terminated before exiting")]
    RunnerKilled { command: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
