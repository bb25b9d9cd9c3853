//! Error types for configuration loading and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Config discovery/loading errors
    #[error("config not found")]
    NotFound,

    #[error("unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid value for '{field}': {hint}")]
    InvalidValue { field: String, hint: String },

    #[error("profile '{0}' not found in config")]
    ProfileNotFound(String),

    #[error("invalid profile override: {0}")]
    InvalidProfileOverride(String),

    // Schema validation errors (no filesystem checks)
    #[error("entry path cannot be empty")]
    EmptyEntry,

    #[error("output file cannot be empty")]
    EmptyOutput,

    #[error("missing required field: {field} ({hint})")]
    MissingField { field: String, hint: String },

    #[error("plugin '{0}' appears more than once in the pipeline")]
    DuplicateStage(String),

    #[error("plugin '{later}' must come after '{earlier}' in the pipeline")]
    StageOrder { earlier: String, later: String },

    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // Filesystem validation errors (for CLI use)
    #[error("entry path not found: {}", .path.display())]
    EntryNotFound { path: PathBuf },

    #[error("output directory does not exist: {}", .path.display())]
    OutputDirMissing { path: PathBuf },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
