//! Shared utilities for command implementations.

use std::path::{Path, PathBuf};

use latch_config::{LatchConfig, load_layered};
use tracing::debug;

use crate::error::{CliError, Result};

/// Current working directory, as a CLI error on failure.
pub(crate) fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().map_err(CliError::Io)
}

/// Load the effective configuration for a command.
///
/// An explicitly given config path must exist; discovery failures fall
/// back to defaults inside the layered loader.
pub(crate) fn load_config(
    root: &Path,
    explicit: Option<&Path>,
    profile: Option<&str>,
) -> Result<LatchConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.to_path_buf()));
        }
        debug!(path = %path.display(), "loading explicit config");
    }

    Ok(load_layered(root, explicit, profile)?)
}
