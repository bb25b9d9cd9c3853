//! Handoff of a plan to the external bundler runner.
//!
//! latch never bundles. The runner is a separate executable that accepts
//! a plan file as its argument; this module writes the plan and spawns
//! the runner, surfacing its exit status as an error.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::info;

use crate::error::{PipelineError, Result};
use crate::plan::BundlePlan;

/// Write `plan` as JSON to `path`, creating parent directories as needed.
pub fn write_plan(plan: &BundlePlan, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, plan.to_json()?)?;
    Ok(())
}

/// An external runner invocation: the executable, extra arguments and the
/// environment exported to it.
pub struct RunnerHandoff {
    command: PathBuf,
    args: Vec<String>,
    environment: HashMap<String, String>,
}

impl RunnerHandoff {
    pub fn new(command: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            environment: HashMap::new(),
        }
    }

    /// Extra arguments passed before the plan path.
    pub fn with_args(mut self, args: impl IntoIterator<Item = String>) -> Self {
        self.args.extend(args);
        self
    }

    /// Environment variables exported to the runner process.
    pub fn with_environment(mut self, environment: HashMap<String, String>) -> Self {
        self.environment.extend(environment);
        self
    }

    /// Write the plan to `plan_path` and run the runner on it.
    ///
    /// The runner owns the build; latch only reports whether it exited
    /// cleanly.
    pub fn invoke(&self, plan: &BundlePlan, plan_path: &Path) -> Result<()> {
        write_plan(plan, plan_path)?;

        let command_name = self.command.display().to_string();
        info!(command = %command_name, plan = %plan_path.display(), "invoking runner");

        let status = Command::new(&self.command)
            .args(&self.args)
            .arg(plan_path)
            .envs(&self.environment)
            .status()
            .map_err(|err| {
                if err.kind() == std::io::ErrorKind::NotFound {
                    PipelineError::RunnerNotFound {
                        path: self.command.clone(),
                    }
                } else {
                    PipelineError::Io(err)
                }
            })?;

        if status.success() {
            return Ok(());
        }

        match status.code() {
            Some(code) => Err(PipelineError::RunnerFailed {
                command: command_name,
                status: code,
            }),
            None => Err(PipelineError::RunnerKilled {
                command: command_name,
            }),
        }
    }
}
