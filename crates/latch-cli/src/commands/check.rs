//! Check command implementation.
//!
//! Validates the configuration without producing a plan.

use latch_config::{ConfigValidator, FsValidator, collect_warnings, validate_schema};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// Loads the layered configuration, applies the requested profile,
/// validates the structural invariants (and, with `--fs`, the referenced
/// paths) and reports advisory warnings.
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("checking configuration...");

    let cwd = utils::get_cwd()?;
    let config = utils::load_config(&cwd, args.config.as_deref(), args.profile.as_deref())?;

    if args.fs {
        FsValidator::new(&cwd).validate(&config.bundle)?;
    } else {
        validate_schema(&config.bundle)?;
    }

    let warnings = collect_warnings(&config.bundle);
    for warning in &warnings {
        ui::warning(&warning.to_string());
    }

    let pipeline: Vec<&str> = config.bundle.plugins.iter().map(|p| p.name()).collect();
    ui::info(&format!("pipeline: {}", pipeline.join(" > ")));

    if warnings.is_empty() {
        ui::success("configuration is valid");
    } else {
        ui::success(&format!(
            "configuration is valid ({} warning(s))",
            warnings.len()
        ));
    }

    Ok(())
}
