//! Diff command implementation.
//!
//! Structural equivalence of two configuration files.

use latch_config::{ConfigDiscovery, equivalence};

use crate::cli::DiffArgs;
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the diff command.
///
/// Exits cleanly when the two configurations would parameterize the
/// runner identically; otherwise lists every difference and fails.
pub fn execute(args: DiffArgs) -> Result<()> {
    for path in [&args.left, &args.right] {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.clone()));
        }
    }

    let cwd = utils::get_cwd()?;
    let discovery = ConfigDiscovery::new(&cwd);
    let left = discovery.load_from(&args.left)?;
    let right = discovery.load_from(&args.right)?;

    let report = equivalence::compare(&left.bundle, &right.bundle);
    if report.is_equivalent() {
        ui::success("configurations are structurally equivalent");
        return Ok(());
    }

    for difference in &report.differences {
        ui::error(&difference.to_string());
    }

    Err(CliError::NotEquivalent(report.differences.len()))
}
