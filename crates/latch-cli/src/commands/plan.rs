//! Plan command implementation.
//!
//! Emits the normalized bundler plan, and optionally hands it to the
//! external runner.

use latch_pipeline::{RunnerHandoff, normalize, write_plan};

use crate::cli::PlanArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the plan command.
pub fn execute(args: PlanArgs) -> Result<()> {
    let cwd = utils::get_cwd()?;
    let config = utils::load_config(&cwd, args.config.as_deref(), args.profile.as_deref())?;

    let plan = normalize(&config.bundle, &cwd)?;

    let Some(out) = args.out else {
        // stdout stays machine-readable; status messages go to stderr
        print!("{}", plan.to_json()?);
        return Ok(());
    };

    write_plan(&plan, &out)?;
    ui::success(&format!("plan written to {}", out.display()));

    if let Some(runner) = args.runner {
        ui::info(&format!("handing plan to {}", runner.display()));
        RunnerHandoff::new(runner)
            .with_environment(config.settings.environment.clone())
            .invoke(&plan, &out)?;
        ui::success("runner finished");
    }

    Ok(())
}
