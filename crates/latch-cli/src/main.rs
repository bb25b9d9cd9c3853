//! latch - declarative build-pipeline configuration.
//!
//! Entry point for the latch CLI: argument parsing, logging
//! initialization and command dispatch.

use clap::Parser;
use latch_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors();

    let result = match args.command {
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Plan(plan_args) => commands::plan_execute(plan_args),
        cli::Command::Diff(diff_args) => commands::diff_execute(diff_args),
        cli::Command::Init(init_args) => commands::init_execute(init_args),
    };

    // Convert CLI errors to miette diagnostics for readable reporting
    result.map_err(error::cli_error_to_miette)
}
