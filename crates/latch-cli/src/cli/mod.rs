//! Command-line interface definition for latch.
//!
//! Defines the CLI structure with clap's derive macros.
//!
//! # Command Structure
//!
//! - `latch check` - Validate the configuration
//! - `latch plan` - Emit the normalized bundler plan
//! - `latch diff` - Compare two configurations structurally
//! - `latch init` - Write a starter configuration

mod commands;

use clap::Parser;

pub use commands::{CheckArgs, Command, DiffArgs, InitArgs, PlanArgs};

/// latch - declarative build-pipeline configuration
#[derive(Parser, Debug)]
#[command(
    name = "latch",
    version,
    about = "Declarative build-pipeline configuration for JavaScript bundling",
    long_about = "latch owns the build configuration an external bundler runner consumes:\n\
                  one entry module, one output descriptor and an ordered plugin pipeline.\n\
                  It validates, normalizes and compares configurations; the runner bundles."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
