use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available latch subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the configuration
    ///
    /// Discovers and loads the configuration, checks its structural
    /// invariants and reports advisory warnings.
    Check(CheckArgs),

    /// Emit the normalized bundler plan
    ///
    /// Loads the configuration, resolves paths and defaults, and prints
    /// the plan JSON the external runner consumes.
    Plan(PlanArgs),

    /// Compare two configuration files structurally
    ///
    /// Reports every field where the two configurations would
    /// parameterize the runner differently. Exits non-zero when they
    /// are not equivalent.
    Diff(DiffArgs),

    /// Write a starter configuration
    ///
    /// Creates a latch.toml reproducing the stock pipeline: polyfills,
    /// browser resolution, transpilation with bundled helpers, CommonJS
    /// interop and JSON imports.
    Init(InitArgs),
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the config file (default: discover latch.toml or package.json)
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Profile overlay to apply before validating
    #[arg(short = 'p', long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Also check that referenced paths exist on disk
    #[arg(long)]
    pub fs: bool,
}

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Path to the config file (default: discover latch.toml or package.json)
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Profile overlay to apply before planning
    #[arg(short = 'p', long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Write the plan to a file instead of stdout
    #[arg(short = 'o', long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Hand the plan to this runner executable after emitting it
    #[arg(long, value_name = "EXE", requires = "out")]
    pub runner: Option<PathBuf>,
}

/// Arguments for the diff command
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// First configuration file
    #[arg(value_name = "A")]
    pub left: PathBuf,

    /// Second configuration file
    #[arg(value_name = "B")]
    pub right: PathBuf,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write latch.toml into (default: current directory)
    #[arg(short = 'd', long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Overwrite an existing latch.toml
    #[arg(long)]
    pub force: bool,
}
