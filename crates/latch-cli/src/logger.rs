//! Logging setup for the latch CLI.
//!
//! Structured logging via the `tracing` ecosystem. The logging level is
//! determined in this order:
//!
//! 1. `--verbose` flag: debug level for latch crates
//! 2. `--quiet` flag: errors only
//! 3. `RUST_LOG` environment variable
//! 4. Default: info level for latch crates

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber. Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("latch_config=debug,latch_pipeline=debug,latch_cli=debug")
    } else if quiet {
        EnvFilter::new("latch_config=error,latch_pipeline=error,latch_cli=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("latch_config=info,latch_pipeline=info,latch_cli=info")
        })
    };

    // stdout is reserved for plan emission; logs go to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
