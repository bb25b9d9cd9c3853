//! Status messages for terminal output.
//!
//! All status output goes to stderr so stdout stays clean for plan
//! emission. Colors degrade gracefully: NO_COLOR disables them,
//! FORCE_COLOR forces them, otherwise terminal detection decides.

use owo_colors::OwoColorize;

/// Print a success message to stderr.
pub fn success(message: &str) {
    eprintln!("{} {}", "✓".green().bold(), message);
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!("{} {}", "ℹ".blue().bold(), message);
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
}

/// Print an error message to stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

/// Check if color output should be enabled.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support based on the environment.
///
/// `owo-colors` respects NO_COLOR and terminal capabilities on its own;
/// this hook exists for explicit initialization at startup.
pub fn init_colors() {
    let _ = should_use_color();
}
