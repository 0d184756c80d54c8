//! Status message functions for terminal output.
//!
//! Everything here writes to stderr.

use owo_colors::OwoColorize;

use super::colors_enabled;

/// Print a success message.
///
/// ```no_run
/// use modgate_cli::ui::success;
///
/// success("3 modules checked");
/// ```
pub fn success(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✓".green().bold(), message);
    } else {
        eprintln!("✓ {}", message);
    }
}

/// Print an info message.
pub fn info(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "ℹ".blue().bold(), message);
    } else {
        eprintln!("ℹ {}", message);
    }
}

/// Print a warning message.
///
/// ```no_run
/// use modgate_cli::ui::warning;
///
/// warning("Core: unknown platform 'Amiga' in 'PlatformAllowList', ignoring it");
/// ```
pub fn warning(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
    } else {
        eprintln!("⚠ {}", message);
    }
}
