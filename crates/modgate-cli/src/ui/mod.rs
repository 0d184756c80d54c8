//! Terminal output helpers.
//!
//! Status messages go to stderr and are colored only when the terminal
//! supports it and the user has not opted out.
//!
//! ```no_run
//! use modgate_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("All modules are valid");
//! ui::warning("Tools: the 'Developer' host type is deprecated");
//! ```

mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use messages::{info, success, warning};

static COLORS: AtomicBool = AtomicBool::new(false);

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    // NO_COLOR environment variable disables colors
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    // FORCE_COLOR enables colors even in non-TTY
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr() && console::colors_enabled_stderr()
}

/// Decide once whether status messages are colored.
///
/// Should be called early in `main`, after the command line is parsed.
pub fn init_colors(no_color: bool) {
    COLORS.store(!no_color && should_use_color(), Ordering::Relaxed);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}
