//! Logging infrastructure for the modgate CLI.
//!
//! Built on `tracing`. Log lines go to stderr so that command output on
//! stdout (verdicts, formatted documents) can be piped safely.
//!
//! # Example
//!
//! ```rust,no_run
//! use modgate_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Evaluating modules");
//! debug!("Decoded {} modules", 3);
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "modgate_cli=debug,modgate_descriptor=debug";
const QUIET_FILTER: &str = "modgate_cli=error,modgate_descriptor=error";
const DEFAULT_FILTER: &str = "modgate_cli=info,modgate_descriptor=warn";

/// Initialize the tracing subscriber.
///
/// Call once, before any logging occurs.
///
/// # Verbosity Levels
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for modgate crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: INFO for the CLI, WARN for the descriptor library
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Initialize logger with a custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false) // Don't show the module path (keeps output clean)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // tracing is global and can only be initialized once per process, so
    // these only cover filter selection.

    #[test]
    fn test_verbose_filter_enables_debug() {
        let filter = filter_for(true, false).to_string();
        assert!(filter.contains("modgate_cli=debug"));
    }

    #[test]
    fn test_quiet_filter_only_errors() {
        let filter = filter_for(false, true).to_string();
        assert!(filter.contains("modgate_cli=error"));
        assert!(!filter.contains("debug"));
    }
}
