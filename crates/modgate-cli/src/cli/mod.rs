//! Command-line interface definition for modgate.
//!
//! # Command Structure
//!
//! - `modgate check` - Decode and validate a descriptor document
//! - `modgate eval` - Report which modules take part in a build
//! - `modgate fmt` - Rewrite a document in canonical form

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{CheckArgs, Command, EvalArgs, FmtArgs, RequestArgs};
pub use enums::*;

/// modgate - module inclusion policy for build targets
#[derive(Parser, Debug)]
#[command(
    name = "modgate",
    version,
    about = "Check module descriptors and decide which modules a build includes",
    long_about = "modgate reads module descriptor documents, reports problems with them and\n\
                  evaluates each module's platform, target, configuration and program rules\n\
                  against a build request."
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
