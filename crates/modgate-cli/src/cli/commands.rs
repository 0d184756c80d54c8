use clap::{Args, Subcommand};
use modgate_descriptor::MODULES_FIELD;
use std::path::PathBuf;

use crate::cli::enums::*;

/// Available modgate subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode and validate a descriptor document
    ///
    /// Reports unknown platforms, target types and configurations, legacy
    /// keys, deprecated host types and duplicate module names.
    Check(CheckArgs),

    /// Evaluate every module against a build request
    ///
    /// Prints whether each module is part of the build and, if not, which
    /// rule excluded it.
    Eval(EvalArgs),

    /// Rewrite a descriptor document in canonical form
    ///
    /// Drops unrecognized entries and replaces legacy keys. Other top-level
    /// fields of the document are kept as they are.
    Fmt(FmtArgs),
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Descriptor document to check
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Field holding the module list in a container document
    #[arg(long, default_value = MODULES_FIELD, value_name = "FIELD")]
    pub field: String,

    /// Fail if any warning is reported
    #[arg(long)]
    pub deny_warnings: bool,

    /// Path to a modgate.toml or JSON config file (for extra platforms)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Arguments for the eval command
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Descriptor document to evaluate
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Field holding the module list in a container document
    #[arg(long, default_value = MODULES_FIELD, value_name = "FIELD")]
    pub field: String,

    #[command(flatten)]
    pub request: RequestArgs,

    /// Path to a modgate.toml or JSON config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print verdicts as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Build request overrides; anything left out comes from config or defaults
#[derive(Args, Debug, Default, Clone)]
pub struct RequestArgs {
    /// Platform being built (e.g. Win64, Linux)
    #[arg(long, value_name = "NAME")]
    pub platform: Option<String>,

    /// Target configuration
    #[arg(long, value_enum, ignore_case = true)]
    pub configuration: Option<Configuration>,

    /// Kind of target being built
    #[arg(long, value_enum, ignore_case = true)]
    pub target_type: Option<TargetType>,

    /// Name of the target, matched against program allow and deny lists
    #[arg(long, value_name = "NAME")]
    pub target: Option<String>,

    /// The build includes developer tools
    #[arg(long)]
    pub developer_tools: bool,

    /// The build requires cooked data
    #[arg(long)]
    pub cooked: bool,
}

/// Arguments for the fmt command
#[derive(Args, Debug)]
pub struct FmtArgs {
    /// Descriptor document to format
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Field holding the module list in a container document
    #[arg(long, default_value = MODULES_FIELD, value_name = "FIELD")]
    pub field: String,

    /// Write the result back to FILE instead of stdout
    #[arg(short, long)]
    pub write: bool,

    /// Path to a modgate.toml or JSON config file (for extra platforms)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
