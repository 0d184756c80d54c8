//! modgate CLI entry point.
//!
//! Parses arguments, initializes logging and dispatches to the command.

use clap::Parser;
use miette::Result;
use modgate_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Eval(eval_args) => commands::eval_execute(eval_args),
        cli::Command::Fmt(fmt_args) => commands::fmt_execute(fmt_args),
    };

    result.map_err(error::cli_error_to_miette)
}
