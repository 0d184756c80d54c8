//! modgate CLI - check, evaluate and format module descriptor documents.
//!
//! This crate is the command-line front end for `modgate-descriptor`.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - `commands` - One module per subcommand
//! - [`config`] - Build request loading (figment: file, environment, flags)
//! - [`error`] - Error types with actionable hints
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status messages on stderr

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
