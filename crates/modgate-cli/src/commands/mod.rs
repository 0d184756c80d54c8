//! Command implementations for the modgate CLI.
//!
//! - [`check`] - Decode and validate a document
//! - [`eval`] - Evaluate modules against a build request
//! - [`fmt`] - Rewrite a document in canonical form
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments and returns a Result.

pub mod check;
pub mod eval;
pub mod fmt;
pub mod utils;

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use eval::execute as eval_execute;
pub use fmt::execute as fmt_execute;
