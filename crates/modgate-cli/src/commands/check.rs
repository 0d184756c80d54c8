//! Check command implementation.
//!
//! Decodes a descriptor document, validates every module and reports what
//! it finds without evaluating anything.

use crate::cli::{CheckArgs, RequestArgs};
use crate::commands::utils;
use crate::config::RequestConfig;
use crate::error::{CliError, Result};
use crate::ui;
use modgate_descriptor::{validate, Diagnostic};

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Decode the document, collecting diagnostics
/// 2. Validate each module (deprecated host types)
/// 3. Reject duplicate module names
/// 4. Print diagnostics; fail on them if `--deny-warnings` is set
pub fn execute(args: CheckArgs) -> Result<()> {
    let config = RequestConfig::load(&RequestArgs::default(), args.config.as_deref())?;
    let registry = config.registry();

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let document = utils::load_document(&args.file, &args.field, &registry, &mut diagnostics)?;

    for module in &document.modules {
        validate(module, &mut diagnostics);
    }
    utils::ensure_unique_names(&args.file, &document.modules)?;

    report(&diagnostics);

    if args.deny_warnings && !diagnostics.is_empty() {
        return Err(CliError::WarningsDenied {
            count: diagnostics.len(),
        });
    }

    tracing::debug!(
        modules = document.modules.len(),
        warnings = diagnostics.len(),
        "check finished"
    );
    ui::success(&summary(document.modules.len(), diagnostics.len()));
    Ok(())
}

fn report(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        ui::warning(&diagnostic.to_string());
    }
}

fn summary(modules: usize, warnings: usize) -> String {
    let noun = if modules == 1 { "module" } else { "modules" };
    match warnings {
        0 => format!("{modules} {noun} checked"),
        1 => format!("{modules} {noun} checked, 1 warning"),
        n => format!("{modules} {noun} checked, {n} warnings"),
    }
}
