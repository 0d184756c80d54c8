//! Fmt command implementation.
//!
//! Re-encodes a descriptor document in canonical form: current keys only,
//! canonical enum spellings, unrecognized entries dropped.

use crate::cli::{FmtArgs, RequestArgs};
use crate::commands::utils;
use crate::config::RequestConfig;
use crate::error::{Result, ResultExt};
use crate::ui;
use modgate_descriptor::Diagnostic;
use std::fs;

/// Execute the fmt command.
pub fn execute(args: FmtArgs) -> Result<()> {
    let config = RequestConfig::load(&RequestArgs::default(), args.config.as_deref())?;
    let registry = config.registry();

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let document = utils::load_document(&args.file, &args.field, &registry, &mut diagnostics)?;
    for diagnostic in &diagnostics {
        ui::warning(&diagnostic.to_string());
    }

    let canonical = utils::canonical_document(&document, &args.field);
    let mut output = serde_json::to_string_pretty(&canonical)?;
    output.push('\n');

    if args.write {
        let current = fs::read_to_string(&args.file).with_path(&args.file)?;
        if current == output {
            ui::info(&format!("{} is already formatted", args.file.display()));
            return Ok(());
        }
        fs::write(&args.file, output).with_path(&args.file)?;
        ui::success(&format!("Formatted {}", args.file.display()));
    } else {
        print!("{output}");
    }
    Ok(())
}
