//! Miette report conversion for CLI errors.

use crate::error::CliError;
use miette::Report;

/// Convert a [`CliError`] into a `miette` report for the process boundary.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        CliError::Descriptor { path, source } => {
            let hint = match source.module() {
                Some(module) => {
                    format!("Fix the module descriptor at '{module}' and run the command again")
                }
                None => "Every module needs a non-empty \"Name\" and a known \"Type\"".to_string(),
            };
            miette::miette!(
                help = hint,
                "Invalid descriptor in {}: {}",
                path.display(),
                source
            )
        }
        other => miette::miette!("{}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modgate_descriptor::DescriptorError;
    use std::path::PathBuf;

    #[test]
    fn descriptor_errors_get_help_text() {
        let report = cli_error_to_miette(CliError::Descriptor {
            path: PathBuf::from("Sample.uplugin"),
            source: DescriptorError::MissingRequiredField {
                field: "Name",
                module: None,
            },
        });
        assert!(report.to_string().contains("Sample.uplugin"));
        let help = report.help().map(|help| help.to_string());
        assert!(help.is_some_and(|help| help.contains("\"Name\"")));
    }

    #[test]
    fn unnamed_list_elements_are_located_by_position() {
        let source = DescriptorError::MissingRequiredField {
            field: "Name",
            module: None,
        }
        .in_module_list("Modules", 2);
        let report = cli_error_to_miette(CliError::Descriptor {
            path: PathBuf::from("Sample.uplugin"),
            source,
        });
        let help = report.help().map(|help| help.to_string());
        assert_eq!(
            help.as_deref(),
            Some("Fix the module descriptor at 'Modules[2]' and run the command again")
        );
    }

    #[test]
    fn other_errors_keep_their_message() {
        let report = cli_error_to_miette(CliError::WarningsDenied { count: 2 });
        assert_eq!(
            report.to_string(),
            "2 warning(s) reported and --deny-warnings is set"
        );
    }
}
