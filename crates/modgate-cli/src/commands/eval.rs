//! Eval command implementation.
//!
//! Resolves a build request and prints each module's verdict.

use crate::cli::EvalArgs;
use crate::commands::utils;
use crate::config::RequestConfig;
use crate::error::Result;
use crate::ui;
use modgate_descriptor::{evaluate, Diagnostic, Exclusion, ModuleDescriptor, Verdict};
use serde::Serialize;

/// One line of `--json` output.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Evaluation<'a> {
    pub name: &'a str,
    pub eligible: bool,
    pub reason: Option<Exclusion>,
}

impl<'a> Evaluation<'a> {
    pub fn new(module: &'a ModuleDescriptor, verdict: Verdict) -> Self {
        Self {
            name: module.name(),
            eligible: verdict.is_included(),
            reason: verdict.exclusion(),
        }
    }
}

/// Execute the eval command.
pub fn execute(args: EvalArgs) -> Result<()> {
    let config = RequestConfig::load(&args.request, args.config.as_deref())?;
    let registry = config.registry();
    let request = config.build_request(&registry)?;
    tracing::debug!(?request, "resolved build request");

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let document = utils::load_document(&args.file, &args.field, &registry, &mut diagnostics)?;
    for diagnostic in &diagnostics {
        ui::warning(&diagnostic.to_string());
    }

    let verdicts: Vec<_> = document
        .modules
        .iter()
        .map(|module| (module, evaluate(module, &request)))
        .collect();

    if args.json {
        let evaluations: Vec<_> = verdicts
            .iter()
            .map(|(module, verdict)| Evaluation::new(module, *verdict))
            .collect();
        println!("{}", serde_json::to_string_pretty(&evaluations)?);
    } else {
        for (module, verdict) in &verdicts {
            println!("{}", render(module, *verdict));
        }
    }

    let included = verdicts.iter().filter(|(_, verdict)| verdict.is_included()).count();
    tracing::info!(
        included,
        excluded = verdicts.len() - included,
        platform = %request.platform,
        target = %request.target_name,
        "evaluated modules"
    );
    Ok(())
}

fn render(module: &ModuleDescriptor, verdict: Verdict) -> String {
    match verdict {
        Verdict::Included => format!("{}: included", module.name()),
        Verdict::IncludedByProgramAllowList => {
            format!("{}: included (program allow list)", module.name())
        }
        Verdict::Excluded(reason) => format!("{}: excluded ({reason})", module.name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modgate_descriptor::{
        BuildRequest, FilterList, ModuleHostType, Platform, TargetConfiguration, TargetType,
    };

    fn request(target_type: TargetType) -> BuildRequest {
        BuildRequest::new(
            Platform::new("Win64"),
            TargetConfiguration::Development,
            "MyGame",
            target_type,
        )
    }

    #[test]
    fn test_evaluations_report_reasons() {
        let runtime = ModuleDescriptor::new("Core", ModuleHostType::Runtime).unwrap();
        let editor = ModuleDescriptor::new("EditorTools", ModuleHostType::Editor).unwrap();
        let modules = vec![runtime, editor];

        let req = request(TargetType::Game);
        let evaluations: Vec<_> = modules
            .iter()
            .map(|module| Evaluation::new(module, evaluate(module, &req)))
            .collect();
        assert_eq!(
            evaluations,
            vec![
                Evaluation {
                    name: "Core",
                    eligible: true,
                    reason: None
                },
                Evaluation {
                    name: "EditorTools",
                    eligible: false,
                    reason: Some(Exclusion::HostTypeMismatch)
                },
            ]
        );
    }

    #[test]
    fn test_json_shape() {
        let evaluation = Evaluation {
            name: "Core",
            eligible: false,
            reason: Some(Exclusion::PlatformDenied),
        };
        assert_eq!(
            serde_json::to_value(&evaluation).unwrap(),
            serde_json::json!({ "name": "Core", "eligible": false, "reason": "platform-denied" })
        );
    }

    #[test]
    fn test_render_lines() {
        let mut module = ModuleDescriptor::new("Launcher", ModuleHostType::Runtime).unwrap();
        assert_eq!(render(&module, Verdict::Included), "Launcher: included");

        module.program_allow_list = FilterList::from_entries(["MyGame".to_string()]);
        let verdict = evaluate(&module, &request(TargetType::Program));
        assert_eq!(render(&module, verdict), "Launcher: included (program allow list)");

        assert_eq!(
            render(&module, Verdict::Excluded(Exclusion::ConfigurationDenied)),
            "Launcher: excluded (configuration is in the deny list)"
        );
    }
}
