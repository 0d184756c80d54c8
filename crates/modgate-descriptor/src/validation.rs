//! Descriptor validation.
//!
//! Validation only inspects: it reports findings to a sink and never
//! changes the descriptor or the policy outcome.

use crate::descriptor::ModuleDescriptor;
use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink};
use crate::types::ModuleHostType;

/// Report problems with `module` that do not prevent it from being used.
///
/// # Example
///
/// ```
/// use modgate_descriptor::{validate, ModuleDescriptor, ModuleHostType};
///
/// let module = ModuleDescriptor::new("Tools", ModuleHostType::Developer).unwrap();
/// let mut diagnostics = Vec::new();
/// validate(&module, &mut diagnostics);
/// assert_eq!(diagnostics.len(), 1);
/// ```
pub fn validate<S: DiagnosticSink + ?Sized>(module: &ModuleDescriptor, sink: &mut S) {
    if module.host_type == ModuleHostType::Developer {
        sink.report(Diagnostic::new(
            module.name(),
            DiagnosticKind::DeprecatedHostType,
            format!(
                "the '{}' host type is deprecated; use '{}' for modules loaded by game, \
                 client or server targets in non-shipping builds, or '{}' for modules only \
                 loaded by uncooked editor and program targets",
                ModuleHostType::Developer,
                ModuleHostType::DeveloperTool,
                ModuleHostType::UncookedOnly,
            ),
        ));
    }
}

impl ModuleDescriptor {
    pub fn validate<S: DiagnosticSink + ?Sized>(&self, sink: &mut S) {
        validate(self, sink);
    }
}
