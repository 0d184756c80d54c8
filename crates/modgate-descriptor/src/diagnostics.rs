//! Non-fatal findings raised while decoding or validating descriptors.

use std::fmt;

/// What a diagnostic is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A platform name the registry could not resolve; the entry was dropped
    UnknownPlatform,
    /// A target type name that was not recognized; the entry was dropped
    UnknownTargetType,
    /// A target configuration name that was not recognized; the entry was dropped
    UnknownTargetConfiguration,
    /// An unrecognized loading phase; the default phase was kept
    UnknownLoadingPhase,
    /// A field with the wrong JSON shape; it was treated as absent
    MalformedField,
    /// A field given under its legacy key
    LegacyField,
    /// A host type that has been superseded
    DeprecatedHostType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Name of the module the finding belongs to.
    pub module: String,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        module: impl Into<String>,
        kind: DiagnosticKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            module: module.into(),
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.module, self.message)
    }
}

/// Receives diagnostics as they are produced.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Forwards every diagnostic to `tracing` at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(
            module = %diagnostic.module,
            kind = ?diagnostic.kind,
            "{}",
            diagnostic.message
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_collects_in_order() {
        let mut sink = Vec::new();
        sink.report(Diagnostic::new("A", DiagnosticKind::UnknownPlatform, "first"));
        sink.report(Diagnostic::new("B", DiagnosticKind::LegacyField, "second"));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].module, "A");
        assert_eq!(sink[1].kind, DiagnosticKind::LegacyField);
    }

    #[test]
    fn display_prefixes_module() {
        let diagnostic = Diagnostic::new("Core", DiagnosticKind::MalformedField, "bad field");
        assert_eq!(diagnostic.to_string(), "Core: bad field");
    }

    #[test]
    fn tracing_sink_accepts_reports() {
        let mut sink = TracingSink;
        sink.report(Diagnostic::new("Core", DiagnosticKind::UnknownPlatform, "ignored"));
    }
}
