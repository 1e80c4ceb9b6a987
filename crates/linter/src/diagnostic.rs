//! Diagnostic types for lint results

use oxc_span::Span;
use serde::Serialize;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

/// A lint diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// The rule that produced this diagnostic
    pub rule: String,
    /// Message identifier from the rule's message table
    pub message_id: &'static str,
    /// Start position of the span
    pub start: u32,
    /// End position of the span
    pub end: u32,
    /// Primary message
    pub message: String,
    /// Optional help text
    pub help: Option<String>,
    /// Severity level
    pub severity: DiagnosticSeverity,
}

impl Diagnostic {
    pub fn new(
        rule: impl Into<String>,
        message_id: &'static str,
        span: Span,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule: rule.into(),
            message_id,
            start: span.start,
            end: span.end,
            message: message.into(),
            help: None,
            severity: DiagnosticSeverity::Warning,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_severity(mut self, severity: DiagnosticSeverity) -> Self {
        self.severity = severity;
        self
    }
}
