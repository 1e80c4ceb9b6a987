//! Lint context for rule execution

use oxc_semantic::{ScopeId, Scoping, Semantic};
use oxc_span::SourceType;

use crate::{Diagnostic, DiagnosticSeverity};

/// The lexical scopes enclosing a node, innermost first
#[derive(Clone, Copy)]
pub struct ScopeChain<'s> {
    scoping: &'s Scoping,
    innermost: ScopeId,
}

impl<'s> ScopeChain<'s> {
    pub fn new(scoping: &'s Scoping, innermost: ScopeId) -> Self {
        Self { scoping, innermost }
    }

    /// Check whether any scope from the innermost outwards declares `name`
    pub fn declares(&self, name: &str) -> bool {
        self.scoping.find_binding(self.innermost, name).is_some()
    }
}

/// Context passed to rules during linting
pub struct LintContext<'a> {
    /// Source code being linted
    source_text: &'a str,
    /// Source type (JS/TS/JSX etc)
    source_type: SourceType,
    /// Path of the file being linted, if the caller knows it
    filename: Option<&'a str>,
    /// Semantic analysis (scopes, symbols, etc.)
    semantic: Option<&'a Semantic<'a>>,
    /// Innermost scope at the node currently being visited
    scope_id: Option<ScopeId>,
    /// Severity applied to reports of the rule currently running
    severity: DiagnosticSeverity,
    /// Collected diagnostics
    diagnostics: Vec<Diagnostic>,
}

impl<'a> LintContext<'a> {
    pub fn new(source_text: &'a str, source_type: SourceType) -> Self {
        Self {
            source_text,
            source_type,
            filename: None,
            semantic: None,
            scope_id: None,
            severity: DiagnosticSeverity::Warning,
            diagnostics: Vec::new(),
        }
    }

    pub fn with_semantic(mut self, semantic: &'a Semantic<'a>) -> Self {
        self.semantic = Some(semantic);
        self
    }

    pub fn with_filename(mut self, filename: &'a str) -> Self {
        self.filename = Some(filename);
        self
    }

    /// Get the source text
    pub fn source_text(&self) -> &'a str {
        self.source_text
    }

    /// Get the source type
    pub fn source_type(&self) -> SourceType {
        self.source_type
    }

    /// Get the path of the file being linted
    pub fn filename(&self) -> Option<&'a str> {
        self.filename
    }

    /// Scope chain at the current node.
    ///
    /// `None` when no semantic model was supplied; rules treat that as an
    /// empty chain.
    pub fn scope_chain(&self) -> Option<ScopeChain<'a>> {
        let semantic = self.semantic?;
        let innermost = self
            .scope_id
            .unwrap_or_else(|| semantic.scoping().root_scope_id());
        Some(ScopeChain::new(semantic.scoping(), innermost))
    }

    pub(crate) fn set_scope(&mut self, scope_id: Option<ScopeId>) {
        self.scope_id = scope_id;
    }

    pub(crate) fn set_severity(&mut self, severity: DiagnosticSeverity) {
        self.severity = severity;
    }

    /// Report a diagnostic at the configured severity of the running rule
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics
            .push(diagnostic.with_severity(self.severity));
    }

    /// Consume the context and return all diagnostics
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
