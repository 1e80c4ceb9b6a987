//! Unified visitor pattern for running all lint rules in a single AST pass
//!
//! `LintRunner` traverses the AST once, tracks the scope the traversal is in,
//! and hands each node to every enabled rule whose visitor map lists the
//! node's kind.

use std::cell::Cell;

use oxc_ast::ast::{
    JSXAttribute, JSXAttributeValue, JSXText, MemberExpression, Program, StringLiteral,
    VariableDeclarator,
};
use oxc_ast_visit::{walk, Visit};
use oxc_semantic::{ScopeId, Semantic};
use oxc_span::{SourceType, Span};
use oxc_syntax::scope::ScopeFlags;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::config::RulesConfig;
use crate::context::LintContext;
use crate::diagnostic::{Diagnostic, DiagnosticSeverity};
use crate::node::{LintNode, NodeKind};
use crate::Rule;

/// Unified visitor that runs all enabled rules during a single AST traversal
pub struct LintRunner<'a> {
    ctx: LintContext<'a>,
    rules: Vec<(Box<dyn Rule>, DiagnosticSeverity)>,
    /// Visitor map: node kind to indices into `rules`
    visitors: FxHashMap<NodeKind, Vec<usize>>,
    scope_stack: Vec<Option<ScopeId>>,
    /// Attribute value already dispatched with its parent attribute
    attribute_literal: Option<Span>,
}

impl<'a> LintRunner<'a> {
    pub fn new(ctx: LintContext<'a>, config: &RulesConfig) -> Self {
        let rules: Vec<_> = config
            .enabled_rules()
            .into_iter()
            .filter(|(rule, _)| {
                let applies = rule.should_run(&ctx);
                if !applies {
                    trace!(rule = rule.name(), filename = ?ctx.filename(), "rule skipped for file");
                }
                applies
            })
            .collect();

        let mut visitors: FxHashMap<NodeKind, Vec<usize>> = FxHashMap::default();
        for (index, (rule, _)) in rules.iter().enumerate() {
            for kind in rule.node_kinds() {
                visitors.entry(*kind).or_default().push(index);
            }
        }

        Self {
            ctx,
            rules,
            visitors,
            scope_stack: Vec::new(),
            attribute_literal: None,
        }
    }

    /// Run all enabled rules on the given program
    pub fn run(mut self, program: &Program<'a>) -> LintResult {
        if !self.rules.is_empty() {
            self.visit_program(program);
        }
        let filename = self.ctx.filename();
        let bytes = self.ctx.source_text().len();
        let language = if self.ctx.source_type().is_typescript() { "ts" } else { "js" };
        let diagnostics = self.ctx.into_diagnostics();
        debug!(
            filename = ?filename,
            bytes,
            language,
            rules = self.rules.len(),
            diagnostics = diagnostics.len(),
            "lint finished"
        );
        LintResult { diagnostics }
    }

    fn current_scope(&self) -> Option<ScopeId> {
        self.scope_stack.last().copied().flatten()
    }

    /// Hand a node to every rule registered for its kind
    fn dispatch(&mut self, node: LintNode<'_, 'a>) {
        let scope = self.current_scope();
        let Some(indices) = self.visitors.get(&node.kind()) else {
            return;
        };
        self.ctx.set_scope(scope);
        for &index in indices {
            let (rule, severity) = &self.rules[index];
            self.ctx.set_severity(*severity);
            rule.run(&node, &mut self.ctx);
        }
    }
}

impl<'a> Visit<'a> for LintRunner<'a> {
    fn enter_scope(&mut self, _flags: ScopeFlags, scope_id: &Cell<Option<ScopeId>>) {
        self.scope_stack.push(scope_id.get());
    }

    fn leave_scope(&mut self) {
        self.scope_stack.pop();
    }

    fn visit_member_expression(&mut self, member: &MemberExpression<'a>) {
        self.dispatch(LintNode::MemberExpression(member));
        walk::walk_member_expression(self, member);
    }

    fn visit_variable_declarator(&mut self, declarator: &VariableDeclarator<'a>) {
        self.dispatch(LintNode::VariableDeclarator(declarator));
        walk::walk_variable_declarator(self, declarator);
    }

    fn visit_jsx_text(&mut self, text: &JSXText<'a>) {
        self.dispatch(LintNode::JsxText(text));
        walk::walk_jsx_text(self, text);
    }

    fn visit_jsx_attribute(&mut self, attr: &JSXAttribute<'a>) {
        if let Some(JSXAttributeValue::StringLiteral(literal)) = &attr.value {
            self.dispatch(LintNode::StringLiteral {
                literal,
                parent: Some(attr),
            });
            self.attribute_literal = Some(literal.span);
        }
        walk::walk_jsx_attribute(self, attr);
        self.attribute_literal = None;
    }

    fn visit_string_literal(&mut self, literal: &StringLiteral<'a>) {
        if self.attribute_literal != Some(literal.span) {
            self.dispatch(LintNode::StringLiteral {
                literal,
                parent: None,
            });
        }
        walk::walk_string_literal(self, literal);
    }
}

/// Result of running the linter
#[derive(Debug)]
pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.severity, DiagnosticSeverity::Error))
    }

    pub fn has_warnings(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, DiagnosticSeverity::Error))
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, DiagnosticSeverity::Warning))
            .count()
    }
}

/// Convenience function to lint a program with default configuration and no
/// scope information
pub fn lint<'a>(source_text: &'a str, program: &Program<'a>) -> LintResult {
    let ctx = LintContext::new(source_text, SourceType::jsx());
    LintRunner::new(ctx, &RulesConfig::default()).run(program)
}

/// Convenience function to lint a program with custom configuration
pub fn lint_with_config<'a>(
    source_text: &'a str,
    source_type: SourceType,
    program: &Program<'a>,
    config: &RulesConfig,
) -> LintResult {
    let ctx = LintContext::new(source_text, source_type);
    LintRunner::new(ctx, config).run(program)
}

/// Lint a program with scope information and the path of the file
pub fn lint_with_semantic<'a>(
    semantic: &'a Semantic<'a>,
    source_text: &'a str,
    source_type: SourceType,
    filename: Option<&'a str>,
    program: &Program<'a>,
    config: &RulesConfig,
) -> LintResult {
    let mut ctx = LintContext::new(source_text, source_type).with_semantic(semantic);
    if let Some(filename) = filename {
        ctx = ctx.with_filename(filename);
    }
    LintRunner::new(ctx, config).run(program)
}
