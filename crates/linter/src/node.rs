//! Node kinds the runner dispatches to rules

use oxc_ast::ast::{JSXAttribute, JSXText, MemberExpression, StringLiteral, VariableDeclarator};
use oxc_span::{GetSpan, Span};

/// Tag used to key a rule's visitor map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    MemberExpression,
    VariableDeclarator,
    JsxText,
    StringLiteral,
}

/// A node handed to rule callbacks
#[derive(Debug, Clone, Copy)]
pub enum LintNode<'n, 'a> {
    MemberExpression(&'n MemberExpression<'a>),
    VariableDeclarator(&'n VariableDeclarator<'a>),
    JsxText(&'n JSXText<'a>),
    StringLiteral {
        literal: &'n StringLiteral<'a>,
        /// Set when the literal is directly the value of a JSX attribute
        parent: Option<&'n JSXAttribute<'a>>,
    },
}

impl LintNode<'_, '_> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::MemberExpression(_) => NodeKind::MemberExpression,
            Self::VariableDeclarator(_) => NodeKind::VariableDeclarator,
            Self::JsxText(_) => NodeKind::JsxText,
            Self::StringLiteral { .. } => NodeKind::StringLiteral,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::MemberExpression(member) => member.span(),
            Self::VariableDeclarator(declarator) => declarator.span,
            Self::JsxText(text) => text.span,
            Self::StringLiteral { literal, .. } => literal.span,
        }
    }
}
