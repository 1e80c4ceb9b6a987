//! Guard lint rules
//!
//! This crate provides two lint rules for JavaScript/TypeScript sources parsed
//! with oxc:
//! 1. `no-process-env`: forbid reading `process.env` outside an accessor file
//! 2. `no-verb-noun-confusion`: flag "setup" / "login" / "signup" used as verbs in UI copy
//!
//! Rules are stateless; [`LintRunner`] walks the program once and dispatches
//! nodes to every enabled rule through its visitor map.

pub mod config;
pub mod error;
pub mod node;
pub mod plugin;
pub mod rules;
pub mod utils;
pub mod visitor;
mod context;
mod diagnostic;

pub use config::{RuleSeverity, RulesConfig};
pub use context::{LintContext, ScopeChain};
pub use diagnostic::{Diagnostic, DiagnosticSeverity};
pub use error::ConfigError;
pub use node::{LintNode, NodeKind};
pub use plugin::{PluginDescriptor, RuleDescriptor, PLUGIN_NAME, PLUGIN_NAMESPACE};
pub use rules::*;
pub use visitor::{lint, lint_with_config, lint_with_semantic, LintResult, LintRunner};

use serde::Serialize;

/// Rule category, serialized as the host's rule `type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    /// Code that is likely to be incorrect or to break a project convention
    Problem,
    /// Wording or style that could be improved
    Suggestion,
}

/// Rule metadata
pub trait RuleMeta {
    const NAME: &'static str;
    const CATEGORY: RuleCategory;
    const DESCRIPTION: &'static str;
    /// Message templates keyed by message id
    const MESSAGES: &'static [(&'static str, &'static str)];

    /// Repository-relative path of the rule documentation
    fn docs_path() -> String {
        format!("docs/rules/{}.md", Self::NAME)
    }

    /// Look up the template for a message id
    fn message(message_id: &str) -> &'static str {
        Self::MESSAGES
            .iter()
            .find(|(id, _)| *id == message_id)
            .map(|(_, text)| *text)
            .unwrap_or_default()
    }
}

/// A lint rule as seen by the runner
pub trait Rule: Send + Sync {
    fn name(&self) -> &'static str;

    fn descriptor(&self) -> RuleDescriptor;

    /// Node kinds this rule wants to visit
    fn node_kinds(&self) -> &'static [NodeKind];

    /// Whether the rule applies to the file at all
    fn should_run(&self, _ctx: &LintContext) -> bool {
        true
    }

    fn run<'a>(&self, node: &LintNode<'_, 'a>, ctx: &mut LintContext<'a>);
}
