//! guard/no-process-env
//!
//! Disallow reading `process.env` directly. Environment variables are read in
//! one accessor file (`env.ts` / `env.js`) and imported from there.

use oxc_ast::ast::{BindingPattern, MemberExpression, VariableDeclarator};
use oxc_span::{GetSpan, Span};

use crate::context::LintContext;
use crate::diagnostic::Diagnostic;
use crate::node::{LintNode, NodeKind};
use crate::utils::{is_identifier_named, member_property_name, property_key_name};
use crate::{Rule, RuleCategory, RuleDescriptor, RuleMeta};

const PROCESS: &str = "process";
const ENV: &str = "env";

/// File name suffixes allowed to touch `process.env`
pub const DEFAULT_ACCESSOR_SUFFIXES: &[&str] = &["env.ts", "env.js"];

const MESSAGE_ID: &str = "noProcessEnv";

/// no-process-env rule
#[derive(Debug, Clone)]
pub struct NoProcessEnv {
    accessor_suffixes: Vec<String>,
}

impl Default for NoProcessEnv {
    fn default() -> Self {
        Self {
            accessor_suffixes: DEFAULT_ACCESSOR_SUFFIXES
                .iter()
                .map(|suffix| suffix.to_string())
                .collect(),
        }
    }
}

impl RuleMeta for NoProcessEnv {
    const NAME: &'static str = "no-process-env";
    const CATEGORY: RuleCategory = RuleCategory::Problem;
    const DESCRIPTION: &'static str =
        "Disallow direct usage of process.env. Use the closest env.ts file instead.";
    const MESSAGES: &'static [(&'static str, &'static str)] = &[(
        MESSAGE_ID,
        "Direct access to process.env is not allowed. Import from the closest env.ts file instead.",
    )];
}

impl NoProcessEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the accessor file suffixes
    pub fn with_accessor_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accessor_suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn accessor_suffixes(&self) -> &[String] {
        &self.accessor_suffixes
    }

    /// Check if a file is an accessor file
    pub fn is_accessor_file(&self, filename: &str) -> bool {
        self.accessor_suffixes
            .iter()
            .any(|suffix| filename.ends_with(suffix.as_str()))
    }

    /// Check `process.env` / `process["env"]` / `process.#env`
    pub fn check_member_expression(&self, member: &MemberExpression, ctx: &mut LintContext) {
        if !is_identifier_named(member.object(), PROCESS) {
            return;
        }
        if member_property_name(member) != Some(ENV) {
            return;
        }
        if is_process_shadowed(ctx) {
            return;
        }
        ctx.report(self.diagnostic(member.span()));
    }

    /// Check `const { env } = process`, reporting on each `env` key
    pub fn check_variable_declarator(&self, declarator: &VariableDeclarator, ctx: &mut LintContext) {
        let Some(init) = &declarator.init else {
            return;
        };
        if !is_identifier_named(init, PROCESS) {
            return;
        }
        let BindingPattern::ObjectPattern(pattern) = &declarator.id else {
            return;
        };
        if is_process_shadowed(ctx) {
            return;
        }

        for property in &pattern.properties {
            if property_key_name(&property.key) == Some(ENV) {
                ctx.report(self.diagnostic(property.key.span()));
            }
        }
    }

    fn diagnostic(&self, span: Span) -> Diagnostic {
        Diagnostic::new(Self::NAME, MESSAGE_ID, span, Self::message(MESSAGE_ID))
            .with_help("Read the variable in your env.ts accessor and import it from there.")
    }
}

/// Walk the scope chain outwards looking for a local `process` binding.
/// Without scope information nothing is shadowed.
fn is_process_shadowed(ctx: &LintContext) -> bool {
    ctx.scope_chain()
        .is_some_and(|chain| chain.declares(PROCESS))
}

impl Rule for NoProcessEnv {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn descriptor(&self) -> RuleDescriptor {
        RuleDescriptor::of::<Self>()
    }

    fn node_kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::MemberExpression, NodeKind::VariableDeclarator]
    }

    fn should_run(&self, ctx: &LintContext) -> bool {
        !ctx.filename().is_some_and(|filename| self.is_accessor_file(filename))
    }

    fn run<'a>(&self, node: &LintNode<'_, 'a>, ctx: &mut LintContext<'a>) {
        match node {
            LintNode::MemberExpression(member) => self.check_member_expression(member, ctx),
            LintNode::VariableDeclarator(declarator) => {
                self.check_variable_declarator(declarator, ctx)
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visitor::LintRunner;
    use crate::{DiagnosticSeverity, RulesConfig};
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_semantic::SemanticBuilder;
    use oxc_span::SourceType;

    fn lint_file(source: &str, filename: &str) -> Vec<Diagnostic> {
        let allocator = Allocator::default();
        let source_type = SourceType::ts();
        let ret = Parser::new(&allocator, source, source_type).parse();
        let semantic_ret = SemanticBuilder::new()
            .with_excess_capacity(0.0)
            .build(&ret.program);
        let ctx = LintContext::new(source, source_type)
            .with_semantic(&semantic_ret.semantic)
            .with_filename(filename);
        let config = RulesConfig::none()
            .with_no_process_env(NoProcessEnv::new(), DiagnosticSeverity::Error);
        LintRunner::new(ctx, &config).run(&ret.program).diagnostics
    }

    fn spans(source: &str, diagnostics: &[Diagnostic]) -> Vec<String> {
        diagnostics
            .iter()
            .map(|d| source[d.start as usize..d.end as usize].to_string())
            .collect()
    }

    #[test]
    fn test_rule_name() {
        assert_eq!(NoProcessEnv::NAME, "no-process-env");
    }

    #[test]
    fn test_accessor_suffixes() {
        let rule = NoProcessEnv::new();
        assert!(rule.is_accessor_file("/app/env.ts"));
        assert!(rule.is_accessor_file("/app/src/env.js"));
        assert!(rule.is_accessor_file("/app/serverenv.ts"));
        assert!(!rule.is_accessor_file("/app/env.tsx"));
        assert!(!rule.is_accessor_file("/app/config.ts"));

        let rule = rule.with_accessor_suffixes(["config/env.mjs"]);
        assert!(rule.is_accessor_file("/app/config/env.mjs"));
        assert!(!rule.is_accessor_file("/app/env.ts"));
    }

    #[test]
    fn test_static_member_access() {
        let source = "console.log(process.env.API_KEY);";
        let diagnostics = lint_file(source, "/app/main.ts");
        assert_eq!(spans(source, &diagnostics), vec!["process.env"]);
        assert_eq!(diagnostics[0].message_id, "noProcessEnv");
        assert_eq!(diagnostics[0].severity, DiagnosticSeverity::Error);
    }

    #[test]
    fn test_computed_string_key() {
        let source = r#"const foo = process["env"].FOO;"#;
        let diagnostics = lint_file(source, "/app/main.ts");
        assert_eq!(spans(source, &diagnostics), vec![r#"process["env"]"#]);
    }

    #[test]
    fn test_computed_identifier_key_ignored() {
        let diagnostics = lint_file("const env = 'x'; process[env];", "/app/main.ts");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_parenthesized_object() {
        let source = "(process).env.FOO;";
        let diagnostics = lint_file(source, "/app/main.ts");
        assert_eq!(spans(source, &diagnostics), vec!["(process).env"]);
    }

    #[test]
    fn test_other_member_ignored() {
        assert!(lint_file("process.version;", "/app/main.ts").is_empty());
        assert!(lint_file("other.env.FOO;", "/app/main.ts").is_empty());
    }

    #[test]
    fn test_destructuring_reports_key() {
        let source = "const { env } = process;";
        let diagnostics = lint_file(source, "/app/main.ts");
        assert_eq!(spans(source, &diagnostics), vec!["env"]);
    }

    #[test]
    fn test_destructuring_renamed_and_string_keys() {
        let source = r#"const { env: e, version } = process; let { "env": f } = process;"#;
        let diagnostics = lint_file(source, "/app/main.ts");
        assert_eq!(spans(source, &diagnostics), vec!["env", r#""env""#]);
    }

    #[test]
    fn test_nested_and_rest_patterns_ignored() {
        assert!(lint_file("const { a: { env } } = process;", "/app/main.ts").is_empty());
        assert!(lint_file("const [{ env }] = process;", "/app/main.ts").is_empty());
        assert!(lint_file("const { ...env } = process;", "/app/main.ts").is_empty());
    }

    #[test]
    fn test_destructuring_binding_shapes() {
        assert!(lint_file("const [env] = process;", "/app/main.ts").is_empty());
        assert!(lint_file("const env = process;", "/app/main.ts").is_empty());

        let source = "const { env = {} } = process;";
        assert_eq!(spans(source, &lint_file(source, "/app/main.ts")), vec!["env"]);
    }

    #[test]
    fn test_destructuring_other_init_ignored() {
        assert!(lint_file("const { env } = other;", "/app/main.ts").is_empty());
        assert!(lint_file("const { env } = process();", "/app/main.ts").is_empty());
    }

    #[test]
    fn test_accessor_file_exempt() {
        let source = "const { env } = process; console.log(process.env.FOO);";
        assert!(lint_file(source, "/app/env.ts").is_empty());
        assert_eq!(lint_file(source, "/app/main.ts").len(), 2);
    }

    #[test]
    fn test_shadowed_by_parameter() {
        let source = "function read(process) { return process.env.FOO; }";
        assert!(lint_file(source, "/app/main.ts").is_empty());
    }

    #[test]
    fn test_shadowed_by_function_declaration() {
        let source = "function process() { return { env: {} }; } const { env } = process(); process.env;";
        assert!(lint_file(source, "/app/main.ts").is_empty());
    }

    #[test]
    fn test_shadowing_is_lexical() {
        let source = "function inner() { const process = { env: {} }; return process.env; }\nprocess.env.FOO;";
        let diagnostics = lint_file(source, "/app/main.ts");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(spans(source, &diagnostics), vec!["process.env"]);
        assert!(diagnostics[0].start > source.find('\n').unwrap() as u32);
    }

    #[test]
    fn test_idempotent() {
        let source = "process.env.A; const { env } = process;";
        assert_eq!(lint_file(source, "/app/main.ts"), lint_file(source, "/app/main.ts"));
    }
}
