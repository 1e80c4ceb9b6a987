//! guard/no-verb-noun-confusion
//!
//! Discourage "setup" / "login" / "signup" as verbs in user-facing copy. The
//! verbs are two words ("set up", "log in", "sign up"); the one-word forms are
//! nouns or adjectives ("Initial setup", "Login screen").

use std::sync::LazyLock;

use oxc_ast::ast::JSXAttribute;
use oxc_span::Span;
use regex::Regex;

use crate::context::LintContext;
use crate::diagnostic::Diagnostic;
use crate::node::{LintNode, NodeKind};
use crate::utils::jsx_attribute_name;
use crate::{Rule, RuleCategory, RuleDescriptor, RuleMeta};

/// Attributes whose string values are usually shown to users
static UI_COPY_ATTRIBUTES: phf::Set<&'static str> = phf::phf_set! {
    "aria-label",
    "title",
    "placeholder",
};

/// Noun phrases that are fine even when they start with a flagged word
pub const ALLOWED_NOUN_PHRASES: &[&str] = &[
    "setup wizard",
    "initial setup",
    "system setup",
    "database setup",
    "login screen",
    "login form",
    "login page",
    "signup form",
    "signup page",
];

/// The misused word found in a piece of copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbMisuse {
    Setup,
    Login,
    Signup,
}

impl VerbMisuse {
    pub fn message_id(self) -> &'static str {
        match self {
            Self::Setup => "noVerbSetup",
            Self::Login => "noVerbLogin",
            Self::Signup => "noVerbSignup",
        }
    }

    fn help(self) -> &'static str {
        match self {
            Self::Setup => "Write \"Set up\" when it is an action.",
            Self::Login => "Write \"Log in\" when it is an action.",
            Self::Signup => "Write \"Sign up\" when it is an action.",
        }
    }
}

/// Checked in order; the first match wins. Whole-word labels come before
/// leading words. The boundary is ASCII-only: "Setupé" still starts with
/// the word "Setup".
static VERB_PATTERNS: LazyLock<Vec<(Regex, VerbMisuse)>> = LazyLock::new(|| {
    [
        (r"(?i)^setup$", VerbMisuse::Setup),
        (r"(?i)^login$", VerbMisuse::Login),
        (r"(?i)^signup$", VerbMisuse::Signup),
        (r"(?i)^setup(?-u:\b)", VerbMisuse::Setup),
        (r"(?i)^login(?-u:\b)", VerbMisuse::Login),
        (r"(?i)^signup(?-u:\b)", VerbMisuse::Signup),
    ]
    .into_iter()
    .map(|(pattern, misuse)| (Regex::new(pattern).expect("valid verb pattern"), misuse))
    .collect()
});

/// no-verb-noun-confusion rule
#[derive(Debug, Clone, Default)]
pub struct NoVerbNounConfusion;

impl RuleMeta for NoVerbNounConfusion {
    const NAME: &'static str = "no-verb-noun-confusion";
    const CATEGORY: RuleCategory = RuleCategory::Suggestion;
    const DESCRIPTION: &'static str = "Discourage using \"setup\" / \"login\" / \"signup\" as verbs in UI copy; prefer \"set up\" / \"log in\" / \"sign up\".";
    const MESSAGES: &'static [(&'static str, &'static str)] = &[
        (
            "noVerbSetup",
            "Prefer \"set up\" as a verb. Reserve \"setup\" for nouns/adjectives (e.g. \"Initial setup\").",
        ),
        (
            "noVerbLogin",
            "Prefer \"log in\" as a verb. Reserve \"login\" for nouns/adjectives (e.g. \"Login screen\").",
        ),
        (
            "noVerbSignup",
            "Prefer \"sign up\" as a verb. Reserve \"signup\" for nouns/adjectives (e.g. \"Signup form\").",
        ),
    ];
}

impl NoVerbNounConfusion {
    pub fn new() -> Self {
        Self
    }

    /// Whether a string literal is likely rendered to users: only direct
    /// values of `aria-label`, `title` and `placeholder` qualify.
    pub fn is_ui_copy_attribute(parent: Option<&JSXAttribute>) -> bool {
        parent
            .and_then(jsx_attribute_name)
            .is_some_and(|name| UI_COPY_ATTRIBUTES.contains(name))
    }

    /// Classify a piece of copy. Returns `None` for empty text, allowed noun
    /// phrases, and text that does not start with a flagged word.
    pub fn classify(raw: &str) -> Option<VerbMisuse> {
        let text = raw.trim_matches(is_copy_whitespace);
        if text.is_empty() || is_allowed_noun_phrase(text) {
            return None;
        }

        VERB_PATTERNS
            .iter()
            .find(|(pattern, _)| pattern.is_match(text))
            .map(|(_, misuse)| *misuse)
    }

    /// Check a piece of UI copy and report at most one diagnostic
    pub fn check_text(&self, raw: &str, span: Span, ctx: &mut LintContext) {
        let Some(misuse) = Self::classify(raw) else {
            return;
        };
        let message_id = misuse.message_id();
        ctx.report(
            Diagnostic::new(Self::NAME, message_id, span, Self::message(message_id))
                .with_help(misuse.help()),
        );
    }
}

/// Whitespace as JS `String.prototype.trim` sees it: includes the BOM,
/// excludes NEL.
fn is_copy_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

fn is_allowed_noun_phrase(text: &str) -> bool {
    let lower = text.to_lowercase();
    ALLOWED_NOUN_PHRASES
        .iter()
        .any(|phrase| lower.contains(phrase))
}

impl Rule for NoVerbNounConfusion {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn descriptor(&self) -> RuleDescriptor {
        RuleDescriptor::of::<Self>()
    }

    fn node_kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::JsxText, NodeKind::StringLiteral]
    }

    fn run<'a>(&self, node: &LintNode<'_, 'a>, ctx: &mut LintContext<'a>) {
        match node {
            LintNode::JsxText(text) => self.check_text(&text.value, node.span(), ctx),
            LintNode::StringLiteral { literal, parent } => {
                if Self::is_ui_copy_attribute(*parent) {
                    self.check_text(&literal.value, node.span(), ctx);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_name() {
        assert_eq!(NoVerbNounConfusion::NAME, "no-verb-noun-confusion");
    }

    #[test]
    fn test_exact_words() {
        assert_eq!(NoVerbNounConfusion::classify("Setup"), Some(VerbMisuse::Setup));
        assert_eq!(NoVerbNounConfusion::classify("LOGIN"), Some(VerbMisuse::Login));
        assert_eq!(NoVerbNounConfusion::classify("  signup \n"), Some(VerbMisuse::Signup));
    }

    #[test]
    fn test_leading_words() {
        assert_eq!(
            NoVerbNounConfusion::classify("Setup your account"),
            Some(VerbMisuse::Setup)
        );
        assert_eq!(
            NoVerbNounConfusion::classify("Login to continue"),
            Some(VerbMisuse::Login)
        );
        assert_eq!(NoVerbNounConfusion::classify("Signup now"), Some(VerbMisuse::Signup));
        assert_eq!(NoVerbNounConfusion::classify("Setup-now"), Some(VerbMisuse::Setup));
    }

    #[test]
    fn test_word_boundary_required() {
        assert_eq!(NoVerbNounConfusion::classify("Setups"), None);
        assert_eq!(NoVerbNounConfusion::classify("Loginless mode"), None);
        assert_eq!(NoVerbNounConfusion::classify("Signup_flow"), None);
    }

    #[test]
    fn test_word_boundary_is_ascii() {
        assert_eq!(NoVerbNounConfusion::classify("Setupé now"), Some(VerbMisuse::Setup));
        assert_eq!(NoVerbNounConfusion::classify("Loginñ"), Some(VerbMisuse::Login));
        assert_eq!(NoVerbNounConfusion::classify("signupü"), Some(VerbMisuse::Signup));
    }

    #[test]
    fn test_two_word_verbs_pass() {
        for text in ["Set up", "Log in", "Sign up", "Set up your account", "Log in to continue"] {
            assert_eq!(NoVerbNounConfusion::classify(text), None, "{text}");
        }
    }

    #[test]
    fn test_allow_list_wins() {
        for text in [
            "Initial setup",
            "Login screen",
            "Complete the signup form",
            "Setup wizard",
            "Login page for admins",
            "DATABASE SETUP",
        ] {
            assert_eq!(NoVerbNounConfusion::classify(text), None, "{text}");
        }
    }

    #[test]
    fn test_only_leading_word_checked() {
        assert_eq!(NoVerbNounConfusion::classify("Go to Login"), None);
        assert_eq!(NoVerbNounConfusion::classify("Please signup"), None);
    }

    #[test]
    fn test_empty_text_ignored() {
        assert_eq!(NoVerbNounConfusion::classify(""), None);
        assert_eq!(NoVerbNounConfusion::classify("   \n\t"), None);
        assert_eq!(NoVerbNounConfusion::classify("\u{FEFF}\u{00A0}"), None);
    }

    #[test]
    fn test_trims_byte_order_mark() {
        assert_eq!(NoVerbNounConfusion::classify("\u{FEFF}Setup"), Some(VerbMisuse::Setup));
        assert_eq!(NoVerbNounConfusion::classify("\u{00A0}Login\u{FEFF}"), Some(VerbMisuse::Login));
        assert!(!is_copy_whitespace('\u{0085}'));
    }

    #[test]
    fn test_message_ids_have_templates() {
        for misuse in [VerbMisuse::Setup, VerbMisuse::Login, VerbMisuse::Signup] {
            assert!(!NoVerbNounConfusion::message(misuse.message_id()).is_empty());
        }
    }

    #[test]
    fn test_ui_copy_attribute_without_parent() {
        assert!(!NoVerbNounConfusion::is_ui_copy_attribute(None));
    }
}
