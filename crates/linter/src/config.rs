//! Rule configuration
//!
//! Which rules run and at what severity. Can be built in code or loaded from
//! the `rules` section of an ESLint-style JSON config.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConfigError;
use crate::plugin::qualified_rule_name;
use crate::rules::{NoProcessEnv, NoVerbNounConfusion};
use crate::{DiagnosticSeverity, Rule, RuleMeta, PLUGIN_NAMESPACE};

/// Severity as written in a host config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSeverity {
    Off,
    Warn,
    Error,
}

impl RuleSeverity {
    /// Parse `"off" | "warn" | "error"`, `0 | 1 | 2`, or an array whose first
    /// element is one of those
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(level) => match level.as_str() {
                "off" => Some(Self::Off),
                "warn" => Some(Self::Warn),
                "error" => Some(Self::Error),
                _ => None,
            },
            Value::Number(level) => match level.as_u64()? {
                0 => Some(Self::Off),
                1 => Some(Self::Warn),
                2 => Some(Self::Error),
                _ => None,
            },
            Value::Array(items) => match items.first()? {
                Value::Array(_) => None,
                first => Self::from_json(first),
            },
            _ => None,
        }
    }

    pub fn diagnostic_severity(self) -> Option<DiagnosticSeverity> {
        match self {
            Self::Off => None,
            Self::Warn => Some(DiagnosticSeverity::Warning),
            Self::Error => Some(DiagnosticSeverity::Error),
        }
    }
}

#[derive(Deserialize)]
struct HostConfig {
    #[serde(default)]
    rules: IndexMap<String, Value>,
}

/// Configuration for which rules are enabled
#[derive(Debug, Clone)]
pub struct RulesConfig {
    pub no_process_env: Option<(NoProcessEnv, DiagnosticSeverity)>,
    pub no_verb_noun_confusion: Option<(NoVerbNounConfusion, DiagnosticSeverity)>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::recommended()
    }
}

impl RulesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every rule at error severity
    pub fn recommended() -> Self {
        Self {
            no_process_env: Some((NoProcessEnv::new(), DiagnosticSeverity::Error)),
            no_verb_noun_confusion: Some((NoVerbNounConfusion::new(), DiagnosticSeverity::Error)),
        }
    }

    pub fn none() -> Self {
        Self {
            no_process_env: None,
            no_verb_noun_confusion: None,
        }
    }

    pub fn with_no_process_env(mut self, rule: NoProcessEnv, severity: DiagnosticSeverity) -> Self {
        self.no_process_env = Some((rule, severity));
        self
    }

    pub fn with_no_verb_noun_confusion(
        mut self,
        rule: NoVerbNounConfusion,
        severity: DiagnosticSeverity,
    ) -> Self {
        self.no_verb_noun_confusion = Some((rule, severity));
        self
    }

    /// Set a rule's severity by its unqualified name, keeping any rule options
    pub fn set_severity(&mut self, rule: &str, severity: RuleSeverity) -> Result<(), ConfigError> {
        let level = severity.diagnostic_severity();
        match rule {
            name if name == NoProcessEnv::NAME => {
                let current = self.no_process_env.take().map(|(rule, _)| rule);
                self.no_process_env = level.map(|level| (current.unwrap_or_default(), level));
            }
            name if name == NoVerbNounConfusion::NAME => {
                let current = self.no_verb_noun_confusion.take().map(|(rule, _)| rule);
                self.no_verb_noun_confusion =
                    level.map(|level| (current.unwrap_or_default(), level));
            }
            _ => return Err(ConfigError::UnknownRule(qualified_rule_name(rule))),
        }
        Ok(())
    }

    /// Load the `rules` section of an ESLint-style JSON config.
    ///
    /// Only `guard/*` entries are read; rules that are not mentioned stay off.
    pub fn from_eslint_json(json: &str) -> Result<Self, ConfigError> {
        let host: HostConfig = serde_json::from_str(json)?;
        let prefix = format!("{PLUGIN_NAMESPACE}/");

        let mut config = Self::none();
        for (key, value) in &host.rules {
            let Some(rule) = key.strip_prefix(&prefix) else {
                continue;
            };
            let severity =
                RuleSeverity::from_json(value).ok_or_else(|| ConfigError::InvalidSeverity {
                    rule: key.clone(),
                    value: value.to_string(),
                })?;
            config.set_severity(rule, severity)?;
        }
        Ok(config)
    }

    /// Enabled rules with their severities, in registration order
    pub fn enabled_rules(&self) -> Vec<(Box<dyn Rule>, DiagnosticSeverity)> {
        let mut rules: Vec<(Box<dyn Rule>, DiagnosticSeverity)> = Vec::new();
        if let Some((rule, severity)) = &self.no_process_env {
            rules.push((Box::new(rule.clone()), *severity));
        }
        if let Some((rule, severity)) = &self.no_verb_noun_confusion {
            rules.push((Box::new(rule.clone()), *severity));
        }
        rules
    }
}
