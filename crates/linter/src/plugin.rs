//! Plugin descriptor for hosts that load rules by name
//!
//! Pure data: rule metadata plus the `recommended` presets in the flat
//! (list of objects) and legacy (single object) config styles.

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::RuleSeverity;
use crate::rules::all_rules;
use crate::{RuleCategory, RuleMeta};

/// Namespace rules are registered under (`guard/no-process-env`)
pub const PLUGIN_NAMESPACE: &str = "guard";
pub const PLUGIN_NAME: &str = "eslint-plugin-guard";

/// Qualify a rule name with the plugin namespace
pub fn qualified_rule_name(rule: &str) -> String {
    format!("{PLUGIN_NAMESPACE}/{rule}")
}

#[derive(Debug, Clone, Serialize)]
pub struct RuleDocs {
    pub description: &'static str,
    pub url: String,
}

/// Host-facing metadata of a single rule
#[derive(Debug, Clone, Serialize)]
pub struct RuleDescriptor {
    #[serde(skip)]
    pub name: &'static str,
    #[serde(rename = "type")]
    pub category: RuleCategory,
    pub docs: RuleDocs,
    pub messages: IndexMap<&'static str, &'static str>,
    /// Accepted options; no rule takes any
    pub schema: Vec<serde_json::Value>,
}

impl RuleDescriptor {
    pub fn of<R: RuleMeta>() -> Self {
        Self {
            name: R::NAME,
            category: R::CATEGORY,
            docs: RuleDocs {
                description: R::DESCRIPTION,
                url: R::docs_path(),
            },
            messages: R::MESSAGES.iter().copied().collect(),
            schema: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PluginMeta {
    pub name: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PresetConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<&'static str>>,
    pub rules: IndexMap<String, RuleSeverity>,
}

/// A preset in one of the two host config styles
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Preset {
    Flat(Vec<PresetConfig>),
    Legacy(PresetConfig),
}

/// The whole plugin bundle
#[derive(Debug, Clone, Serialize)]
pub struct PluginDescriptor {
    pub meta: PluginMeta,
    pub rules: IndexMap<&'static str, RuleDescriptor>,
    pub configs: IndexMap<&'static str, Preset>,
}

impl Default for PluginDescriptor {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginDescriptor {
    pub fn new() -> Self {
        let rules: IndexMap<_, _> = all_rules()
            .iter()
            .map(|rule| (rule.name(), rule.descriptor()))
            .collect();

        let recommended_rules: IndexMap<String, RuleSeverity> = rules
            .keys()
            .map(|name| (qualified_rule_name(name), RuleSeverity::Error))
            .collect();

        let mut configs = IndexMap::new();
        configs.insert(
            "recommended",
            Preset::Flat(vec![PresetConfig {
                plugins: None,
                rules: recommended_rules.clone(),
            }]),
        );
        configs.insert(
            "legacy-recommended",
            Preset::Legacy(PresetConfig {
                plugins: Some(vec![PLUGIN_NAMESPACE]),
                rules: recommended_rules,
            }),
        );

        Self {
            meta: PluginMeta {
                name: PLUGIN_NAME,
                version: env!("CARGO_PKG_VERSION"),
            },
            rules,
            configs,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
