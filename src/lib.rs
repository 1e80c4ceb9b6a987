//! Guard lint rules for OXC
//!
//! Parses a JavaScript/TypeScript file with OXC, builds scope information and
//! runs the `guard` rules over it.
//!
//! ## Usage
//!
//! ```rust
//! use guard_lint_oxc::{lint_source, RulesConfig};
//!
//! let source = "console.log(process.env.API_KEY);";
//! let result = lint_source(source, "src/main.ts", &RulesConfig::recommended()).unwrap();
//! assert_eq!(result.diagnostics.len(), 1);
//! ```

pub use guard_linter::{
    ConfigError, Diagnostic, DiagnosticSeverity, LintResult, PluginDescriptor, RulesConfig,
};

#[cfg(feature = "napi")]
use napi_derive::napi;

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_semantic::SemanticBuilder;
use oxc_span::SourceType;
use thiserror::Error;
use tracing::debug;

/// Failures of the top-level entry points
#[derive(Debug, Error)]
pub enum LintError {
    #[error("failed to parse {filename}: {}", .messages.join("; "))]
    Parse {
        filename: String,
        messages: Vec<String>,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to serialize plugin descriptor: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A diagnostic exposed to JavaScript
#[cfg(feature = "napi")]
#[napi(object)]
pub struct JsDiagnostic {
    pub rule_id: String,
    pub message_id: String,
    pub message: String,
    /// "error" or "warning"
    pub severity: String,
    pub start: u32,
    pub end: u32,
    pub help: Option<String>,
}

/// Lint options exposed to JavaScript
#[cfg(feature = "napi")]
#[napi(object)]
#[derive(Default)]
pub struct JsLintOptions {
    /// Source filename
    /// @default "input.tsx"
    pub filename: Option<String>,

    /// ESLint-style config JSON (`{"rules": {"guard/no-process-env": "error"}}`)
    /// @default the recommended preset
    pub config: Option<String>,
}

/// Lint source code
#[cfg(feature = "napi")]
#[napi(js_name = "lintSource")]
pub fn lint_source_js(
    source: String,
    options: Option<JsLintOptions>,
) -> napi::Result<Vec<JsDiagnostic>> {
    let options = options.unwrap_or_default();
    let filename = options.filename.as_deref().unwrap_or("input.tsx");

    let config = match options.config.as_deref() {
        Some(json) => RulesConfig::from_eslint_json(json)
            .map_err(|err| napi::Error::from_reason(err.to_string()))?,
        None => RulesConfig::recommended(),
    };

    let result = lint_source(&source, filename, &config)
        .map_err(|err| napi::Error::from_reason(err.to_string()))?;

    Ok(result
        .diagnostics
        .into_iter()
        .map(|diagnostic| JsDiagnostic {
            rule_id: guard_linter::plugin::qualified_rule_name(&diagnostic.rule),
            message_id: diagnostic.message_id.to_string(),
            message: diagnostic.message,
            severity: match diagnostic.severity {
                DiagnosticSeverity::Error => "error".to_string(),
                DiagnosticSeverity::Warning => "warning".to_string(),
            },
            start: diagnostic.start,
            end: diagnostic.end,
            help: diagnostic.help,
        })
        .collect())
}

/// Plugin descriptor (rule metadata and presets) as JSON
#[cfg(feature = "napi")]
#[napi]
pub fn plugin_descriptor() -> napi::Result<String> {
    plugin_json().map_err(|err| napi::Error::from_reason(err.to_string()))
}

/// Parse, analyze and lint one file
pub fn lint_source(
    source: &str,
    filename: &str,
    config: &RulesConfig,
) -> Result<LintResult, LintError> {
    let allocator = Allocator::default();
    let source_type = SourceType::from_path(filename).unwrap_or(SourceType::tsx());

    let ret = Parser::new(&allocator, source, source_type).parse();
    if !ret.errors.is_empty() {
        debug!(filename, errors = ret.errors.len(), "parse failed");
        return Err(LintError::Parse {
            filename: filename.to_string(),
            messages: ret.errors.iter().map(|err| err.to_string()).collect(),
        });
    }

    let semantic_ret = SemanticBuilder::new().build(&ret.program);

    Ok(guard_linter::lint_with_semantic(
        &semantic_ret.semantic,
        source,
        source_type,
        Some(filename),
        &ret.program,
        config,
    ))
}

/// Lint one file with a config given as ESLint-style JSON
pub fn lint_source_with_json_config(
    source: &str,
    filename: &str,
    config_json: &str,
) -> Result<LintResult, LintError> {
    let config = RulesConfig::from_eslint_json(config_json)?;
    lint_source(source, filename, &config)
}

/// The plugin descriptor serialized as pretty JSON
pub fn plugin_json() -> Result<String, LintError> {
    Ok(PluginDescriptor::new().to_json()?)
}
