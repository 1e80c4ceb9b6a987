//! Errors raised while loading lint configuration

use thiserror::Error;

/// Configuration failures. Rules themselves never fail.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid lint configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown rule `{0}`")]
    UnknownRule(String),

    #[error("invalid severity for `{rule}`: {value}")]
    InvalidSeverity { rule: String, value: String },
}
