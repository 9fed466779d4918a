//! Error types for configuration resolution.

use thiserror::Error;

/// Fatal configuration errors.
///
/// A missing or unreadable config source is not an error: it is recovered
/// locally by substituting the built-in defaults and never reaches this type.
/// Only a source that exists but cannot be trusted is fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Source was present but not parseable (bad JSON, wrong field type,
    /// missing field)
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field parsed but lies outside its documented domain
    #[error("Invalid configuration: {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl ConfigError {
    /// Creates an invalid-field error.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
