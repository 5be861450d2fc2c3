//! Error types for settings loading.

use thiserror::Error;

/// Errors from reading or parsing a settings file.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("cannot read {path}: {message}")]
    Io { path: String, message: String },
    /// TOML syntax error, unknown key or unknown variant name.
    #[error("invalid settings: {0}")]
    Parse(String),
    /// Settings could not be rendered back to TOML.
    #[error("cannot serialize settings: {0}")]
    Serialize(String),
}
