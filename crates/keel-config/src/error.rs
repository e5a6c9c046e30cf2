//! Error types for configuration serialization and validation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Output errors
    #[error("failed to serialize config as {format}: {message}")]
    Serialize {
        format: &'static str,
        message: String,
    },

    // Structural validation errors
    #[error("manual chunk group '{group}' is empty")]
    EmptyChunkGroup { group: String },

    #[error("package '{package}' is assigned to both '{first}' and '{second}' chunk groups")]
    DuplicateChunkPackage {
        package: String,
        first: String,
        second: String,
    },

    #[error("invalid proxy rule for '{prefix}': {reason}")]
    InvalidProxy { prefix: String, reason: String },

    #[error("file name template for {field} has no [hash] placeholder: {template}")]
    MissingHashPlaceholder {
        field: &'static str,
        template: String,
    },

    #[error("invalid config value for {field}{}", .hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },
}
