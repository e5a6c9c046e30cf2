//! Error handling for the keel CLI.
//!
//! `CliError` is the top-level error returned by commands. Domain errors from
//! `keel-config` convert into it automatically, and `main` turns it into a
//! miette report for display.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration serialization or validation failed
    #[error("Configuration error: {0}")]
    Config(#[from] keel_config::ConfigError),

    /// Layered CLI settings could not be extracted
    #[error("Invalid settings: {0}")]
    Settings(#[from] figment::Error),

    /// Writing the resolved configuration failed
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O errors from stdout and other streams
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// One or more resolved configurations failed validation
    #[error("{failed} of {checked} configuration(s) failed validation")]
    CheckFailed { failed: usize, checked: usize },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    match err {
        CliError::Config(e) => miette::miette!(
            help = "The resolved record violates a structural rule; run `keel check -v` for details",
            "Configuration error: {}",
            e
        ),
        CliError::Settings(e) => miette::miette!(
            help = "Check KEEL_* and ANALYZE environment variables",
            "Invalid settings: {}",
            e
        ),
        CliError::Write { path, source } => miette::miette!(
            help = "Check that the output directory exists and is writable",
            "Failed to write {}: {}",
            path.display(),
            source
        ),
        _ => miette::miette!("{}", err),
    }
}
