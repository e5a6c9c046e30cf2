//! keel CLI - resolve and inspect bundler build configuration.
//!
//! # Architecture
//!
//! - [`cli`] - Argument parsing with clap
//! - [`commands`] - Command implementations
//! - [`error`] - Error types and miette conversion
//! - [`logger`] - Structured logging with tracing
//! - [`settings`] - Layered resolver settings (figment)

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod settings;

pub use error::{CliError, Result};
