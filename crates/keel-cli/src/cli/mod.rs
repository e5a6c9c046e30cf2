//! Command-line interface definition for keel.
//!
//! This module defines the CLI structure using clap v4's derive macros.
//!
//! # Command Structure
//!
//! - `keel resolve` - Resolve the build configuration and emit it
//! - `keel asset-name` - Show where assets are written
//! - `keel sanitize` - Show how file names are sanitized
//! - `keel check` - Validate resolved configurations

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{AssetNameArgs, CheckArgs, Command, ResolveArgs, SanitizeArgs};
pub use enums::*;

/// keel - build configuration for front-end bundlers
#[derive(Parser, Debug)]
#[command(
    name = "keel",
    version,
    about = "Resolve build configuration for a front-end bundler",
    long_about = "keel resolves the bundler configuration for a build mode: plugins,\n\
                  dev-server proxy rules, minification, manual chunking and asset naming.\n\
                  The resolved record is emitted as JSON or TOML for the bundler to consume."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
