use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;

/// Available keel subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the build configuration for a mode
    ///
    /// Emits the complete record (plugins, dev-server proxy, build output
    /// options) for the bundler to consume.
    Resolve(ResolveArgs),

    /// Print the output path template for asset file names
    ///
    /// Images and fonts are routed to their own subdirectories; everything
    /// else lands in the generic assets directory.
    AssetName(AssetNameArgs),

    /// Print the sanitized form of file names
    Sanitize(SanitizeArgs),

    /// Validate resolved configurations
    ///
    /// Without --mode, checks development, production, and production with
    /// the bundle analyzer enabled.
    Check(CheckArgs),
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Build mode (development, production, or any custom name)
    ///
    /// Overrides KEEL_MODE. Defaults to development.
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Add the bundle analyzer (production only)
    ///
    /// Equivalent to setting ANALYZE=true in the environment.
    #[arg(long)]
    pub analyze: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the asset-name command
#[derive(Args, Debug)]
pub struct AssetNameArgs {
    /// Asset file names (e.g. logo.png, Inter.woff2)
    #[arg(required = true, value_name = "NAME")]
    pub names: Vec<String>,
}

/// Arguments for the sanitize command
#[derive(Args, Debug)]
pub struct SanitizeArgs {
    /// File names to sanitize
    #[arg(required = true, value_name = "NAME")]
    pub names: Vec<String>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Check only this mode
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Enable the bundle analyzer for the checked mode
    #[arg(long, requires = "mode")]
    pub analyze: bool,
}
