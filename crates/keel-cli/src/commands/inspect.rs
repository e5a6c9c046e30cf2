//! `keel asset-name` and `keel sanitize`: show how names are rewritten.

use std::io::Write;

use keel_config::{classify, sanitize_file_name, AssetFileNames};
use tracing::debug;

use crate::cli::{AssetNameArgs, SanitizeArgs};
use crate::error::Result;

/// Prints `<name>\t<template>` per asset name.
pub fn asset_name_execute(args: AssetNameArgs) -> Result<()> {
    let rules = AssetFileNames::default();
    let matcher = rules.matcher()?;
    let mut stdout = std::io::stdout().lock();
    for name in &args.names {
        let name = name.as_str();
        debug!(name, category = ?classify(Some(name)), "classified asset");
        writeln!(stdout, "{name}\t{}", matcher.file_name_for(Some(name)))?;
    }
    Ok(())
}

/// Prints one sanitized name per line.
pub fn sanitize_execute(args: SanitizeArgs) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    for name in &args.names {
        writeln!(stdout, "{}", sanitize_file_name(name))?;
    }
    Ok(())
}
