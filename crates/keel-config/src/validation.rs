//! Pluggable config validation strategies
//!
//! Checks structural rules a resolved record must satisfy before it is handed
//! to the bundler.

use std::collections::HashMap;

use crate::config::BuildConfig;
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()>;
}

/// Structural validation of a resolved record (no filesystem checks)
///
/// # Example
///
/// ```
/// use keel_config::{resolve, BuildMode, ConfigValidator, ResolveEnv, SchemaValidator};
///
/// let config = resolve(&BuildMode::Production, &ResolveEnv::new(true));
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        validate_manual_chunks(config)?;
        validate_proxy(config)?;
        validate_file_names(config)?;
        validate_patterns(config)?;

        if config.build.chunk_size_warning_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "build.chunkSizeWarningLimit".to_string(),
                hint: Some("must be greater than zero".to_string()),
            });
        }

        if let Some(analyzer) = config.analyzer() {
            if !analyzer.filename.ends_with(".html") {
                return Err(ConfigError::InvalidValue {
                    field: "plugins.visualizer.filename".to_string(),
                    hint: Some(format!("report must be an .html file, got {}", analyzer.filename)),
                });
            }
        }

        Ok(())
    }
}

fn validate_manual_chunks(config: &BuildConfig) -> Result<()> {
    let mut owners: HashMap<&str, &str> = HashMap::new();

    for (group, packages) in config.build.output().manual_chunks.iter() {
        if packages.is_empty() {
            return Err(ConfigError::EmptyChunkGroup {
                group: group.to_string(),
            });
        }

        for package in packages {
            if let Some(first) = owners.insert(package.as_str(), group) {
                return Err(ConfigError::DuplicateChunkPackage {
                    package: package.clone(),
                    first: first.to_string(),
                    second: group.to_string(),
                });
            }
        }
    }

    Ok(())
}

fn validate_proxy(config: &BuildConfig) -> Result<()> {
    for (prefix, rule) in &config.server.proxy {
        if !prefix.starts_with('/') {
            return Err(ConfigError::InvalidProxy {
                prefix: prefix.clone(),
                reason: "prefix must start with '/'".to_string(),
            });
        }

        let origin = rule
            .target
            .strip_prefix("http://")
            .or_else(|| rule.target.strip_prefix("https://"));
        match origin {
            Some(host) if !host.is_empty() => {}
            _ => {
                return Err(ConfigError::InvalidProxy {
                    prefix: prefix.clone(),
                    reason: format!("target '{}' is not an http(s) origin", rule.target),
                });
            }
        }
    }

    Ok(())
}

fn validate_file_names(config: &BuildConfig) -> Result<()> {
    let output = config.build.output();
    let fixed = [
        ("chunkFileNames", output.chunk_file_names.as_str()),
        ("entryFileNames", output.entry_file_names.as_str()),
    ];
    let assets = output
        .asset_file_names
        .templates()
        .map(|template| ("assetFileNames", template));

    for (field, template) in fixed.into_iter().chain(assets) {
        if !template.contains("[hash]") {
            return Err(ConfigError::MissingHashPlaceholder {
                field,
                template: template.to_string(),
            });
        }
    }

    Ok(())
}

fn validate_patterns(config: &BuildConfig) -> Result<()> {
    let output = config.build.output();
    output.asset_file_names.matcher()?;
    output.sanitize_file_name.regex()?;
    Ok(())
}

/// Convenience function for structural validation
pub fn validate(config: &BuildConfig) -> Result<()> {
    SchemaValidator.validate(config)
}
