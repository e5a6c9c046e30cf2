//! The resolved configuration record.
//!
//! This module provides the top-level `BuildConfig` struct and its
//! serialization for consumption by the bundler. For how a record is
//! produced, see the `resolver` module.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bundle::{
    owned, BuildOptions, LogLevel, PluginOptions, VisualizerOptions, PREBUNDLED_DEPS,
    SILENCED_ESBUILD_DIAGNOSTIC,
};
use crate::dev::DevServerOptions;
use crate::error::{ConfigError, Result as ConfigResult};

/// Complete bundler configuration.
///
/// Every record has the same set of fields regardless of the mode it was
/// resolved for; only the length of `plugins` varies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    pub plugins: Vec<PluginOptions>,

    #[serde(default)]
    pub optimize_deps: OptimizeDepsOptions,

    #[serde(default)]
    pub server: DevServerOptions,

    #[serde(default)]
    pub build: BuildOptions,

    #[serde(default)]
    pub esbuild: EsbuildOptions,
}

/// Dependency pre-bundling hints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizeDepsOptions {
    /// Packages always pre-bundled, even when not discovered by the scanner
    #[serde(default)]
    pub include: Vec<String>,
}

impl Default for OptimizeDepsOptions {
    fn default() -> Self {
        Self {
            include: owned(PREBUNDLED_DEPS),
        }
    }
}

/// Options for the esbuild transform used in development
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EsbuildOptions {
    /// Per-diagnostic severity overrides
    #[serde(default)]
    pub log_override: IndexMap<String, LogLevel>,
}

impl Default for EsbuildOptions {
    fn default() -> Self {
        let mut log_override = IndexMap::new();
        log_override.insert(SILENCED_ESBUILD_DIAGNOSTIC.to_string(), LogLevel::Silent);
        Self { log_override }
    }
}

impl BuildConfig {
    /// Parse from serde_json::Value (e.g. a previously emitted record)
    ///
    /// # Example
    ///
    /// ```
    /// use keel_config::{resolve, BuildConfig, BuildMode, ResolveEnv};
    ///
    /// let config = resolve(&BuildMode::Production, &ResolveEnv::default());
    /// let value = config.to_value().unwrap();
    /// assert_eq!(BuildConfig::from_value(value).unwrap(), config);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| serialize_error("json", e))
    }

    /// Pretty-printed JSON, as written for the bundler to read
    pub fn to_json_pretty(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| serialize_error("json", e))
    }

    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| serialize_error("toml", e))
    }

    /// The bundle analyzer options, when the analyzer is enabled
    pub fn analyzer(&self) -> Option<&VisualizerOptions> {
        self.plugins.iter().find_map(|plugin| match plugin {
            PluginOptions::Visualizer(opts) => Some(opts),
            _ => None,
        })
    }
}

fn serialize_error(format: &'static str, err: impl std::fmt::Display) -> ConfigError {
    ConfigError::Serialize {
        format,
        message: err.to_string(),
    }
}
