//! Production build options: minification, chunking and output naming.

mod assets;
mod helpers;
mod minify;
mod output;
mod plugin;
mod sanitize;
mod types;

use serde::{Deserialize, Serialize};

pub use assets::{
    asset_file_name, classify, extension, AssetFileNames, AssetMatcher, AssetRule,
};
pub use minify::{CompressOptions, TerserOptions};
pub use output::{ManualChunks, OutputOptions, RollupOptions};
pub use plugin::{PluginOptions, VisualizerOptions};
pub use sanitize::{sanitize, sanitize_file_name, FileNameSanitizer};
pub use types::{AssetCategory, EsTarget, LogLevel, Minifier};

pub(crate) use helpers::{
    owned, API_PROXY_PREFIX, API_PROXY_TARGET, PREBUNDLED_DEPS, SILENCED_ESBUILD_DIAGNOSTIC,
};

use helpers::CHUNK_SIZE_WARNING_LIMIT;

/// `build` section of the configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOptions {
    /// JavaScript minifier
    #[serde(default)]
    pub minify: Minifier,

    /// Options for terser when it is the selected minifier
    #[serde(default)]
    pub terser_options: TerserOptions,

    /// Warn when a chunk exceeds this size (KiB)
    pub chunk_size_warning_limit: u32,

    /// Emit one stylesheet per async chunk instead of a single file
    pub css_code_split: bool,

    #[serde(default)]
    pub rollup_options: RollupOptions,

    /// Emit source maps
    #[serde(default)]
    pub sourcemap: bool,

    /// Minify stylesheet output
    pub css_minify: bool,

    /// Syntax level of emitted JavaScript
    #[serde(default)]
    pub target: EsTarget,

    /// Report brotli-compressed sizes in the build summary
    #[serde(default)]
    pub brotli_size: bool,

    /// Inject the module preload polyfill
    #[serde(default)]
    pub polyfill_module_preload: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            minify: Minifier::Terser,
            terser_options: TerserOptions::default(),
            chunk_size_warning_limit: CHUNK_SIZE_WARNING_LIMIT,
            css_code_split: true,
            rollup_options: RollupOptions::default(),
            sourcemap: false,
            css_minify: true,
            target: EsTarget::ES2018,
            brotli_size: true,
            polyfill_module_preload: true,
        }
    }
}

impl BuildOptions {
    /// Shorthand for `rollup_options.output`
    pub fn output(&self) -> &OutputOptions {
        &self.rollup_options.output
    }
}
