use serde::{Deserialize, Serialize};

use crate::bundle::helpers::{
    default_true, ANALYSIS_REPORT_PATH, REACT_PLUGIN, VISUALIZER_PLUGIN,
};

/// A bundler plugin together with the options it is instantiated with.
///
/// Serialized with the npm package name as the `name` tag so the consuming
/// tool knows which factory to call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name")]
pub enum PluginOptions {
    /// Framework integration (JSX transform, fast refresh)
    #[serde(rename = "@vitejs/plugin-react")]
    React,

    /// Bundle size report
    #[serde(rename = "rollup-plugin-visualizer")]
    Visualizer(VisualizerOptions),
}

impl PluginOptions {
    pub fn package_name(&self) -> &'static str {
        match self {
            PluginOptions::React => REACT_PLUGIN,
            PluginOptions::Visualizer(_) => VISUALIZER_PLUGIN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizerOptions {
    /// Where the HTML report is written
    pub filename: String,

    /// Open the report in a browser once written
    #[serde(default = "default_true")]
    pub open: bool,

    /// Report gzip-compressed sizes
    #[serde(default)]
    pub gzip_size: bool,

    /// Report brotli-compressed sizes
    #[serde(default)]
    pub brotli_size: bool,
}

impl Default for VisualizerOptions {
    fn default() -> Self {
        Self {
            filename: ANALYSIS_REPORT_PATH.to_string(),
            open: true,
            gzip_size: true,
            brotli_size: true,
        }
    }
}
