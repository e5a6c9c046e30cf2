// Fixed values baked into every resolved configuration.

pub(crate) const REACT_PLUGIN: &str = "@vitejs/plugin-react";
pub(crate) const VISUALIZER_PLUGIN: &str = "rollup-plugin-visualizer";
pub(crate) const ANALYSIS_REPORT_PATH: &str = "./dist/bundle-analysis.html";

pub(crate) const PREBUNDLED_DEPS: &[&str] = &["socket.io-client"];

pub(crate) const API_PROXY_PREFIX: &str = "/api";
pub(crate) const API_PROXY_TARGET: &str = "http://localhost:4000";

pub(crate) const PURE_FUNCS: &[&str] = &["console.log", "console.info", "console.debug"];

/// Chunk size warning threshold in KiB
pub(crate) const CHUNK_SIZE_WARNING_LIMIT: u32 = 1000;

pub(crate) const VENDOR_CHUNK: &[&str] = &[
    "react",
    "react-dom",
    "react-router-dom",
    "@reduxjs/toolkit",
    "react-redux",
];
pub(crate) const UI_CHUNK: &[&str] = &[
    "framer-motion",
    "react-icons",
    "react-toastify",
    "@mui/material",
    "@emotion/react",
    "@emotion/styled",
];
pub(crate) const UTILS_CHUNK: &[&str] = &["axios", "socket.io-client"];
pub(crate) const FABRIC_CHUNK: &[&str] = &["fabric"];

pub(crate) const IMAGE_ASSET_TEMPLATE: &str = "assets/images/[name]-[hash][extname]";
pub(crate) const FONT_ASSET_TEMPLATE: &str = "assets/fonts/[name]-[hash][extname]";
pub(crate) const DEFAULT_ASSET_TEMPLATE: &str = "assets/[name]-[hash][extname]";
pub(crate) const JS_FILE_TEMPLATE: &str = "assets/js/[name]-[hash].js";

pub(crate) const IMAGE_EXT_PATTERN: &str = "png|jpe?g|svg|gif|tiff|bmp|ico";
pub(crate) const FONT_EXT_PATTERN: &str = "woff2?|eot|ttf|otf";

pub(crate) const DISALLOWED_FILE_NAME_CHARS: &str = r"[^a-zA-Z0-9\-_~.]";
pub(crate) const FILE_NAME_REPLACEMENT: &str = "_";

pub(crate) const SILENCED_ESBUILD_DIAGNOSTIC: &str = "this-is-undefined-in-esm";

pub(crate) fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn default_true() -> bool {
    true
}
