use serde::{Deserialize, Serialize};

/// Target ECMAScript version for emitted syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EsTarget {
    /// ECMAScript 2015 (ES6)
    ES2015,
    /// ECMAScript 2016
    ES2016,
    /// ECMAScript 2017
    ES2017,
    /// ECMAScript 2018 (default)
    #[default]
    ES2018,
    /// ECMAScript 2019
    ES2019,
    /// ECMAScript 2020
    ES2020,
    /// ECMAScript 2021
    ES2021,
    /// ECMAScript 2022
    ES2022,
    /// Latest ECMAScript
    ESNext,
}

/// JavaScript minifier used for production output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Minifier {
    #[default]
    Terser,
    Esbuild,
}

/// Severity override for a compiler diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Verbose,
    Debug,
    Info,
    Warning,
    Error,
    Silent,
}

/// Asset routing category, decided by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetCategory {
    Images,
    Fonts,
    Other,
}
