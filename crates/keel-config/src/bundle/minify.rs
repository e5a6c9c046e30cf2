use serde::{Deserialize, Serialize};

use crate::bundle::helpers::{default_true, owned, PURE_FUNCS};

/// Options forwarded to terser
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TerserOptions {
    #[serde(default)]
    pub compress: CompressOptions,
}

/// terser `compress` options.
///
/// Field names are kept in terser's snake_case spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressOptions {
    /// Strip `console.*` calls
    #[serde(default = "default_true")]
    pub drop_console: bool,

    /// Strip `debugger` statements
    #[serde(default = "default_true")]
    pub drop_debugger: bool,

    /// Calls with no side effects, removed when their result is unused
    #[serde(default)]
    pub pure_funcs: Vec<String>,
}

impl CompressOptions {
    /// Whether a call to `callee` may be dropped as side-effect free.
    ///
    /// # Example
    ///
    /// ```
    /// use keel_config::CompressOptions;
    ///
    /// let compress = CompressOptions::default();
    /// assert!(compress.is_pure("console.log"));
    /// assert!(!compress.is_pure("console.error"));
    /// ```
    pub fn is_pure(&self, callee: &str) -> bool {
        self.pure_funcs.iter().any(|f| f == callee)
    }
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            drop_console: true,
            drop_debugger: true,
            pure_funcs: owned(PURE_FUNCS),
        }
    }
}
