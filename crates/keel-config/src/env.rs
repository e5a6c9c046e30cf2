//! Environment toggles read once at resolution time.

use tracing::debug;

/// Name of the variable that turns on the bundle analyzer.
pub const ANALYZE_VAR: &str = "ANALYZE";

/// Environment inputs to the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolveEnv {
    /// Emit a bundle analysis report (production builds only)
    pub analyze: bool,
}

impl ResolveEnv {
    pub fn new(analyze: bool) -> Self {
        Self { analyze }
    }

    /// Read `ANALYZE` from the process environment.
    pub fn from_process() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable lookup (process env, a map in tests, ...).
    ///
    /// # Example
    ///
    /// ```
    /// use keel_config::ResolveEnv;
    /// use std::collections::HashMap;
    ///
    /// let vars = HashMap::from([("ANALYZE", "true")]);
    /// let env = ResolveEnv::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
    /// assert!(env.analyze);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(ANALYZE_VAR);
        let analyze = raw.as_deref().is_some_and(is_truthy);
        debug!(raw = ?raw, analyze, "read {ANALYZE_VAR}");
        Self { analyze }
    }
}

/// Boolean reading of an environment string.
///
/// Empty, `0` and `false` (any case, surrounding whitespace ignored) are false.
/// Every other value is true.
pub fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    !(value.is_empty() || value == "0" || value.eq_ignore_ascii_case("false"))
}
