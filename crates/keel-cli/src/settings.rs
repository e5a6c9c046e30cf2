//! Layered resolver settings.
//!
//! Priority: CLI > `ANALYZE` > `KEEL_*` environment > defaults

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use keel_config::{is_truthy, BuildMode, ResolveEnv, ANALYZE_VAR};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Inputs to the resolver after merging every source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveSettings {
    /// Mode (KEEL_MODE); environment parsing may yield a number or a bool,
    /// which is read back as its text
    pub mode: Value,

    /// Raw analyzer toggle (ANALYZE or KEEL_ANALYZE); environment parsing may
    /// yield a bool, a number or a string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyze: Option<Value>,
}

impl Default for ResolveSettings {
    fn default() -> Self {
        Self {
            mode: Value::String(BuildMode::Development.to_string()),
            analyze: None,
        }
    }
}

impl ResolveSettings {
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Env::prefixed("KEEL_"))
            .merge(Env::raw().only(&[ANALYZE_VAR]))
    }

    /// Load from the environment, then apply explicit CLI values.
    pub fn load(mode: Option<&str>, analyze: bool) -> Result<Self> {
        let mut settings: Self = Self::figment().extract()?;

        if let Some(mode) = mode {
            settings.mode = Value::String(mode.to_string());
        }
        if analyze {
            settings.analyze = Some(Value::Bool(true));
        }

        Ok(settings)
    }

    pub fn mode(&self) -> BuildMode {
        match &self.mode {
            Value::Null => BuildMode::default(),
            Value::String(s) => BuildMode::parse(s),
            other => BuildMode::parse(&other.to_string()),
        }
    }

    pub fn env(&self) -> ResolveEnv {
        ResolveEnv::new(self.analyze.as_ref().is_some_and(value_is_truthy))
    }
}

fn value_is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => is_truthy(s),
        Value::Array(_) | Value::Object(_) => true,
    }
}
