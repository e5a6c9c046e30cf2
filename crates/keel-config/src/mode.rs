//! Build mode supplied by the invoking tool.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The environment context a configuration is resolved for.
///
/// Only the exact strings `development` and `production` are recognized.
/// Any other mode name is kept verbatim as [`BuildMode::Other`], so parsing
/// never fails.
///
/// # Example
///
/// ```
/// use keel_config::BuildMode;
///
/// assert_eq!("production".parse::<BuildMode>().unwrap(), BuildMode::Production);
/// assert_eq!(BuildMode::parse("staging"), BuildMode::Other("staging".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum BuildMode {
    #[default]
    Development,
    Production,
    Other(String),
}

impl BuildMode {
    pub fn parse(mode: &str) -> Self {
        match mode {
            "development" => BuildMode::Development,
            "production" => BuildMode::Production,
            other => BuildMode::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
            BuildMode::Other(name) => name,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, BuildMode::Production)
    }
}

impl FromStr for BuildMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(BuildMode::parse(s))
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BuildMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BuildMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(BuildMode::parse(&raw))
    }
}
