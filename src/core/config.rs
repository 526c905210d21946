//! Serializable logger configuration

use super::decoration::DEFAULT_PREFIX;
use super::error::Result;
use super::level::Level;
use serde::{Deserialize, Serialize};

/// Logger settings loadable from JSON and applied through
/// [`LoggerBuilder::config`](super::builder::LoggerBuilder::config).
///
/// # Example
///
/// ```
/// use fanlog::core::{Level, LoggerConfig};
///
/// let config = LoggerConfig::from_json(r#"{"level": "Debug", "suffix": ";"}"#).unwrap();
/// assert_eq!(config.level, Level::Debug);
/// assert_eq!(config.prefix, "\n  ");
/// assert_eq!(config.suffix, ";");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(default)]
    pub level: Level,

    #[serde(default = "default_prefix")]
    pub prefix: String,

    #[serde(default)]
    pub suffix: String,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::default(),
            prefix: default_prefix(),
            suffix: String::new(),
        }
    }
}
