//! Logger configuration

use super::error::{LoggerError, Result};
use super::log_record::MAX_MESSAGE_BYTES;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Smallest accepted message buffer: one byte of body plus the end slot
pub const MIN_MESSAGE_BYTES: usize = 2;

/// Serializable logger settings.
///
/// # Examples
///
/// ```
/// use rust_logkit::LoggerConfig;
///
/// let config = LoggerConfig::from_json(r#"{ "destination": "app.log" }"#).unwrap();
/// assert_eq!(config.max_message_bytes, 512);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// File to append to in addition to the console
    pub destination: Option<PathBuf>,
    /// Size of the message buffer; bodies hold at most this minus one byte
    pub max_message_bytes: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            destination: None,
            max_message_bytes: MAX_MESSAGE_BYTES,
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_message_bytes < MIN_MESSAGE_BYTES {
            return Err(LoggerError::config(
                "LoggerConfig",
                format!("max_message_bytes must be at least {}", MIN_MESSAGE_BYTES),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_destination(mut self, path: impl Into<PathBuf>) -> Self {
        self.destination = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_max_message_bytes(mut self, bytes: usize) -> Self {
        self.max_message_bytes = bytes;
        self
    }
}
