//! Serializable logger configuration
//!
//! Holds everything about a logger that can be described as data. Transports
//! are code and are attached to the built logger with `with_transport`.

use super::error::{LoggerError, Result};
use super::fields::{is_reserved, FieldPair, FieldValue};
use super::log_level::LogLevel;
use super::logger::DEFAULT_POOL_CAPACITY;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

/// Configuration for [`Logger::from_config`](super::Logger::from_config)
///
/// # Examples
///
/// ```
/// use field_logger::prelude::*;
///
/// let config = LoggerConfig::new()
///     .with_level(LogLevel::Debug)
///     .with_default("Component", "ingest")
///     .with_pool_capacity(8);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum level dispatched by the logger
    pub level: LogLevel,
    /// Fields merged into every record
    pub defaults: Vec<FieldPair>,
    /// Idle entries kept for reuse
    pub pool_capacity: usize,
    pub timestamp_format: TimestampFormat,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            defaults: Vec::new(),
            pool_capacity: DEFAULT_POOL_CAPACITY,
            timestamp_format: TimestampFormat::default(),
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration document
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_default(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.defaults.push(FieldPair::new(name, value));
        self
    }

    #[must_use]
    pub fn with_pool_capacity(mut self, capacity: usize) -> Self {
        self.pool_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Reject default fields that could never appear in a record
    pub fn validate(&self) -> Result<()> {
        for pair in &self.defaults {
            if pair.name.is_empty() {
                return Err(LoggerError::config(
                    "LoggerConfig",
                    "default field names must not be empty",
                ));
            }
            if is_reserved(&pair.name) {
                return Err(LoggerError::config(
                    "LoggerConfig",
                    format!("'{}' is reserved and cannot be a default field", pair.name),
                ));
            }
        }
        Ok(())
    }
}
