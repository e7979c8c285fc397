//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Severity of a record, most severe first.
///
/// The ordinal grows with verbosity: `Error` is `0` and `Debug` is `4`.
/// A record passes a threshold when it is at least as severe, see [`LogLevel::meets`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u32)]
pub enum LogLevel {
    /// Failures worth forwarding to an error tracking service
    Error = 0,
    /// Non-critical entries that deserve eyes
    Warn = 1,
    /// General operational entries
    #[default]
    Info = 2,
    /// Usually only enabled when debugging
    Verbose = 3,
    /// Even more verbose than verbose logging
    Debug = 4,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Verbose,
        LogLevel::Debug,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Verbose => "verbose",
            LogLevel::Debug => "debug",
        }
    }

    /// Returns `true` if a record at this level passes `threshold`.
    ///
    /// ```
    /// use field_logger::LogLevel;
    ///
    /// assert!(LogLevel::Error.meets(LogLevel::Warn));
    /// assert!(LogLevel::Warn.meets(LogLevel::Warn));
    /// assert!(!LogLevel::Debug.meets(LogLevel::Warn));
    /// ```
    #[inline]
    pub fn meets(self, threshold: LogLevel) -> bool {
        self <= threshold
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "verbose" => Ok(LogLevel::Verbose),
            "debug" => Ok(LogLevel::Debug),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

impl TryFrom<u32> for LogLevel {
    type Error = LoggerError;

    fn try_from(ordinal: u32) -> Result<Self, LoggerError> {
        LogLevel::ALL
            .get(ordinal as usize)
            .copied()
            .ok_or_else(|| LoggerError::invalid_level(ordinal))
    }
}

impl From<LogLevel> for u32 {
    fn from(level: LogLevel) -> Self {
        level as u32
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
