//! Standard output transport

use crate::core::{LogLevel, LoggerError, Result, Transport};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Settings for [`StdOutTransport`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdOutTransportConfig {
    /// Minimum level written
    pub level: LogLevel,
}

/// Writes each record as one line on standard output
///
/// # Example
///
/// ```
/// use field_logger::prelude::*;
///
/// let logger = Logger::new()
///     .with_level(LogLevel::Info)
///     .with_transport(StdOutTransport::new(StdOutTransportConfig {
///         level: LogLevel::Info,
///     }));
///
/// logger.info("Hello World!");
/// ```
#[derive(Debug, Clone)]
pub struct StdOutTransport {
    config: StdOutTransportConfig,
}

impl StdOutTransport {
    pub fn new(config: StdOutTransportConfig) -> Self {
        Self { config }
    }

    pub fn with_level(level: LogLevel) -> Self {
        Self::new(StdOutTransportConfig { level })
    }
}

impl Default for StdOutTransport {
    fn default() -> Self {
        Self::new(StdOutTransportConfig::default())
    }
}

impl Transport for StdOutTransport {
    fn level(&self) -> LogLevel {
        self.config.level
    }

    fn write_record(&mut self, record: &[u8]) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(record)
            .and_then(|()| handle.write_all(b"\n"))
            .map_err(|e| LoggerError::io_operation("writing to stdout", "record not written", e))
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "stdout"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_from_config() {
        let transport = StdOutTransport::new(StdOutTransportConfig {
            level: LogLevel::Warn,
        });
        assert_eq!(transport.level(), LogLevel::Warn);
        assert!(transport.accepts(LogLevel::Error));
        assert!(!transport.accepts(LogLevel::Info));
    }

    #[test]
    fn test_default_level_is_info() {
        assert_eq!(StdOutTransport::default().level(), LogLevel::Info);
    }

    #[test]
    fn test_write_and_flush() {
        let mut transport = StdOutTransport::with_level(LogLevel::Debug);
        assert!(transport.write(br#"{"message":"stdout test"}"#, LogLevel::Info).is_ok());
        assert!(transport.flush().is_ok());
    }
}
