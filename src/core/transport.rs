//! Transport trait for record output destinations

use super::{error::Result, log_level::LogLevel};

/// A sink for formatted records, gated by its own minimum level.
///
/// Implementations report write failures instead of retrying or swallowing
/// them; the logger keeps dispatching to the remaining transports.
pub trait Transport: Send + Sync {
    /// Minimum level this transport accepts
    fn level(&self) -> LogLevel;

    /// Write one formatted record to the underlying sink
    fn write_record(&mut self, record: &[u8]) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;

    fn accepts(&self, level: LogLevel) -> bool {
        level.meets(self.level())
    }

    /// Write `record` if `level` meets this transport's threshold, no-op otherwise
    fn write(&mut self, record: &[u8], level: LogLevel) -> Result<()> {
        if !self.accepts(level) {
            return Ok(());
        }
        self.write_record(record)
    }
}
