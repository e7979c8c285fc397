//! File transport implementation

use crate::core::{LogLevel, LoggerError, Result, Transport};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends each record as one line to a file (JSON lines with the default formatter)
pub struct FileTransport {
    writer: BufWriter<File>,
    path: PathBuf,
    level: LogLevel,
}

impl FileTransport {
    pub fn new(path: impl Into<PathBuf>, level: LogLevel) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    format!("opening '{}'", path.display()),
                    "cannot open log file",
                    e,
                )
            })?;

        Ok(Self {
            writer: BufWriter::new(file),
            path,
            level,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Transport for FileTransport {
    fn level(&self) -> LogLevel {
        self.level
    }

    fn write_record(&mut self, record: &[u8]) -> Result<()> {
        self.writer.write_all(record)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileTransport {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_file_transport_appends_lines() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("test.jsonl");

        let mut transport = FileTransport::new(&log_path, LogLevel::Debug)?;
        transport.write(br#"{"message":"one"}"#, LogLevel::Info)?;
        transport.write(br#"{"message":"two"}"#, LogLevel::Debug)?;
        transport.flush()?;

        let content = fs::read_to_string(&log_path)?;
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec![r#"{"message":"one"}"#, r#"{"message":"two"}"#]);
        assert_eq!(transport.path(), log_path.as_path());

        Ok(())
    }

    #[test]
    fn test_file_transport_skips_below_threshold() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("errors.jsonl");

        let mut transport = FileTransport::new(&log_path, LogLevel::Error)?;
        transport.write(b"warn record", LogLevel::Warn)?;
        transport.write(b"error record", LogLevel::Error)?;
        drop(transport);

        let content = fs::read_to_string(&log_path)?;
        assert_eq!(content, "error record\n");

        Ok(())
    }

    #[test]
    fn test_file_transport_reports_open_failure() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("no-such-dir").join("app.log");

        let result = FileTransport::new(&missing, LogLevel::Info);
        assert!(matches!(result, Err(LoggerError::IoOperation { .. })));
    }
}
