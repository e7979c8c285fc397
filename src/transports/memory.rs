//! In-memory transport
//!
//! Keeps formatted records in a shared buffer. Clones share the buffer, so a
//! clone kept by the caller reads back what the logger wrote.

use crate::core::{LogLevel, Result, Transport};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct MemoryTransport {
    name: String,
    level: LogLevel,
    records: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MemoryTransport {
    pub fn new(level: LogLevel) -> Self {
        Self::named("memory", level)
    }

    /// Create a transport reporting `name` in failure messages
    pub fn named(name: impl Into<String>, level: LogLevel) -> Self {
        Self {
            name: name.into(),
            level,
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Copy of every record written so far
    pub fn records(&self) -> Vec<Vec<u8>> {
        self.records.lock().clone()
    }

    pub fn records_as_strings(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|record| String::from_utf8_lossy(record).into_owned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Transport for MemoryTransport {
    fn level(&self) -> LogLevel {
        self.level
    }

    fn write_record(&mut self, record: &[u8]) -> Result<()> {
        self.records.lock().push(record.to_vec());
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
