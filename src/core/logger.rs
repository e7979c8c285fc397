//! Main logger implementation

use super::{
    config::LoggerConfig,
    entry::{Entry, EntryPool, PendingEntry},
    error::{LoggerError, Result, TransportFailure},
    fields::{upsert, FieldPair},
    formatter::{Formatter, JsonFormatter},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    timestamp::TimestampFormat,
    transport::Transport,
};
use parking_lot::Mutex;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::thread;

/// Idle entries kept for reuse when no capacity is configured
pub const DEFAULT_POOL_CAPACITY: usize = 32;

/// Leveled structured logger.
///
/// Configure it with the chainable `with_*` methods, then share it (for
/// example behind an `Arc`) and emit records from any thread. Every record
/// is formatted and written to all eligible transports while holding one
/// dispatch lock, so two records never interleave inside a transport.
///
/// # Example
///
/// ```
/// use field_logger::prelude::*;
///
/// let sink = MemoryTransport::new(LogLevel::Info);
/// let logger = Logger::new()
///     .with_level(LogLevel::Info)
///     .with_transport(sink.clone())
///     .with_defaults([FieldPair::new("Component", "hello-world-service")]);
///
/// logger.info("Hello World!");
/// logger.debug("not dispatched");
///
/// let records = sink.records_as_strings();
/// assert_eq!(records.len(), 1);
/// assert!(records[0].contains("\"Component\":\"hello-world-service\""));
/// ```
pub struct Logger {
    level: LogLevel,
    /// Transports in dispatch order; the lock doubles as the dispatch critical section
    transports: Mutex<Vec<Box<dyn Transport>>>,
    defaults: Vec<FieldPair>,
    formatter: Box<dyn Formatter>,
    timestamp_format: TimestampFormat,
    pool: EntryPool,
    metrics: LoggerMetrics,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: LogLevel::default(),
            transports: Mutex::new(Vec::new()),
            defaults: Vec::new(),
            formatter: Box::new(JsonFormatter::new()),
            timestamp_format: TimestampFormat::default(),
            pool: EntryPool::new(DEFAULT_POOL_CAPACITY),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Build a logger from a validated configuration. Transports are attached afterwards.
    ///
    /// # Example
    ///
    /// ```
    /// use field_logger::prelude::*;
    ///
    /// let config = LoggerConfig::from_json(r#"{
    ///     "level": "verbose",
    ///     "defaults": [{"name": "Component", "value": "billing"}]
    /// }"#)?;
    ///
    /// let logger = Logger::from_config(config)?
    ///     .with_transport(MemoryTransport::new(LogLevel::Debug));
    /// assert_eq!(logger.level(), LogLevel::Verbose);
    /// # Ok::<(), LoggerError>(())
    /// ```
    pub fn from_config(config: LoggerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new()
            .with_level(config.level)
            .with_defaults(config.defaults)
            .with_pool_capacity(config.pool_capacity)
            .with_timestamp_format(config.timestamp_format))
    }

    /// Set the minimum level that will be dispatched
    #[must_use = "builder methods return a new value"]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Append one transport after the ones already registered
    #[must_use = "builder methods return a new value"]
    pub fn with_transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transports.get_mut().push(Box::new(transport));
        self
    }

    /// Append transports, preserving their order
    #[must_use = "builder methods return a new value"]
    pub fn with_transports<I>(mut self, transports: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Transport>>,
    {
        self.transports.get_mut().extend(transports);
        self
    }

    /// Add default fields; a name that already exists has its value overwritten in place
    #[must_use = "builder methods return a new value"]
    pub fn with_defaults<I, P>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<FieldPair>,
    {
        for pair in pairs {
            upsert(&mut self.defaults, pair.into());
        }
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Set how many idle entries are kept for reuse; `0` disables pooling
    #[must_use = "builder methods return a new value"]
    pub fn with_pool_capacity(mut self, capacity: usize) -> Self {
        self.pool = EntryPool::new(capacity);
        self
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn defaults(&self) -> &[FieldPair] {
        &self.defaults
    }

    pub fn transport_count(&self) -> usize {
        self.transports.lock().len()
    }

    /// Number of entries currently waiting in the pool
    pub fn idle_entries(&self) -> usize {
        self.pool.idle_count()
    }

    pub fn pool_capacity(&self) -> usize {
        self.pool.capacity()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Check out an entry and attach per-call fields to it
    pub fn with_fields<I, P>(&self, pairs: I) -> PendingEntry<'_>
    where
        I: IntoIterator<Item = P>,
        P: Into<FieldPair>,
    {
        self.acquire().with_fields(pairs)
    }

    /// Log a message, returning formatting or transport failures to the caller
    pub fn try_log(&self, level: LogLevel, message: impl Into<String>) -> Result<()> {
        self.acquire().try_log(level, message)
    }

    /// Log a message; failures are reported on stderr and never panic
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if let Err(e) = self.try_log(level, message) {
            self.report_error(&e);
        }
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn verbose(&self, message: impl Into<String>) {
        self.log(LogLevel::Verbose, message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    /// Serialize `entry` into the bytes handed to transports.
    ///
    /// Fills the reserved `Timestamp` and `Severity` fields and merges in the
    /// defaults whose names the entry does not already carry.
    pub fn format(&self, entry: &mut Entry) -> Result<Vec<u8>> {
        let timestamp = self.timestamp_format.format(&entry.time());
        let severity = entry.level().as_str();

        let data = entry.data_mut();
        data.set_timestamp(timestamp);
        data.set_severity(severity);
        for pair in &self.defaults {
            data.insert_if_absent(pair);
        }

        self.formatter.format(data)
    }

    /// Flush every transport, attempting all of them even if some fail
    pub fn flush(&self) -> Result<()> {
        let mut transports = self.transports.lock();
        let attempted = transports.len();
        let mut failures = Vec::new();

        for (index, transport) in transports.iter_mut().enumerate() {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| transport.flush()));
            if let Some(failure) = Self::check_outcome(index, transport.name(), outcome) {
                failures.push(failure);
            }
        }

        self.collect_failures(failures, attempted)
    }

    pub(crate) fn acquire(&self) -> PendingEntry<'_> {
        PendingEntry::new(self, self.pool.acquire(&self.metrics))
    }

    pub(crate) fn release(&self, entry: Entry) {
        self.pool.release(entry);
    }

    /// Format `entry` and write it to every transport that accepts its level
    pub(crate) fn dispatch(&self, entry: &mut Entry) -> Result<()> {
        let level = entry.level();
        if !level.meets(self.level) {
            self.metrics.record_filtered();
            return Ok(());
        }

        let mut transports = self.transports.lock();
        let attempted = transports.iter().filter(|t| t.accepts(level)).count();
        if attempted == 0 {
            self.metrics.record_filtered();
            return Ok(());
        }

        let record = match self.format(entry) {
            Ok(record) => record,
            Err(e) => {
                self.metrics.record_format_failure();
                return Err(e);
            }
        };
        self.metrics.record_dispatched();

        // Per-transport isolation: a failing or panicking transport never
        // keeps the record from the ones after it
        let mut failures = Vec::new();
        for (index, transport) in transports.iter_mut().enumerate() {
            let outcome =
                panic::catch_unwind(AssertUnwindSafe(|| transport.write(&record, level)));
            if let Some(failure) = Self::check_outcome(index, transport.name(), outcome) {
                failures.push(failure);
            }
        }

        self.collect_failures(failures, attempted)
    }

    fn check_outcome(
        index: usize,
        name: &str,
        outcome: thread::Result<Result<()>>,
    ) -> Option<TransportFailure> {
        let error = match outcome {
            Ok(Ok(())) => return None,
            Ok(Err(e)) => e,
            Err(panic_info) => LoggerError::transport_panic(name, panic_message(&*panic_info)),
        };

        Some(TransportFailure {
            transport: name.to_string(),
            index,
            error,
        })
    }

    fn collect_failures(&self, failures: Vec<TransportFailure>, attempted: usize) -> Result<()> {
        if failures.is_empty() {
            return Ok(());
        }
        for _ in &failures {
            self.metrics.record_transport_failure();
        }
        Err(LoggerError::Dispatch {
            failures,
            attempted,
        })
    }

    pub(crate) fn report_error(&self, error: &LoggerError) {
        eprintln!("[LOGGER ERROR] {}", error);
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }

        let failures = self.metrics.transport_failures();
        if failures > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down after {} failed transport writes",
                failures
            );
        }
    }
}
