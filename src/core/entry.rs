//! Log entries and the entry pool
//!
//! An [`Entry`] is the reusable state of one in-flight record. Idle entries
//! live in the logger's [`EntryPool`]; a checked-out entry is owned by exactly
//! one [`PendingEntry`] until its terminal log call, after which it is reset
//! and returned to the pool.

use super::error::Result;
use super::fields::{FieldPair, FieldValue, Fields, MESSAGE_KEY};
use super::log_level::LogLevel;
use super::logger::Logger;
use super::metrics::LoggerMetrics;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

/// State of one record under construction
#[derive(Debug, Clone, Default)]
pub struct Entry {
    level: LogLevel,
    time: DateTime<Utc>,
    data: Fields,
}

impl Entry {
    /// Create a detached entry stamped with the current time
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        let mut entry = Self::default();
        entry.fill(level, message.into());
        entry
    }

    /// Merge fields into the entry; a later pair with the same name overwrites an earlier one
    #[must_use]
    pub fn with_fields<I, P>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<FieldPair>,
    {
        self.add_fields(pairs);
        self
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Creation instant, the Unix epoch while the entry is idle
    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    pub fn data(&self) -> &Fields {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut Fields {
        &mut self.data
    }

    pub(crate) fn add_fields<I, P>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<FieldPair>,
    {
        for pair in pairs {
            let pair = pair.into();
            self.data.insert(pair.name, pair.value);
        }
    }

    pub(crate) fn fill(&mut self, level: LogLevel, message: String) {
        self.time = Utc::now();
        self.level = level;
        self.data.insert(MESSAGE_KEY, message);
    }

    /// Drop all record data so nothing leaks into the next checkout
    pub(crate) fn reset(&mut self) {
        self.level = LogLevel::default();
        self.time = DateTime::<Utc>::default();
        self.data = Fields::new();
    }
}

/// Free list of idle entries
#[derive(Debug)]
pub(crate) struct EntryPool {
    idle: Mutex<Vec<Entry>>,
    capacity: usize,
}

impl EntryPool {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            idle: Mutex::new(Vec::with_capacity(capacity)),
            capacity,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn idle_count(&self) -> usize {
        self.idle.lock().len()
    }

    /// Take an idle entry, allocating a fresh one if the pool is empty
    pub(crate) fn acquire(&self, metrics: &LoggerMetrics) -> Entry {
        let reused = self.idle.lock().pop();
        match reused {
            Some(entry) => {
                metrics.record_pool_reuse();
                entry
            }
            None => {
                metrics.record_pool_allocation();
                Entry::default()
            }
        }
    }

    /// Reset `entry` and keep it for reuse unless the pool is full
    pub(crate) fn release(&self, mut entry: Entry) {
        entry.reset();
        let mut idle = self.idle.lock();
        if idle.len() < self.capacity {
            idle.push(entry);
        }
    }
}

/// An entry checked out of a [`Logger`] pool.
///
/// Returned by [`Logger::with_fields`]. Finish it with [`PendingEntry::log`]
/// or one of the level shorthands; the entry goes back to the pool when the
/// handle is consumed or dropped, whichever comes first.
///
/// # Example
///
/// ```
/// use field_logger::prelude::*;
///
/// let sink = MemoryTransport::new(LogLevel::Debug);
/// let logger = Logger::new().with_transport(sink.clone());
///
/// logger
///     .with_fields([FieldPair::new("user_id", 42)])
///     .with_field("action", "login")
///     .info("user logged in");
///
/// assert_eq!(sink.len(), 1);
/// ```
#[must_use = "a pending entry does nothing until one of its log methods is called"]
pub struct PendingEntry<'a> {
    logger: &'a Logger,
    entry: Entry,
}

impl<'a> PendingEntry<'a> {
    pub(crate) fn new(logger: &'a Logger, entry: Entry) -> Self {
        Self { logger, entry }
    }

    pub fn with_fields<I, P>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<FieldPair>,
    {
        self.entry.add_fields(pairs);
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.entry.data_mut().insert(name, value);
        self
    }

    /// Fields attached so far
    pub fn data(&self) -> &Fields {
        self.entry.data()
    }

    /// Log the entry and return any formatting or transport failure
    pub fn try_log(mut self, level: LogLevel, message: impl Into<String>) -> Result<()> {
        self.entry.fill(level, message.into());
        self.logger.dispatch(&mut self.entry)
    }

    /// Log the entry, reporting failures on stderr
    pub fn log(self, level: LogLevel, message: impl Into<String>) {
        let logger = self.logger;
        if let Err(e) = self.try_log(level, message) {
            logger.report_error(&e);
        }
    }

    #[inline]
    pub fn error(self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn warn(self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn info(self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn verbose(self, message: impl Into<String>) {
        self.log(LogLevel::Verbose, message);
    }

    #[inline]
    pub fn debug(self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }
}

impl Drop for PendingEntry<'_> {
    fn drop(&mut self) {
        self.logger.release(std::mem::take(&mut self.entry));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_is_stamped() {
        let before = Utc::now();
        let entry = Entry::new(LogLevel::Warn, "disk almost full");

        assert_eq!(entry.level(), LogLevel::Warn);
        assert!(entry.time() >= before);
        assert_eq!(
            entry.data().get(MESSAGE_KEY),
            Some(&FieldValue::String("disk almost full".to_string()))
        );
    }

    #[test]
    fn test_with_fields_later_pair_wins() {
        let entry = Entry::new(LogLevel::Info, "x").with_fields([
            FieldPair::new("attempt", 1),
            FieldPair::new("attempt", 2),
        ]);

        assert_eq!(entry.data().get("attempt"), Some(&FieldValue::Int(2)));
    }

    #[test]
    fn test_terminal_message_overwrites_caller_message_field() {
        let mut entry = Entry::default().with_fields([("message", "from caller")]);
        entry.fill(LogLevel::Info, "from log call".to_string());

        assert_eq!(
            entry.data().get(MESSAGE_KEY),
            Some(&FieldValue::String("from log call".to_string()))
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut entry = Entry::new(LogLevel::Error, "boom").with_fields([("k", "v")]);
        entry.data_mut().set_severity("error");

        entry.reset();

        assert!(entry.data().is_empty());
        assert_eq!(entry.time(), DateTime::<Utc>::default());
        assert_eq!(entry.level(), LogLevel::default());
    }

    #[test]
    fn test_pool_reuses_released_entries() {
        let pool = EntryPool::new(4);
        let metrics = LoggerMetrics::new();

        let entry = pool.acquire(&metrics);
        assert_eq!(metrics.pool_allocations(), 1);

        pool.release(entry);
        assert_eq!(pool.idle_count(), 1);

        let entry = pool.acquire(&metrics);
        assert_eq!(metrics.pool_reuses(), 1);
        assert!(entry.data().is_empty());
        assert_eq!(pool.idle_count(), 0);
    }

    #[test]
    fn test_pool_release_resets_entry() {
        let pool = EntryPool::new(4);
        let metrics = LoggerMetrics::new();

        pool.release(Entry::new(LogLevel::Debug, "secret").with_fields([("token", "abc")]));

        let entry = pool.acquire(&metrics);
        assert!(entry.data().is_empty());
        assert_eq!(entry.time(), DateTime::<Utc>::default());
    }

    #[test]
    fn test_pool_respects_capacity() {
        let pool = EntryPool::new(2);
        for _ in 0..5 {
            pool.release(Entry::default());
        }
        assert_eq!(pool.idle_count(), 2);
        assert_eq!(pool.capacity(), 2);

        let empty = EntryPool::new(0);
        empty.release(Entry::default());
        assert_eq!(empty.idle_count(), 0);
    }
}
