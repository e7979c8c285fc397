//! Logger metrics for observability
//!
//! Counters for records dispatched or filtered, formatting and transport
//! failures, and entry pool reuse.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use field_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_dispatched();
/// metrics.record_transport_failure();
///
/// assert_eq!(metrics.dispatched_count(), 1);
/// assert_eq!(metrics.transport_failures(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records formatted and offered to the transports
    dispatched: AtomicU64,

    /// Records suppressed by the logger threshold or by every transport
    filtered: AtomicU64,

    /// Records that failed to format and were never written
    format_failures: AtomicU64,

    /// Individual transport write or flush failures
    transport_failures: AtomicU64,

    /// Entries served from the idle pool
    pool_reuses: AtomicU64,

    /// Entries allocated because the pool was empty
    pool_allocations: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            dispatched: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            format_failures: AtomicU64::new(0),
            transport_failures: AtomicU64::new(0),
            pool_reuses: AtomicU64::new(0),
            pool_allocations: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn dispatched_count(&self) -> u64 {
        self.dispatched.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn format_failures(&self) -> u64 {
        self.format_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn transport_failures(&self) -> u64 {
        self.transport_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn pool_reuses(&self) -> u64 {
        self.pool_reuses.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn pool_allocations(&self) -> u64 {
        self.pool_allocations.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dispatched(&self) -> u64 {
        self.dispatched.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_format_failure(&self) -> u64 {
        self.format_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_transport_failure(&self) -> u64 {
        self.transport_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_pool_reuse(&self) -> u64 {
        self.pool_reuses.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_pool_allocation(&self) -> u64 {
        self.pool_allocations.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of acquisitions served from the pool, as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if no entry has been acquired yet.
    pub fn pool_hit_rate(&self) -> f64 {
        let reuses = self.pool_reuses() as f64;
        let total = reuses + self.pool_allocations() as f64;
        if total == 0.0 {
            0.0
        } else {
            (reuses / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.dispatched.store(0, Ordering::Relaxed);
        self.filtered.store(0, Ordering::Relaxed);
        self.format_failures.store(0, Ordering::Relaxed);
        self.transport_failures.store(0, Ordering::Relaxed);
        self.pool_reuses.store(0, Ordering::Relaxed);
        self.pool_allocations.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            dispatched: AtomicU64::new(self.dispatched_count()),
            filtered: AtomicU64::new(self.filtered_count()),
            format_failures: AtomicU64::new(self.format_failures()),
            transport_failures: AtomicU64::new(self.transport_failures()),
            pool_reuses: AtomicU64::new(self.pool_reuses()),
            pool_allocations: AtomicU64::new(self.pool_allocations()),
        }
    }
}
