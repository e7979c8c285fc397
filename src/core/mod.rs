//! Core logger types and traits

pub mod config;
pub mod entry;
pub mod error;
pub mod fields;
pub mod formatter;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod timestamp;
pub mod transport;

pub use config::LoggerConfig;
pub use entry::{Entry, PendingEntry};
pub use error::{LoggerError, Result, TransportFailure};
pub use fields::{FieldPair, FieldValue, Fields, MESSAGE_KEY, SEVERITY_KEY, TIMESTAMP_KEY};
pub use formatter::{Formatter, JsonFormatter, LogfmtFormatter};
pub use log_level::LogLevel;
pub use logger::{Logger, DEFAULT_POOL_CAPACITY};
pub use metrics::LoggerMetrics;
pub use timestamp::TimestampFormat;
pub use transport::Transport;
