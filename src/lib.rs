//! # Field Logger
//!
//! A structured logging library: build a [`Logger`], attach transports and
//! default fields, then emit leveled messages. Each message becomes one
//! structured record carrying `message`, `Timestamp`, `Severity` and any
//! default or per-call fields, and is written to every transport whose
//! threshold it meets.
//!
//! ## Features
//!
//! - **Five levels**: `error`, `warn`, `info`, `verbose`, `debug`
//! - **Default fields**: merged into every record, per-call fields win
//! - **Pooled entries**: record state is reused without leaking between records
//! - **Failure isolation**: one failing transport never starves the others
//!
//! ```
//! use field_logger::prelude::*;
//!
//! let logger = Logger::new()
//!     .with_level(LogLevel::Info)
//!     .with_transport(StdOutTransport::new(StdOutTransportConfig { level: LogLevel::Info }))
//!     .with_defaults([FieldPair::new("Component", "hello-world-service")]);
//!
//! logger.info("Hello World!");
//! ```

pub mod core;
pub mod macros;
pub mod transports;

pub mod prelude {
    #[cfg(feature = "file")]
    pub use crate::transports::FileTransport;
    pub use crate::transports::MemoryTransport;
    #[cfg(feature = "stdout")]
    pub use crate::transports::{StdOutTransport, StdOutTransportConfig};
    pub use crate::core::{
        Entry, FieldPair, FieldValue, Fields, Formatter, JsonFormatter, LogLevel, LogfmtFormatter,
        Logger, LoggerConfig, LoggerError, LoggerMetrics, PendingEntry, Result, TimestampFormat,
        Transport, TransportFailure,
    };
}

#[cfg(feature = "file")]
pub use crate::transports::FileTransport;
pub use crate::transports::MemoryTransport;
#[cfg(feature = "stdout")]
pub use crate::transports::{StdOutTransport, StdOutTransportConfig};
pub use crate::core::{
    Entry, FieldPair, FieldValue, Fields, Formatter, JsonFormatter, LogLevel, LogfmtFormatter,
    Logger, LoggerConfig, LoggerError, LoggerMetrics, PendingEntry, Result, TimestampFormat,
    Transport, TransportFailure, DEFAULT_POOL_CAPACITY,
};
