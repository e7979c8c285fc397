//! Error types for the logger system

use std::fmt;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Level text or ordinal outside the five known levels
    #[error("not a valid log level: {0:?}")]
    InvalidLevel(String),

    /// Formatter error with format type
    #[error("Formatter error ({format_type}): {message}")]
    Format {
        format_type: String,
        message: String,
    },

    /// Single transport write failure
    #[error("Transport '{transport}' failed to write: {message}")]
    TransportWrite { transport: String, message: String },

    /// Transport panicked while writing or flushing
    #[error("Transport '{transport}' panicked: {message}")]
    TransportPanic { transport: String, message: String },

    /// One or more transports failed for the same record
    #[error("{} of {attempted} transports failed: {}", .failures.len(), FailureList(.failures))]
    Dispatch {
        failures: Vec<TransportFailure>,
        attempted: usize,
    },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON error while reading configuration
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

/// A failure reported by one transport during dispatch or flush
#[derive(Debug)]
pub struct TransportFailure {
    /// Name reported by the failing transport
    pub transport: String,
    /// Position of the transport in dispatch order
    pub index: usize,
    pub error: LoggerError,
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} '{}': {}", self.index, self.transport, self.error)
    }
}

struct FailureList<'a>(&'a [TransportFailure]);

impl fmt::Display for FailureList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", failure)?;
        }
        Ok(())
    }
}

impl LoggerError {
    /// Create an invalid level error
    pub fn invalid_level(value: impl fmt::Display) -> Self {
        LoggerError::InvalidLevel(value.to_string())
    }

    /// Create a formatter error
    pub fn formatter(format_type: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Format {
            format_type: format_type.into(),
            message: message.into(),
        }
    }

    /// Create a transport write error
    pub fn transport_write(transport: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::TransportWrite {
            transport: transport.into(),
            message: message.into(),
        }
    }

    /// Create a transport panic error
    pub fn transport_panic(transport: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::TransportPanic {
            transport: transport.into(),
            message: message.into(),
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Transport failures carried by a dispatch error, empty for other kinds
    pub fn failures(&self) -> &[TransportFailure] {
        match self {
            LoggerError::Dispatch { failures, .. } => failures,
            _ => &[],
        }
    }
}
