//! Standard output example
//!
//! Builds a logger with one stdout transport and a default field, then logs
//! at every level. Only records at `info` or more severe are printed.
//!
//! Run with: cargo run --example std_out

use field_logger::prelude::*;

fn main() -> Result<()> {
    let logger = Logger::new()
        .with_level(LogLevel::Info)
        .with_transport(StdOutTransport::new(StdOutTransportConfig {
            level: LogLevel::Info,
        }))
        .with_defaults([FieldPair::new("Component", "hello-world-service")]);

    logger.info("Hello World!");
    logger.verbose("hidden: below the logger threshold");
    logger.warn("Using default settings for some options");

    logger
        .with_fields([FieldPair::new("user_id", 42), FieldPair::new("action", "login")])
        .info("User logged in");

    logger.try_log(LogLevel::Error, "Failed to load optional plugin")?;

    logger.flush()
}
