//! File logging example
//!
//! Logs to stdout and to a JSON lines file at the same time. The file keeps
//! everything down to `verbose`, stdout only shows warnings and errors.
//!
//! Run with: cargo run --example file_logging

use field_logger::prelude::*;

fn main() -> Result<()> {
    let logger = Logger::new()
        .with_level(LogLevel::Verbose)
        .with_transport(StdOutTransport::with_level(LogLevel::Warn))
        .with_transport(FileTransport::new("application.jsonl", LogLevel::Verbose)?)
        .with_defaults([("Component", "file-logging-demo")]);

    logger.info("Application started");
    logger.verbose("Loading configuration...");
    logger.warn("Using default settings for some options");

    for i in 1..=5 {
        logger
            .with_fields([FieldPair::new("item", i)])
            .info(format!("Processing item {}/5", i));
        if i == 3 {
            logger.warn("Item 3 took longer than expected");
        }
    }

    logger.debug("Not written: below the logger threshold");
    logger.info("All operations completed");

    // Flush to ensure all records are written
    logger.flush()?;

    println!("Check 'application.jsonl' for the full log output");
    Ok(())
}
