//! File logging example
//!
//! Demonstrates file sinks: registration, removal (which closes the file),
//! and shutdown draining.
//!
//! Run with: cargo run --example file_logging

use fanlog::prelude::*;
use fanlog::title;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("{}", title("Fanlog - File Logging"));

    let file_sink = Arc::new(FileSink::new("fanlog_demo.log")?);
    let shared_file: SharedSink = file_sink.clone();

    let logger = QueuedLogger::builder()
        .level(Level::Results)
        .prefix("")
        .suffix("\n")
        .sink(shared_file.clone())
        .sink(share(ConsoleSink::stdout()))
        .build_queued();

    // 1. Messages fan out to the file and the console
    for i in 0..10 {
        logger.post(&format!("result {}", i));
    }
    logger.wait();
    println!("\n  wrote 10 results to fanlog_demo.log");

    // 2. Removing the file sink closes the underlying file
    logger.remove_sink(&shared_file);
    println!("  file sink removed and closed: {}", file_sink.is_closed());

    // 3. Remaining sinks keep receiving
    logger.post("console only now");
    logger.wait();

    println!("\n  check 'fanlog_demo.log' for the file output");
    Ok(())
}
