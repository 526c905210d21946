//! Basic usage example
//!
//! Demonstrates synchronous logging to multiple sinks with level filtering.
//!
//! Run with: cargo run --example basic_usage

use fanlog::prelude::*;
use fanlog::title;
use std::sync::Arc;

fn main() {
    println!("{}", title("Fanlog - Basic Usage"));

    // 1. A synchronous logger writing to the console
    let filter = LevelFilter::all();
    let logger = SyncLogger::builder()
        .level(Level::Demo)
        .filter(filter.clone())
        .sink(share(ConsoleSink::stdout()))
        .build_sync();

    logger.post("plain message");
    logger.post_dated("dated message");

    // 2. Decoration is applied to every subsequent post
    logger.set_prefix("\n  -- ").set_suffix(" --");
    logger.post("decorated message");

    // 3. A second sink receives the same messages
    let capture = Arc::new(MemorySink::new());
    logger.add_sink(capture.clone());
    logger.post("delivered twice");
    println!("\n\n  memory sink captured: {:?}", capture.entries());

    // 4. The shared filter gates all loggers at once
    filter.set(Level::Results.mask());
    logger.post("this demo message is filtered out");
    println!("  after filter flip, captured: {} entries", capture.len());

    filter.set(LevelMask::ALL);
    logger.post("filter restored");

    println!("\n  logger: {}", logger.describe());
    println!("  delivered: {}", logger.metrics().messages_written());
}
