//! Queued logging example
//!
//! Demonstrates the asynchronous delivery path: producers enqueue and
//! return immediately while the writer thread drains to the sinks.
//!
//! Run with: cargo run --example queued_logging

use fanlog::prelude::*;
use fanlog::title;
use std::sync::Arc;
use std::thread;

fn main() {
    println!("{}", title("Fanlog - Queued Logging"));

    let logger = Arc::new(
        QueuedLogger::builder()
            .level(Level::All)
            .sink(share(ConsoleSink::stdout()))
            .build_queued(),
    );

    // 1. Posting never blocks on I/O
    logger.start();
    for i in 0..100 {
        logger.post(&format!("message #{}", i));
    }
    logger.stop();
    println!(
        "\n\n  enqueued 100 messages in {:.1} us",
        logger.elapsed_microseconds()
    );

    // 2. wait() returns once everything enqueued so far is written
    logger.wait();
    println!("  queue drained, {} written", logger.metrics().messages_written());

    // 3. Multiple producers share one logger
    let mut handles = vec![];
    for thread_id in 0..5 {
        let logger = Arc::clone(&logger);
        handles.push(thread::spawn(move || {
            for i in 0..20 {
                logger.post(&format!("thread {} - message {}", thread_id, i));
            }
        }));
    }
    for handle in handles {
        handle.join().expect("producer thread");
    }
    logger.wait();
    println!("\n\n  5 threads posted 20 messages each");

    // Dropping the logger enqueues the terminate sentinel, joins the
    // writer, and closes the sinks.
}
