//! # Fanlog
//!
//! A multi-sink logging library with synchronous and queued asynchronous
//! delivery.
//!
//! ## Features
//!
//! - **Two delivery modes**: `post` writes to every sink before returning
//!   (sync), or hands the message to a background writer thread and returns
//!   immediately (queued)
//! - **Multiple Sinks**: console, file, in-memory, and custom destinations,
//!   written in registration order
//! - **Runtime Level Filtering**: a shared bitmask filter gates every logger
//!   on its next post, no reconstruction needed
//! - **Thread Safe**: any number of producers per logger; one writer thread
//!   per queued instance drains the hand-off queue
//!
//! ## Example
//!
//! ```
//! use fanlog::prelude::*;
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let logger = QueuedLogger::builder()
//!     .level(Level::Demo)
//!     .prefix("\n  ")
//!     .sink(sink.clone())
//!     .build_queued();
//!
//! logger.post("demo message");
//! logger.wait();
//! assert_eq!(sink.entries(), vec!["\n  demo message".to_string()]);
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        BackgroundLogger, Level, LevelFilter, LevelMask, Logger, LoggerBuilder, LoggerConfig,
        LoggerContext, LoggerError, LoggerMetrics, QueuedLogger, Result, SyncLogger,
    };
    pub use crate::sinks::{share, ConsoleSink, FileSink, MemorySink, SharedSink, Sink};
}

pub use crate::core::{
    subtitle, title, BackgroundLogger, Clock, Decoration, HandoffQueue, Level, LevelFilter,
    LevelMask, Logger, LoggerBuilder, LoggerConfig, LoggerContext, LoggerError, LoggerMetrics,
    QueuedLogger, Result, SinkRegistry, SyncLogger, SystemClock, Timer, WallTimer, DEFAULT_PREFIX,
};
pub use crate::sinks::{share, ConsoleSink, FileSink, MemorySink, SharedSink, Sink};
