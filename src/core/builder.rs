//! Fluent construction for both logger kinds

use super::clock::{Clock, SystemClock};
use super::config::LoggerConfig;
use super::decoration::Decoration;
use super::level::{Level, LevelFilter};
use super::queued_logger::QueuedLogger;
use super::sync_logger::SyncLogger;
use super::timer::{Timer, WallTimer};
use crate::sinks::SharedSink;
use std::sync::Arc;

/// Builder for [`SyncLogger`] and [`QueuedLogger`].
///
/// # Example
///
/// ```
/// use fanlog::prelude::*;
///
/// let filter = LevelFilter::all();
/// let logger = QueuedLogger::builder()
///     .level(Level::Debug)
///     .filter(filter.clone())
///     .prefix("\n  ")
///     .suffix(";")
///     .sink(share(MemorySink::new()))
///     .build_queued();
///
/// logger.post("configured");
/// logger.wait();
/// ```
pub struct LoggerBuilder {
    level: Level,
    filter: LevelFilter,
    decoration: Decoration,
    sinks: Vec<SharedSink>,
    clock: Arc<dyn Clock>,
    timer: Box<dyn Timer>,
    label: Option<String>,
}

impl LoggerBuilder {
    /// Builder with defaults: level `All`, a fresh all-pass filter, default
    /// decoration, no sinks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: Level::All,
            filter: LevelFilter::all(),
            decoration: Decoration::default(),
            sinks: Vec::new(),
            clock: Arc::new(SystemClock),
            timer: Box::new(WallTimer::new()),
            label: None,
        }
    }

    /// Bind the logger to a level. Permanent for the instance's lifetime.
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Share a filter handle with other loggers (and with the code that
    /// flips it at runtime).
    #[must_use = "builder methods return a new value"]
    pub fn filter(mut self, filter: LevelFilter) -> Self {
        self.filter = filter;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.decoration.prefix = prefix.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.decoration.suffix = suffix.into();
        self
    }

    /// Register a sink; may be called repeatedly, registration order is
    /// write order.
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: SharedSink) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Instance discriminator included in `describe()` output.
    #[must_use = "builder methods return a new value"]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Substitute the timestamp provider used by `post_dated`.
    #[must_use = "builder methods return a new value"]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Substitute the instrumentation timer (queued loggers only).
    #[must_use = "builder methods return a new value"]
    pub fn timer(mut self, timer: Box<dyn Timer>) -> Self {
        self.timer = timer;
        self
    }

    /// Apply a deserialized [`LoggerConfig`].
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: &LoggerConfig) -> Self {
        self.level = config.level;
        self.decoration.prefix = config.prefix.clone();
        self.decoration.suffix = config.suffix.clone();
        self
    }

    /// Build the synchronous variant.
    #[must_use]
    pub fn build_sync(self) -> SyncLogger {
        SyncLogger::assemble(
            self.level,
            self.filter,
            self.decoration,
            self.sinks,
            self.clock,
            self.label,
        )
    }

    /// Build the queued variant; spawns its writer thread immediately.
    #[must_use]
    pub fn build_queued(self) -> QueuedLogger {
        let timer = self.timer;
        let inner = SyncLogger::assemble(
            self.level,
            self.filter,
            self.decoration,
            self.sinks,
            self.clock,
            self.label,
        );
        QueuedLogger::assemble(inner, timer)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::logger::{BackgroundLogger, Logger};
    use crate::sinks::MemorySink;

    #[test]
    fn test_builder_defaults() {
        let logger = LoggerBuilder::new().build_sync();
        assert_eq!(logger.level(), Level::All);
        assert_eq!(logger.sink_count(), 0);
    }

    #[test]
    fn test_builder_sync_full_configuration() {
        let sink = Arc::new(MemorySink::new());
        let logger = LoggerBuilder::new()
            .level(Level::Demo)
            .prefix("[")
            .suffix("]")
            .sink(sink.clone())
            .label("demo-run")
            .build_sync();

        logger.post("x");
        assert_eq!(sink.entries(), vec!["[x]".to_string()]);
        assert_eq!(logger.describe(), "SyncLogger(demo-run, level: demo)");
    }

    #[test]
    fn test_builder_queued() {
        let sink = Arc::new(MemorySink::new());
        let logger = LoggerBuilder::new()
            .level(Level::Results)
            .prefix("")
            .sink(sink.clone())
            .build_queued();

        logger.post("r");
        logger.wait();
        assert_eq!(sink.entries(), vec!["r".to_string()]);
    }

    #[test]
    fn test_builder_applies_config() {
        let config = LoggerConfig {
            level: Level::Debug,
            prefix: "| ".to_string(),
            suffix: String::new(),
        };

        let sink = Arc::new(MemorySink::new());
        let logger = LoggerBuilder::new()
            .config(&config)
            .sink(sink.clone())
            .build_sync();

        assert_eq!(logger.level(), Level::Debug);
        logger.post("m");
        assert_eq!(sink.entries(), vec!["| m".to_string()]);
    }

    #[test]
    fn test_shared_filter_between_loggers() {
        let filter = LevelFilter::all();
        let first = LoggerBuilder::new()
            .level(Level::Debug)
            .filter(filter.clone())
            .build_sync();
        let second = LoggerBuilder::new()
            .level(Level::Demo)
            .filter(filter.clone())
            .build_sync();

        filter.set(Level::Demo.mask());
        assert!(!first.filter().enables(first.level()));
        assert!(second.filter().enables(second.level()));
    }
}
