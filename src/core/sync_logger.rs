//! Synchronous logger implementation

use super::clock::Clock;
use super::decoration::Decoration;
use super::level::{Level, LevelFilter};
use super::logger::Logger;
use super::metrics::LoggerMetrics;
use super::registry::SinkRegistry;
use crate::sinks::SharedSink;
use parking_lot::RwLock;
use std::sync::Arc;

/// Logger that writes to every registered sink before `post` returns.
///
/// Composes the sink registry, the prefix/suffix decoration, the shared
/// level filter, and a clock collaborator. The queued variant reuses this
/// type for everything except delivery timing.
///
/// # Example
///
/// ```
/// use fanlog::prelude::*;
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = SyncLogger::builder()
///     .level(Level::Results)
///     .prefix("")
///     .sink(sink.clone())
///     .build_sync();
///
/// logger.post("pass");
/// assert_eq!(sink.entries(), vec!["pass".to_string()]);
/// ```
pub struct SyncLogger {
    level: Level,
    filter: LevelFilter,
    sinks: Arc<RwLock<SinkRegistry>>,
    decoration: RwLock<Decoration>,
    clock: Arc<dyn Clock>,
    metrics: Arc<LoggerMetrics>,
    label: Option<String>,
}

impl SyncLogger {
    /// Logger bound to `level`, with an all-pass filter and no sinks.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self::builder().level(level).build_sync()
    }

    /// Fluent construction; see [`LoggerBuilder`](super::builder::LoggerBuilder).
    #[must_use]
    pub fn builder() -> super::builder::LoggerBuilder {
        super::builder::LoggerBuilder::new()
    }

    pub(crate) fn assemble(
        level: Level,
        filter: LevelFilter,
        decoration: Decoration,
        sinks: Vec<SharedSink>,
        clock: Arc<dyn Clock>,
        label: Option<String>,
    ) -> Self {
        let metrics = Arc::new(LoggerMetrics::new());
        let mut registry = SinkRegistry::new(Arc::clone(&metrics));
        for sink in sinks {
            registry.add(sink);
        }

        Self {
            level,
            filter,
            sinks: Arc::new(RwLock::new(registry)),
            decoration: RwLock::new(decoration),
            clock,
            metrics,
            label,
        }
    }

    /// Delivery counters for this logger.
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// The shared filter handle this logger reads on every post.
    pub fn filter(&self) -> &LevelFilter {
        &self.filter
    }

    /// Filter check, then decoration. `None` means the message was dropped
    /// before any delivery work.
    pub(crate) fn compose(&self, body: &str) -> Option<String> {
        if !self.filter.enables(self.level) {
            self.metrics.record_filtered();
            return None;
        }
        self.metrics.record_posted();
        Some(self.decoration.read().compose(body))
    }

    pub(crate) fn dated_body(&self, msg: &str) -> String {
        format!("{} : {}", msg, self.clock.now())
    }

    /// Write an already-composed message to every registered sink.
    ///
    /// Iterates a snapshot, so registry mutation never races this loop and a
    /// faulty sink cannot block delivery to the others.
    pub(crate) fn write_composite(&self, composite: &str) {
        let snapshot = self.sinks.read().snapshot();
        let mut failed = false;

        for sink in &snapshot {
            if let Err(e) = sink.write(composite) {
                failed = true;
                self.metrics.record_write_failure();
                eprintln!("[LOGGER ERROR] sink '{}' write failed: {}", sink.name(), e);
            }
        }

        if !failed {
            self.metrics.record_written();
        }
    }

    pub(crate) fn clear_impl(&self) {
        self.sinks.write().clear();
        self.decoration.write().reset();
    }

    pub(crate) fn describe_as(&self, kind: &str) -> String {
        match &self.label {
            Some(label) => format!("{}({}, level: {})", kind, label, self.level),
            None => format!("{}(level: {})", kind, self.level),
        }
    }
}

impl Logger for SyncLogger {
    fn post(&self, msg: &str) -> &dyn Logger {
        if let Some(composite) = self.compose(msg) {
            self.write_composite(&composite);
        }
        self
    }

    fn post_dated(&self, msg: &str) -> &dyn Logger {
        let body = self.dated_body(msg);
        self.post(&body);
        self
    }

    fn add_sink(&self, sink: SharedSink) {
        self.sinks.write().add(sink);
    }

    fn remove_sink(&self, sink: &SharedSink) -> bool {
        self.sinks.write().remove(sink)
    }

    fn sink_count(&self) -> usize {
        self.sinks.read().count()
    }

    fn clear(&self) {
        self.clear_impl();
    }

    fn set_prefix(&self, prefix: &str) -> &dyn Logger {
        self.decoration.write().prefix = prefix.to_string();
        self
    }

    fn set_suffix(&self, suffix: &str) -> &dyn Logger {
        self.decoration.write().suffix = suffix.to_string();
        self
    }

    fn level(&self) -> Level {
        self.level
    }

    fn describe(&self) -> String {
        self.describe_as("SyncLogger")
    }
}

impl Drop for SyncLogger {
    fn drop(&mut self) {
        self.clear_impl();
    }
}
