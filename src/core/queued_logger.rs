//! Asynchronous (queued) logger implementation
//!
//! `post` hands the composed message to a hand-off queue and returns
//! immediately; one background writer thread per logger instance drains the
//! queue and performs the sink writes. Shutdown enqueues a terminate
//! sentinel, joins the writer, and only then closes sinks, so the writer
//! never races a closing sink.

use super::logger::{BackgroundLogger, Logger};
use super::queue::HandoffQueue;
use super::sync_logger::SyncLogger;
use super::timer::Timer;
use crate::core::level::Level;
use crate::sinks::SharedSink;
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// One hand-off queue entry: a composed message, or the shutdown sentinel.
///
/// The sentinel is enqueued exactly once, by `Drop`, and is always observed
/// by the writer before it exits.
enum QueueItem {
    Message(String),
    Terminate,
}

/// Logger whose `post` enqueues and returns immediately.
///
/// Composes a [`SyncLogger`] (shared with the writer thread) with a
/// [`HandoffQueue`]. The writer thread's lifetime is strictly nested inside
/// the logger's: it is spawned at construction and joined at drop, after the
/// sentinel guarantees it observes shutdown.
///
/// # Example
///
/// ```
/// use fanlog::prelude::*;
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = QueuedLogger::builder()
///     .level(Level::Demo)
///     .prefix("")
///     .sink(sink.clone())
///     .build_queued();
///
/// logger.post("queued");
/// logger.wait();
/// assert_eq!(sink.entries(), vec!["queued".to_string()]);
/// ```
pub struct QueuedLogger {
    inner: Arc<SyncLogger>,
    queue: Arc<HandoffQueue<QueueItem>>,
    writer: Option<JoinHandle<()>>,
    timer: Mutex<Box<dyn Timer>>,
}

impl QueuedLogger {
    /// Logger bound to `level`, with an all-pass filter and no sinks.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self::builder().level(level).build_queued()
    }

    /// Fluent construction; see [`LoggerBuilder`](super::builder::LoggerBuilder).
    #[must_use]
    pub fn builder() -> super::builder::LoggerBuilder {
        super::builder::LoggerBuilder::new()
    }

    pub(crate) fn assemble(inner: SyncLogger, timer: Box<dyn Timer>) -> Self {
        let inner = Arc::new(inner);
        let queue = Arc::new(HandoffQueue::new());
        let writer = Self::spawn_writer(Arc::clone(&inner), Arc::clone(&queue));

        Self {
            inner,
            queue,
            writer: Some(writer),
            timer: Mutex::new(timer),
        }
    }

    fn spawn_writer(
        inner: Arc<SyncLogger>,
        queue: Arc<HandoffQueue<QueueItem>>,
    ) -> JoinHandle<()> {
        thread::spawn(move || loop {
            match queue.dequeue() {
                QueueItem::Message(composite) => {
                    inner.write_composite(&composite);
                    queue.task_done();
                }
                QueueItem::Terminate => {
                    queue.task_done();
                    break;
                }
            }
        })
    }

    /// Delivery counters for this logger.
    pub fn metrics(&self) -> &super::metrics::LoggerMetrics {
        self.inner.metrics()
    }

    /// The shared filter handle this logger reads on every post.
    pub fn filter(&self) -> &super::level::LevelFilter {
        self.inner.filter()
    }

    /// Messages enqueued but not yet written.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }
}

impl Logger for QueuedLogger {
    fn post(&self, msg: &str) -> &dyn Logger {
        if let Some(composite) = self.inner.compose(msg) {
            self.queue.enqueue(QueueItem::Message(composite));
        }
        self
    }

    fn post_dated(&self, msg: &str) -> &dyn Logger {
        let body = self.inner.dated_body(msg);
        self.post(&body);
        self
    }

    fn add_sink(&self, sink: SharedSink) {
        self.inner.add_sink(sink);
    }

    fn remove_sink(&self, sink: &SharedSink) -> bool {
        self.inner.remove_sink(sink)
    }

    fn sink_count(&self) -> usize {
        self.inner.sink_count()
    }

    /// Drains the queue before removing sinks, so no accepted message is
    /// lost to the removal.
    fn clear(&self) {
        self.wait();
        self.inner.clear_impl();
    }

    fn set_prefix(&self, prefix: &str) -> &dyn Logger {
        self.inner.set_prefix(prefix);
        self
    }

    fn set_suffix(&self, suffix: &str) -> &dyn Logger {
        self.inner.set_suffix(suffix);
        self
    }

    fn level(&self) -> Level {
        self.inner.level()
    }

    fn describe(&self) -> String {
        self.inner.describe_as("QueuedLogger")
    }
}

impl BackgroundLogger for QueuedLogger {
    fn wait(&self) {
        self.queue.wait_empty();
    }

    fn start(&self) {
        self.timer.lock().start();
    }

    fn stop(&self) {
        self.timer.lock().stop();
    }

    fn elapsed_microseconds(&self) -> f64 {
        self.timer.lock().elapsed_microseconds()
    }
}

impl Drop for QueuedLogger {
    /// Sentinel, then join, then clear: remaining messages drain before the
    /// writer exits, and no sink closes while the writer could touch it.
    fn drop(&mut self) {
        self.queue.enqueue(QueueItem::Terminate);
        if let Some(writer) = self.writer.take() {
            if writer.join().is_err() {
                eprintln!("[LOGGER ERROR] writer thread panicked during shutdown");
            }
        }
        self.inner.clear_impl();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::level::LevelFilter;
    use crate::sinks::MemorySink;

    fn capture_logger(level: Level, filter: LevelFilter) -> (QueuedLogger, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let logger = QueuedLogger::builder()
            .level(level)
            .filter(filter)
            .prefix("")
            .sink(sink.clone())
            .build_queued();
        (logger, sink)
    }

    #[test]
    fn test_post_is_written_after_wait() {
        let (logger, sink) = capture_logger(Level::Debug, LevelFilter::all());
        logger.post("m1").post("m2").post("m3");
        logger.wait();

        assert_eq!(
            sink.entries(),
            vec!["m1".to_string(), "m2".to_string(), "m3".to_string()]
        );
        assert_eq!(logger.queue_len(), 0);
    }

    #[test]
    fn test_filtered_post_never_enqueues() {
        let (logger, sink) = capture_logger(Level::Demo, LevelFilter::new(Level::Results.mask()));
        logger.post("dropped");

        assert_eq!(logger.queue_len(), 0);
        logger.wait();
        assert!(sink.is_empty());
        assert_eq!(logger.metrics().messages_filtered(), 1);
    }

    #[test]
    fn test_shutdown_drains_pending_messages() {
        let sink = Arc::new(MemorySink::new());
        {
            let logger = QueuedLogger::builder()
                .level(Level::All)
                .prefix("")
                .sink(sink.clone())
                .build_queued();
            for i in 0..100 {
                logger.post(&format!("msg {}", i));
            }
            // Dropped with messages still in flight.
        }

        assert_eq!(sink.len(), 100);
        assert_eq!(sink.entries()[99], "msg 99");
    }

    #[test]
    fn test_clear_waits_for_in_flight_messages() {
        let (logger, sink) = capture_logger(Level::All, LevelFilter::all());
        for i in 0..50 {
            logger.post(&format!("{}", i));
        }
        logger.clear();

        assert_eq!(sink.len(), 50);
        assert_eq!(logger.sink_count(), 0);
    }

    #[test]
    fn test_timer_delegation() {
        let (logger, _sink) = capture_logger(Level::All, LevelFilter::all());
        logger.start();
        std::thread::sleep(std::time::Duration::from_millis(5));
        logger.stop();
        assert!(logger.elapsed_microseconds() >= 5_000.0);
    }

    #[test]
    fn test_describe() {
        let logger = QueuedLogger::new(Level::Results);
        assert_eq!(logger.describe(), "QueuedLogger(level: results)");
    }
}
