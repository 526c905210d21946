//! Logger capability interfaces
//!
//! Two traits at the seam between callers and the delivery machinery:
//! [`Logger`] carries the full operation set shared by both delivery modes,
//! and [`BackgroundLogger`] adds the operations that only make sense when a
//! writer thread sits between `post` and the sinks. The queued implementation
//! composes the synchronous one instead of inheriting from it.

use super::level::Level;
use crate::sinks::SharedSink;

/// Full logger operation set.
///
/// `post`, `post_dated`, `set_prefix`, and `set_suffix` return `&dyn Logger`
/// so calls chain:
///
/// ```
/// use fanlog::prelude::*;
///
/// let logger = SyncLogger::builder()
///     .level(Level::Demo)
///     .sink(share(MemorySink::new()))
///     .build_sync();
///
/// logger.set_prefix("\n  ").set_suffix(";").post("chained");
/// ```
pub trait Logger: Send + Sync {
    /// Decorate `msg` and deliver it, subject to the level filter.
    fn post(&self, msg: &str) -> &dyn Logger;

    /// Append `" : "` and the clock's timestamp to `msg`, then post.
    fn post_dated(&self, msg: &str) -> &dyn Logger;

    /// Register a sink; subsequent posts write to it in registration order.
    fn add_sink(&self, sink: SharedSink);

    /// Deregister the first sink matching by identity, closing it if
    /// file-backed. Returns whether a match was found.
    fn remove_sink(&self, sink: &SharedSink) -> bool;

    /// Number of registered sinks.
    fn sink_count(&self) -> usize;

    /// Remove every sink (closing file-backed ones) and reset the
    /// decoration to its defaults.
    fn clear(&self);

    /// Replace the prefix used by every subsequent post.
    fn set_prefix(&self, prefix: &str) -> &dyn Logger;

    /// Replace the suffix used by every subsequent post.
    fn set_suffix(&self, suffix: &str) -> &dyn Logger;

    /// The level this logger was bound to at construction.
    fn level(&self) -> Level;

    /// Human-readable description of this logger's configuration.
    fn describe(&self) -> String;
}

/// Operations specific to loggers that deliver through a background writer.
pub trait BackgroundLogger: Logger {
    /// Block until every message enqueued before this call has been written.
    fn wait(&self);

    /// Start the bound instrumentation timer.
    fn start(&self);

    /// Stop the bound instrumentation timer.
    fn stop(&self);

    /// Microseconds measured between the last `start` and `stop`.
    fn elapsed_microseconds(&self) -> f64;
}
