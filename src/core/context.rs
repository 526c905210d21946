//! Explicit logger ownership
//!
//! [`LoggerContext`] replaces hidden singleton factories: an application
//! constructs one context, the context owns the shared level filter and one
//! logger instance per configuration key, and callers receive `Arc` handles.
//! A queued logger drains and shuts down when its last handle drops.

use super::level::{Level, LevelFilter, LevelMask};
use super::queued_logger::QueuedLogger;
use super::sync_logger::SyncLogger;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Owns logger instances, one per configuration key.
///
/// The first request for a key constructs the logger (bound to the requested
/// level and the context's filter); later requests for the same key return
/// the cached instance regardless of the level they ask for.
///
/// # Example
///
/// ```
/// use fanlog::prelude::*;
/// use std::sync::Arc;
///
/// let context = LoggerContext::new();
/// let a = context.queued_logger("demo", Level::Demo);
/// let b = context.queued_logger("demo", Level::Demo);
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
pub struct LoggerContext {
    filter: LevelFilter,
    sync_loggers: Mutex<HashMap<String, Arc<SyncLogger>>>,
    queued_loggers: Mutex<HashMap<String, Arc<QueuedLogger>>>,
}

impl LoggerContext {
    /// Context with an all-pass filter.
    #[must_use]
    pub fn new() -> Self {
        Self::with_filter_mask(LevelMask::ALL)
    }

    /// Context whose filter starts at `mask`.
    #[must_use]
    pub fn with_filter_mask(mask: LevelMask) -> Self {
        Self {
            filter: LevelFilter::new(mask),
            sync_loggers: Mutex::new(HashMap::new()),
            queued_loggers: Mutex::new(HashMap::new()),
        }
    }

    /// The filter shared by every logger this context constructs.
    pub fn filter(&self) -> &LevelFilter {
        &self.filter
    }

    /// Get or construct the synchronous logger for `key`.
    pub fn sync_logger(&self, key: &str, level: Level) -> Arc<SyncLogger> {
        let mut loggers = self.sync_loggers.lock();
        Arc::clone(loggers.entry(key.to_string()).or_insert_with(|| {
            Arc::new(
                SyncLogger::builder()
                    .level(level)
                    .filter(self.filter.clone())
                    .label(key)
                    .build_sync(),
            )
        }))
    }

    /// Get or construct the queued logger for `key`.
    pub fn queued_logger(&self, key: &str, level: Level) -> Arc<QueuedLogger> {
        let mut loggers = self.queued_loggers.lock();
        Arc::clone(loggers.entry(key.to_string()).or_insert_with(|| {
            Arc::new(
                QueuedLogger::builder()
                    .level(level)
                    .filter(self.filter.clone())
                    .label(key)
                    .build_queued(),
            )
        }))
    }
}

impl Default for LoggerContext {
    fn default() -> Self {
        Self::new()
    }
}
