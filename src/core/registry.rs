//! Sink registry: the ordered set of destinations a logger writes to

use super::metrics::LoggerMetrics;
use crate::sinks::SharedSink;
use std::sync::Arc;

/// Ordered sequence of sink references.
///
/// Insertion order is write order. Duplicates are permitted: registering the
/// same sink twice produces two writes per message. Removal matches by `Arc`
/// identity and closes file-backed sinks best-effort; a close failure is
/// reported through the metrics side-channel and stderr, never raised.
pub struct SinkRegistry {
    sinks: Vec<SharedSink>,
    metrics: Arc<LoggerMetrics>,
}

impl SinkRegistry {
    #[must_use]
    pub fn new(metrics: Arc<LoggerMetrics>) -> Self {
        Self {
            sinks: Vec::new(),
            metrics,
        }
    }

    /// Append a sink reference. Always succeeds; no duplicate detection.
    pub fn add(&mut self, sink: SharedSink) {
        self.sinks.push(sink);
    }

    /// Remove the first entry matching `sink` by identity.
    ///
    /// File-backed sinks are closed before removal. Returns whether a match
    /// was found.
    pub fn remove(&mut self, sink: &SharedSink) -> bool {
        let Some(index) = self.sinks.iter().position(|s| Arc::ptr_eq(s, sink)) else {
            return false;
        };

        self.close_if_file_backed(&self.sinks[index].clone());
        self.sinks.remove(index);
        true
    }

    /// Current number of registered sinks.
    pub fn count(&self) -> usize {
        self.sinks.len()
    }

    /// Clone of the current sink list.
    ///
    /// Writers iterate a snapshot so sink writes never happen under the
    /// registry lock, and a sink removed mid-write stays alive until the
    /// write finishes.
    pub fn snapshot(&self) -> Vec<SharedSink> {
        self.sinks.clone()
    }

    /// Remove every sink, closing file-backed ones.
    pub fn clear(&mut self) {
        for sink in std::mem::take(&mut self.sinks) {
            self.close_if_file_backed(&sink);
        }
    }

    fn close_if_file_backed(&self, sink: &SharedSink) {
        if !sink.is_file_backed() {
            return;
        }
        if let Err(e) = sink.close() {
            self.metrics.record_close_failure();
            eprintln!("[LOGGER ERROR] sink '{}' close failed: {}", sink.name(), e);
        }
    }
}
