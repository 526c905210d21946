//! Logger metrics: the diagnostic side-channel
//!
//! `post` never fails visibly, so sink write and close failures surface here
//! as counters (alongside a stderr diagnostic at the failure site).

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing one logger's delivery behavior.
///
/// # Example
///
/// ```
/// use fanlog::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_posted();
/// metrics.record_written();
/// assert_eq!(metrics.messages_posted(), 1);
/// assert_eq!(metrics.messages_written(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Messages that passed the level filter and entered the delivery path
    messages_posted: AtomicU64,

    /// Messages delivered to every registered sink without error
    messages_written: AtomicU64,

    /// Messages silently dropped by the level filter
    messages_filtered: AtomicU64,

    /// Individual sink write failures
    write_failures: AtomicU64,

    /// Individual sink close failures
    close_failures: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            messages_posted: AtomicU64::new(0),
            messages_written: AtomicU64::new(0),
            messages_filtered: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            close_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn messages_posted(&self) -> u64 {
        self.messages_posted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn messages_written(&self) -> u64 {
        self.messages_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn messages_filtered(&self) -> u64 {
        self.messages_filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn close_failures(&self) -> u64 {
        self.close_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_posted(&self) -> u64 {
        self.messages_posted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.messages_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.messages_filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_close_failure(&self) -> u64 {
        self.close_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.messages_posted.store(0, Ordering::Relaxed);
        self.messages_written.store(0, Ordering::Relaxed);
        self.messages_filtered.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
        self.close_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current counter values.
    fn clone(&self) -> Self {
        Self {
            messages_posted: AtomicU64::new(self.messages_posted()),
            messages_written: AtomicU64::new(self.messages_written()),
            messages_filtered: AtomicU64::new(self.messages_filtered()),
            write_failures: AtomicU64::new(self.write_failures()),
            close_failures: AtomicU64::new(self.close_failures()),
        }
    }
}
