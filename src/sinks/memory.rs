//! In-memory capture sink
//!
//! Records every write as a separate entry. The main instrument for tests
//! and for demos that inspect what a logger delivered.

use super::Sink;
use crate::core::error::Result;
use parking_lot::Mutex;

/// Sink that appends each written composite to an in-memory list.
///
/// # Example
///
/// ```
/// use fanlog::sinks::{MemorySink, Sink};
///
/// let sink = MemorySink::new();
/// sink.write("hello").unwrap();
/// assert_eq!(sink.entries(), vec!["hello".to_string()]);
/// ```
pub struct MemorySink {
    entries: Mutex<Vec<String>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything written so far, in write order.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Discard all recorded entries.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for MemorySink {
    fn write(&self, text: &str) -> Result<()> {
        self.entries.lock().push(text.to_string());
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
