//! Output sink implementations

pub mod console;
pub mod file;
pub mod memory;

pub use console::ConsoleSink;
pub use file::FileSink;
pub use memory::MemorySink;

use crate::core::error::Result;
use std::sync::Arc;

/// A destination that receives fully decorated log text.
///
/// Sinks carry their own interior locking: `write` takes `&self` so a
/// [`SharedSink`] can be driven by the writer thread while the caller who
/// created it keeps a handle (and the ownership of any underlying resource).
pub trait Sink: Send + Sync {
    fn write(&self, text: &str) -> Result<()>;

    fn flush(&self) -> Result<()>;

    /// Release the underlying resource, if any. Defaults to a no-op.
    fn close(&self) -> Result<()> {
        Ok(())
    }

    /// Whether [`close`](Self::close) releases a file resource; registries
    /// close such sinks on removal.
    fn is_file_backed(&self) -> bool {
        false
    }

    fn name(&self) -> &str;
}

/// A sink reference as loggers hold it. Identity (`Arc::ptr_eq`) is what
/// `remove_sink` matches on.
pub type SharedSink = Arc<dyn Sink>;

/// Wrap a sink for registration.
///
/// # Example
///
/// ```
/// use fanlog::sinks::{share, MemorySink, Sink};
///
/// let sink = share(MemorySink::new());
/// assert_eq!(sink.name(), "memory");
/// ```
pub fn share<S: Sink + 'static>(sink: S) -> SharedSink {
    Arc::new(sink)
}
