//! Console sink implementation

use super::Sink;
use crate::core::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Stdout,
    Stderr,
}

/// Writes log text to the process's standard output or standard error.
pub struct ConsoleSink {
    target: Target,
}

impl ConsoleSink {
    /// Sink targeting stdout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            target: Target::Stdout,
        }
    }

    /// Sink targeting stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new()
    }

    /// Sink targeting stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            target: Target::Stderr,
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write(&self, text: &str) -> Result<()> {
        match self.target {
            Target::Stdout => std::io::stdout().lock().write_all(text.as_bytes())?,
            Target::Stderr => std::io::stderr().lock().write_all(text.as_bytes())?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        match self.target {
            Target::Stdout => std::io::stdout().flush()?,
            Target::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.target {
            Target::Stdout => "console",
            Target::Stderr => "console(stderr)",
        }
    }
}
