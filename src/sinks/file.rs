//! File sink implementation

use super::Sink;
use crate::core::error::{LoggerError, Result};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Buffered, append-mode file sink.
///
/// `close` flushes and releases the file handle; subsequent writes report
/// [`LoggerError::SinkClosed`] without panicking, so a removal racing the
/// writer thread degrades to a reported diagnostic rather than a dangling
/// write.
pub struct FileSink {
    path: PathBuf,
    writer: Mutex<Option<BufWriter<File>>>,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            path,
            writer: Mutex::new(Some(BufWriter::new(file))),
        })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Whether `close` has already released the file handle.
    pub fn is_closed(&self) -> bool {
        self.writer.lock().is_none()
    }
}

impl Sink for FileSink {
    fn write(&self, text: &str) -> Result<()> {
        let mut writer = self.writer.lock();
        let writer = writer
            .as_mut()
            .ok_or_else(|| LoggerError::sink_closed(self.path.display().to_string()))?;

        writer
            .write_all(text.as_bytes())
            .map_err(|e| LoggerError::sink_write(self.path.display().to_string(), e))
    }

    fn flush(&self) -> Result<()> {
        if let Some(writer) = self.writer.lock().as_mut() {
            writer.flush()?;
        }
        Ok(())
    }

    fn close(&self) -> Result<()> {
        if let Some(mut writer) = self.writer.lock().take() {
            writer
                .flush()
                .map_err(|e| LoggerError::sink_close(self.path.display().to_string(), e))?;
        }
        Ok(())
    }

    fn is_file_backed(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Ensure all buffered data reaches disk
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_read_back() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("sink.log");

        let sink = FileSink::new(&path).expect("Failed to create sink");
        sink.write("line one\n").expect("write");
        sink.write("line two\n").expect("write");
        sink.flush().expect("flush");

        let content = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(content, "line one\nline two\n");
    }

    #[test]
    fn test_append_mode() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("append.log");

        {
            let sink = FileSink::new(&path).expect("first open");
            sink.write("first").expect("write");
            sink.close().expect("close");
        }
        {
            let sink = FileSink::new(&path).expect("second open");
            sink.write(" second").expect("write");
            sink.close().expect("close");
        }

        let content = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(content, "first second");
    }

    #[test]
    fn test_write_after_close_is_reported() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("closed.log");

        let sink = FileSink::new(&path).expect("Failed to create sink");
        sink.close().expect("close");
        assert!(sink.is_closed());

        let err = sink.write("too late").expect_err("write after close");
        assert!(matches!(err, LoggerError::SinkClosed { .. }));
    }

    #[test]
    fn test_close_is_idempotent() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("twice.log");

        let sink = FileSink::new(&path).expect("Failed to create sink");
        sink.close().expect("first close");
        sink.close().expect("second close");
    }

    #[test]
    fn test_is_file_backed() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let sink = FileSink::new(temp_dir.path().join("f.log")).expect("create");
        assert!(sink.is_file_backed());
    }
}
