//! Error types for the logging system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A sink rejected a write
    #[error("sink '{sink}' write failed: {source}")]
    SinkWrite {
        sink: String,
        #[source]
        source: std::io::Error,
    },

    /// A file-backed sink could not be closed
    #[error("sink '{sink}' close failed: {source}")]
    SinkClose {
        sink: String,
        #[source]
        source: std::io::Error,
    },

    /// Write attempted on a sink whose resource was already closed
    #[error("sink '{sink}' is closed")]
    SinkClosed { sink: String },

    /// Configuration parse error
    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create a sink write error
    pub fn sink_write(sink: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::SinkWrite {
            sink: sink.into(),
            source,
        }
    }

    /// Create a sink close error
    pub fn sink_close(sink: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::SinkClose {
            sink: sink.into(),
            source,
        }
    }

    /// Create a closed-sink error
    pub fn sink_closed(sink: impl Into<String>) -> Self {
        LoggerError::SinkClosed { sink: sink.into() }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
