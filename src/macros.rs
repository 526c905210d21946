//! Logging macros for ergonomic message formatting.
//!
//! Front-ends over [`Logger::post`](crate::Logger::post) and
//! [`Logger::post_dated`](crate::Logger::post_dated) with `format!`-style
//! arguments.
//!
//! # Examples
//!
//! ```
//! use fanlog::prelude::*;
//! use fanlog::post;
//!
//! let logger = SyncLogger::new(Level::All);
//!
//! // Basic posting
//! post!(logger, "server started");
//!
//! // With format arguments
//! let port = 8080;
//! post!(logger, "listening on port {}", port);
//! ```

/// Post a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use fanlog::prelude::*;
/// # let logger = SyncLogger::new(Level::All);
/// use fanlog::post;
/// post!(logger, "simple message");
/// post!(logger, "error code: {}", 500);
/// ```
#[macro_export]
macro_rules! post {
    ($logger:expr, $($arg:tt)+) => {
        $logger.post(&format!($($arg)+))
    };
}

/// Post a timestamped message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use fanlog::prelude::*;
/// # let logger = SyncLogger::new(Level::All);
/// use fanlog::post_dated;
/// post_dated!(logger, "checkpoint");
/// post_dated!(logger, "processed {} items", 100);
/// ```
#[macro_export]
macro_rules! post_dated {
    ($logger:expr, $($arg:tt)+) => {
        $logger.post_dated(&format!($($arg)+))
    };
}
