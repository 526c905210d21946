//! Timestamp collaborator used by dated posts

use chrono::Local;

/// Supplies the timestamp string appended by `post_dated`.
pub trait Clock: Send + Sync {
    fn now(&self) -> String;
}

/// Clock reading local wall time, formatted like `Thu Jan 30 14:22:03 2020`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        Local::now().format("%a %b %e %H:%M:%S %Y").to_string()
    }
}
