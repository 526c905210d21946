//! Elapsed-time collaborator for instrumentation

use std::time::{Duration, Instant};

/// Measures wall time between `start` and `stop` calls.
///
/// Instrumentation only; never used for queue control.
pub trait Timer: Send {
    fn start(&mut self);

    fn stop(&mut self);

    /// Microseconds between the most recent completed start/stop pair.
    fn elapsed_microseconds(&self) -> f64;
}

/// Default [`Timer`] backed by [`Instant`].
#[derive(Debug, Default)]
pub struct WallTimer {
    started_at: Option<Instant>,
    elapsed: Duration,
}

impl WallTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Timer for WallTimer {
    fn start(&mut self) {
        self.started_at = Some(Instant::now());
    }

    fn stop(&mut self) {
        if let Some(started_at) = self.started_at.take() {
            self.elapsed = started_at.elapsed();
        }
    }

    fn elapsed_microseconds(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_measures_elapsed_time() {
        let mut timer = WallTimer::new();
        timer.start();
        thread::sleep(Duration::from_millis(10));
        timer.stop();

        let elapsed = timer.elapsed_microseconds();
        assert!(elapsed >= 10_000.0, "elapsed was {} us", elapsed);
    }

    #[test]
    fn test_stop_without_start_keeps_last_measurement() {
        let mut timer = WallTimer::new();
        assert_eq!(timer.elapsed_microseconds(), 0.0);

        timer.start();
        timer.stop();
        let first = timer.elapsed_microseconds();

        timer.stop();
        assert_eq!(timer.elapsed_microseconds(), first);
    }
}
