use std::time::{Duration, Instant};

/// A start/stop stopwatch for timing a single operation.
///
/// There is no running/stopped state machine: reading the elapsed time before
/// `stop()` just returns whatever difference the two instants currently hold.
#[derive(Clone, Copy, Debug)]
pub struct Stopwatch {
    start: Instant,
    stop: Instant,
}

impl Stopwatch {
    pub fn new() -> Self {
        let now = Instant::now();
        Self { start: now, stop: now }
    }

    /// Record the start instant, overwriting any prior reading.
    pub fn start(&mut self) {
        self.start = Instant::now();
    }

    /// Record the end instant.
    pub fn stop(&mut self) {
        self.stop = Instant::now();
    }

    /// Duration between start and stop, zero if stop precedes start.
    pub fn elapsed(&self) -> Duration {
        self.stop.saturating_duration_since(self.start)
    }

    /// Elapsed time in whole milliseconds.
    pub fn elapsed_millis(&self) -> u64 {
        u64::try_from(self.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Elapsed time in fractional milliseconds.
    pub fn elapsed_millis_f64(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}
