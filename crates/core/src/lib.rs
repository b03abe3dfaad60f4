use std::{fmt, hint::black_box};

use tracing::debug;

pub mod fibonacci;
pub mod stopwatch;

pub use fibonacci::{fibonacci, fibonacci64, Width};
pub use stopwatch::Stopwatch;

/// Inclusive range of accepted indices, displayed as `[min-max]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberRange {
    pub min: i32,
    pub max: i32,
}

impl NumberRange {
    pub const DEFAULT: NumberRange = NumberRange { min: 1, max: 45 };

    /// Returns `None` when `min > max`.
    pub fn new(min: i32, max: i32) -> Option<Self> {
        (min <= max).then_some(Self { min, max })
    }

    pub fn contains(&self, n: i32) -> bool {
        self.min <= n && n <= self.max
    }
}

impl Default for NumberRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for NumberRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{}]", self.min, self.max)
    }
}

/// Result of one timed computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    pub n: i32,
    pub width: Width,
    pub value: i64,
    /// Whole milliseconds, as printed by default.
    pub elapsed_ms: u64,
    pub elapsed_ms_precise: f64,
}

/// Time a single evaluation of the recursive calculator.
pub fn measure(n: i32, width: Width) -> Measurement {
    let mut sw = Stopwatch::new();

    sw.start();
    // keep the call from being folded or moved outside the timed window
    let value = black_box(width.compute(black_box(n)));
    sw.stop();

    debug!(n, bits = width.bits(), elapsed_ms = sw.elapsed_millis(), "computed fibonacci");

    Measurement {
        n,
        width,
        value,
        elapsed_ms: sw.elapsed_millis(),
        elapsed_ms_precise: sw.elapsed_millis_f64(),
    }
}
