/// Naive recursive Fibonacci over `i32`.
///
/// Any `n < 3`, including zero and negatives, hits the base case and returns 1.
/// Overflow wraps.
pub fn fibonacci(n: i32) -> i32 {
    if n >= 3 {
        fibonacci(n - 1).wrapping_add(fibonacci(n - 2))
    } else {
        1
    }
}

/// Same recursion as [`fibonacci`], in 64-bit arithmetic.
pub fn fibonacci64(n: i32) -> i64 {
    if n >= 3 {
        fibonacci64(n - 1).wrapping_add(fibonacci64(n - 2))
    } else {
        1
    }
}

/// Integer width used for the computation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Width {
    #[default]
    W32,
    W64,
}

impl Width {
    /// Run the matching calculator, widening the result to `i64`.
    pub fn compute(self, n: i32) -> i64 {
        match self {
            Width::W32 => i64::from(fibonacci(n)),
            Width::W64 => fibonacci64(n),
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            Width::W32 => 32,
            Width::W64 => 64,
        }
    }
}
