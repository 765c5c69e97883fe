//! Wall-clock stopwatch used for search time budgets.
//!
//! Budgets are soft: callers poll [`Stopwatch::elapsed`] between units of
//! work, so a single long unit can overrun the budget before the next check.

use std::time::{Duration, Instant};

/// Measures elapsed wall-clock time from its creation.
#[derive(Copy, Clone, Debug)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    /// Start timing now.
    #[inline]
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed time in fractional seconds.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    /// `true` while less than `budget` has elapsed.
    #[inline]
    pub fn within(&self, budget: Duration) -> bool {
        self.elapsed() < budget
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start()
    }
}
