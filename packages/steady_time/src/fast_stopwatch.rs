use crate::{Clock, Duration, Instant};

/// The lightest way to measure time between successive points in a loop.
///
/// Stores a single reading. Each call to [`elapsed()`](Self::elapsed) returns the time since the
/// previous call (or since construction) and moves the reference point to the current time.
/// There is no running or stopped state.
///
/// # Examples
///
/// ```rust
/// use steady_time::FastStopwatch;
///
/// let mut frame_time = FastStopwatch::new();
///
/// for _ in 0..3 {
///     let delta = frame_time.elapsed();
///     // update_simulation(delta.as_secs_f64());
///     assert!(delta.as_micros() >= 0);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct FastStopwatch {
    clock: Clock,
    last: Instant,
}

impl FastStopwatch {
    /// Creates a stopwatch over the default clock, starting now.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(&Clock::new())
    }

    /// Creates a stopwatch over the given clock, starting now.
    #[must_use]
    pub fn with_clock(clock: &Clock) -> Self {
        Self {
            clock: clock.clone(),
            last: clock.now(),
        }
    }

    /// Returns the time since the previous call, or since construction on the first call,
    /// and makes the current time the new reference point.
    #[must_use = "the reference point moves even if the result is ignored"]
    pub fn elapsed(&mut self) -> Duration {
        let now = self.clock.now();
        let elapsed = now - self.last;
        self.last = now;
        elapsed
    }
}

impl Default for FastStopwatch {
    fn default() -> Self {
        Self::new()
    }
}
