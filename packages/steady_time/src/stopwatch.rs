use crate::{Clock, Duration, Instant};

/// A stopwatch that can be paused, resumed and restarted.
///
/// A new stopwatch is running. While running, [`elapsed()`](Self::elapsed) grows with the
/// clock. [`stop()`](Self::stop) freezes it and [`start()`](Self::start) resumes counting from
/// the frozen value, so time spent stopped is not included.
///
/// [`restart()`](Self::restart) and [`reset()`](Self::reset) behave identically: both return
/// the elapsed time and start counting again from zero, in the running state.
///
/// Compared to [`FastStopwatch`][crate::FastStopwatch], reading the elapsed time has no side
/// effects.
///
/// # Examples
///
/// ```rust
/// use steady_time::Stopwatch;
///
/// let mut stopwatch = Stopwatch::new();
///
/// // Work that should be measured.
/// stopwatch.stop();
///
/// // Work that should not be measured.
/// let frozen = stopwatch.elapsed();
/// assert_eq!(stopwatch.elapsed(), frozen);
///
/// stopwatch.start();
/// // More work that should be measured.
/// let total = stopwatch.restart();
/// assert!(total >= frozen);
/// ```
#[derive(Clone, Debug)]
pub struct Stopwatch {
    clock: Clock,

    reference: Instant,

    // If set, the stopwatch is stopped and the elapsed time is frozen at this point.
    stopped_at: Option<Instant>,
}

impl Stopwatch {
    /// Creates a running stopwatch over the default clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(&Clock::new())
    }

    /// Creates a running stopwatch over the given clock.
    #[must_use]
    pub fn with_clock(clock: &Clock) -> Self {
        Self {
            clock: clock.clone(),
            reference: clock.now(),
            stopped_at: None,
        }
    }

    /// Whether the stopwatch is currently counting.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.stopped_at.is_none()
    }

    /// The time counted since construction or the last restart, excluding stopped periods.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        let end = self.stopped_at.unwrap_or_else(|| self.clock.now());
        end - self.reference
    }

    /// Returns the elapsed time and starts counting again from zero.
    ///
    /// The stopwatch is running afterwards, even if it was stopped before.
    pub fn restart(&mut self) -> Duration {
        let now = self.clock.now();
        let elapsed = self.stopped_at.unwrap_or(now) - self.reference;

        self.reference = now;
        self.stopped_at = None;

        elapsed
    }

    /// Same as [`restart()`](Self::restart).
    pub fn reset(&mut self) -> Duration {
        self.restart()
    }

    /// Resumes counting after [`stop()`](Self::stop), keeping the time already counted.
    ///
    /// Does nothing if the stopwatch is running.
    pub fn start(&mut self) {
        if let Some(stopped_at) = self.stopped_at.take() {
            self.reference += self.clock.now() - stopped_at;
        }
    }

    /// Freezes the elapsed time.
    ///
    /// Does nothing if the stopwatch is already stopped, so the original freeze point is kept.
    pub fn stop(&mut self) {
        if self.stopped_at.is_none() {
            self.stopped_at = Some(self.clock.now());
        }
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}
