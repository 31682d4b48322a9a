use crate::{Clock, Countdown, Duration, Instant, TimerInterval};

/// A countdown that is only ever polled.
///
/// Stores the start reading and the deadline, nothing else. It has no callback and no thread;
/// [`is_done()`](Self::is_done) simply compares the clock with the deadline. This makes it the
/// cheapest timer in the crate and the building block of the callback timers.
///
/// # Examples
///
/// ```rust
/// use steady_time::{FastTimer, milliseconds};
///
/// let timer = FastTimer::new(milliseconds(5));
///
/// while timer.is_running() {
///     let _left = timer.time_left();
///     std::thread::sleep(std::time::Duration::from_millis(1));
/// }
///
/// assert!(timer.is_done());
/// assert!(timer.time_left().is_zero());
/// ```
#[derive(Clone, Debug)]
pub struct FastTimer {
    clock: Clock,
    start: Instant,
    deadline: Instant,
}

impl FastTimer {
    /// Creates a timer over the default clock, started now.
    #[must_use]
    pub fn new(interval: impl Into<TimerInterval>) -> Self {
        Self::with_clock(interval, &Clock::new())
    }

    /// Creates a timer over the given clock, started now.
    ///
    /// # Panics
    ///
    /// Panics if the deadline lies beyond what the clock can represent.
    #[must_use]
    pub fn with_clock(interval: impl Into<TimerInterval>, clock: &Clock) -> Self {
        let start = clock.now();

        Self {
            clock: clock.clone(),
            start,
            deadline: interval.into().deadline_from(start),
        }
    }

    /// Whether the deadline has been reached.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.clock.now() >= self.deadline
    }

    /// Whether the deadline is still in the future.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.is_done()
    }

    /// The time remaining until the deadline, never less than zero.
    #[must_use]
    pub fn time_left(&self) -> Duration {
        (self.deadline - self.clock.now()).max(Duration::ZERO)
    }

    /// The reading at which the timer was created.
    #[must_use]
    pub fn start(&self) -> Instant {
        self.start
    }

    /// The reading at which the timer expires.
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub(crate) fn clock(&self) -> &Clock {
        &self.clock
    }
}

impl Countdown for FastTimer {
    fn is_done(&self) -> bool {
        Self::is_done(self)
    }

    fn time_left(&self) -> Duration {
        Self::time_left(self)
    }
}
