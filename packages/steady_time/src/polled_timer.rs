use std::fmt::{self, Debug};

use tracing::debug;

use crate::{Clock, Countdown, Duration, FastTimer, TimerInterval, TimerState};

/// A countdown timer that runs a callback, driven by the owner calling
/// [`advance()`](Self::advance).
///
/// No thread is involved. The owner calls `advance()` periodically, typically once per tick of
/// an application loop. The first call that observes the deadline runs the callback on the
/// caller's thread. Every later call does nothing.
///
/// "Done" and "fired" are separate questions: [`is_done()`](Self::is_done) becomes `true` as soon
/// as the deadline passes, whereas [`is_fired()`](Self::is_fired) only becomes `true` once an
/// `advance()` call has run the callback. Between the two the timer is
/// [`TimerState::Expired`].
///
/// If the callback panics, the panic propagates out of `advance()`. The timer counts as fired
/// regardless and never calls the callback again.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
///
/// use steady_time::{PolledTimer, milliseconds};
///
/// let executed = Cell::new(false);
/// let mut timer = PolledTimer::new(milliseconds(2), || executed.set(true));
///
/// while !timer.is_fired() {
///     // One tick of the application loop.
///     timer.advance();
///     std::thread::sleep(std::time::Duration::from_millis(1));
/// }
///
/// assert!(executed.get());
/// ```
pub struct PolledTimer<F> {
    countdown: FastTimer,

    // Taken when the callback runs, so `None` means fired.
    callback: Option<F>,
}

impl<F: FnOnce()> PolledTimer<F> {
    /// Creates a timer over the default clock, armed now.
    #[must_use]
    pub fn new(interval: impl Into<TimerInterval>, callback: F) -> Self {
        Self::with_clock(interval, &Clock::new(), callback)
    }

    /// Creates a timer over the given clock, armed now.
    #[must_use]
    pub fn with_clock(interval: impl Into<TimerInterval>, clock: &Clock, callback: F) -> Self {
        Self {
            countdown: FastTimer::with_clock(interval, clock),
            callback: Some(callback),
        }
    }

    /// Runs the callback if the deadline has passed and it has not run yet.
    ///
    /// Returns `true` if this call ran the callback.
    ///
    /// # Panics
    ///
    /// Propagates any panic raised by the callback.
    pub fn advance(&mut self) -> bool {
        let countdown = &self.countdown;

        let Some(callback) = self.callback.take_if(|_| countdown.is_done()) else {
            return false;
        };

        debug!(
            overdue = %countdown.deadline().elapsed(countdown.clock()),
            "polled timer expired, running callback"
        );

        callback();
        true
    }
}

impl<F> PolledTimer<F> {
    /// Whether the deadline has been reached, regardless of whether the callback has run.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.countdown.is_done()
    }

    /// Whether the deadline is still in the future.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.countdown.is_running()
    }

    /// The time remaining until the deadline, never less than zero.
    #[must_use]
    pub fn time_left(&self) -> Duration {
        self.countdown.time_left()
    }

    /// Whether an [`advance()`](Self::advance) call has run the callback.
    #[must_use]
    pub fn is_fired(&self) -> bool {
        self.callback.is_none()
    }

    /// The current lifecycle state.
    #[must_use]
    pub fn state(&self) -> TimerState {
        if self.is_fired() {
            TimerState::Fired
        } else if self.is_done() {
            TimerState::Expired
        } else {
            TimerState::Armed
        }
    }
}

impl<F> Countdown for PolledTimer<F> {
    fn is_done(&self) -> bool {
        Self::is_done(self)
    }

    fn time_left(&self) -> Duration {
        Self::time_left(self)
    }
}

impl<F> Debug for PolledTimer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolledTimer")
            .field("countdown", &self.countdown)
            .field("fired", &self.is_fired())
            .finish_non_exhaustive()
    }
}
