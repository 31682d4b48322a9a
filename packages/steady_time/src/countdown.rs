use crate::{Duration, Instant};

/// Queries shared by every countdown timer in this crate.
///
/// All three queries are pure functions of the current clock reading and the timer's deadline.
/// Because clock readings never decrease, once [`is_done()`](Self::is_done) has returned `true`
/// it keeps returning `true`.
pub trait Countdown {
    /// Whether the deadline has been reached.
    fn is_done(&self) -> bool;

    /// Whether the deadline is still in the future. The negation of [`is_done()`](Self::is_done).
    fn is_running(&self) -> bool {
        !self.is_done()
    }

    /// The time remaining until the deadline, never less than zero.
    fn time_left(&self) -> Duration;
}

/// When a countdown timer expires.
///
/// Usually created implicitly through `From`: a [`Duration`] or [`std::time::Duration`] is an
/// interval measured from the moment the timer is created, an [`Instant`] is an absolute
/// deadline.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "a deadline is either relative or absolute, there is no third option"
)]
pub enum TimerInterval {
    /// Expire this long after the timer is created. Zero or negative intervals expire
    /// immediately.
    After(Duration),

    /// Expire when the clock reaches this reading.
    At(Instant),
}

impl TimerInterval {
    /// Resolves the interval into an absolute deadline for a timer started at `start`.
    pub(crate) fn deadline_from(self, start: Instant) -> Instant {
        match self {
            Self::After(interval) => start + interval,
            Self::At(deadline) => deadline,
        }
    }
}

impl From<Duration> for TimerInterval {
    fn from(interval: Duration) -> Self {
        Self::After(interval)
    }
}

impl From<std::time::Duration> for TimerInterval {
    fn from(interval: std::time::Duration) -> Self {
        Self::After(interval.into())
    }
}

impl From<Instant> for TimerInterval {
    fn from(deadline: Instant) -> Self {
        Self::At(deadline)
    }
}

/// Lifecycle of a callback timer.
///
/// Transitions only move forward: `Armed` to `Expired` to `Fired`. `Fired` is terminal and the
/// callback runs at most once per timer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "the timer lifecycle has exactly these states"
)]
pub enum TimerState {
    /// The deadline has not been reached.
    Armed,

    /// The deadline has been reached but the callback has not finished running yet.
    ///
    /// A [`PolledTimer`][crate::PolledTimer] stays here until the next
    /// [`advance()`][crate::PolledTimer::advance]. A [`ThreadTimer`][crate::ThreadTimer] passes
    /// through it only while its waiter thread notices expiry and runs the callback.
    Expired,

    /// The callback has run.
    Fired,
}
