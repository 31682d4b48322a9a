use std::any::Any;
use std::fmt::{self, Debug};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use tracing::{error, trace};

use crate::{Clock, Countdown, Duration, FastTimer, TimerInterval, TimerState, microseconds};

/// How often a waiter thread checks its deadline unless configured otherwise.
pub const DEFAULT_PRECISION: Duration = microseconds(1);

const DEFAULT_THREAD_NAME: &str = "steady_time-timer";

/// A countdown timer that runs a callback on a dedicated waiter thread.
///
/// Creating the timer spawns a thread that sleeps in steps of the configured precision until the
/// deadline passes, runs the callback exactly once and exits. The owner does not need to do
/// anything for the callback to run.
///
/// The queries ([`is_done()`](Self::is_done), [`time_left()`](Self::time_left), ...) compare the
/// clock with the deadline directly, so they reflect true elapsed time rather than the waiter's
/// polling cadence.
///
/// # Dropping
///
/// Dropping the timer joins the waiter thread. If the deadline has not passed yet, the drop
/// blocks until it has and the callback has returned. The wait is not interruptible and there is
/// no way to cancel an armed timer. Once `drop()` returns, the callback is guaranteed not to be
/// running and never to run again.
///
/// # Callback panics
///
/// A panic in the callback terminates the waiter thread. It is reported through the standard
/// panic hook like any other thread panic. The timer still counts as fired.
/// [`join()`](Self::join) returns the panic to the caller; dropping the timer logs it instead.
///
/// # Resource usage
///
/// Every timer owns one OS thread for its whole lifetime. This keeps each timer independent of
/// every other but does not scale to large numbers of simultaneous timers.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicBool, Ordering};
///
/// use steady_time::{ThreadTimer, milliseconds};
///
/// let executed = Arc::new(AtomicBool::new(false));
///
/// let timer = ThreadTimer::new(milliseconds(5), {
///     let executed = Arc::clone(&executed);
///     move || executed.store(true, Ordering::Relaxed)
/// });
///
/// // Joining (or dropping) waits for the callback to run.
/// timer.join().unwrap();
///
/// assert!(executed.load(Ordering::Relaxed));
/// ```
pub struct ThreadTimer {
    countdown: FastTimer,
    fired: Arc<AtomicBool>,

    // Only `None` after `join()` has taken it.
    waiter: Option<JoinHandle<()>>,
}

impl ThreadTimer {
    /// Creates a timer over the default clock with the default precision and starts its
    /// waiter thread.
    ///
    /// # Panics
    ///
    /// Panics if the operating system fails to create a thread.
    #[must_use = "dropping the timer blocks until the callback has run"]
    pub fn new<F>(interval: impl Into<TimerInterval>, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self::builder(interval).spawn(callback)
    }

    /// Starts configuring a timer with a non-default precision, clock or thread name.
    pub fn builder(interval: impl Into<TimerInterval>) -> ThreadTimerBuilder {
        ThreadTimerBuilder::new(interval.into())
    }

    /// Whether the deadline has been reached.
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

    /// Whether the callback has finished running, by returning or by panicking.
    #[must_use]
    pub fn is_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
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

    /// Waits for the deadline and for the callback to return.
    ///
    /// # Errors
    ///
    /// Returns the panic payload if the callback panicked.
    pub fn join(mut self) -> thread::Result<()> {
        self.waiter.take().map_or(Ok(()), JoinHandle::join)
    }
}

impl Countdown for ThreadTimer {
    fn is_done(&self) -> bool {
        Self::is_done(self)
    }

    fn time_left(&self) -> Duration {
        Self::time_left(self)
    }
}

impl Drop for ThreadTimer {
    fn drop(&mut self) {
        let Some(waiter) = self.waiter.take() else {
            return;
        };

        if let Err(payload) = waiter.join() {
            error!(
                panic = panic_message(payload.as_ref()),
                "timer callback panicked on its waiter thread"
            );
        }
    }
}

impl Debug for ThreadTimer {
    #[cfg_attr(test, mutants::skip)] // No API contract for debug output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThreadTimer")
            .field("countdown", &self.countdown)
            .field("fired", &self.is_fired())
            .finish_non_exhaustive()
    }
}

/// Configures and spawns a [`ThreadTimer`].
///
/// # Examples
///
/// ```rust
/// use steady_time::{ThreadTimer, milliseconds};
///
/// let timer = ThreadTimer::builder(milliseconds(2))
///     .precision(milliseconds(1))
///     .name("heartbeat")
///     .spawn(|| println!("beat"));
///
/// assert!(timer.time_left() <= milliseconds(2));
/// ```
#[derive(Debug)]
#[must_use = "the timer is only started by calling spawn()"]
#[allow(
    clippy::module_name_repetitions,
    reason = "the builder is re-exported from the crate root next to the timer it builds"
)]
pub struct ThreadTimerBuilder {
    interval: TimerInterval,
    precision: Duration,
    clock: Option<Clock>,
    name: Option<String>,
}

impl ThreadTimerBuilder {
    fn new(interval: TimerInterval) -> Self {
        Self {
            interval,
            precision: DEFAULT_PRECISION,
            clock: None,
            name: None,
        }
    }

    /// How long the waiter thread sleeps between deadline checks.
    ///
    /// This bounds how late the callback may run after the deadline (on top of operating system
    /// scheduling latency) but does not change how the deadline is measured. Values below
    /// [`DEFAULT_PRECISION`] are raised to it.
    pub fn precision(mut self, precision: Duration) -> Self {
        self.precision = precision.max(DEFAULT_PRECISION);
        self
    }

    /// The clock to measure the interval with. Defaults to [`Clock::new()`].
    pub fn clock(mut self, clock: &Clock) -> Self {
        self.clock = Some(clock.clone());
        self
    }

    /// The name of the waiter thread, as shown in debuggers and panic messages.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Arms the timer and starts its waiter thread.
    ///
    /// The interval is measured from this call.
    ///
    /// # Panics
    ///
    /// Panics if the operating system fails to create a thread.
    #[must_use = "dropping the timer blocks until the callback has run"]
    pub fn spawn<F>(self, callback: F) -> ThreadTimer
    where
        F: FnOnce() + Send + 'static,
    {
        let clock = self.clock.unwrap_or_default();
        let countdown = FastTimer::with_clock(self.interval, &clock);
        let fired = Arc::new(AtomicBool::new(false));

        let poll_interval = std::time::Duration::try_from(self.precision)
            .expect("precision is clamped to a positive value");

        trace!(
            time_left = %countdown.time_left(),
            precision = %self.precision,
            "arming thread timer"
        );

        let waiter = thread::Builder::new()
            .name(self.name.unwrap_or_else(|| DEFAULT_THREAD_NAME.to_owned()))
            .spawn({
                let countdown = countdown.clone();
                let fired = Arc::clone(&fired);

                move || {
                    while countdown.is_running() {
                        thread::sleep(poll_interval);
                    }

                    trace!("thread timer expired, running callback");

                    // Fired is terminal even if the callback unwinds.
                    let _fired_guard =
                        scopeguard::guard(fired, |fired| fired.store(true, Ordering::Release));

                    callback();
                }
            })
            .expect("failed to spawn timer waiter thread");

        ThreadTimer {
            countdown,
            fired,
            waiter: Some(waiter),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string panic payload>")
}
