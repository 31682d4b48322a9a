use crate::pal::{TimeSource, TimeSourceFacade};
use crate::{Instant, MINIMUM_RESOLUTION, MonotonicSource};

/// A handle to a monotonic time source.
///
/// Every stopwatch and timer in this crate reads time through a `Clock`. The default clock
/// reads [`std::time::Instant`]; [`Clock::from_source()`] builds one over any other
/// [`MonotonicSource`].
///
/// Clones are cheap and share the same underlying source, so a clock can be handed to as many
/// stopwatches and timers as needed, including timers that read it from their own waiter thread.
///
/// # Examples
///
/// ```rust
/// use steady_time::Clock;
///
/// let clock = Clock::new();
/// let start = clock.now();
///
/// std::thread::sleep(std::time::Duration::from_millis(2));
///
/// assert!(start.elapsed(&clock).as_millis() >= 2);
/// ```
#[derive(Clone, Debug)]
pub struct Clock {
    inner: TimeSourceFacade,
}

impl Clock {
    /// Creates a clock over the default monotonic time source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: TimeSourceFacade::real(),
        }
    }

    /// Creates a clock over a custom monotonic time source.
    ///
    /// Sources that are not steady or whose resolution is coarser than
    /// [`MINIMUM_RESOLUTION`] are rejected when this function is instantiated for them,
    /// so the mistake surfaces as a build failure rather than as misbehaving timers.
    ///
    /// ```compile_fail
    /// use steady_time::{Clock, MonotonicSource};
    ///
    /// #[derive(Debug)]
    /// struct Wobbly;
    ///
    /// impl MonotonicSource for Wobbly {
    ///     const IS_STEADY: bool = false;
    ///     const RESOLUTION: std::time::Duration = std::time::Duration::from_nanos(1);
    ///
    ///     fn now(&self) -> std::time::Instant {
    ///         std::time::Instant::now()
    ///     }
    /// }
    ///
    /// let _clock = Clock::from_source(Wobbly);
    /// ```
    ///
    /// ```compile_fail
    /// use steady_time::{Clock, MonotonicSource};
    ///
    /// #[derive(Debug)]
    /// struct Coarse;
    ///
    /// impl MonotonicSource for Coarse {
    ///     const IS_STEADY: bool = true;
    ///     const RESOLUTION: std::time::Duration = std::time::Duration::from_millis(1);
    ///
    ///     fn now(&self) -> std::time::Instant {
    ///         std::time::Instant::now()
    ///     }
    /// }
    ///
    /// let _clock = Clock::from_source(Coarse);
    /// ```
    #[must_use]
    pub fn from_source<S: MonotonicSource>(source: S) -> Self {
        const {
            assert!(S::IS_STEADY, "the time source is not a monotonic clock");
            assert!(
                S::RESOLUTION.as_nanos() <= MINIMUM_RESOLUTION.as_nanos(),
                "the time source resolution is coarser than one microsecond"
            );
        }

        Self {
            inner: TimeSourceFacade::from_custom(source),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_facade(inner: impl Into<TimeSourceFacade>) -> Self {
        Self {
            inner: inner.into(),
        }
    }

    /// Samples the current point in time.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.inner.now().into()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
