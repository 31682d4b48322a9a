use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::sync::LazyLock;

use crate::{Clock, Duration};

/// Reference point that `Duration::from(Instant)` measures readings against. Captured the first
/// time anything asks for it.
static ORIGIN: LazyLock<std::time::Instant> = LazyLock::new(std::time::Instant::now);

/// A reading taken from a [`Clock`].
///
/// Readings are totally ordered. Subtracting two readings yields a signed [`Duration`] and
/// adding a [`Duration`] to a reading yields another reading.
///
/// You may convert the instant into an [`std::time::Instant`] for interoperability with
/// standard library code.
///
/// # Examples
///
/// ```rust
/// use steady_time::{Clock, milliseconds};
///
/// let clock = Clock::new();
/// let start = clock.now();
/// let deadline = start + milliseconds(5);
///
/// assert!(deadline > start);
/// assert_eq!(deadline - start, milliseconds(5));
/// assert_eq!(start - deadline, -milliseconds(5));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Instant {
    inner: std::time::Instant,
}

impl Instant {
    /// Calculates the time elapsed since this instant according to the provided clock.
    ///
    /// The result is negative if the instant lies in the future of the clock.
    #[must_use]
    pub fn elapsed(&self, clock: &Clock) -> Duration {
        clock.now() - *self
    }

    /// Calculates the duration since an earlier instant, or zero if `earlier` is actually later.
    #[must_use]
    pub fn saturating_duration_since(&self, earlier: Self) -> Duration {
        self.inner.saturating_duration_since(earlier.inner).into()
    }

    /// Returns the instant `duration` after this one (before it, for a negative duration),
    /// or `None` if the result is not representable.
    #[must_use]
    pub fn checked_add(&self, duration: Duration) -> Option<Self> {
        let magnitude = std::time::Duration::from_micros(duration.as_micros().unsigned_abs());

        let inner = if duration.is_negative() {
            self.inner.checked_sub(magnitude)
        } else {
            self.inner.checked_add(magnitude)
        }?;

        Some(Self { inner })
    }

    /// Returns the instant `duration` before this one, or `None` if the result is not
    /// representable.
    #[must_use]
    pub fn checked_sub(&self, duration: Duration) -> Option<Self> {
        self.checked_add(duration.checked_neg()?)
    }

    /// The offset of this reading from the process-wide time origin.
    pub(crate) fn since_origin(self) -> Duration {
        Self::from(*ORIGIN).signed_difference(self)
    }

    /// `later - self` as a signed duration.
    fn signed_difference(self, later: Self) -> Duration {
        if later.inner >= self.inner {
            later.inner.duration_since(self.inner).into()
        } else {
            -Duration::from(self.inner.duration_since(later.inner))
        }
    }
}

impl Sub for Instant {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Duration {
        rhs.signed_difference(self)
    }
}

impl Add<Duration> for Instant {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        self.checked_add(rhs)
            .expect("overflow when adding duration to instant")
    }
}

impl Sub<Duration> for Instant {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self {
        self.checked_sub(rhs)
            .expect("overflow when subtracting duration from instant")
    }
}

impl AddAssign<Duration> for Instant {
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

impl SubAssign<Duration> for Instant {
    fn sub_assign(&mut self, rhs: Duration) {
        *self = *self - rhs;
    }
}

impl From<std::time::Instant> for Instant {
    fn from(inner: std::time::Instant) -> Self {
        Self { inner }
    }
}

impl From<Instant> for std::time::Instant {
    fn from(instant: Instant) -> Self {
        instant.inner
    }
}
