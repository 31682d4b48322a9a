use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::{Clock, Error, Instant, Result};

const MICROS_PER_MILLI: i64 = 1_000;
const MICROS_PER_SEC: f64 = 1_000_000.0;

/// A signed span of time with microsecond resolution.
///
/// The microsecond count is the single source of truth: equality, ordering, hashing and
/// arithmetic all operate on it, and every other unit is derived from it.
///
/// Unlike [`std::time::Duration`], a `Duration` may be negative. This happens naturally when
/// subtracting a later [`Instant`] from an earlier one.
///
/// # Conversions
///
/// * Milliseconds are `microseconds / 1000`, truncated toward zero and saturated into the
///   `i32` range.
/// * Seconds are `microseconds / 1_000_000` as floating point.
/// * Floating point seconds are turned into microseconds by scaling and truncating toward zero,
///   so `-1.5` microseconds worth of seconds becomes `-1` microsecond. Values beyond the `i64`
///   range saturate and NaN becomes zero.
///
/// # Comparisons
///
/// Besides other durations, a `Duration` can be compared with raw `i64` microseconds,
/// `i32` milliseconds, `f64`/`f32` seconds, [`std::time::Duration`], [`std::time::Instant`]
/// and [`Instant`]. The foreign operand is first converted to a `Duration` and the two
/// microsecond counts are then compared.
///
/// Note that an unsuffixed integer literal falls back to `i32` and is therefore
/// interpreted as milliseconds.
///
/// # Examples
///
/// ```rust
/// use steady_time::{Duration, microseconds, milliseconds, seconds};
///
/// let frame = milliseconds(16) + microseconds(667);
///
/// assert_eq!(frame.as_micros(), 16_667);
/// assert_eq!(frame.as_millis(), 16);
/// assert!((frame.as_secs_f64() - 0.016_667).abs() < 1e-9);
///
/// assert!(frame < seconds(0.017));
/// assert!(frame > 16_i32);
/// assert!(-frame < Duration::ZERO);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Duration {
    micros: i64,
}

impl Duration {
    /// The additive identity.
    pub const ZERO: Self = Self::from_micros(0);

    /// The largest representable duration.
    pub const MAX: Self = Self::from_micros(i64::MAX);

    /// The smallest (most negative) representable duration.
    pub const MIN: Self = Self::from_micros(i64::MIN);

    /// Returns the additive identity, same as [`Duration::ZERO`].
    #[must_use]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Samples the default monotonic time source and returns the reading as an offset from
    /// the process-wide time origin.
    ///
    /// Only differences between such values are meaningful.
    #[must_use]
    pub fn now() -> Self {
        Self::from(Clock::new().now())
    }

    /// Creates a duration from whole microseconds.
    #[must_use]
    pub const fn from_micros(micros: i64) -> Self {
        Self { micros }
    }

    /// Creates a duration from whole milliseconds.
    #[must_use]
    pub fn from_millis(millis: i32) -> Self {
        Self::from_micros(
            i64::from(millis)
                .checked_mul(MICROS_PER_MILLI)
                .expect("every i32 millisecond count fits in i64 microseconds"),
        )
    }

    /// Creates a duration from floating point seconds, truncating toward zero.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "truncation toward zero with saturation is the documented conversion"
    )]
    pub fn from_secs_f64(seconds: f64) -> Self {
        Self::from_micros((seconds * MICROS_PER_SEC) as i64)
    }

    /// Creates a duration from floating point seconds, truncating toward zero.
    #[must_use]
    pub fn from_secs_f32(seconds: f32) -> Self {
        Self::from_secs_f64(f64::from(seconds))
    }

    /// The microsecond count, the canonical representation of the duration.
    #[must_use]
    pub const fn as_micros(self) -> i64 {
        self.micros
    }

    /// Whole milliseconds, truncated toward zero and saturated into the `i32` range.
    #[must_use]
    #[expect(
        clippy::integer_division,
        reason = "truncation toward zero is the documented conversion"
    )]
    pub fn as_millis(self) -> i32 {
        let millis = self.micros / MICROS_PER_MILLI;

        i32::try_from(millis).unwrap_or(if millis < 0 { i32::MIN } else { i32::MAX })
    }

    /// Seconds as `f64`.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "floating point seconds are inherently approximate"
    )]
    pub fn as_secs_f64(self) -> f64 {
        self.micros as f64 / MICROS_PER_SEC
    }

    /// Seconds as `f32`.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "floating point seconds are inherently approximate"
    )]
    pub fn as_secs_f32(self) -> f32 {
        self.as_secs_f64() as f32
    }

    /// Whether the duration is exactly zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.micros == 0
    }

    /// Whether the duration is less than zero.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.micros < 0
    }

    /// The magnitude of the duration, saturating at [`Duration::MAX`].
    #[must_use]
    pub const fn abs(self) -> Self {
        Self::from_micros(self.micros.saturating_abs())
    }

    /// Adds two durations, returning `None` on overflow.
    #[must_use]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.micros.checked_add(rhs.micros) {
            Some(micros) => Some(Self::from_micros(micros)),
            None => None,
        }
    }

    /// Subtracts two durations, returning `None` on overflow.
    #[must_use]
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.micros.checked_sub(rhs.micros) {
            Some(micros) => Some(Self::from_micros(micros)),
            None => None,
        }
    }

    /// Negates the duration, returning `None` for [`Duration::MIN`].
    #[must_use]
    pub const fn checked_neg(self) -> Option<Self> {
        match self.micros.checked_neg() {
            Some(micros) => Some(Self::from_micros(micros)),
            None => None,
        }
    }

    /// Adds two durations, clamping at the representable range.
    #[must_use]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self::from_micros(self.micros.saturating_add(rhs.micros))
    }

    /// Subtracts two durations, clamping at the representable range.
    #[must_use]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self::from_micros(self.micros.saturating_sub(rhs.micros))
    }
}

/// Creates a [`Duration`] from floating point seconds, truncating toward zero.
#[must_use]
pub fn seconds(value: f64) -> Duration {
    Duration::from_secs_f64(value)
}

/// Creates a [`Duration`] from whole milliseconds.
#[must_use]
pub fn milliseconds(value: i32) -> Duration {
    Duration::from_millis(value)
}

/// Creates a [`Duration`] from whole microseconds.
#[must_use]
pub const fn microseconds(value: i64) -> Duration {
    Duration::from_micros(value)
}

impl From<std::time::Duration> for Duration {
    /// Truncates sub-microsecond precision and saturates at [`Duration::MAX`].
    fn from(value: std::time::Duration) -> Self {
        Self::from_micros(i64::try_from(value.as_micros()).unwrap_or(i64::MAX))
    }
}

impl From<Instant> for Duration {
    /// The offset of the reading from the process-wide time origin, negative for readings
    /// taken before the origin was first captured.
    fn from(value: Instant) -> Self {
        value.since_origin()
    }
}

impl From<std::time::Instant> for Duration {
    fn from(value: std::time::Instant) -> Self {
        Instant::from(value).into()
    }
}

impl TryFrom<Duration> for std::time::Duration {
    type Error = Error;

    fn try_from(value: Duration) -> Result<Self> {
        u64::try_from(value.micros)
            .map(Self::from_micros)
            .map_err(|_negative| Error::NegativeDuration {
                micros: value.micros,
            })
    }
}

impl Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}us", self.micros)
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.checked_add(rhs)
            .expect("overflow when adding durations")
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.checked_sub(rhs)
            .expect("overflow when subtracting durations")
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self {
        self.checked_neg()
            .expect("overflow when negating duration")
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Duration {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Duration {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Implements comparisons in both directions between [`Duration`] and a foreign type by
/// converting the foreign operand to a [`Duration`] first.
macro_rules! compare_via_duration {
    ($($foreign:ty => $convert:path),* $(,)?) => {
        $(
            impl PartialEq<$foreign> for Duration {
                fn eq(&self, other: &$foreign) -> bool {
                    *self == $convert(*other)
                }
            }

            impl PartialOrd<$foreign> for Duration {
                fn partial_cmp(&self, other: &$foreign) -> Option<Ordering> {
                    Some(self.cmp(&$convert(*other)))
                }
            }

            impl PartialEq<Duration> for $foreign {
                fn eq(&self, other: &Duration) -> bool {
                    $convert(*self) == *other
                }
            }

            impl PartialOrd<Duration> for $foreign {
                fn partial_cmp(&self, other: &Duration) -> Option<Ordering> {
                    Some($convert(*self).cmp(other))
                }
            }
        )*
    };
}

compare_via_duration!(
    i64 => Duration::from_micros,
    i32 => Duration::from_millis,
    f64 => Duration::from_secs_f64,
    f32 => Duration::from_secs_f32,
    std::time::Duration => Duration::from,
    std::time::Instant => Duration::from,
    Instant => Duration::from,
);
