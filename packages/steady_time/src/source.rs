use std::fmt::Debug;

/// The finest resolution a [`MonotonicSource`] may have. Coarser sources are rejected at
/// compile time by [`Clock::from_source()`][crate::Clock::from_source].
pub const MINIMUM_RESOLUTION: std::time::Duration = std::time::Duration::from_micros(1);

/// A source of monotonic time readings that a [`Clock`][crate::Clock] can be built on.
///
/// The default clock reads [`std::time::Instant`] and most code never needs to implement this
/// trait. Custom sources are useful to drive stopwatches and timers from simulated time, for
/// example in deterministic tests of timer expiry.
///
/// # Contract
///
/// * Readings must never decrease between successive calls on the same source.
/// * [`IS_STEADY`](Self::IS_STEADY) must be `true` and [`RESOLUTION`](Self::RESOLUTION) must
///   not exceed [`MINIMUM_RESOLUTION`]. Both are checked when the source is turned into a
///   clock and a violation fails the build.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicU64, Ordering};
/// use std::time::Instant;
///
/// use steady_time::{Clock, MonotonicSource, microseconds};
///
/// #[derive(Debug)]
/// struct SimulatedTime {
///     origin: Instant,
///     elapsed_micros: Arc<AtomicU64>,
/// }
///
/// impl MonotonicSource for SimulatedTime {
///     const IS_STEADY: bool = true;
///     const RESOLUTION: std::time::Duration = std::time::Duration::from_micros(1);
///
///     fn now(&self) -> Instant {
///         self.origin
///             + std::time::Duration::from_micros(self.elapsed_micros.load(Ordering::Relaxed))
///     }
/// }
///
/// let elapsed_micros = Arc::new(AtomicU64::new(0));
/// let clock = Clock::from_source(SimulatedTime {
///     origin: Instant::now(),
///     elapsed_micros: Arc::clone(&elapsed_micros),
/// });
///
/// let start = clock.now();
/// elapsed_micros.store(42, Ordering::Relaxed);
/// assert_eq!(start.elapsed(&clock), microseconds(42));
/// ```
pub trait MonotonicSource: Debug + Send + Sync + 'static {
    /// Whether the source guarantees that readings never decrease.
    const IS_STEADY: bool;

    /// The smallest step between two distinct readings of the source.
    const RESOLUTION: std::time::Duration;

    /// Samples the current point in time.
    fn now(&self) -> std::time::Instant;
}
