//! Fake time source for testing.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use crate::{Clock, Duration, MonotonicSource};

/// Manually driven time source.
///
/// Time only moves when a test calls [`advance()`](Self::advance). Clones share the same
/// underlying reading, so a test can keep one clone while a `Clock` (possibly used from a timer
/// waiter thread) holds another.
#[derive(Clone, Debug)]
pub(crate) struct FakeTimeSource {
    now: Arc<Mutex<Instant>>,
}

impl FakeTimeSource {
    pub(crate) fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    /// Returns a fake source together with a clock that reads from it.
    pub(crate) fn with_clock() -> (Self, Clock) {
        let source = Self::new();
        let clock = Clock::from_source(source.clone());
        (source, clock)
    }

    /// Moves the fake time forward. Negative durations are not allowed because the source
    /// claims to be steady.
    pub(crate) fn advance(&self, by: Duration) {
        let by = std::time::Duration::try_from(by)
            .expect("fake time source can only move forward");

        let mut now = self
            .now
            .lock()
            .expect("FakeTimeSource state lock should not be poisoned");

        *now = now
            .checked_add(by)
            .expect("fake time advanced beyond what Instant can represent");
    }
}

impl MonotonicSource for FakeTimeSource {
    const IS_STEADY: bool = true;
    const RESOLUTION: std::time::Duration = std::time::Duration::from_nanos(1);

    fn now(&self) -> Instant {
        *self
            .now
            .lock()
            .expect("FakeTimeSource state lock should not be poisoned")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::{microseconds, milliseconds};

    #[test]
    fn stands_still_until_advanced() {
        let source = FakeTimeSource::new();

        let a = source.now();
        let b = source.now();
        assert_eq!(a, b);

        source.advance(microseconds(250));
        assert_eq!(source.now().duration_since(a), std::time::Duration::from_micros(250));
    }

    #[test]
    fn clones_share_time() {
        let (source, clock) = FakeTimeSource::with_clock();

        let before = clock.now();
        source.clone().advance(milliseconds(3));

        assert_eq!(clock.now() - before, milliseconds(3));
    }

    #[test]
    #[should_panic(expected = "fake time source can only move forward")]
    fn cannot_go_backwards() {
        let source = FakeTimeSource::new();
        source.advance(microseconds(-1));
    }
}
