use std::fmt::Debug;
use std::sync::Arc;
use std::time::Instant;

use crate::MonotonicSource;
#[cfg(test)]
use crate::pal::MockTimeSource;
use crate::pal::{RustTimeSource, TimeSource};

/// Dispatches to whichever time source a `Clock` was created with.
///
/// Cloning is cheap: the real source is a unit type and the others are reference counted,
/// so every clone observes the same underlying source.
#[derive(Clone)]
pub(crate) enum TimeSourceFacade {
    Real(RustTimeSource),

    Custom(Arc<dyn TimeSource>),

    #[cfg(test)]
    Mock(Arc<MockTimeSource>),
}

impl TimeSourceFacade {
    pub(crate) fn real() -> Self {
        Self::Real(RustTimeSource)
    }

    pub(crate) fn from_custom<S: MonotonicSource>(source: S) -> Self {
        Self::Custom(Arc::new(CustomTimeSource(source)))
    }
}

#[cfg(test)]
impl From<MockTimeSource> for TimeSourceFacade {
    fn from(ts: MockTimeSource) -> Self {
        Self::Mock(Arc::new(ts))
    }
}

impl TimeSource for TimeSourceFacade {
    fn now(&self) -> Instant {
        match self {
            Self::Real(ts) => ts.now(),
            Self::Custom(ts) => ts.now(),
            #[cfg(test)]
            Self::Mock(ts) => ts.now(),
        }
    }
}

impl Debug for TimeSourceFacade {
    #[cfg_attr(test, mutants::skip)] // No API contract for debug output.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(ts) => ts.fmt(f),
            Self::Custom(ts) => ts.fmt(f),
            #[cfg(test)]
            Self::Mock(ts) => ts.fmt(f),
        }
    }
}

/// Adapts a user-provided [`MonotonicSource`] to the object-safe platform trait.
#[derive(Debug)]
struct CustomTimeSource<S>(S);

impl<S: MonotonicSource> TimeSource for CustomTimeSource<S> {
    fn now(&self) -> Instant {
        self.0.now()
    }
}
