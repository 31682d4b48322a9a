use std::time::Instant;

use crate::pal::TimeSource;

/// The default time source reads `std::time::Instant`, which is monotonic on every supported
/// target and has at least microsecond resolution on all of them.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RustTimeSource;

impl TimeSource for RustTimeSource {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
