use std::fmt::Debug;
use std::time::Instant;

/// Object-safe view of a monotonic time source, shared between clones of a `Clock`
/// and with timer waiter threads.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait TimeSource: Debug + Send + Sync {
    fn now(&self) -> Instant;
}
