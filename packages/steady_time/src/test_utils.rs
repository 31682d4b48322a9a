//! Helpers shared by the unit tests of this crate.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Runs a test on a separate thread and fails it if it does not finish within 10 seconds.
///
/// Timer tests block on waiter threads, so a bug in expiry detection shows up as a hang rather
/// than as a failed assertion. The watchdog turns such a hang into a failure.
pub(crate) fn with_watchdog<F, R>(test_fn: F) -> R
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    let (tx, rx) = mpsc::channel();

    let test_handle = thread::spawn(move || {
        let result = test_fn();
        // If this fails, the receiver has already timed out.
        drop(tx.send(result));
    });

    match rx.recv_timeout(Duration::from_secs(10)) {
        Ok(result) => {
            test_handle.join().expect("test thread should not panic");
            result
        }
        Err(mpsc::RecvTimeoutError::Timeout) => {
            panic!("test exceeded 10-second timeout - likely waiting on a timer that never fires");
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => match test_handle.join() {
            Ok(()) => panic!("test thread disconnected unexpectedly"),
            Err(e) => std::panic::resume_unwind(e),
        },
    }
}
