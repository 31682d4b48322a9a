//! Example code for the `README.md` file.
//!
//! This contains the same code that appears in the `steady_time` package `README.md`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use steady_time::{FastStopwatch, PolledTimer, Stopwatch, ThreadTimer, milliseconds, seconds};

fn main() {
    // Frame timing: each call returns the time since the previous one.
    let mut frame_time = FastStopwatch::new();

    for frame in 0..3 {
        std::thread::sleep(std::time::Duration::from_millis(5));
        let delta = frame_time.elapsed();
        println!("Frame {frame} took {delta} ({:.4} s)", delta.as_secs_f64());
    }

    // A pausable stopwatch.
    let mut session = Stopwatch::new();
    std::thread::sleep(std::time::Duration::from_millis(5));
    session.stop();
    std::thread::sleep(std::time::Duration::from_millis(20));
    session.start();
    println!("Active for {} ms", session.elapsed().as_millis());

    // A callback that runs on its own thread once the interval expires.
    let executed = Arc::new(AtomicBool::new(false));
    let timer = ThreadTimer::new(milliseconds(10), {
        let executed = Arc::clone(&executed);
        move || executed.store(true, Ordering::Relaxed)
    });

    // Dropping the timer waits for the callback.
    drop(timer);
    println!("Thread timer fired: {}", executed.load(Ordering::Relaxed));

    // A callback that runs when the application loop polls the timer.
    let mut polled = PolledTimer::new(seconds(0.01), || println!("Polled timer fired"));

    while !polled.advance() {
        std::thread::sleep(std::time::Duration::from_millis(1));
    }
}
