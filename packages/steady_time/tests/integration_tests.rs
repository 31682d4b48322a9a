//! Integration tests for `steady_time` against the real operating system clock.
//!
//! Sleeps only ever guarantee a lower bound, so these tests assert lower bounds and leave
//! generous slack on anything that depends on scheduling latency.

use std::cell::Cell;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;

use steady_time::{
    Countdown, Duration, FastStopwatch, FastTimer, PolledTimer, Stopwatch, ThreadTimer,
    TimerState, milliseconds,
};

fn sleep(duration: Duration) {
    thread::sleep(duration.try_into().unwrap());
}

#[test]
#[cfg_attr(miri, ignore)] // Miri sleeps are too slow for timing assertions.
fn fast_stopwatch_measures_sleep() {
    let mut stopwatch = FastStopwatch::new();

    let first = stopwatch.elapsed();
    assert!(!first.is_negative());

    sleep(milliseconds(10));

    let second = stopwatch.elapsed();
    assert!(second >= milliseconds(10), "measured {second}");
}

#[test]
#[cfg_attr(miri, ignore)] // Miri sleeps are too slow for timing assertions.
fn stopwatch_excludes_stopped_time() {
    let mut stopwatch = Stopwatch::new();

    sleep(milliseconds(5));
    stopwatch.stop();
    let at_stop = stopwatch.elapsed();
    assert!(at_stop >= milliseconds(5));

    sleep(milliseconds(20));
    assert_eq!(stopwatch.elapsed(), at_stop);

    stopwatch.start();
    let after_start = stopwatch.elapsed();

    assert!(after_start >= at_stop);
    // Less than the time spent stopped, even with scheduling noise on either side.
    assert!(
        after_start - at_stop < milliseconds(20),
        "resumed at {after_start} after stopping at {at_stop}"
    );
}

#[test]
#[cfg_attr(miri, ignore)] // Miri sleeps are too slow for timing assertions.
fn stopwatch_restart_returns_elapsed() {
    let mut stopwatch = Stopwatch::new();

    sleep(milliseconds(5));

    let before_restart = stopwatch.restart();
    assert!(before_restart >= milliseconds(5));
    assert!(stopwatch.elapsed() < before_restart);
}

#[test]
#[cfg_attr(miri, ignore)] // Miri sleeps are too slow for timing assertions.
fn fast_timer_runs_out() {
    let timer = FastTimer::new(milliseconds(10));

    assert!(timer.is_running());
    assert!(timer.time_left() <= milliseconds(10));

    while timer.is_running() {
        sleep(milliseconds(1));
    }

    assert!(timer.is_done());
    assert_eq!(timer.time_left(), Duration::ZERO);
    assert_eq!(timer.deadline() - timer.start(), milliseconds(10));
}

#[test]
#[cfg_attr(miri, ignore)] // Miri sleeps are too slow for timing assertions.
fn thread_timer_fires_without_help() {
    let executed = Arc::new(AtomicBool::new(false));

    let timer = ThreadTimer::new(milliseconds(10), {
        let executed = Arc::clone(&executed);
        move || executed.store(true, Ordering::Relaxed)
    });

    while !timer.is_done() {
        sleep(milliseconds(1));
    }

    // A few precision quanta plus generous scheduling slack for loaded machines.
    let grace = Stopwatch::new();
    while !executed.load(Ordering::Relaxed) && grace.elapsed() < milliseconds(50) {
        sleep(milliseconds(1));
    }

    assert!(
        executed.load(Ordering::Relaxed),
        "callback did not run within {} of expiry",
        grace.elapsed()
    );

    // The flag is set by the waiter right after the callback returns.
    while !timer.is_fired() {
        thread::yield_now();
    }
    assert!(timer.is_done());
    assert_eq!(timer.state(), TimerState::Fired);
}

#[test]
#[cfg_attr(miri, ignore)] // Miri sleeps are too slow for timing assertions.
fn thread_timer_drop_blocks_until_callback_ran() {
    let executed = Arc::new(AtomicBool::new(false));
    let mut created = FastStopwatch::new();

    let timer = ThreadTimer::new(milliseconds(10), {
        let executed = Arc::clone(&executed);
        move || executed.store(true, Ordering::Relaxed)
    });

    drop(timer);

    assert!(executed.load(Ordering::Relaxed));
    assert!(created.elapsed() >= milliseconds(10));
}

#[test]
#[cfg_attr(miri, ignore)] // Miri sleeps are too slow for timing assertions.
fn many_thread_timers_each_fire_once() {
    let calls = Arc::new(AtomicUsize::new(0));

    let timers = (0..8)
        .map(|index| {
            ThreadTimer::builder(milliseconds(index))
                .precision(milliseconds(1))
                .name(format!("timer-{index}"))
                .spawn({
                    let calls = Arc::clone(&calls);
                    move || {
                        calls.fetch_add(1, Ordering::Relaxed);
                    }
                })
        })
        .collect::<Vec<_>>();

    for timer in timers {
        timer.join().unwrap();
    }

    assert_eq!(calls.load(Ordering::Relaxed), 8);
}

#[test]
#[cfg_attr(miri, ignore)] // Miri sleeps are too slow for timing assertions.
fn polled_timer_fires_on_caller_thread() {
    let calls = Cell::new(0);
    let caller = thread::current().id();
    let fired_on = Cell::new(None);

    let mut timer = PolledTimer::new(milliseconds(10), || {
        calls.set(calls.get() + 1);
        fired_on.set(Some(thread::current().id()));
    });

    while !timer.is_done() {
        timer.advance();
        sleep(milliseconds(1));
    }

    // Done, but nothing runs until the next advance.
    timer.advance();
    assert_eq!(calls.get(), 1);
    assert_eq!(fired_on.get(), Some(caller));

    timer.advance();
    timer.advance();
    assert_eq!(calls.get(), 1);
}

#[test]
#[cfg_attr(miri, ignore)] // Miri cannot spin for real milliseconds in reasonable time.
fn polled_timer_spinning_fires_only_after_interval() {
    let executed = Cell::new(false);
    let since_creation = Stopwatch::new();
    let mut timer = PolledTimer::new(milliseconds(10), || executed.set(true));

    while !timer.advance() {
        if since_creation.elapsed() < milliseconds(10) {
            assert!(!executed.get());
        }
    }

    assert!(executed.get());
    assert!(since_creation.elapsed() >= milliseconds(10));

    executed.set(false);
    assert!(!timer.advance());
    assert!(!executed.get());
}

#[test]
fn polled_timer_never_fires_without_advance() {
    let executed = Cell::new(false);
    let timer = PolledTimer::new(Duration::ZERO, || executed.set(true));

    assert!(timer.is_done());
    assert_eq!(timer.state(), TimerState::Expired);
    assert!(!executed.get());
}

#[test]
fn timers_are_usable_through_countdown() {
    fn all_done(countdowns: &[&dyn Countdown]) -> bool {
        countdowns.iter().all(|countdown| countdown.is_done())
    }

    let fast = FastTimer::new(Duration::ZERO);
    let polled = PolledTimer::new(milliseconds(-1), || {});

    let countdowns: [&dyn Countdown; 2] = [&fast, &polled];
    assert!(all_done(&countdowns));
    assert!(!fast.is_running());
}
