#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Monotonic stopwatches and countdown timers with microsecond resolution.
//!
//! This crate gives application code such as game loops, simulations and schedulers a uniform
//! way to measure elapsed time and to be notified when an interval expires:
//!
//! - [`Duration`] - a signed microsecond count with conversions to and from seconds,
//!   milliseconds and the standard library types
//! - [`FastStopwatch`] - time since the previous call, with the lowest overhead
//! - [`Stopwatch`] - a stopwatch with start, stop and restart
//! - [`FastTimer`] - a countdown that is only ever polled
//! - [`ThreadTimer`] - a countdown that runs a callback on its own waiter thread
//! - [`PolledTimer`] - a countdown that runs a callback when the owner calls
//!   [`advance()`][PolledTimer::advance]
//!
//! All of them read time through a [`Clock`], which by default wraps [`std::time::Instant`].
//! A custom [`MonotonicSource`] can be plugged in to drive them from simulated time.
//!
//! # Measuring frame time
//!
//! ```rust
//! use steady_time::FastStopwatch;
//!
//! let mut frame_time = FastStopwatch::new();
//!
//! for _ in 0..3 {
//!     let delta = frame_time.elapsed();
//!     // simulation.update(delta.as_secs_f64());
//!     # let _ = delta;
//! }
//! ```
//!
//! # Callback timers
//!
//! A [`ThreadTimer`] notices expiry on its own:
//!
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//!
//! use steady_time::{ThreadTimer, milliseconds};
//!
//! let executed = Arc::new(AtomicBool::new(false));
//!
//! let timer = ThreadTimer::new(milliseconds(10), {
//!     let executed = Arc::clone(&executed);
//!     move || executed.store(true, Ordering::Relaxed)
//! });
//!
//! while !timer.is_fired() {
//!     std::thread::sleep(std::time::Duration::from_millis(1));
//! }
//!
//! assert!(executed.load(Ordering::Relaxed));
//! ```
//!
//! A [`PolledTimer`] only runs its callback from [`advance()`][PolledTimer::advance], on the
//! caller's thread:
//!
//! ```rust
//! use std::cell::Cell;
//!
//! use steady_time::{PolledTimer, milliseconds};
//!
//! let executed = Cell::new(false);
//! let mut timer = PolledTimer::new(milliseconds(10), || executed.set(true));
//!
//! while !timer.is_done() {
//!     timer.advance();
//!     std::thread::sleep(std::time::Duration::from_millis(1));
//! }
//!
//! // Expired, but the callback only runs on the next advance.
//! timer.advance();
//! assert!(executed.get());
//! ```
//!
//! # Choosing a callback timer at build time
//!
//! Both callback timers are always available. The crate-root [`Timer`] alias picks one of them
//! based on the `multithreading` Cargo feature: with the feature it names [`ThreadTimer`],
//! without it [`PolledTimer`]. Code written against `Timer` therefore switches between
//! the two execution modes without source changes, as long as it calls `advance()` only when
//! the feature is disabled.
//!
//! # Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events when timers are armed, expire
//! and fire, and when a waiter thread reports a callback panic. No subscriber is installed.

mod clock;
mod countdown;
mod duration;
mod error;
mod fast_stopwatch;
mod fast_timer;
mod instant;
mod pal;
mod polled_timer;
mod source;
mod stopwatch;
mod thread_timer;

#[cfg(test)]
mod test_utils;

pub use clock::*;
pub use countdown::*;
pub use duration::*;
pub use error::*;
pub use fast_stopwatch::*;
pub use fast_timer::*;
pub use instant::*;
pub use polled_timer::*;
pub use source::*;
pub use stopwatch::*;
pub use thread_timer::*;

/// The callback timer selected by the `multithreading` Cargo feature: [`ThreadTimer`].
#[cfg(feature = "multithreading")]
pub type Timer = ThreadTimer;

/// The callback timer selected by the `multithreading` Cargo feature: [`PolledTimer`].
#[cfg(not(feature = "multithreading"))]
pub type Timer<F> = PolledTimer<F>;
