#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Monotonic clocks that let you choose between high precision and low call overhead.
//!
//! This crate offers two clocks with the same shape:
//!
//! * [`PrecisionClock`] reads the high-resolution performance counter of the platform and scales
//!   it to units of 100 nanoseconds. The counter frequency is discovered once per process.
//! * [`FastClock`] reads the coarse tick counter of the platform and reports whole milliseconds.
//!   It is cheaper to query but only as precise as the platform tick interval.
//!
//! Both implement [`TrivialClock`], so code can be generic over the choice. Time points carry
//! the type of the clock that produced them, which prevents comparing time points of different
//! clocks.
//!
//! # Key Features
//!
//! - **Monotonic timestamps**: Time points never go backwards
//! - **Overflow-safe scaling**: Counter readings are converted without 64-bit overflow
//! - **Cross-platform**: Works on Windows and Unix, with a `std` fallback elsewhere
//! - **Standard library compatibility**: Durations convert to/from [`std::time::Duration`]
//!
//! # Trade-offs
//!
//! - No calendar or wall-clock semantics, the epoch of each clock is unspecified
//! - Time points are only meaningful within one process
//!
//! # Basic Usage
//!
//! ```rust
//! use std::time::Duration;
//!
//! use steady_clocks::PrecisionClock;
//!
//! let clock = PrecisionClock::new();
//! let start = clock.now();
//!
//! // Do some work...
//! std::thread::sleep(Duration::from_millis(10));
//!
//! let elapsed = start.elapsed(&clock);
//! assert!(elapsed >= Duration::from_millis(10));
//! ```
//!
//! # Generic over the clock
//!
//! ```rust
//! use steady_clocks::{FastClock, PrecisionClock, TimePoint, TrivialClock};
//!
//! fn capture<C: TrivialClock>(clock: &C, count: usize) -> Vec<TimePoint<C>> {
//!     (0..count).map(|_| clock.now()).collect()
//! }
//!
//! let fine = capture(&PrecisionClock::new(), 1000);
//! let coarse = capture(&FastClock::new(), 1000);
//!
//! assert!(fine.is_sorted());
//! assert!(coarse.is_sorted());
//! ```

mod pal;

mod error;
mod fast_clock;
mod frequency_cache;
mod period;
mod precision_clock;
mod scale;
mod ticks;
mod time_point;
mod trivial_clock;

pub use error::*;
pub use fast_clock::*;
pub use period::*;
pub use precision_clock::*;
pub use ticks::*;
pub use time_point::*;
pub use trivial_clock::*;
