use std::{io, mem};

use libc::{CLOCK_MONOTONIC, clockid_t, timespec};

use crate::pal::Platform;

/// Singleton instance of `BuildTargetPlatform`, used by public API types
/// to hook up to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform = BuildTargetPlatform;

const NANOS_PER_SECOND: i64 = 1_000_000_000;
const NANOS_PER_MILLI: i64 = 1_000_000;
const MILLIS_PER_SECOND: i64 = 1_000;

// Only Linux-likes offer the cheaper coarse variant of the monotonic clock.
#[cfg(any(target_os = "linux", target_os = "android"))]
const COARSE_CLOCK: clockid_t = libc::CLOCK_MONOTONIC_COARSE;
#[cfg(not(any(target_os = "linux", target_os = "android")))]
const COARSE_CLOCK: clockid_t = CLOCK_MONOTONIC;

/// Talks to the real Unix timers.
///
/// There is no separately exposed hardware counter, so `CLOCK_MONOTONIC` stands in for it with
/// the counter expressed in nanoseconds.
#[derive(Debug)]
pub(crate) struct BuildTargetPlatform;

impl Platform for BuildTargetPlatform {
    fn counter_frequency(&self) -> i64 {
        NANOS_PER_SECOND
    }

    fn counter_value(&self) -> i64 {
        let (secs, nanos) = clock_gettime(CLOCK_MONOTONIC);

        secs.saturating_mul(NANOS_PER_SECOND).saturating_add(nanos)
    }

    #[expect(
        clippy::integer_division,
        clippy::arithmetic_side_effects,
        reason = "dividing by a non-zero constant, truncation to whole milliseconds is intended"
    )]
    fn coarse_tick_count(&self) -> u64 {
        let (secs, nanos) = clock_gettime(COARSE_CLOCK);

        let millis = secs
            .saturating_mul(MILLIS_PER_SECOND)
            .saturating_add(nanos / NANOS_PER_MILLI);

        u64::try_from(millis).expect("monotonic clock never reports time before its reference point")
    }
}

/// Returns the `(seconds, nanoseconds)` pair reported by the given clock.
#[allow(
    clippy::useless_conversion,
    reason = "time_t and c_long are narrower than i64 on some targets"
)]
fn clock_gettime(clock_id: clockid_t) -> (i64, i64) {
    // SAFETY: All-zero is a valid initial value for this type.
    let mut ts: timespec = unsafe { mem::zeroed() };

    // SAFETY: We are passing valid arguments, no other safety requirements.
    let result = unsafe { libc::clock_gettime(clock_id, &raw mut ts) };

    assert!(result == 0, "{}", io::Error::last_os_error());

    (i64::from(ts.tv_sec), i64::from(ts.tv_nsec))
}
