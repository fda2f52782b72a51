use std::sync::OnceLock;
use std::time::{Duration, Instant};

use crate::pal::Platform;

/// Singleton instance of `BuildTargetPlatform`, used by public API types
/// to hook up to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform = BuildTargetPlatform;

const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Measures time with `std::time::Instant` against an epoch captured on first use.
///
/// Used under Miri and on platforms without an optimized implementation.
#[derive(Debug)]
pub(crate) struct BuildTargetPlatform;

static EPOCH: OnceLock<Instant> = OnceLock::new();

fn since_epoch() -> Duration {
    EPOCH.get_or_init(Instant::now).elapsed()
}

impl Platform for BuildTargetPlatform {
    fn counter_frequency(&self) -> i64 {
        NANOS_PER_SECOND
    }

    fn counter_value(&self) -> i64 {
        i64::try_from(since_epoch().as_nanos()).unwrap_or(i64::MAX)
    }

    fn coarse_tick_count(&self) -> u64 {
        u64::try_from(since_epoch().as_millis()).unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn readings_do_not_go_backwards() {
        let counter_before = BUILD_TARGET_PLATFORM.counter_value();
        let ticks_before = BUILD_TARGET_PLATFORM.coarse_tick_count();

        let counter_after = BUILD_TARGET_PLATFORM.counter_value();
        let ticks_after = BUILD_TARGET_PLATFORM.coarse_tick_count();

        assert!(counter_after >= counter_before);
        assert!(ticks_after >= ticks_before);
    }
}
