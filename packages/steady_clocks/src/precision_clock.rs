use crate::frequency_cache::{FrequencyCache, PROCESS_FREQUENCY};
use crate::pal::{Platform, PlatformFacade};
use crate::scale::counter_to_units;
use crate::{HundredNanos, Period, Ticks, TimePoint, TrivialClock};

/// A monotonic clock with a resolution of 100 nanoseconds, backed by the high-resolution
/// performance counter of the platform.
///
/// Each call reads the hardware counter and scales it to 100 ns units. The frequency of the
/// counter is discovered on first use and cached for the lifetime of the process, so only the
/// first call in the process pays for the extra platform query.
///
/// Reading the performance counter is more expensive than reading the coarse tick counter behind
/// [`FastClock`][crate::FastClock]. Prefer this clock when sub-millisecond precision matters.
///
/// # Examples
///
/// ```rust
/// use steady_clocks::PrecisionClock;
///
/// let clock = PrecisionClock::new();
///
/// let start = clock.now();
/// let end = clock.now();
///
/// assert!(end >= start);
/// ```
#[derive(Clone, Debug)]
pub struct PrecisionClock {
    platform: PlatformFacade,
    frequency: &'static FrequencyCache,
}

impl PrecisionClock {
    /// Creates a clock bound to the performance counter of the platform.
    #[must_use]
    pub fn new() -> Self {
        Self::from_pal(PlatformFacade::real(), &PROCESS_FREQUENCY)
    }

    #[must_use]
    pub(crate) fn from_pal(platform: PlatformFacade, frequency: &'static FrequencyCache) -> Self {
        Self {
            platform,
            frequency,
        }
    }

    /// Captures the current time.
    #[must_use]
    pub fn now(&self) -> TimePoint<Self> {
        let ticks_per_second = self.counter_frequency();
        let counter = self.platform.counter_value();

        TimePoint::from_since_epoch(Ticks::new(counter_to_units(
            counter,
            ticks_per_second,
            HundredNanos::TICKS_PER_SECOND,
        )))
    }

    /// Ticks per second of the performance counter behind this clock.
    ///
    /// This is constant for the lifetime of the process.
    #[must_use]
    pub fn counter_frequency(&self) -> i64 {
        self.frequency.get_or_discover(|| self.platform.counter_frequency())
    }
}

impl Default for PrecisionClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TrivialClock for PrecisionClock {
    type Period = HundredNanos;

    const IS_STEADY: bool = true;

    fn now(&self) -> TimePoint<Self> {
        Self::now(self)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::time::Duration;

    use mockall::Sequence;
    use static_assertions::{assert_impl_all, const_assert};

    use super::*;
    use crate::pal::MockPlatform;

    assert_impl_all!(PrecisionClock: Clone, Send, Sync);
    const_assert!(<PrecisionClock as TrivialClock>::IS_STEADY);

    // Each test gets its own cache so that mocked frequencies do not leak between tests.
    fn isolated_cache() -> &'static FrequencyCache {
        Box::leak(Box::new(FrequencyCache::new()))
    }

    #[test]
    fn matching_frequency_passes_counter_through() {
        let mut platform = MockPlatform::new();

        platform
            .expect_counter_frequency()
            .once()
            .return_const(10_000_000_i64);
        platform
            .expect_counter_value()
            .once()
            .return_const(12_345_i64);

        let clock = PrecisionClock::from_pal(platform.into(), isolated_cache());

        assert_eq!(clock.now().since_epoch().count(), 12_345);
    }

    #[test]
    fn other_frequency_is_scaled() {
        let mut platform = MockPlatform::new();

        platform.expect_counter_frequency().once().return_const(3_i64);
        platform.expect_counter_value().once().return_const(7_i64);

        let clock = PrecisionClock::from_pal(platform.into(), isolated_cache());

        assert_eq!(clock.now().since_epoch().count(), 23_333_333);
    }

    #[test]
    fn frequency_is_queried_only_once() {
        let mut platform = MockPlatform::new();

        platform
            .expect_counter_frequency()
            .once()
            .return_const(1_000_000_000_i64);

        let mut seq = Sequence::new();

        // A - one second since the counter epoch.
        platform
            .expect_counter_value()
            .once()
            .in_sequence(&mut seq)
            .return_const(1_000_000_000_i64);

        // B - still one second.
        platform
            .expect_counter_value()
            .once()
            .in_sequence(&mut seq)
            .return_const(1_000_000_000_i64);

        // C - one second and one millisecond.
        platform
            .expect_counter_value()
            .once()
            .in_sequence(&mut seq)
            .return_const(1_001_000_000_i64);

        let cache = isolated_cache();
        let clock = PrecisionClock::from_pal(platform.into(), cache);

        let a = clock.now();
        let b = clock.now();
        let c = clock.now();

        assert_eq!(a.since_epoch().count(), 10_000_000);
        assert_eq!(b.saturating_duration_since(a), Duration::ZERO);
        assert_eq!(c.saturating_duration_since(a), Duration::from_millis(1));

        assert_eq!(cache.peek().map(std::num::NonZero::get), Some(1_000_000_000));
    }

    #[test]
    fn clones_share_discovered_frequency() {
        let mut platform = MockPlatform::new();

        platform
            .expect_counter_frequency()
            .once()
            .return_const(24_000_000_i64);

        let clock = PrecisionClock::from_pal(platform.into(), isolated_cache());
        let clone = clock.clone();

        assert_eq!(clock.counter_frequency(), 24_000_000);
        assert_eq!(clone.counter_frequency(), 24_000_000);
    }

    #[test]
    fn elapsed_can_math() {
        let mut platform = MockPlatform::new();

        platform
            .expect_counter_frequency()
            .once()
            .return_const(10_000_000_i64);

        let mut seq = Sequence::new();

        platform
            .expect_counter_value()
            .once()
            .in_sequence(&mut seq)
            .return_const(50_000_000_i64);

        platform
            .expect_counter_value()
            .once()
            .in_sequence(&mut seq)
            .return_const(51_000_000_i64);

        let clock = PrecisionClock::from_pal(platform.into(), isolated_cache());

        let start = clock.now();

        assert_eq!(start.elapsed(&clock), Duration::from_millis(100));
    }
}

#[cfg(test)]
#[cfg(not(miri))] // Miri cannot talk to the real platform.
#[cfg_attr(coverage_nightly, coverage(off))]
mod real_platform_tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn consecutive_time_points_are_approximately_equal() {
        let clock = PrecisionClock::new();

        let first = clock.now();
        let second = clock.now();

        assert!(second >= first);
        assert!(second.saturating_duration_since(first) < Duration::from_millis(100));
    }

    #[test]
    fn tracks_std_instant() {
        let clock = PrecisionClock::new();

        let start = clock.now();
        let rust_start = std::time::Instant::now();

        std::thread::sleep(Duration::from_millis(20));

        let elapsed = start.elapsed(&clock);
        let rust_elapsed = rust_start.elapsed();

        assert!(elapsed >= Duration::from_millis(20));
        assert!(elapsed.abs_diff(rust_elapsed) < Duration::from_millis(100));
    }
}
