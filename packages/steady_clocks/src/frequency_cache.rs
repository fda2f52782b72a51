#[cfg(test)]
use std::num::NonZero;
use std::sync::atomic::{AtomicI64, Ordering};

use tracing::debug;

/// The frequency of the high-resolution counter of this process.
///
/// Discovered on first use by any [`PrecisionClock`][crate::PrecisionClock] bound to the real
/// platform and never reset.
pub(crate) static PROCESS_FREQUENCY: FrequencyCache = FrequencyCache::new();

/// Marks a cache that has not yet discovered the frequency.
const UNSET: i64 = 0;

/// Memoizes the ticks-per-second of a counter whose frequency never changes.
///
/// Uses relaxed atomics instead of a lock. If multiple threads race on the first discovery, each
/// of them queries the platform and each stores the same value, so whichever store lands last
/// makes no difference. Nothing else depends on the cached value being published in any
/// particular order.
#[derive(Debug)]
pub(crate) struct FrequencyCache {
    ticks_per_second: AtomicI64,
}

impl FrequencyCache {
    pub(crate) const fn new() -> Self {
        Self {
            ticks_per_second: AtomicI64::new(UNSET),
        }
    }

    /// Returns the cached frequency, calling `discover` to obtain it if not yet known.
    ///
    /// # Panics
    ///
    /// Panics if `discover` reports a frequency that is not positive. The platform guarantees a
    /// positive frequency on any hardware with a functioning monotonic counter.
    pub(crate) fn get_or_discover(&self, discover: impl FnOnce() -> i64) -> i64 {
        let cached = self.ticks_per_second.load(Ordering::Relaxed);

        if cached != UNSET {
            return cached;
        }

        let discovered = discover();

        assert!(
            discovered > 0,
            "platform reported a counter frequency of {discovered} ticks per second"
        );

        debug!(
            ticks_per_second = discovered,
            "discovered high-resolution counter frequency"
        );

        self.ticks_per_second.store(discovered, Ordering::Relaxed);

        discovered
    }

    /// Returns the cached frequency without attempting discovery.
    #[cfg(test)]
    pub(crate) fn peek(&self) -> Option<NonZero<i64>> {
        NonZero::new(self.ticks_per_second.load(Ordering::Relaxed))
    }
}
