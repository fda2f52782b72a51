use crate::pal::{Platform, PlatformFacade};
use crate::{Millis, Ticks, TimePoint, TrivialClock};

/// A monotonic clock with a resolution of whole milliseconds, backed by the coarse tick counter
/// of the platform.
///
/// This is suitable for querying rapidly with low overhead, in circumstances where absolute
/// precision is not necessary. The effective resolution is bounded by the tick interval of the
/// platform, which is typically 10-16 ms on Windows and one kernel tick (1-10 ms) on Linux.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
///
/// use steady_clocks::FastClock;
///
/// let clock = FastClock::new();
/// let start = clock.now();
///
/// std::thread::sleep(Duration::from_millis(10));
///
/// // Generous upper bound because of the coarse resolution.
/// assert!(start.elapsed(&clock) <= Duration::from_secs(1));
/// ```
#[derive(Clone, Debug)]
pub struct FastClock {
    platform: PlatformFacade,
}

impl FastClock {
    /// Creates a clock bound to the coarse tick counter of the platform.
    #[must_use]
    pub fn new() -> Self {
        Self::from_pal(PlatformFacade::real())
    }

    #[must_use]
    pub(crate) fn from_pal(platform: PlatformFacade) -> Self {
        Self { platform }
    }

    /// Captures the current time.
    #[must_use]
    pub fn now(&self) -> TimePoint<Self> {
        // i64::MAX milliseconds is hundreds of millions of years of uptime.
        let millis = i64::try_from(self.platform.coarse_tick_count()).unwrap_or(i64::MAX);

        TimePoint::from_since_epoch(Ticks::new(millis))
    }
}

impl Default for FastClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TrivialClock for FastClock {
    type Period = Millis;

    const IS_STEADY: bool = true;

    fn now(&self) -> TimePoint<Self> {
        Self::now(self)
    }
}
