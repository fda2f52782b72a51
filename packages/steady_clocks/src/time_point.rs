use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, Sub};
use std::time::Duration;

use crate::{Ticks, TrivialClock};

/// A point in time captured from the clock `C`.
///
/// Stored as the span of time since the unspecified epoch of the clock. Time points are only
/// comparable and subtractable against other time points of the same clock type, which the
/// type parameter enforces.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
///
/// use steady_clocks::PrecisionClock;
///
/// let clock = PrecisionClock::new();
/// let start = clock.now();
///
/// std::thread::sleep(Duration::from_millis(5));
///
/// let end = clock.now();
/// assert!(end > start);
///
/// let ticks = end - start;
/// assert!(ticks.count() >= 50_000); // 5 ms in units of 100 ns.
/// assert!(end.saturating_duration_since(start) >= Duration::from_millis(5));
/// ```
pub struct TimePoint<C: TrivialClock> {
    since_epoch: Ticks<C::Period>,

    // fn() keeps the auto traits of the time point independent of the clock.
    _clock: PhantomData<fn() -> C>,
}

impl<C: TrivialClock> TimePoint<C> {
    /// Creates a time point from the span of time since the epoch of the clock.
    #[must_use]
    pub const fn from_since_epoch(since_epoch: Ticks<C::Period>) -> Self {
        Self {
            since_epoch,
            _clock: PhantomData,
        }
    }

    /// The span of time since the epoch of the clock.
    #[must_use]
    pub const fn since_epoch(self) -> Ticks<C::Period> {
        self.since_epoch
    }

    /// Signed span of time from `earlier` to this time point.
    ///
    /// The result is negative if `earlier` is actually later than this time point.
    ///
    /// # Panics
    ///
    /// Panics if the difference does not fit into the tick count, which cannot happen with
    /// time points captured from a real clock.
    #[must_use]
    pub fn duration_since(self, earlier: Self) -> Ticks<C::Period> {
        self.since_epoch - earlier.since_epoch
    }

    /// Span of time from `earlier` to this time point, or zero if `earlier` is actually later.
    #[must_use]
    pub fn saturating_duration_since(self, earlier: Self) -> Duration {
        Duration::try_from(self.since_epoch.saturating_sub(earlier.since_epoch))
            .unwrap_or(Duration::ZERO)
    }

    /// Span of time since this time point, measured by capturing a new one from `clock`.
    #[must_use]
    pub fn elapsed(self, clock: &C) -> Duration {
        clock.now().saturating_duration_since(self)
    }

    /// Returns the time point `ticks` later, or `None` on overflow.
    #[must_use]
    pub fn checked_add(self, ticks: Ticks<C::Period>) -> Option<Self> {
        self.since_epoch.checked_add(ticks).map(Self::from_since_epoch)
    }

    /// Returns the time point `ticks` earlier, or `None` on overflow.
    #[must_use]
    pub fn checked_sub(self, ticks: Ticks<C::Period>) -> Option<Self> {
        self.since_epoch.checked_sub(ticks).map(Self::from_since_epoch)
    }
}

impl<C: TrivialClock> Clone for TimePoint<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: TrivialClock> Copy for TimePoint<C> {}

impl<C: TrivialClock> PartialEq for TimePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.since_epoch == other.since_epoch
    }
}

impl<C: TrivialClock> Eq for TimePoint<C> {}

impl<C: TrivialClock> PartialOrd for TimePoint<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: TrivialClock> Ord for TimePoint<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.since_epoch.cmp(&other.since_epoch)
    }
}

impl<C: TrivialClock> Hash for TimePoint<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.since_epoch.hash(state);
    }
}

#[cfg_attr(coverage_nightly, coverage(off))] // No API contract to test.
impl<C: TrivialClock> Debug for TimePoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimePoint")
            .field("since_epoch", &self.since_epoch)
            .finish_non_exhaustive()
    }
}

impl<C: TrivialClock> Add<Ticks<C::Period>> for TimePoint<C> {
    type Output = Self;

    fn add(self, rhs: Ticks<C::Period>) -> Self {
        Self::from_since_epoch(self.since_epoch + rhs)
    }
}

impl<C: TrivialClock> Sub<Ticks<C::Period>> for TimePoint<C> {
    type Output = Self;

    fn sub(self, rhs: Ticks<C::Period>) -> Self {
        Self::from_since_epoch(self.since_epoch - rhs)
    }
}

impl<C: TrivialClock> Sub for TimePoint<C> {
    type Output = Ticks<C::Period>;

    fn sub(self, rhs: Self) -> Ticks<C::Period> {
        self.duration_since(rhs)
    }
}
