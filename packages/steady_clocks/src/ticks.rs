use std::fmt::{self, Display};
use std::marker::PhantomData;
use std::ops::{Add, Neg, Sub};
use std::time::Duration;

use crate::error::Result;
use crate::period::ticks_per_second;
use crate::{Error, Period};

const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// A signed span of time, counted in whole ticks of the period `P`.
///
/// This is the duration type of the clocks in this crate. Unlike [`std::time::Duration`] it can
/// be negative, which happens when subtracting a later time point from an earlier one.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
///
/// use steady_clocks::{Millis, Ticks};
///
/// let ticks = Ticks::<Millis>::new(1_500);
/// assert_eq!(Duration::try_from(ticks).unwrap(), Duration::from_millis(1_500));
///
/// let negative = Ticks::<Millis>::new(10) - Ticks::new(25);
/// assert_eq!(negative.count(), -15);
/// assert!(Duration::try_from(negative).is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Ticks<P: Period> {
    count: i64,

    _period: PhantomData<P>,
}

impl<P: Period> Ticks<P> {
    /// A span of zero ticks.
    pub const ZERO: Self = Self::new(0);

    /// Creates a span of `count` ticks.
    #[must_use]
    pub const fn new(count: i64) -> Self {
        Self {
            count,
            _period: PhantomData,
        }
    }

    /// The number of ticks in this span.
    #[must_use]
    pub const fn count(self) -> i64 {
        self.count
    }

    /// Whether this span is below zero.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.count < 0
    }

    /// Adds two spans, returning `None` on overflow.
    #[must_use]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.count.checked_add(rhs.count) {
            Some(count) => Some(Self::new(count)),
            None => None,
        }
    }

    /// Subtracts two spans, returning `None` on overflow.
    #[must_use]
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.count.checked_sub(rhs.count) {
            Some(count) => Some(Self::new(count)),
            None => None,
        }
    }

    /// Adds two spans, clamping to the representable range on overflow.
    #[must_use]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self::new(self.count.saturating_add(rhs.count))
    }

    /// Subtracts two spans, clamping to the representable range on overflow.
    #[must_use]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self::new(self.count.saturating_sub(rhs.count))
    }
}

impl<P: Period> Default for Ticks<P> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<P: Period> Add for Ticks<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.checked_add(rhs).expect("overflow when adding tick counts")
    }
}

impl<P: Period> Sub for Ticks<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.checked_sub(rhs).expect("overflow when subtracting tick counts")
    }
}

impl<P: Period> Neg for Ticks<P> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(self.count.checked_neg().expect("overflow when negating tick count"))
    }
}

impl<P: Period> Display for Ticks<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, P::UNIT)
    }
}

impl<P: Period> TryFrom<Ticks<P>> for Duration {
    type Error = Error;

    #[expect(
        clippy::integer_division,
        clippy::arithmetic_side_effects,
        reason = "dividing by a non-zero tick rate, sub-tick truncation is intended"
    )]
    fn try_from(ticks: Ticks<P>) -> Result<Self> {
        let Ok(count) = u64::try_from(ticks.count) else {
            return Err(Error::NegativeDuration { ticks: ticks.count });
        };

        let per_second = ticks_per_second::<P>();

        let secs = count / per_second;
        let sub_second_ticks = count % per_second;
        let nanos = u128::from(sub_second_ticks) * NANOS_PER_SECOND / u128::from(per_second);

        Ok(Self::new(
            secs,
            u32::try_from(nanos).expect("sub-second remainder is always below one second"),
        ))
    }
}

impl<P: Period> TryFrom<Duration> for Ticks<P> {
    type Error = Error;

    /// Converts into whole ticks, truncating any remainder shorter than one tick.
    #[expect(
        clippy::integer_division,
        clippy::arithmetic_side_effects,
        reason = "u128 holds any Duration in nanoseconds times any i64 tick rate"
    )]
    fn try_from(duration: Duration) -> Result<Self> {
        let per_second = u128::from(ticks_per_second::<P>());
        let count = duration.as_nanos() * per_second / NANOS_PER_SECOND;

        let Ok(count) = i64::try_from(count) else {
            return Err(Error::DurationOutOfRange { duration });
        };

        Ok(Self::new(count))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;
    use crate::{HundredNanos, Millis};

    assert_impl_all!(Ticks<HundredNanos>: Copy, Send, Sync, Ord, Display);

    #[test]
    fn converts_to_std_duration() {
        assert_eq!(
            Duration::try_from(Ticks::<HundredNanos>::new(23_333_333)).unwrap(),
            Duration::new(2, 333_333_300)
        );
        assert_eq!(
            Duration::try_from(Ticks::<Millis>::new(123_456)).unwrap(),
            Duration::from_millis(123_456)
        );
        assert_eq!(
            Duration::try_from(Ticks::<Millis>::ZERO).unwrap(),
            Duration::ZERO
        );
    }

    #[test]
    fn largest_tick_count_converts_to_std_duration() {
        let duration = Duration::try_from(Ticks::<HundredNanos>::new(i64::MAX)).unwrap();

        assert_eq!(duration.as_secs(), 922_337_203_685);
        assert_eq!(duration.subsec_nanos(), 477_580_700);
    }

    #[test]
    fn negative_ticks_do_not_convert_to_std_duration() {
        let result = Duration::try_from(Ticks::<Millis>::new(-1));

        assert!(matches!(result, Err(Error::NegativeDuration { ticks: -1 })));
    }

    #[test]
    fn converts_from_std_duration_with_truncation() {
        let ticks = Ticks::<HundredNanos>::try_from(Duration::from_nanos(1_299)).unwrap();
        assert_eq!(ticks.count(), 12);

        let ticks = Ticks::<Millis>::try_from(Duration::from_micros(2_999)).unwrap();
        assert_eq!(ticks.count(), 2);
    }

    #[test]
    fn too_long_std_duration_is_rejected() {
        let result = Ticks::<HundredNanos>::try_from(Duration::MAX);

        assert!(matches!(result, Err(Error::DurationOutOfRange { .. })));
    }

    #[test]
    fn arithmetic_can_math() {
        let a = Ticks::<Millis>::new(40);
        let b = Ticks::<Millis>::new(15);

        assert_eq!((a + b).count(), 55);
        assert_eq!((a - b).count(), 25);
        assert_eq!((b - a).count(), -25);
        assert_eq!((-a).count(), -40);
        assert!((b - a).is_negative());
    }

    #[test]
    fn checked_and_saturating_arithmetic_at_limits() {
        let max = Ticks::<Millis>::new(i64::MAX);
        let min = Ticks::<Millis>::new(i64::MIN);
        let one = Ticks::<Millis>::new(1);

        assert_eq!(max.checked_add(one), None);
        assert_eq!(min.checked_sub(one), None);
        assert_eq!(max.saturating_add(one), max);
        assert_eq!(min.saturating_sub(one), min);
        assert_eq!(max.checked_sub(one), Some(Ticks::new(i64::MAX - 1)));
    }

    #[test]
    #[should_panic(expected = "overflow when adding tick counts")]
    fn add_overflow_panics() {
        let _ = Ticks::<Millis>::new(i64::MAX) + Ticks::new(1);
    }

    #[test]
    fn display_includes_unit() {
        assert_eq!(Ticks::<Millis>::new(250).to_string(), "250ms");
        assert_eq!(Ticks::<HundredNanos>::new(-3).to_string(), "-3x100ns");
    }
}
