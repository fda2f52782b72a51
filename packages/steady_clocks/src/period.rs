use std::fmt::Debug;
use std::hash::Hash;

mod sealed {
    #[allow(unnameable_types, reason = "sealed trait, not meant to be named outside the crate")]
    pub trait Sealed {}
}

/// The length of one tick of a clock, expressed as a whole number of ticks per second.
///
/// This is implemented by marker types that are only ever used as type parameters. The trait is
/// sealed, only the periods defined by this crate implement it.
///
/// ```compile_fail
/// use steady_clocks::Period;
///
/// #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// struct Zero;
///
/// impl Period for Zero {
///     const TICKS_PER_SECOND: i64 = 0;
///     const UNIT: &'static str = "?";
/// }
/// ```
pub trait Period: sealed::Sealed + Copy + Debug + Eq + Hash + Ord + Send + Sync + 'static {
    /// How many ticks make up one second.
    const TICKS_PER_SECOND: i64;

    /// Unit label used when displaying a tick count.
    const UNIT: &'static str;
}

/// Ticks per second of `P` as an unsigned divisor.
pub(crate) const fn ticks_per_second<P: Period>() -> u64 {
    const { assert!(P::TICKS_PER_SECOND > 0, "a period must have a positive tick rate") };

    P::TICKS_PER_SECOND.unsigned_abs()
}

/// Ticks of 100 nanoseconds, the unit of [`PrecisionClock`][crate::PrecisionClock].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[non_exhaustive]
pub struct HundredNanos;

impl sealed::Sealed for HundredNanos {}

impl Period for HundredNanos {
    const TICKS_PER_SECOND: i64 = 10_000_000;
    const UNIT: &'static str = "x100ns";
}

/// Ticks of one millisecond, the unit of [`FastClock`][crate::FastClock].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[non_exhaustive]
pub struct Millis;

impl sealed::Sealed for Millis {}

impl Period for Millis {
    const TICKS_PER_SECOND: i64 = 1_000;
    const UNIT: &'static str = "ms";
}
