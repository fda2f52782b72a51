use crate::{Period, TimePoint};

/// The capability shared by all clocks in this crate.
///
/// Lets callers be generic over the choice between [`PrecisionClock`][crate::PrecisionClock]
/// and [`FastClock`][crate::FastClock].
///
/// # Examples
///
/// ```rust
/// use steady_clocks::{FastClock, PrecisionClock, TrivialClock};
///
/// fn measure<C: TrivialClock>(clock: &C, work: impl FnOnce()) -> std::time::Duration {
///     let start = clock.now();
///     work();
///     start.elapsed(clock)
/// }
///
/// let precise = measure(&PrecisionClock::new(), || {});
/// let coarse = measure(&FastClock::new(), || {});
///
/// assert!(precise < std::time::Duration::from_secs(1));
/// assert!(coarse < std::time::Duration::from_secs(1));
/// ```
pub trait TrivialClock: Sized {
    /// The length of one tick of the time points this clock produces.
    type Period: Period;

    /// Whether the time points never decrease and advance at a steady rate.
    const IS_STEADY: bool;

    /// Captures the current time.
    fn now(&self) -> TimePoint<Self>;
}
