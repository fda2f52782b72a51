use std::fmt::Debug;

/// Queries against the timers of the host platform.
///
/// All PAL calls must go through this trait, enabling them to be mocked.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Ticks per second of the high-resolution counter.
    ///
    /// This is constant for the lifetime of the process.
    fn counter_frequency(&self) -> i64;

    /// Current reading of the high-resolution counter.
    fn counter_value(&self) -> i64;

    /// Milliseconds since an arbitrary fixed reference point, with coarse resolution.
    fn coarse_tick_count(&self) -> u64;
}
