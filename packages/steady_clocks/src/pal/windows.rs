use windows::Win32::System::Performance::{QueryPerformanceCounter, QueryPerformanceFrequency};
use windows::Win32::System::SystemInformation::GetTickCount64;

use crate::pal::Platform;

/// Singleton instance of `BuildTargetPlatform`, used by public API types
/// to hook up to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform = BuildTargetPlatform;

/// Talks to the real Windows timers.
///
/// `QueryPerformanceFrequency()` and `QueryPerformanceCounter()` are documented to never fail on
/// Windows XP or newer, so a failure here is treated as an impossible condition.
#[derive(Debug)]
pub(crate) struct BuildTargetPlatform;

impl Platform for BuildTargetPlatform {
    fn counter_frequency(&self) -> i64 {
        let mut frequency: i64 = 0;

        // SAFETY: We are passing a valid pointer to a local, no other safety requirements.
        unsafe { QueryPerformanceFrequency(&raw mut frequency) }
            .expect("QueryPerformanceFrequency() never fails on Windows XP or newer");

        frequency
    }

    fn counter_value(&self) -> i64 {
        let mut counter: i64 = 0;

        // SAFETY: We are passing a valid pointer to a local, no other safety requirements.
        unsafe { QueryPerformanceCounter(&raw mut counter) }
            .expect("QueryPerformanceCounter() never fails on Windows XP or newer");

        counter
    }

    fn coarse_tick_count(&self) -> u64 {
        // SAFETY: No safety requirements.
        unsafe { GetTickCount64() }
    }
}
