//! Platform Abstraction Layer (PAL). All queries against the host timers go through here.

mod abstractions;
pub(crate) use abstractions::*;

mod facade;
pub(crate) use facade::*;

#[cfg(all(unix, not(miri)))]
mod unix;
#[cfg(all(unix, not(miri)))]
pub(crate) use unix::*;

#[cfg(all(windows, not(miri)))]
mod windows;
#[cfg(all(windows, not(miri)))]
pub(crate) use windows::*;

// Miri cannot talk to the real operating system but Rust std time still works under it.
#[cfg(any(miri, not(any(unix, windows))))]
mod fallback;
#[cfg(any(miri, not(any(unix, windows))))]
pub(crate) use fallback::*;
