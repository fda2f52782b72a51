use std::fmt::Debug;
#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use crate::pal::MockPlatform;
use crate::pal::{BUILD_TARGET_PLATFORM, BuildTargetPlatform, Platform};

#[derive(Clone)]
pub(crate) enum PlatformFacade {
    Real(&'static BuildTargetPlatform),

    #[cfg(test)]
    Mock(Arc<MockPlatform>),
}

impl PlatformFacade {
    pub(crate) const fn real() -> Self {
        Self::Real(&BUILD_TARGET_PLATFORM)
    }
}

impl Platform for PlatformFacade {
    fn counter_frequency(&self) -> i64 {
        match self {
            Self::Real(p) => p.counter_frequency(),
            #[cfg(test)]
            Self::Mock(p) => p.counter_frequency(),
        }
    }

    fn counter_value(&self) -> i64 {
        match self {
            Self::Real(p) => p.counter_value(),
            #[cfg(test)]
            Self::Mock(p) => p.counter_value(),
        }
    }

    fn coarse_tick_count(&self) -> u64 {
        match self {
            Self::Real(p) => p.coarse_tick_count(),
            #[cfg(test)]
            Self::Mock(p) => p.coarse_tick_count(),
        }
    }
}

#[cfg(test)]
impl From<MockPlatform> for PlatformFacade {
    fn from(p: MockPlatform) -> Self {
        Self::Mock(Arc::new(p))
    }
}

#[cfg_attr(coverage_nightly, coverage(off))] // No API contract to test.
impl Debug for PlatformFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(p) => p.fmt(f),
            #[cfg(test)]
            Self::Mock(p) => p.fmt(f),
        }
    }
}
