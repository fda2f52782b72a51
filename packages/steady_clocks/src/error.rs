use thiserror::Error;

/// Errors that can occur when converting between the duration types of this crate and
/// [`std::time::Duration`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A negative tick count cannot be expressed as a [`std::time::Duration`].
    #[error("cannot express a negative duration of {ticks} ticks as std::time::Duration")]
    NegativeDuration {
        /// The tick count that was negative.
        ticks: i64,
    },

    /// The duration has more ticks than fit into the signed 64-bit tick count.
    #[error("duration of {duration:?} does not fit into a signed 64-bit tick count")]
    DurationOutOfRange {
        /// The duration that was too long.
        duration: std::time::Duration,
    },
}

/// A specialized `Result` type for `steady_clocks` operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
