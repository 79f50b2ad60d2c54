use thiserror::Error;

/// Errors raised while configuring a scheduler or building tasks.
///
/// Nothing in the polling path returns an error: a probe that fails is
/// simply "not ready yet", and the loop itself has no failure mode.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// The scheduler tick was zero.
    #[error("tick interval must be greater than zero")]
    ZeroTick,

    /// A wait range was built with no steps to draw from.
    #[error("wait range must contain at least one step")]
    EmptyRange,

    /// The largest duration of a wait range does not fit in a `Duration`.
    #[error("wait range overflows the maximum duration")]
    RangeOverflow,

    /// A wait duration was negative, NaN or infinite.
    #[error("invalid wait duration: {0} seconds")]
    InvalidDuration(f64),
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
