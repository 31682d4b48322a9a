use thiserror::Error;

/// Errors that can occur when converting time values out of this crate's types.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A negative duration was converted into a type that can only represent
    /// non-negative durations, such as [`std::time::Duration`].
    #[error("duration of {micros}us is negative and cannot be represented")]
    NegativeDuration {
        /// The offending duration, in microseconds.
        micros: i64,
    },
}

/// A specialized `Result` type for `steady_time` operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;
