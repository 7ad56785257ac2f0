//! Errors raised by the consumers.

use datamock_core::SampleError;

/// Error type for consumer operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MockError {
    /// Failure in an underlying sampling primitive
    #[error(transparent)]
    Sample(#[from] SampleError),

    /// Lower bound below the allowed range
    #[error("Provided value {value} for min is less than {limit}")]
    MinTooSmall { value: i64, limit: i64 },

    /// Upper bound above the allowed range
    #[error("Provided value {value} for max is greater than {limit}")]
    MaxTooLarge { value: i64, limit: i64 },

    /// Bounds in the wrong order
    #[error("The min value ({min}) cannot be greater than max value ({max})")]
    InvertedRange { min: i64, max: i64 },

    /// Lorem word options that cannot be combined
    #[error("Cannot specify both \"syllables\" and \"length\"")]
    ConflictingWordOptions,

    /// Header request that cannot be satisfied from the chosen pool
    #[error("Invalid configuration. Unable to produce a list of headers.")]
    InvalidHeaderConfiguration,

    /// Version format name that is not recognized
    #[error("Unknown version format: {0}")]
    UnknownVersionFormat(String),
}

/// Result alias for consumer operations.
pub type MockResult<T> = Result<T, MockError>;
