//! Errors raised by the sampling primitives.

/// Error type for sampling operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SampleError {
    /// Weighted boolean likelihood outside `[0, 100]`
    #[error("Likelihood accepts values from 0 to 100. Got {0}")]
    LikelihoodOutOfRange(i64),

    /// Selection from a pool with no elements
    #[error("Cannot pick a value from an empty pool")]
    EmptyPool,

    /// Lattice step that is zero, negative or not finite
    #[error("Precision must be a positive finite number. Got {0}")]
    InvalidPrecision(f64),

    /// Millisecond value that cannot be represented as a date
    #[error("Timestamp {0} is out of the supported date range")]
    TimestampOutOfRange(i64),
}

/// Result alias for sampling operations.
pub type SampleResult<T> = Result<T, SampleError>;
