//! Error types for the sorting engine.
//!
//! Sorting is deterministic, so nothing here is transient: every error is
//! reported to the caller as-is and never retried.

use thiserror::Error;

/// Errors produced by the algorithm library and its input helpers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SortError {
    /// A max/min-dependent algorithm (counting, radix, bucket) got no elements
    #[error("{algorithm} requires a non-empty sequence")]
    EmptyInput { algorithm: &'static str },

    /// Name lookup in the algorithm registry failed
    #[error("unknown sorting algorithm: '{0}'")]
    UnknownAlgorithm(String),

    /// Malformed custom array, size list or comparison setup
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Counting sort would need an unreasonably large count table
    #[error("value range {range} exceeds counting sort limit {limit}")]
    ValueRangeTooLarge { range: u128, limit: u128 },
}

/// Type alias for Result with our error type
pub type Result<T> = std::result::Result<T, SortError>;
