//! Domain-specific errors.
//!
//! The message texts are part of the user-facing contract: they appear
//! verbatim in the warnings emitted for malformed range expressions.

use std::num::ParseIntError;

use thiserror::Error;

/// A line range (or range set) failed to construct or parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("Cannot have both start and end absent")]
    MissingBounds,
    #[error("Start must be at least 1")]
    StartTooSmall,
    #[error("End must be at least 1")]
    EndTooSmall,
    #[error("Start must be less than or equal to end")]
    StartAfterEnd,
    #[error("Empty start")]
    EmptyStart,
    #[error("Both start and end are empty")]
    EmptyBounds,
    #[error("Invalid number {token:?}: {source}")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Cannot have empty ranges")]
    EmptyRanges,
}

/// One comma-separated item of a range expression failed, with its
/// 1-indexed position and the raw (untrimmed) item text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Range {index} ({item:?}) is invalid: {source}")]
pub struct ItemError {
    pub index: usize,
    pub item: String,
    #[source]
    pub source: RangeError,
}
