//! Core error type.
//!
//! `sz-zones` reports an `SzError` met while parsing as a
//! `ZoneError::Format` carrying this error's message and the source line.

use thiserror::Error;

use crate::Timestamp;

/// Errors produced by `sz-core` constructors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SzError {
    #[error("interval start {start} is after end {end}")]
    InvertedInterval { start: Timestamp, end: Timestamp },
}

/// Shorthand result type for `sz-core`.
pub type SzResult<T> = Result<T, SzError>;
