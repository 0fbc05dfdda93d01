//! Error types for brush operations
//!
//! Provides unified error handling for the extent store, the scale adapters
//! and the caller-facing brush API.

use crate::types::Axis;
use thiserror::Error;

/// Errors that can occur during brush operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BrushError {
    /// A scale failed to map a value, or produced a non-finite result
    #[error("{axis} scale failed to map {value}: {reason}")]
    Mapping {
        axis: Axis,
        value: f64,
        reason: String,
    },

    /// A region index outside the current collection
    #[error("region index {index} out of bounds (have {len} regions)")]
    InvalidRegionIndex { index: usize, len: usize },

    /// An emptiness query without an index while several regions exist
    #[error("an index is required to query emptiness of {regions} regions")]
    IndexRequired { regions: usize },

    /// A domain-space entry without a pair for a bound axis
    #[error("domain extent {index} has no {axis} pair")]
    MissingAxis { index: usize, axis: Axis },

    /// Subscription to an event name that does not exist
    #[error("unknown brush event: {0:?}")]
    UnknownEvent(String),
}

/// Result type alias for brush operations
pub type BrushResult<T> = Result<T, BrushError>;

/// Error a [`Scale`](crate::scale::Scale) implementation returns when it
/// cannot map a value.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct ScaleError(pub String);

impl From<&str> for ScaleError {
    fn from(s: &str) -> Self {
        ScaleError(s.to_string())
    }
}

impl From<String> for ScaleError {
    fn from(s: String) -> Self {
        ScaleError(s)
    }
}
