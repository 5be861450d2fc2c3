//! Error types for civil-time handling.

use thiserror::Error;

/// Errors from civil date validation and parsing.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Month, day, hour or minute outside its calendar range.
    #[error("invalid date: {0}")]
    InvalidDate(String),
    /// Text could not be parsed as `YYYY-MM-DD[THH:MM]`.
    #[error("date parse error: {0}")]
    Parse(String),
    /// Longitude is NaN or infinite.
    #[error("non-finite longitude: {0}")]
    NonFiniteLongitude(f64),
}
