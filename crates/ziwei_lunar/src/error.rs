//! Error types for lunar conversion.

use thiserror::Error;
use ziwei_time::TimeError;

/// Errors from the lunar calendar converter.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum LunarError {
    /// Civil date validation failed.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Date outside the span covered by the lunar table.
    #[error("date {0} outside the supported lunar range 1900-01-31..=2100-12-31")]
    OutOfRange(String),
    /// Hour slot outside 0..=11.
    #[error("hour slot {0} out of 0..=11")]
    InvalidHourSlot(u8),
}
