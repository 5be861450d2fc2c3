//! Error types for chart and flow computation.

use thiserror::Error;
use ziwei_lunar::LunarError;
use ziwei_time::{CivilDate, TimeError};

/// Errors from the chart engine. No partial chart is returned on error.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Malformed date or non-finite longitude.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// Lunar conversion failed (date outside the table range).
    #[error(transparent)]
    Lunar(#[from] LunarError),
    /// Hour slot outside 0..=11.
    #[error("hour slot {0} out of 0..=11")]
    InvalidHourSlot(u8),
    /// Flow query date earlier than the birth date.
    #[error("query date {query} precedes birth date {birth}")]
    QueryBeforeBirth { birth: CivilDate, query: CivilDate },
}
