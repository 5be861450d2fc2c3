//! Civil-time support for the ziwei chart engine.
//!
//! This crate provides:
//! - Gregorian ↔ Julian Day conversions
//! - `CivilDate` / `CivilDateTime`, validated wall-clock instants in China Standard Time
//! - Apparent solar longitude and solar-term month boundaries
//! - Longitude (true solar time) correction and two-hour slot lookup

pub mod civil;
pub mod error;
pub mod julian;
pub mod solar;
pub mod true_solar;

pub use civil::{CivilDate, CivilDateTime, MINUTES_PER_DAY};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, calendar_to_jd, days_in_month, is_leap_year, jd_to_calendar,
    jd_to_centuries, jdn_to_calendar, julian_day_number,
};
pub use solar::{li_chun_year, solar_longitude_at, solar_longitude_deg, solar_month_offset};
pub use true_solar::{hour_slot_for_hour, longitude_offset_minutes, true_solar_time};
