//! Longitude correction from standard time to local mean solar time.
//!
//! The standard meridian is 120 deg E (China Standard Time). Each degree of
//! longitude is four minutes of clock time; the equation of time is not
//! applied, so at 120 deg E the correction is exactly zero.

use crate::civil::CivilDateTime;
use crate::error::TimeError;

/// Standard meridian of China Standard Time, degrees east.
pub const STANDARD_MERIDIAN_DEG: f64 = 120.0;

/// Clock minutes per degree of longitude.
pub const MINUTES_PER_DEGREE: f64 = 4.0;

/// Correction in whole minutes (rounded toward zero) for `longitude_deg`.
pub fn longitude_offset_minutes(longitude_deg: f64) -> Result<i64, TimeError> {
    if !longitude_deg.is_finite() {
        return Err(TimeError::NonFiniteLongitude(longitude_deg));
    }
    Ok(((longitude_deg - STANDARD_MERIDIAN_DEG) * MINUTES_PER_DEGREE).trunc() as i64)
}

/// Shift a standard-time instant to local mean solar time.
pub fn true_solar_time(
    instant: CivilDateTime,
    longitude_deg: f64,
) -> Result<CivilDateTime, TimeError> {
    Ok(instant.add_minutes(longitude_offset_minutes(longitude_deg)?))
}

/// Two-hour slot (0 = Zi .. 11 = Hai) containing a clock hour.
///
/// 23:00 belongs to the Zi slot of the following civil day's count.
pub const fn hour_slot_for_hour(hour: u32) -> u8 {
    (((hour + 1) / 2) % 12) as u8
}
