//! Low-precision apparent solar longitude and solar-term months.
//!
//! Meeus, *Astronomical Algorithms*, ch. 25 (accuracy about 0.01 deg,
//! i.e. a quarter hour near a solar-term boundary). Good enough to pick the
//! solar-term month of a two-hour slot; not meant for ephemeris work.

use crate::civil::CivilDateTime;
use crate::julian::jd_to_centuries;

/// Hours China Standard Time is ahead of UT.
pub const CST_OFFSET_HOURS: f64 = 8.0;

/// Apparent longitude of the Sun at Li Chun (start of the Yin month).
pub const LI_CHUN_LONGITUDE_DEG: f64 = 315.0;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Apparent geocentric ecliptic longitude of the Sun, degrees, at a Julian Date (UT).
pub fn solar_longitude_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    let omega = (125.04 - 1934.136 * t).to_radians();
    normalize_360(l0 + c - 0.005_69 - 0.004_78 * omega.sin())
}

/// Solar longitude at a China Standard Time wall-clock instant.
pub fn solar_longitude_at(instant: &CivilDateTime) -> f64 {
    solar_longitude_deg(instant.jd() - CST_OFFSET_HOURS / 24.0)
}

/// Solar-term month offset from the Yin month (0 = Yin .. 11 = Chou).
///
/// Each month spans 30 deg of solar longitude starting at Li Chun (315 deg).
pub fn solar_month_offset(instant: &CivilDateTime) -> u8 {
    let from_li_chun = normalize_360(solar_longitude_at(instant) - LI_CHUN_LONGITUDE_DEG);
    ((from_li_chun / 30.0).floor() as u8).min(11)
}

/// Gregorian year whose Li Chun most recently began at `instant`.
///
/// January and early February before Li Chun belong to the previous year.
pub fn li_chun_year(instant: &CivilDateTime) -> i32 {
    let year = instant.date.year;
    if instant.date.month <= 2 {
        let lon = solar_longitude_at(instant);
        if (270.0..LI_CHUN_LONGITUDE_DEG).contains(&lon) {
            return year - 1;
        }
    }
    year
}
