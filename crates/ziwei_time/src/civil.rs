//! Civil (wall-clock) calendar date and time.
//!
//! `CivilDateTime` is the canonical birth/query instant used throughout the
//! engine. It carries no zone: all instants are read as China Standard Time
//! (UTC+8), the convention the lunar tables are built on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{days_in_month, jdn_to_calendar, julian_day_number};

/// Minutes per civil day.
pub const MINUTES_PER_DAY: i64 = 1440;

/// A validated Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    /// Build a date, rejecting impossible month/day combinations.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate(format!("month {month} out of 1..=12")));
        }
        let last = days_in_month(year, month);
        if day == 0 || day > last {
            return Err(TimeError::InvalidDate(format!(
                "day {day} out of 1..={last} for {year:04}-{month:02}"
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Julian Day Number of this date.
    pub fn jdn(self) -> i64 {
        julian_day_number(self.year, self.month, self.day)
    }

    /// Date from a Julian Day Number.
    pub fn from_jdn(jdn: i64) -> Self {
        let (year, month, day) = jdn_to_calendar(jdn);
        Self { year, month, day }
    }

    /// Shift by a signed number of days.
    pub fn add_days(self, days: i64) -> Self {
        Self::from_jdn(self.jdn() + days)
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A validated civil date with hour and minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CivilDateTime {
    pub date: CivilDate,
    pub hour: u32,
    pub minute: u32,
}

impl CivilDateTime {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Result<Self, TimeError> {
        let date = CivilDate::new(year, month, day)?;
        if hour > 23 {
            return Err(TimeError::InvalidDate(format!("hour {hour} out of 0..=23")));
        }
        if minute > 59 {
            return Err(TimeError::InvalidDate(format!("minute {minute} out of 0..=59")));
        }
        Ok(Self { date, hour, minute })
    }

    /// Midnight at the start of `date`.
    pub fn at_midnight(date: CivilDate) -> Self {
        Self {
            date,
            hour: 0,
            minute: 0,
        }
    }

    /// Minutes since midnight.
    pub fn minute_of_day(&self) -> i64 {
        self.hour as i64 * 60 + self.minute as i64
    }

    /// Shift by a signed number of minutes, carrying across days.
    pub fn add_minutes(self, minutes: i64) -> Self {
        let total = self.minute_of_day() + minutes;
        let day_shift = total.div_euclid(MINUTES_PER_DAY);
        let rest = total.rem_euclid(MINUTES_PER_DAY);
        Self {
            date: self.date.add_days(day_shift),
            hour: (rest / 60) as u32,
            minute: (rest % 60) as u32,
        }
    }

    /// Fractional Julian Date of this wall-clock instant (no zone shift).
    pub fn jd(&self) -> f64 {
        self.date.jdn() as f64 - 0.5 + self.minute_of_day() as f64 / MINUTES_PER_DAY as f64
    }
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{:02}:{:02}", self.date, self.hour, self.minute)
    }
}

fn parse_field<T: FromStr>(text: &str, what: &str, input: &str) -> Result<T, TimeError> {
    text.parse()
        .map_err(|_| TimeError::Parse(format!("bad {what} in '{input}'")))
}

impl FromStr for CivilDateTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM` or `YYYY-MM-DD HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (date_part, time_part) = match s.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t)),
            None => (s, None),
        };

        let mut fields = date_part.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (fields.next(), fields.next(), fields.next()) else {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD in '{s}'")));
        };
        let year = parse_field(y, "year", s)?;
        let month = parse_field(m, "month", s)?;
        let day = parse_field(d, "day", s)?;

        let (hour, minute) = match time_part {
            Some(t) => {
                let (h, mi) = t
                    .split_once(':')
                    .ok_or_else(|| TimeError::Parse(format!("expected HH:MM in '{s}'")))?;
                let mi = mi.split(':').next().unwrap_or(mi);
                (parse_field(h, "hour", s)?, parse_field(mi, "minute", s)?)
            }
            None => (0, 0),
        };
        Self::new(year, month, day, hour, minute)
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<CivilDateTime>()?.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_day() {
        assert!(CivilDate::new(2023, 2, 29).is_err());
        assert!(CivilDate::new(2024, 2, 29).is_ok());
        assert!(CivilDate::new(2024, 0, 1).is_err());
    }

    #[test]
    fn rejects_bad_clock() {
        assert!(CivilDateTime::new(2024, 1, 1, 24, 0).is_err());
        assert!(CivilDateTime::new(2024, 1, 1, 23, 60).is_err());
    }

    #[test]
    fn add_minutes_carries_forward() {
        let t = CivilDateTime::new(2023, 12, 31, 23, 30).unwrap();
        let u = t.add_minutes(45);
        assert_eq!(u.to_string(), "2024-01-01T00:15");
    }

    #[test]
    fn add_minutes_carries_backward() {
        let t = CivilDateTime::new(2024, 3, 1, 0, 10).unwrap();
        let u = t.add_minutes(-20);
        assert_eq!(u.to_string(), "2024-02-29T23:50");
    }

    #[test]
    fn parse_forms() {
        let a: CivilDateTime = "1990-06-15T08:30".parse().unwrap();
        let b: CivilDateTime = "1990-06-15 08:30".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.hour, 8);
        assert_eq!(a.minute, 30);
        let c: CivilDateTime = "1990-06-15".parse().unwrap();
        assert_eq!(c.hour, 0);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("1990/06/15".parse::<CivilDateTime>().is_err());
        assert!("1990-13-01".parse::<CivilDateTime>().is_err());
        assert!("1990-06-15T8".parse::<CivilDateTime>().is_err());
    }

    #[test]
    fn jd_of_noon() {
        let t = CivilDateTime::new(2000, 1, 1, 12, 0).unwrap();
        assert!((t.jd() - 2_451_545.0).abs() < 1e-9);
    }
}
