//! Gregorian → lunar calendar conversion over the packed table.

use serde::{Deserialize, Serialize};
use ziwei_time::CivilDate;

use crate::error::LunarError;
use crate::lunar_data::{EPOCH_DATE, LAST_YEAR, leap_days, leap_month, month_days, year_days};

/// Chinese month names, index 0 = first month.
pub const MONTH_NAMES: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊",
];

const DAY_TENS: [&str; 4] = ["初", "十", "廿", "三"];
const DAY_UNITS: [&str; 10] = ["一", "二", "三", "四", "五", "六", "七", "八", "九", "十"];

/// A lunar calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunarDay {
    /// Lunar year, numbered by the Gregorian year in which it starts.
    pub year: i32,
    /// Month 1..=12, negative for a leap (intercalary) month.
    pub month: i8,
    /// Day of month 1..=30.
    pub day: u8,
}

impl LunarDay {
    /// Whether this day falls in a leap month.
    pub fn is_leap(&self) -> bool {
        self.month < 0
    }

    /// Month number with the leap sign removed.
    pub fn month_number(&self) -> u8 {
        self.month.unsigned_abs()
    }

    /// Month label, e.g. `正月` or `闰二月`.
    pub fn month_label(&self) -> String {
        let name = MONTH_NAMES[(self.month_number() - 1) as usize];
        if self.is_leap() {
            format!("闰{name}月")
        } else {
            format!("{name}月")
        }
    }

    /// Day label, e.g. `初一`, `十五`, `廿三`.
    pub fn day_label(&self) -> String {
        day_label(self.day)
    }
}

/// Chinese label for a lunar day number (1..=30).
pub fn day_label(day: u8) -> String {
    match day {
        10 => "初十".to_string(),
        20 => "二十".to_string(),
        30 => "三十".to_string(),
        d => {
            let tens = DAY_TENS[(d / 10) as usize];
            let units = DAY_UNITS[((d % 10) as usize).saturating_sub(1)];
            format!("{tens}{units}")
        }
    }
}

/// Convert a Gregorian date to its lunar day.
pub fn solar_to_lunar(date: CivilDate) -> Result<LunarDay, LunarError> {
    let (ey, em, ed) = EPOCH_DATE;
    let epoch = CivilDate { year: ey, month: em, day: ed };
    let mut offset = date.jdn() - epoch.jdn();
    if offset < 0 {
        return Err(LunarError::OutOfRange(date.to_string()));
    }

    let mut year = ey;
    loop {
        if year > LAST_YEAR {
            return Err(LunarError::OutOfRange(date.to_string()));
        }
        let days = year_days(year) as i64;
        if offset < days {
            break;
        }
        offset -= days;
        year += 1;
    }

    let leap = leap_month(year);
    for month in 1..=12u8 {
        let days = month_days(year, month) as i64;
        if offset < days {
            return Ok(LunarDay {
                year,
                month: month as i8,
                day: offset as u8 + 1,
            });
        }
        offset -= days;

        if leap == month {
            let days = leap_days(year) as i64;
            if offset < days {
                return Ok(LunarDay {
                    year,
                    month: -(month as i8),
                    day: offset as u8 + 1,
                });
            }
            offset -= days;
        }
    }

    // year_days() is the sum of the months walked above
    Err(LunarError::OutOfRange(date.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunar(y: i32, m: u32, d: u32) -> LunarDay {
        solar_to_lunar(CivilDate::new(y, m, d).unwrap()).unwrap()
    }

    #[test]
    fn epoch_is_new_year_1900() {
        assert_eq!(lunar(1900, 1, 31), LunarDay { year: 1900, month: 1, day: 1 });
    }

    #[test]
    fn new_year_2000() {
        assert_eq!(lunar(2000, 2, 5), LunarDay { year: 2000, month: 1, day: 1 });
    }

    #[test]
    fn eve_of_new_year_2024() {
        assert_eq!(lunar(2024, 2, 9), LunarDay { year: 2023, month: 12, day: 30 });
        assert_eq!(lunar(2024, 2, 10), LunarDay { year: 2024, month: 1, day: 1 });
    }

    #[test]
    fn leap_second_month_2023() {
        let d = lunar(2023, 3, 22);
        assert_eq!(d, LunarDay { year: 2023, month: -2, day: 1 });
        assert!(d.is_leap());
        assert_eq!(d.month_label(), "闰二月");
    }

    #[test]
    fn leap_sixth_month_2017() {
        assert_eq!(lunar(2017, 7, 23), LunarDay { year: 2017, month: -6, day: 1 });
    }

    #[test]
    fn before_epoch_rejected() {
        let d = CivilDate::new(1900, 1, 30).unwrap();
        assert!(matches!(solar_to_lunar(d), Err(LunarError::OutOfRange(_))));
    }

    #[test]
    fn after_table_rejected() {
        let d = CivilDate::new(2101, 6, 1).unwrap();
        assert!(matches!(solar_to_lunar(d), Err(LunarError::OutOfRange(_))));
    }

    #[test]
    fn day_labels() {
        assert_eq!(day_label(1), "初一");
        assert_eq!(day_label(10), "初十");
        assert_eq!(day_label(15), "十五");
        assert_eq!(day_label(20), "二十");
        assert_eq!(day_label(23), "廿三");
        assert_eq!(day_label(30), "三十");
    }
}
