//! Month, day and hour pillars.
//!
//! - Day: sixty-day count anchored on the Julian Day Number.
//! - Month: solar-term month (Li Chun boundary), stem by the five-tiger rule.
//! - Hour: two-hour slot branch, stem by the five-rat rule.

use ziwei_time::{CivilDate, CivilDateTime, li_chun_year, solar_month_offset};

use crate::sexagenary::{Branch, GanZhi, Stem};

/// Offset between JDN and the sixty-day cycle (JDN 11 was a Jia-Zi day).
const DAY_CYCLE_OFFSET: i64 = 49;

/// Stem of the Yin month for a year stem (five-tiger rule).
pub const fn yin_month_stem(year_stem: Stem) -> Stem {
    Stem::from_index((year_stem.index() % 5) as i32 * 2 + 2)
}

/// Stem of the Zi hour for a day stem (five-rat rule).
pub const fn zi_hour_stem(day_stem: Stem) -> Stem {
    Stem::from_index((day_stem.index() % 5) as i32 * 2)
}

/// Day pillar of a civil date.
pub fn day_pillar(date: CivilDate) -> GanZhi {
    GanZhi::from_cycle_index(date.jdn() + DAY_CYCLE_OFFSET)
}

/// Hour pillar for a day stem and a two-hour slot (0 = Zi).
pub const fn hour_pillar(day_stem: Stem, slot: u8) -> GanZhi {
    GanZhi {
        stem: zi_hour_stem(day_stem).offset(slot as i32),
        branch: Branch::from_index(slot as i32),
    }
}

/// Solar-term month pillar at a wall-clock instant.
pub fn month_pillar(instant: &CivilDateTime) -> GanZhi {
    let offset = solar_month_offset(instant) as i32;
    let year_stem = GanZhi::of_year(li_chun_year(instant)).stem;
    GanZhi {
        stem: yin_month_stem(year_stem).offset(offset),
        branch: Branch::Yin.offset(offset),
    }
}

/// Stem of lunar month `month` (1..=12) in a year with `year_stem`.
///
/// Used for flow months, which count from the first lunar month rather
/// than from a solar-term boundary.
pub const fn lunar_month_stem(year_stem: Stem, month: u8) -> Stem {
    yin_month_stem(year_stem).offset(month as i32 - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_pillar_new_year_2000() {
        let d = CivilDate::new(2000, 2, 5).unwrap();
        assert_eq!(day_pillar(d).to_string(), "癸巳");
    }

    #[test]
    fn day_pillar_j2000() {
        // 2000-01-01 was a Wu-Wu day
        let d = CivilDate::new(2000, 1, 1).unwrap();
        assert_eq!(day_pillar(d).to_string(), "戊午");
    }

    #[test]
    fn consecutive_days_advance_cycle() {
        let d = CivilDate::new(1990, 6, 15).unwrap();
        let a = day_pillar(d).cycle_index() as i64;
        let b = day_pillar(d.add_days(1)).cycle_index() as i64;
        assert_eq!((a + 1) % 60, b);
    }

    #[test]
    fn five_rat_rule() {
        assert_eq!(hour_pillar(Stem::Jia, 0).to_string(), "甲子");
        assert_eq!(hour_pillar(Stem::Ji, 0).to_string(), "甲子");
        assert_eq!(hour_pillar(Stem::Gui, 0).to_string(), "壬子");
        assert_eq!(hour_pillar(Stem::Gui, 11).to_string(), "癸亥");
    }

    #[test]
    fn five_tiger_rule() {
        assert_eq!(yin_month_stem(Stem::Jia), Stem::Bing);
        assert_eq!(yin_month_stem(Stem::Geng), Stem::Wu);
        assert_eq!(yin_month_stem(Stem::Wu), Stem::Jia);
    }

    #[test]
    fn month_pillar_at_li_chun_2000() {
        let before = CivilDateTime::new(2000, 2, 4, 12, 0).unwrap();
        let after = CivilDateTime::new(2000, 2, 5, 12, 0).unwrap();
        // before Li Chun: Chou month of Ji-Mao year
        assert_eq!(month_pillar(&before).to_string(), "丁丑");
        assert_eq!(month_pillar(&after).to_string(), "戊寅");
    }

    #[test]
    fn lunar_month_stem_table() {
        assert_eq!(lunar_month_stem(Stem::Jia, 1), Stem::Bing);
        assert_eq!(lunar_month_stem(Stem::Jia, 12), Stem::Ding);
        assert_eq!(lunar_month_stem(Stem::Wu, 3), Stem::Bing);
    }
}
