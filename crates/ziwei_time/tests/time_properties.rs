//! Property tests for civil-time arithmetic and the solar helpers.

use proptest::prelude::*;
use ziwei_time::{
    CivilDate, CivilDateTime, hour_slot_for_hour, li_chun_year, longitude_offset_minutes,
    solar_month_offset, true_solar_time,
};

const FIRST_JDN: i64 = 2_415_021; // 1900-01-01
const LAST_JDN: i64 = 2_488_434; // 2100-12-31

fn instant(jdn: i64, minute_of_day: i64) -> CivilDateTime {
    CivilDateTime::at_midnight(CivilDate::from_jdn(jdn)).add_minutes(minute_of_day)
}

proptest! {
    #[test]
    fn add_minutes_is_reversible(
        jdn in FIRST_JDN..LAST_JDN,
        m in 0i64..1440,
        shift in -100_000i64..100_000,
    ) {
        let t = instant(jdn, m);
        prop_assert_eq!(t.add_minutes(shift).add_minutes(-shift), t);
    }

    #[test]
    fn add_days_moves_jdn(jdn in FIRST_JDN..LAST_JDN, n in -5_000i64..5_000) {
        let d = CivilDate::from_jdn(jdn);
        prop_assert_eq!(d.add_days(n).jdn(), jdn + n);
    }

    #[test]
    fn date_text_parses_back(jdn in FIRST_JDN..LAST_JDN) {
        let d = CivilDate::from_jdn(jdn);
        let parsed: CivilDate = d.to_string().parse().unwrap();
        prop_assert_eq!(parsed, d);
    }

    #[test]
    fn slot_is_always_valid(hour in 0u32..24) {
        prop_assert!(hour_slot_for_hour(hour) < 12);
    }

    #[test]
    fn true_solar_shift_is_bounded(
        jdn in FIRST_JDN..LAST_JDN,
        m in 0i64..1440,
        lon in -180.0f64..180.0,
    ) {
        let t = instant(jdn, m);
        let s = true_solar_time(t, lon).unwrap();
        let offset = longitude_offset_minutes(lon).unwrap();
        prop_assert!(offset.abs() <= 1200);
        prop_assert_eq!(s, t.add_minutes(offset));
    }

    #[test]
    fn solar_month_in_range(jdn in FIRST_JDN..LAST_JDN, m in 0i64..1440) {
        let t = instant(jdn, m);
        prop_assert!(solar_month_offset(&t) < 12);
        let y = li_chun_year(&t);
        prop_assert!(y == t.date.year || y == t.date.year - 1);
    }
}
