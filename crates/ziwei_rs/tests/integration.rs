//! Integration tests for ziwei_rs.

use ziwei_rs::*;

fn birth() -> CivilDate {
    CivilDate::new(2000, 2, 5).unwrap()
}

#[test]
fn chart_from_slot() {
    let c = compute_chart("a", birth(), 0, Gender::Male, &Settings::default(), None).unwrap();
    assert_eq!(c.life, 2);
    assert_eq!(c.bureau, Bureau::Earth);
    assert_eq!(c.sector_of(StarName::ZiWei), Some(6));
}

#[test]
fn chart_from_clock_time_matches_slot() {
    let at = CivilDateTime::new(2000, 2, 5, 0, 40).unwrap();
    let a = compute_chart_at("a", at, Gender::Male, &Settings::default(), None).unwrap();
    let b = compute_chart("a", birth(), 0, Gender::Male, &Settings::default(), None).unwrap();
    assert_eq!(a.palaces, b.palaces);
    assert_eq!(a.labels.solar, "阳历 2000年2月5日 00:40");
}

#[test]
fn longitude_applies_only_with_true_solar_time() {
    // 10:30 at 90 E is 08:30 local: Chen slot instead of Si
    let at = CivilDateTime::new(1990, 6, 15, 10, 30).unwrap();
    let plain = compute_chart_at("a", at, Gender::Female, &Settings::default(), Some(90.0)).unwrap();
    assert_eq!(plain.hour_slot, 5);

    let settings = Settings {
        true_solar_time: true,
        ..Settings::default()
    };
    let solar = compute_chart_at("a", at, Gender::Female, &settings, Some(90.0)).unwrap();
    assert_eq!(solar.hour_slot, 4);
    assert_eq!(solar.labels.true_solar.as_deref(), Some("真太阳时 08:30"));
}

#[test]
fn invalid_inputs() {
    let s = Settings::default();
    assert!(matches!(
        compute_chart("a", birth(), 12, Gender::Male, &s, None),
        Err(ChartError::InvalidHourSlot(12))
    ));
    assert!(matches!(
        compute_chart("a", birth(), 0, Gender::Male, &s, Some(f64::NAN)),
        Err(ChartError::Time(TimeError::NonFiniteLongitude(_)))
    ));
    let late = CivilDate::new(2101, 3, 1).unwrap();
    assert!(matches!(
        compute_chart("a", late, 0, Gender::Male, &s, None),
        Err(ChartError::Lunar(_))
    ));
}

#[test]
fn flow_round_trip() {
    let s = Settings::default();
    let c = compute_chart("a", birth(), 0, Gender::Male, &s, None).unwrap();
    let query = CivilDate::new(2024, 2, 10).unwrap();
    let state = compute_flow_state(&c, query, birth(), 6).unwrap();
    assert_eq!(state.year.label, "2024 甲辰 25岁");
    let overlay = project_flow_stars(&c, &state, &s, Granularity::Month);
    assert_eq!(overlay.values().map(Vec::len).sum::<usize>(), 36);
}

#[test]
fn lunar_and_si_hua_helpers() {
    let l = lunar_date(birth(), 0).unwrap();
    assert_eq!(l.label(), "2000年 正月 初一 壬子时");
    let row = si_hua(Stem::Jia, &Settings::default());
    assert_eq!(row.star(Transformation::Wealth), StarName::LianZhen);
    assert_eq!(row.star(Transformation::Obstruction), StarName::TaiYang);
}

#[test]
fn chart_json_has_labels() {
    let c = compute_chart("a", birth(), 0, Gender::Male, &Settings::default(), None).unwrap();
    let json = serde_json::to_string(&c).unwrap();
    assert!(json.contains("庚辰 戊寅 癸巳 壬子"));
}
