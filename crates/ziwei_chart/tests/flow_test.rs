//! Flow frames and projection for the 2000-02-05 Zi-hour male chart,
//! queried on 2024-02-10 (lunar 2024 正月初一) at the Wu hour.

use ziwei_chart::{
    BirthInput, Chart, ChartError, FlowFrame, FlowState, Gender, Granularity, StarName,
    compute_chart, compute_flow_state, project_flow_stars,
};
use ziwei_config::{FlowSettings, Settings};
use ziwei_lunar::{Stem, TableLunarConverter};
use ziwei_time::CivilDate;

fn birth() -> CivilDate {
    CivilDate::new(2000, 2, 5).unwrap()
}

fn chart() -> Chart {
    let input = BirthInput::from_slot("golden", birth(), 0, Gender::Male);
    compute_chart(&TableLunarConverter, &input, &Settings::default()).unwrap()
}

fn state_at(c: &Chart, date: (i32, u32, u32), slot: u8) -> FlowState {
    let query = CivilDate::new(date.0, date.1, date.2).unwrap();
    compute_flow_state(&TableLunarConverter, c, birth(), query, slot).unwrap()
}

fn state() -> FlowState {
    state_at(&chart(), (2024, 2, 10), 6)
}

// ---------------------------------------------------------------------------
// Frames
// ---------------------------------------------------------------------------

#[test]
fn nominal_age() {
    assert_eq!(state().age, 25);
}

#[test]
fn decade_frame() {
    let d = state().decade.unwrap();
    assert_eq!(d.sector, 4);
    assert_eq!(d.stem, Stem::Geng);
    assert_eq!(d.label, "25~34 庚辰限");
}

#[test]
fn year_frame() {
    let s = state();
    assert_eq!(s.year.sector, 4);
    assert_eq!(s.year.stem, Stem::Jia);
    assert_eq!(s.year.label, "2024 甲辰 25岁");
}

#[test]
fn month_day_hour_frames() {
    let s = state();
    assert_eq!(s.month.sector, 4);
    assert_eq!(s.month.stem, Stem::Bing);
    assert_eq!(s.month.label, "正月 丙寅");
    assert_eq!(s.day.sector, 4);
    assert_eq!(s.day.label, "初一 甲辰");
    assert_eq!(s.hour.sector, 10);
    assert_eq!(s.hour.stem, Stem::Geng);
    assert_eq!(s.hour.label, "庚午时");
}

#[test]
fn frames_in_nesting_order() {
    let s = state();
    let order: Vec<FlowFrame> = s.frames().map(|f| f.frame).collect();
    assert_eq!(
        order,
        [FlowFrame::Decade, FlowFrame::Year, FlowFrame::Month, FlowFrame::Day, FlowFrame::Hour]
    );
}

#[test]
fn no_decade_before_first_range() {
    // age 3, the Earth bureau's first decade starts at 5
    let s = state_at(&chart(), (2002, 6, 1), 0);
    assert_eq!(s.age, 3);
    assert!(s.decade.is_none());
    assert_eq!(s.frames().count(), 4);
}

#[test]
fn query_before_birth_rejected() {
    let query = CivilDate::new(1999, 6, 1).unwrap();
    let err = compute_flow_state(&TableLunarConverter, &chart(), birth(), query, 0).unwrap_err();
    assert_eq!(
        err,
        ChartError::QueryBeforeBirth {
            birth: birth(),
            query
        }
    );
}

#[test]
fn query_earlier_in_birth_year_rejected() {
    let born = CivilDate::new(2000, 6, 1).unwrap();
    let input = BirthInput::from_slot("june", born, 3, Gender::Female);
    let c = compute_chart(&TableLunarConverter, &input, &Settings::default()).unwrap();
    let query = CivilDate::new(2000, 3, 1).unwrap();
    let err = compute_flow_state(&TableLunarConverter, &c, born, query, 0).unwrap_err();
    assert_eq!(err, ChartError::QueryBeforeBirth { birth: born, query });

    // the birth day itself is age 1
    let s = compute_flow_state(&TableLunarConverter, &c, born, born, 0).unwrap();
    assert_eq!(s.age, 1);
}

#[test]
fn bad_query_slot_rejected() {
    let query = CivilDate::new(2024, 2, 10).unwrap();
    let err = compute_flow_state(&TableLunarConverter, &chart(), birth(), query, 12).unwrap_err();
    assert_eq!(err, ChartError::InvalidHourSlot(12));
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

fn count(overlay: &ziwei_chart::FlowOverlay) -> usize {
    overlay.values().map(Vec::len).sum()
}

fn labels_at(overlay: &ziwei_chart::FlowOverlay, sector: u8) -> Vec<String> {
    overlay
        .get(&sector)
        .map(|stars| stars.iter().map(|s| s.label()).collect())
        .unwrap_or_default()
}

#[test]
fn birth_granularity_projects_nothing() {
    let c = chart();
    let overlay = project_flow_stars(&c, &state(), &Settings::default(), Granularity::Birth);
    assert!(overlay.is_empty());
}

#[test]
fn year_granularity() {
    let c = chart();
    let overlay = project_flow_stars(&c, &state(), &Settings::default(), Granularity::Year);
    // twelve stars per frame, decade and year
    assert_eq!(count(&overlay), 24);
    assert!(
        overlay
            .values()
            .flatten()
            .all(|star| matches!(star.frame, Some(FlowFrame::Decade | FlowFrame::Year)))
    );
    assert!(labels_at(&overlay, 8).contains(&"大禄".to_string()));
    assert!(labels_at(&overlay, 2).contains(&"年禄".to_string()));
    assert!(labels_at(&overlay, 3).contains(&"年羊".to_string()));
    assert!(labels_at(&overlay, 5).contains(&"年昌".to_string()));
    assert!(labels_at(&overlay, 9).contains(&"年曲".to_string()));
    assert!(labels_at(&overlay, 2).contains(&"年马".to_string()));
    assert!(labels_at(&overlay, 11).contains(&"大鸾".to_string()));
}

#[test]
fn finer_granularity_adds_frames() {
    let c = chart();
    let s = state();
    let settings = Settings::default();
    let year = count(&project_flow_stars(&c, &s, &settings, Granularity::Year));
    let hour = count(&project_flow_stars(&c, &s, &settings, Granularity::Hour));
    assert_eq!(hour, year + 3 * 12);
}

#[test]
fn toggles() {
    let c = chart();
    let s = state();
    let off = Settings {
        flow: FlowSettings {
            flow_stars: false,
            ..FlowSettings::default()
        },
        ..Settings::default()
    };
    assert!(project_flow_stars(&c, &s, &off, Granularity::Hour).is_empty());

    let core_only = Settings {
        flow: FlowSettings {
            flow_stars: true,
            ma: false,
            huo_ling: false,
            hong_xi: false,
            chang_qu: false,
        },
        ..Settings::default()
    };
    let overlay = project_flow_stars(&c, &s, &core_only, Granularity::Decade);
    assert_eq!(count(&overlay), 5);
    assert!(
        overlay
            .values()
            .flatten()
            .all(|star| star.frame == Some(FlowFrame::Decade))
    );
    assert!(
        !overlay
            .values()
            .flatten()
            .any(|star| star.name == StarName::TianMa)
    );
}

#[test]
fn projection_leaves_chart_untouched() {
    let c = chart();
    let before = c.clone();
    let _ = project_flow_stars(&c, &state(), &Settings::default(), Granularity::Hour);
    assert_eq!(c, before);
}
