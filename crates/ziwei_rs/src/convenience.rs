use ziwei_chart::{
    BirthInput, Chart, ChartError, FlowOverlay, FlowState, Gender, Granularity, SiHua,
};
use ziwei_config::Settings;
use ziwei_lunar::{LunarConverter, LunarDate, Stem, TableLunarConverter};
use ziwei_time::{CivilDate, CivilDateTime};

/// Birth chart for a date and two-hour slot, using the bundled lunar table.
///
/// `longitude` (degrees east) is only read when `settings.true_solar_time`
/// is set, but a non-finite value is always rejected.
pub fn compute_chart(
    name: &str,
    date: CivilDate,
    hour_slot: u8,
    gender: Gender,
    settings: &Settings,
    longitude: Option<f64>,
) -> Result<Chart, ChartError> {
    let mut input = BirthInput::from_slot(name, date, hour_slot, gender);
    input.longitude = longitude;
    ziwei_chart::compute_chart(&TableLunarConverter, &input, settings)
}

/// Birth chart from a clock time; the hour slot is derived from the hour.
pub fn compute_chart_at(
    name: &str,
    instant: CivilDateTime,
    gender: Gender,
    settings: &Settings,
    longitude: Option<f64>,
) -> Result<Chart, ChartError> {
    let mut input = BirthInput::from_instant(name, instant, gender);
    input.longitude = longitude;
    ziwei_chart::compute_chart(&TableLunarConverter, &input, settings)
}

/// Flow frames of `query` for a chart born on `birth`.
pub fn compute_flow_state(
    chart: &Chart,
    query: CivilDate,
    birth: CivilDate,
    query_slot: u8,
) -> Result<FlowState, ChartError> {
    ziwei_chart::compute_flow_state(&TableLunarConverter, chart, birth, query, query_slot)
}

/// Flow stars of every frame down to `granularity`.
pub fn project_flow_stars(
    chart: &Chart,
    state: &FlowState,
    settings: &Settings,
    granularity: Granularity,
) -> FlowOverlay {
    ziwei_chart::project_flow_stars(chart, state, settings, granularity)
}

/// Lunar date and four pillars of a civil date and slot.
pub fn lunar_date(date: CivilDate, hour_slot: u8) -> Result<LunarDate, ChartError> {
    Ok(TableLunarConverter.convert(date, hour_slot)?)
}

/// Si Hua row of a stem under the configured variants.
pub fn si_hua(stem: Stem, settings: &Settings) -> SiHua {
    SiHua::resolve(stem, &settings.si_hua)
}
