//! Flow frame derivation for a query date.

use log::debug;
use serde::Serialize;
use ziwei_lunar::{Branch, LunarConverter, LunarDate, Stem, lunar_month_stem};
use ziwei_time::CivilDate;

use super::frame::{ALL_FLOW_FRAMES, FlowFrame};
use crate::chart::Chart;
use crate::error::ChartError;
use crate::util::fix12;

/// One flow frame: its stem, the sector it occupies and a display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameState {
    pub frame: FlowFrame,
    pub stem: Stem,
    pub sector: u8,
    pub label: String,
}

impl FrameState {
    pub fn branch(&self) -> Branch {
        Branch::from_index(self.sector as i32)
    }
}

/// Every frame for one query instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowState {
    /// Nominal age, `query year - birth year + 1`.
    pub age: u8,
    pub query: LunarDate,
    /// `None` before the first decade starts.
    pub decade: Option<FrameState>,
    pub year: FrameState,
    pub month: FrameState,
    pub day: FrameState,
    pub hour: FrameState,
}

impl FlowState {
    pub fn frame(&self, frame: FlowFrame) -> Option<&FrameState> {
        match frame {
            FlowFrame::Decade => self.decade.as_ref(),
            FlowFrame::Year => Some(&self.year),
            FlowFrame::Month => Some(&self.month),
            FlowFrame::Day => Some(&self.day),
            FlowFrame::Hour => Some(&self.hour),
        }
    }

    /// Present frames, outermost first.
    pub fn frames(&self) -> impl Iterator<Item = &FrameState> {
        ALL_FLOW_FRAMES.into_iter().filter_map(|f| self.frame(f))
    }
}

/// Dou Jun: the first flow month's sector for a year branch.
pub const fn dou_jun(year_branch: Branch, birth_month: u8, birth_hour: u8) -> u8 {
    fix12(year_branch.index() as i32 - (birth_month as i32 - 1) + birth_hour as i32)
}

fn decade_frame(chart: &Chart, age: u8) -> Option<FrameState> {
    chart.decade_palace(age).map(|p| FrameState {
        frame: FlowFrame::Decade,
        stem: p.stem,
        sector: p.index,
        label: format!("{}~{} {}{}限", p.decade.0, p.decade.1, p.stem, p.branch),
    })
}

/// Compute the flow frames of `query` (civil date and hour slot) for a chart
/// born on `birth`.
///
/// Takes no [`Settings`](ziwei_config::Settings): no option changes how the
/// frames are derived. Flow star toggles apply in
/// [`project_flow_stars`](super::project_flow_stars).
pub fn compute_flow_state<C: LunarConverter + ?Sized>(
    converter: &C,
    chart: &Chart,
    birth: CivilDate,
    query: CivilDate,
    query_slot: u8,
) -> Result<FlowState, ChartError> {
    if query_slot > 11 {
        return Err(ChartError::InvalidHourSlot(query_slot));
    }
    if query < birth {
        return Err(ChartError::QueryBeforeBirth { birth, query });
    }
    let nominal = query.year - birth.year + 1;
    let age = u8::try_from(nominal).unwrap_or(u8::MAX);
    let lunar = converter.convert(query, query_slot)?;

    let year = FrameState {
        frame: FlowFrame::Year,
        stem: lunar.year.stem,
        sector: lunar.year.branch.index(),
        label: format!("{} {} {age}岁", lunar.day.year, lunar.year),
    };

    let month_number = lunar.day.month_number();
    let month_stem = lunar_month_stem(lunar.year.stem, month_number);
    let month_branch = Branch::from_index(month_number as i32 + 1);
    let month_sector = fix12(
        dou_jun(lunar.year.branch, chart.month, chart.hour_slot) as i32 + month_number as i32 - 1,
    );
    let month = FrameState {
        frame: FlowFrame::Month,
        stem: month_stem,
        sector: month_sector,
        label: format!("{} {month_stem}{month_branch}", lunar.day.month_label()),
    };

    let day_sector = fix12(month_sector as i32 + lunar.day.day as i32 - 1);
    let day = FrameState {
        frame: FlowFrame::Day,
        stem: lunar.day_pillar.stem,
        sector: day_sector,
        label: format!("{} {}", lunar.day.day_label(), lunar.day_pillar),
    };

    let hour = FrameState {
        frame: FlowFrame::Hour,
        stem: lunar.hour.stem,
        sector: fix12(day_sector as i32 + query_slot as i32),
        label: format!("{}时", lunar.hour),
    };

    let state = FlowState {
        age,
        decade: decade_frame(chart, age),
        query: lunar,
        year,
        month,
        day,
        hour,
    };
    debug!(
        "flow {query} slot {query_slot}: age {age}, year sector {}, month sector {}",
        state.year.sector, state.month.sector
    );
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dou_jun_wraps() {
        assert_eq!(dou_jun(Branch::Zi, 1, 0), 0);
        assert_eq!(dou_jun(Branch::Zi, 3, 0), 10);
        assert_eq!(dou_jun(Branch::Chen, 1, 11), 3);
    }
}
