//! The lunar converter seam used by the chart engine.

use log::debug;
use serde::{Deserialize, Serialize};
use ziwei_time::{CivilDate, CivilDateTime};

use crate::error::LunarError;
use crate::lunar::{LunarDay, solar_to_lunar};
use crate::pillars::{day_pillar, hour_pillar, month_pillar};
use crate::sexagenary::{Branch, GanZhi, Stem};

/// Number of two-hour slots in a day.
pub const HOUR_SLOTS: u8 = 12;

/// Lunar date and four pillars of a (civil date, hour slot) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    pub day: LunarDay,
    pub hour_slot: u8,
    /// Pillar of the lunar year (changes at lunar new year).
    pub year: GanZhi,
    pub month: GanZhi,
    pub day_pillar: GanZhi,
    pub hour: GanZhi,
}

impl LunarDate {
    pub fn year_stem(&self) -> Stem {
        self.year.stem
    }

    pub fn year_branch(&self) -> Branch {
        self.year.branch
    }

    /// e.g. `2000年 正月 初一 壬子时`
    pub fn label(&self) -> String {
        format!(
            "{}年 {} {} {}时",
            self.day.year,
            self.day.month_label(),
            self.day.day_label(),
            self.hour
        )
    }
}

/// Converts a civil date and hour slot into lunar terms.
///
/// Implementations must be deterministic: the chart engine's output is a
/// pure function of the converter's output.
pub trait LunarConverter {
    fn convert(&self, date: CivilDate, hour_slot: u8) -> Result<LunarDate, LunarError>;
}

/// Table-driven converter covering 1900-01-31 ..= 2100-12-31.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableLunarConverter;

impl TableLunarConverter {
    pub const fn new() -> Self {
        Self
    }
}

impl LunarConverter for TableLunarConverter {
    fn convert(&self, date: CivilDate, hour_slot: u8) -> Result<LunarDate, LunarError> {
        if hour_slot >= HOUR_SLOTS {
            return Err(LunarError::InvalidHourSlot(hour_slot));
        }
        let day = solar_to_lunar(date)?;
        let day_gz = day_pillar(date);
        // solar-term month is read at the start of the slot
        let instant = CivilDateTime::at_midnight(date).add_minutes(hour_slot as i64 * 120);
        let lunar = LunarDate {
            day,
            hour_slot,
            year: GanZhi::of_year(day.year),
            month: month_pillar(&instant),
            day_pillar: day_gz,
            hour: hour_pillar(day_gz.stem, hour_slot),
        };
        debug!("lunar {date} slot {hour_slot} -> {}", lunar.label());
        Ok(lunar)
    }
}

impl<C: LunarConverter + ?Sized> LunarConverter for &C {
    fn convert(&self, date: CivilDate, hour_slot: u8) -> Result<LunarDate, LunarError> {
        (**self).convert(date, hour_slot)
    }
}
