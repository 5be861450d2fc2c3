//! Life/Body sectors, palace names and palace stems.
//!
//! Sector 2 (Yin) is the fixed anchor: the first lunar month starts there and
//! palace stems are counted from the Yin stem of the year.

use ziwei_config::LeapMonthRule;
use ziwei_lunar::{LunarDay, Stem, yin_month_stem};

use crate::palace::{ALL_PALACE_NAMES, PalaceName};
use crate::util::{fix10, fix12};

/// Sector of the Yin branch.
pub const YIN_SECTOR: u8 = 2;

/// Life and Body sectors for a birth month (1..=12) and hour slot (0..=11).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ring {
    pub life: u8,
    pub body: u8,
}

impl Ring {
    pub const fn new(month: u8, hour_slot: u8) -> Self {
        Self {
            life: life_sector(month, hour_slot),
            body: body_sector(month, hour_slot),
        }
    }

    /// Palace name held by `sector`.
    pub const fn name_at(&self, sector: u8) -> PalaceName {
        ALL_PALACE_NAMES[fix12(self.life as i32 - sector as i32) as usize]
    }

    /// Sector holding palace `name`.
    pub const fn sector_of(&self, name: PalaceName) -> u8 {
        fix12(self.life as i32 - name.index() as i32)
    }
}

/// `(2 + (month-1) - hour) mod 12`
pub const fn life_sector(month: u8, hour_slot: u8) -> u8 {
    fix12(YIN_SECTOR as i32 + (month as i32 - 1) - hour_slot as i32)
}

/// `(2 + (month-1) + hour) mod 12`
pub const fn body_sector(month: u8, hour_slot: u8) -> u8 {
    fix12(YIN_SECTOR as i32 + (month as i32 - 1) + hour_slot as i32)
}

/// Stem of a sector for a birth year stem.
///
/// Stems run forward from Yin to Hai; Zi and Chou continue the count, so
/// they repeat the stems of Yin and Mao.
pub const fn palace_stem(year_stem: Stem, sector: u8) -> Stem {
    let yin = yin_month_stem(year_stem).index() as i32;
    Stem::from_index(fix10(yin + fix12(sector as i32 - YIN_SECTOR as i32) as i32) as i32)
}

/// Regular month number used for placement, folding a leap month in.
pub fn effective_month(day: &LunarDay, rule: LeapMonthRule) -> u8 {
    let month = day.month_number();
    if !day.is_leap() {
        return month;
    }
    let next = month % 12 + 1;
    match rule {
        LeapMonthRule::Current => month,
        LeapMonthRule::Next => next,
        LeapMonthRule::Split if day.day >= 16 => next,
        LeapMonthRule::Split => month,
    }
}
