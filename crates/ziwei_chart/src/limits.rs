//! Decade limits (大限) and small limits (小限).

use ziwei_lunar::Branch;

use crate::bureau::Bureau;
use crate::util::{Triad, fix12};

/// Age range `(start, end)` of the decade held by each sector.
///
/// The first decade sits in the Life palace and begins at the bureau
/// number; later decades follow the rotation direction.
pub fn decade_ranges(life: u8, bureau: Bureau, clockwise: bool) -> [(u8, u8); 12] {
    let dir = if clockwise { 1 } else { -1 };
    let mut ranges = [(0, 0); 12];
    for step in 0..12u8 {
        let sector = fix12(life as i32 + dir * step as i32);
        let start = bureau.number() + 10 * step;
        ranges[sector as usize] = (start, start + 9);
    }
    ranges
}

/// Sector of age 1 in the small-limit count.
const fn small_limit_start(year_branch: Branch) -> u8 {
    match Triad::of(year_branch) {
        Triad::YinWuXu => 4,
        Triad::ShenZiChen => 10,
        Triad::SiYouChou => 7,
        Triad::HaiMaoWei => 1,
    }
}

/// Nominal ages `1..=max_age` grouped by the sector they fall in.
///
/// Males count forward, females backward.
pub fn small_limits(year_branch: Branch, male: bool, max_age: u8) -> [Vec<u8>; 12] {
    let start = small_limit_start(year_branch) as i32;
    let dir = if male { 1 } else { -1 };
    let mut out: [Vec<u8>; 12] = Default::default();
    for age in 1..=max_age {
        let sector = fix12(start + dir * (age as i32 - 1));
        out[sector as usize].push(age);
    }
    out
}
