//! The fourteen major stars.
//!
//! The Zi Wei anchor comes from the lunar day and bureau by the five-case
//! rule; Tian Fu mirrors it across the Yin-Shen axis. Each series is then
//! laid out by fixed offsets.

use crate::star::StarName;
use crate::util::fix12;

/// Zi Wei series, offsets from the Zi Wei anchor (counter-clockwise).
pub const ZI_WEI_SERIES: [(StarName, i32); 6] = [
    (StarName::ZiWei, 0),
    (StarName::TianJi, -1),
    (StarName::TaiYang, -3),
    (StarName::WuQu, -4),
    (StarName::TianTong, -5),
    (StarName::LianZhen, -8),
];

/// Tian Fu series, offsets from the Tian Fu anchor (clockwise).
pub const TIAN_FU_SERIES: [(StarName, i32); 8] = [
    (StarName::TianFu, 0),
    (StarName::TaiYin, 1),
    (StarName::TanLang, 2),
    (StarName::JuMen, 3),
    (StarName::TianXiang, 4),
    (StarName::TianLiang, 5),
    (StarName::QiSha, 6),
    (StarName::PoJun, 10),
];

/// Sector of Zi Wei for lunar `day` (1..=30) and bureau number (2..=6).
pub const fn zi_wei_sector(day: u8, bureau: u8) -> u8 {
    let day = day as i32;
    let b = bureau as i32;
    let remainder = day % b;
    let quotient = day / b;

    let (steps, forward) = if remainder == 0 {
        (quotient, true)
    } else {
        let x = b - remainder;
        let y = quotient + 1;
        if x % 2 == 0 {
            (x + y, true)
        } else if y > x {
            (y - x, true)
        } else if x > y {
            (x - y, false)
        } else {
            return 1;
        }
    };

    // steps are 1-based from Yin
    if forward {
        fix12(2 + (steps - 1))
    } else {
        fix12(2 - (steps - 1))
    }
}

/// Sector of Tian Fu given the Zi Wei sector.
pub const fn tian_fu_sector(zi_wei: u8) -> u8 {
    fix12(4 - zi_wei as i32)
}

/// All fourteen major stars with their sectors.
pub fn place_major_stars(day: u8, bureau: u8) -> Vec<(StarName, u8)> {
    let zi_wei = zi_wei_sector(day, bureau);
    let tian_fu = tian_fu_sector(zi_wei);
    ZI_WEI_SERIES
        .iter()
        .map(|&(star, off)| (star, fix12(zi_wei as i32 + off)))
        .chain(
            TIAN_FU_SERIES
                .iter()
                .map(|&(star, off)| (star, fix12(tian_fu as i32 + off))),
        )
        .collect()
}
