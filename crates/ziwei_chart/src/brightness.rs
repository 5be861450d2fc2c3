//! Per-sector brightness (庙旺得利平不陷) lookup.
//!
//! Only the major stars, the two scholars and the four killers are graded;
//! every other star has no brightness.

use ziwei_config::BrightnessTable;

use crate::star::{Brightness, StarName};

use crate::star::Brightness::{Bu as B, De as D, Li as L, Miao as M, Ping as P, Wang as W, Xian as X};

/// Brightness columns indexed by sector (0 = Zi .. 11 = Hai).
type Row = (StarName, [Brightness; 12]);

const ZHONGZHOU: [Row; 20] = [
    (StarName::ZiWei, [P, M, W, W, D, W, M, M, W, W, D, W]),
    (StarName::TianJi, [M, X, D, W, L, P, M, X, D, W, L, P]),
    (StarName::TaiYang, [X, B, W, M, W, W, W, D, D, X, B, X]),
    (StarName::WuQu, [W, M, D, L, M, P, W, M, D, L, M, P]),
    (StarName::TianTong, [W, B, L, P, P, M, X, B, W, P, P, M]),
    (StarName::LianZhen, [P, L, M, P, L, X, P, L, M, P, L, X]),
    (StarName::TianFu, [M, M, M, D, M, D, W, M, D, W, M, D]),
    (StarName::TaiYin, [M, M, W, X, X, X, B, B, L, B, W, M]),
    (StarName::TanLang, [W, M, P, L, M, X, W, M, P, L, M, X]),
    (StarName::JuMen, [W, B, M, M, X, W, W, B, M, M, X, W]),
    (StarName::TianXiang, [M, M, M, X, D, D, M, D, M, X, D, D]),
    (StarName::TianLiang, [M, W, M, M, M, X, M, W, X, D, M, X]),
    (StarName::QiSha, [W, M, M, W, M, P, W, M, M, M, M, P]),
    (StarName::PoJun, [M, W, D, X, W, P, M, W, D, X, W, P]),
    (StarName::WenChang, [X, L, X, L, D, M, X, L, D, M, X, L]),
    (StarName::WenQu, [D, M, P, W, D, M, X, W, D, M, X, W]),
    (StarName::HuoXing, [X, D, M, L, X, D, M, L, X, D, M, L]),
    (StarName::LingXing, [X, D, M, L, X, D, M, L, X, D, M, L]),
    (StarName::QingYang, [P, X, M, P, X, M, P, X, M, P, X, M]),
    (StarName::TuoLuo, [X, P, M, X, P, M, X, P, M, X, P, M]),
];

fn table(which: BrightnessTable) -> &'static [Row] {
    match which {
        BrightnessTable::Zhongzhou => &ZHONGZHOU,
        // the Quan Shu grading is not tabulated separately
        BrightnessTable::Quan => &ZHONGZHOU,
    }
}

/// Brightness of `star` in `sector`, or `None` if the star is not graded.
pub fn brightness(which: BrightnessTable, star: StarName, sector: u8) -> Option<Brightness> {
    table(which)
        .iter()
        .find(|(name, _)| *name == star)
        .and_then(|(_, row)| row.get(sector as usize).copied())
}
