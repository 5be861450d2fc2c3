//! Five-element bureau (五行局) of the Life palace.

use std::fmt;

use serde::{Deserialize, Serialize};
use ziwei_lunar::{Branch, Stem};

/// Bureau number by stem pair (rows) and branch pair (columns).
const BUREAU_MATRIX: [[u8; 6]; 5] = [
    [4, 2, 6, 4, 2, 6], // Jia/Yi
    [2, 6, 5, 2, 6, 5], // Bing/Ding
    [6, 5, 3, 6, 5, 3], // Wu/Ji
    [5, 3, 4, 5, 3, 4], // Geng/Xin
    [3, 4, 2, 3, 4, 2], // Ren/Gui
];

/// The five bureaus, numbered 2..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Bureau {
    Water = 2,
    Wood = 3,
    Metal = 4,
    Earth = 5,
    Fire = 6,
}

impl Bureau {
    /// Bureau of a Life palace stem and branch.
    pub const fn resolve(stem: Stem, branch: Branch) -> Self {
        let n = BUREAU_MATRIX[(stem.index() / 2) as usize][(branch.index() / 2) as usize];
        match n {
            2 => Self::Water,
            3 => Self::Wood,
            4 => Self::Metal,
            5 => Self::Earth,
            _ => Self::Fire,
        }
    }

    /// Bureau number, also the starting age of the first decade.
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Chinese name, e.g. `水二局`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Water => "水二局",
            Self::Wood => "木三局",
            Self::Metal => "金四局",
            Self::Earth => "土五局",
            Self::Fire => "火六局",
        }
    }
}

impl fmt::Display for Bureau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
