//! The twelve palace roles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Palace roles in ring order counted backward from Life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PalaceName {
    Life,
    Siblings,
    Spouse,
    Children,
    Wealth,
    Health,
    Travel,
    Friends,
    Career,
    Property,
    Fortune,
    Parents,
}

/// All 12 palace names in assignment order.
pub const ALL_PALACE_NAMES: [PalaceName; 12] = [
    PalaceName::Life,
    PalaceName::Siblings,
    PalaceName::Spouse,
    PalaceName::Children,
    PalaceName::Wealth,
    PalaceName::Health,
    PalaceName::Travel,
    PalaceName::Friends,
    PalaceName::Career,
    PalaceName::Property,
    PalaceName::Fortune,
    PalaceName::Parents,
];

impl PalaceName {
    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Life => "命宫",
            Self::Siblings => "兄弟",
            Self::Spouse => "夫妻",
            Self::Children => "子女",
            Self::Wealth => "财帛",
            Self::Health => "疾厄",
            Self::Travel => "迁移",
            Self::Friends => "交友",
            Self::Career => "官禄",
            Self::Property => "田宅",
            Self::Fortune => "福德",
            Self::Parents => "父母",
        }
    }

    /// One-character abbreviation.
    pub const fn abbr(self) -> &'static str {
        match self {
            Self::Life => "命",
            Self::Siblings => "兄",
            Self::Spouse => "夫",
            Self::Children => "子",
            Self::Wealth => "财",
            Self::Health => "疾",
            Self::Travel => "迁",
            Self::Friends => "友",
            Self::Career => "官",
            Self::Property => "田",
            Self::Fortune => "福",
            Self::Parents => "父",
        }
    }

    /// Offset from Life in assignment order (0 = Life .. 11 = Parents).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(i: u8) -> Option<Self> {
        if i < 12 {
            Some(ALL_PALACE_NAMES[i as usize])
        } else {
            None
        }
    }
}

impl fmt::Display for PalaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
