//! Heavenly stems, earthly branches and the sixty-pair cycle.
//!
//! Stems cycle with period 10 and branches with period 12; a pillar pairs a
//! stem and a branch of the same parity, giving 60 combinations starting at
//! Jia-Zi.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The 10 heavenly stems starting from Jia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (0 = Jia, 9 = Gui).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// Chinese character of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Pinyin romanisation.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem for any integer, wrapping with floor modulo.
    pub const fn from_index(i: i32) -> Self {
        ALL_STEMS[i.rem_euclid(10) as usize]
    }

    /// Yang stems have even indices.
    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }

    /// Advance by `n` positions (negative goes backward).
    pub const fn offset(self, n: i32) -> Self {
        Self::from_index(self.index() as i32 + n)
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The 12 earthly branches starting from Zi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (0 = Zi, 11 = Hai).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

impl Branch {
    /// Chinese character of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Pinyin romanisation.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch for any integer, wrapping with floor modulo.
    pub const fn from_index(i: i32) -> Self {
        ALL_BRANCHES[i.rem_euclid(12) as usize]
    }

    /// Yang branches have even indices.
    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }

    /// Advance by `n` positions (negative goes backward).
    pub const fn offset(self, n: i32) -> Self {
        Self::from_index(self.index() as i32 + n)
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A stem-branch pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GanZhi {
    pub stem: Stem,
    pub branch: Branch,
}

impl GanZhi {
    /// Pillar at position `n` of the sixty cycle (0 = Jia-Zi), wrapping.
    pub const fn from_cycle_index(n: i64) -> Self {
        let n = n.rem_euclid(60) as i32;
        Self {
            stem: Stem::from_index(n),
            branch: Branch::from_index(n),
        }
    }

    /// Pair a stem and a branch; `None` if their parities differ.
    pub const fn new(stem: Stem, branch: Branch) -> Option<Self> {
        if stem.index() % 2 == branch.index() % 2 {
            Some(Self { stem, branch })
        } else {
            None
        }
    }

    /// Position in the sixty cycle (0 = Jia-Zi .. 59 = Gui-Hai).
    pub const fn cycle_index(self) -> u8 {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        // n ≡ s (mod 10), n ≡ b (mod 12): n = s + 10k with k = ((b - s) / 2 * 5) mod 6
        let k = ((b - s) / 2 * 5).rem_euclid(6);
        (s + 10 * k) as u8
    }

    /// Pillar of a Gregorian-numbered lunar year (1984 = Jia-Zi).
    pub const fn of_year(year: i32) -> Self {
        Self::from_cycle_index(year as i64 - 4)
    }
}

impl fmt::Display for GanZhi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn branch_indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn negative_offsets_wrap() {
        assert_eq!(Branch::Chou.offset(-3), Branch::Xu);
        assert_eq!(Stem::Jia.offset(-1), Stem::Gui);
        assert_eq!(Branch::from_index(3 - 11), Branch::Chen);
    }

    #[test]
    fn year_1984_is_jia_zi() {
        let gz = GanZhi::of_year(1984);
        assert_eq!(gz.stem, Stem::Jia);
        assert_eq!(gz.branch, Branch::Zi);
        assert_eq!(gz.to_string(), "甲子");
    }

    #[test]
    fn year_2000_is_geng_chen() {
        assert_eq!(GanZhi::of_year(2000).to_string(), "庚辰");
    }

    #[test]
    fn cycle_index_roundtrip() {
        for n in 0..60 {
            assert_eq!(GanZhi::from_cycle_index(n).cycle_index() as i64, n);
        }
    }

    #[test]
    fn mismatched_parity_rejected() {
        assert!(GanZhi::new(Stem::Jia, Branch::Chou).is_none());
        assert!(GanZhi::new(Stem::Yi, Branch::Chou).is_some());
    }
}
