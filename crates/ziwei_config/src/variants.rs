//! Historically attested rule variants.
//!
//! Each enum names one point where schools of the chart disagree. The
//! `Default` of every enum is the variant used when a settings file is
//! silent.

use serde::{Deserialize, Serialize};

/// How a leap (intercalary) birth month is folded into a regular month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeapMonthRule {
    /// Treat the leap month as the month it repeats.
    #[default]
    Current,
    /// Treat the leap month as the following month.
    Next,
    /// Days 1-15 count as the repeated month, days 16+ as the next.
    Split,
}

/// Basis of the Tian Ma (horse) placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorseBasis {
    #[default]
    Year,
    Month,
}

/// Basis of the Tian Kong placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoidBasis {
    /// One step past the year branch.
    #[default]
    Year,
    /// One step past the year branch, then forward by the hour slot.
    Seq,
}

/// Whether Jie Kong places its deputy as well as its main void.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoidMode {
    #[default]
    Dual,
    Single,
}

/// Grouping of the Tian Kui / Tian Yue (nobility) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NobilityScheme {
    /// Geng with Jia/Wu; Xin to Wu (horse) and Yin (tiger).
    #[default]
    XinHuMa,
    /// Geng with Jia/Wu; Xin to Yin and Wu.
    XinMaHu,
    /// Geng and Xin both to Yin and Wu.
    GengMaHu,
    /// Geng and Xin both to Wu and Yin.
    GengHuMa,
}

/// Which brightness table to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrightnessTable {
    #[default]
    Zhongzhou,
    Quan,
}

/// Key of the Life master lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MasterStarTable {
    /// Keyed by the Life palace branch.
    #[default]
    Quan,
    /// Keyed by the birth year branch.
    Zhongzhou,
}

/// Which element the Earth bureau shares its Chang Sheng start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangShengStart {
    #[default]
    WaterEarth,
    FireEarth,
}

/// Geng-year Fame/Obstruction pair (Wealth = Tai Yang, Power = Wu Qu).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GengSiHua {
    #[default]
    YangWuYinTong,
    YangWuTongYin,
    YangWuFuTong,
    YangWuFuXiang,
    YangWuTongXiang,
}

/// Wu-year Fame star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WuSiHua {
    #[default]
    TanYinYouJi,
    TanYinYangJi,
}

/// Ren-year Fame star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenSiHua {
    #[default]
    LiangZiZuoWu,
    LiangZiFuWu,
    LiangZiXiangWu,
}

/// Gui-year Fame star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuiSiHua {
    #[default]
    PoJuYinTan,
    PoJuYangTan,
}
