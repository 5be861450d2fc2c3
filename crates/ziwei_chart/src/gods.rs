//! The four twelve-god cycles (长生, 岁建, 博士, 将前).

use serde::{Deserialize, Serialize};
use ziwei_config::ChangShengStart;
use ziwei_lunar::Branch;

use crate::bureau::Bureau;
use crate::util::{Triad, fix12};

const CHANG_SHENG_12: [&str; 12] = [
    "长生", "沐浴", "冠带", "临官", "帝旺", "衰", "病", "死", "墓", "绝", "胎", "养",
];
const SUI_JIAN_12: [&str; 12] = [
    "太岁", "晦气", "丧门", "贯索", "官符", "小耗", "大耗", "龙德", "白虎", "天德", "吊客", "病符",
];
const BO_SHI_12: [&str; 12] = [
    "博士", "力士", "青龙", "小耗", "将军", "奏书", "飞廉", "喜神", "病符", "大耗", "伏兵", "官府",
];
const JIANG_QIAN_12: [&str; 12] = [
    "将星", "攀鞍", "岁驿", "息神", "华盖", "劫煞", "灾煞", "天煞", "指背", "咸池", "月煞", "亡神",
];

/// One of the four god cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GodCycle {
    ChangSheng,
    SuiJian,
    BoShi,
    JiangQian,
}

impl GodCycle {
    /// The twelve names of this cycle in order.
    pub const fn names(self) -> &'static [&'static str; 12] {
        match self {
            Self::ChangSheng => &CHANG_SHENG_12,
            Self::SuiJian => &SUI_JIAN_12,
            Self::BoShi => &BO_SHI_12,
            Self::JiangQian => &JIANG_QIAN_12,
        }
    }
}

/// A god at position `position` (0..=11) of its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GodStar {
    pub cycle: GodCycle,
    pub position: u8,
}

impl GodStar {
    pub const fn name(&self) -> &'static str {
        self.cycle.names()[self.position as usize % 12]
    }
}

/// Sector where Chang Sheng (长生) begins for a bureau.
pub const fn chang_sheng_start(bureau: Bureau, variant: ChangShengStart) -> u8 {
    match bureau {
        Bureau::Water => 8,
        Bureau::Wood => 11,
        Bureau::Metal => 5,
        Bureau::Fire => 2,
        Bureau::Earth => match variant {
            ChangShengStart::WaterEarth => 8,
            ChangShengStart::FireEarth => 2,
        },
    }
}

/// Sector where Jiang Xing (将星) begins for a year branch.
const fn jiang_qian_start(year_branch: Branch) -> u8 {
    match Triad::of(year_branch) {
        Triad::YinWuXu => 6,
        Triad::ShenZiChen => 0,
        Triad::SiYouChou => 9,
        Triad::HaiMaoWei => 3,
    }
}

/// Inputs of the god-cycle layout.
#[derive(Debug, Clone, Copy)]
pub struct GodInputs {
    pub bureau: Bureau,
    pub year_branch: Branch,
    pub lu_cun: u8,
    /// Chang Sheng and Bo Shi run clockwise.
    pub clockwise: bool,
    pub chang_sheng: ChangShengStart,
}

/// All 48 gods with their sectors.
pub fn place_gods(inputs: &GodInputs) -> Vec<(u8, GodStar)> {
    let dir = if inputs.clockwise { 1 } else { -1 };
    let cycles = [
        (GodCycle::ChangSheng, chang_sheng_start(inputs.bureau, inputs.chang_sheng), dir),
        (GodCycle::SuiJian, inputs.year_branch.index(), 1),
        (GodCycle::BoShi, inputs.lu_cun, dir),
        (GodCycle::JiangQian, jiang_qian_start(inputs.year_branch), 1),
    ];
    cycles
        .into_iter()
        .flat_map(|(cycle, start, step)| {
            (0..12u8).map(move |position| {
                let sector = fix12(start as i32 + step * position as i32);
                (sector, GodStar { cycle, position })
            })
        })
        .collect()
}
