//! Rules keyed by the year branch.

use ziwei_lunar::Branch;

use super::{Bucket, Placement, RuleInputs, RuleSet};
use crate::star::StarName;
use crate::util::{Season, Triad, fix10, fix12};

/// Sector of Tian Ma for a branch.
pub const fn tian_ma_sector(branch: Branch) -> u8 {
    match Triad::of(branch) {
        Triad::YinWuXu => 8,
        Triad::ShenZiChen => 2,
        Triad::SiYouChou => 11,
        Triad::HaiMaoWei => 5,
    }
}

/// Hong Luan and Tian Xi sectors for a branch.
pub const fn hong_xi_sectors(branch: Branch) -> (u8, u8) {
    let hong = fix12(3 - branch.index() as i32);
    (hong, fix12(hong as i32 + 6))
}

/// Huo Xing and Ling Xing sectors for a branch and hour slot.
pub const fn huo_ling_sectors(branch: Branch, hour: u8) -> (u8, u8) {
    let (huo, ling) = match Triad::of(branch) {
        Triad::YinWuXu => (1, 3),
        Triad::ShenZiChen => (2, 10),
        Triad::SiYouChou => (3, 10),
        Triad::HaiMaoWei => (9, 10),
    };
    (fix12(huo + hour as i32), fix12(ling + hour as i32))
}

pub(super) fn tian_ma(i: &RuleInputs, rules: &RuleSet) -> Vec<Placement> {
    let sector = tian_ma_sector((rules.horse)(i));
    vec![Placement::new(StarName::TianMa, Bucket::Auxiliary, sector as i32)]
}

pub(super) fn huo_ling(i: &RuleInputs, _: &RuleSet) -> Vec<Placement> {
    let (huo, ling) = huo_ling_sectors(i.year_branch, i.hour);
    vec![
        Placement::new(StarName::HuoXing, Bucket::Inauspicious, huo as i32),
        Placement::new(StarName::LingXing, Bucket::Inauspicious, ling as i32),
    ]
}

pub(super) fn tian_kong(i: &RuleInputs, rules: &RuleSet) -> Vec<Placement> {
    let sector = (rules.tian_kong)(i);
    vec![Placement::new(StarName::TianKong, Bucket::Minor, sector as i32)]
}

/// The two void branches closing the year's ten-day decade (旬). Both are
/// always placed; `void_mode` applies to Jie Kong only.
pub(super) fn xun_kong(i: &RuleInputs, _rules: &RuleSet) -> Vec<Placement> {
    // branch that pairs with Gui in this decade
    let gui = i.yb() + fix10(9 - i.year_stem.index() as i32) as i32;
    [gui + 1, gui + 2]
        .into_iter()
        .map(|v| Placement::new(StarName::XunKong, Bucket::Minor, v))
        .collect()
}

pub(super) fn nian_jie(i: &RuleInputs, _: &RuleSet) -> Vec<Placement> {
    vec![Placement::new(StarName::NianJie, Bucket::Minor, 10 - i.yb())]
}

pub(super) fn tian_ku_xu(i: &RuleInputs, _: &RuleSet) -> Vec<Placement> {
    vec![
        Placement::new(StarName::TianKu, Bucket::Minor, 6 - i.yb()),
        Placement::new(StarName::TianXu, Bucket::Minor, 6 + i.yb()),
    ]
}

pub(super) fn long_feng(i: &RuleInputs, _: &RuleSet) -> Vec<Placement> {
    vec![
        Placement::new(StarName::LongChi, Bucket::Minor, 4 + i.yb()),
        Placement::new(StarName::FengGe, Bucket::Minor, 10 - i.yb()),
    ]
}

pub(super) fn hong_xi(i: &RuleInputs, _: &RuleSet) -> Vec<Placement> {
    let (hong, xi) = hong_xi_sectors(i.year_branch);
    vec![
        Placement::new(StarName::HongLuan, Bucket::Minor, hong as i32),
        Placement::new(StarName::TianXi, Bucket::Minor, xi as i32),
    ]
}

pub(super) fn gu_gua(i: &RuleInputs, _: &RuleSet) -> Vec<Placement> {
    let (gu, gua) = match Season::of(i.year_branch) {
        Season::Spring => (5, 1),
        Season::Summer => (8, 4),
        Season::Autumn => (11, 7),
        Season::Winter => (2, 10),
    };
    vec![
        Placement::new(StarName::GuChen, Bucket::Minor, gu),
        Placement::new(StarName::GuaSu, Bucket::Minor, gua),
    ]
}

pub(super) fn fei_lian(i: &RuleInputs, _: &RuleSet) -> Vec<Placement> {
    vec![Placement::new(StarName::FeiLian, Bucket::Minor, i.yb() + 8)]
}

pub(super) fn po_sui(i: &RuleInputs, _: &RuleSet) -> Vec<Placement> {
    // Zi Wu Mao You / Chen Xu Chou Wei / Yin Shen Si Hai
    let sector = match i.yb() % 3 {
        0 => 5,
        1 => 1,
        _ => 9,
    };
    vec![Placement::new(StarName::PoSui, Bucket::Minor, sector)]
}

pub(super) fn hua_gai(i: &RuleInputs, _: &RuleSet) -> Vec<Placement> {
    let sector = match Triad::of(i.year_branch) {
        Triad::ShenZiChen => 4,
        Triad::SiYouChou => 1,
        Triad::YinWuXu => 10,
        Triad::HaiMaoWei => 7,
    };
    vec![Placement::new(StarName::HuaGai, Bucket::Minor, sector)]
}

pub(super) fn xian_chi(i: &RuleInputs, _: &RuleSet) -> Vec<Placement> {
    let sector = match Triad::of(i.year_branch) {
        Triad::ShenZiChen => 9,
        Triad::SiYouChou => 6,
        Triad::YinWuXu => 3,
        Triad::HaiMaoWei => 0,
    };
    vec![Placement::new(StarName::XianChi, Bucket::Minor, sector)]
}

pub(super) fn tian_de(i: &RuleInputs, _: &RuleSet) -> Vec<Placement> {
    vec![Placement::new(StarName::TianDe, Bucket::Minor, 9 + i.yb())]
}

/// Year-branch Da Hao: one step past the opposite branch, forward for yang
/// branches and backward for yin ones.
pub(super) fn da_hao(i: &RuleInputs, _: &RuleSet) -> Vec<Placement> {
    let opposite = i.yb() + 6;
    let sector = if i.year_branch.is_yang() {
        opposite + 1
    } else {
        opposite - 1
    };
    vec![Placement::new(StarName::DaHao, Bucket::Minor, sector)]
}

pub(super) fn jie_sha(i: &RuleInputs, _: &RuleSet) -> Vec<Placement> {
    let sector = match Triad::of(i.year_branch) {
        Triad::ShenZiChen => 5,
        Triad::YinWuXu => 11,
        Triad::SiYouChou => 2,
        Triad::HaiMaoWei => 8,
    };
    vec![Placement::new(StarName::JieSha, Bucket::Minor, sector)]
}
