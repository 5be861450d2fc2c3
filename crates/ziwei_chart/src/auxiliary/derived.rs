//! Rules counted from another star or from a palace.

use super::hour::{wen_chang_sector, wen_qu_sector};
use super::month::{you_bi_sector, zuo_fu_sector};
use super::{Bucket, Placement, RuleInputs, RuleSet};
use crate::star::StarName;

pub(super) fn tian_cai_shou(i: &RuleInputs, _: &RuleSet) -> Vec<Placement> {
    vec![
        Placement::new(StarName::TianCai, Bucket::Minor, i.life as i32 + i.yb()),
        Placement::new(StarName::TianShou, Bucket::Minor, i.body as i32 + i.yb()),
    ]
}

/// San Tai from Zuo Fu forward by day; Ba Zuo from You Bi backward by day.
pub(super) fn san_tai_ba_zuo(i: &RuleInputs, _: &RuleSet) -> Vec<Placement> {
    let zuo = zuo_fu_sector(i.month) as i32;
    let you = you_bi_sector(i.month) as i32;
    vec![
        Placement::new(StarName::SanTai, Bucket::Minor, zuo + i.d() - 1),
        Placement::new(StarName::BaZuo, Bucket::Minor, you - (i.d() - 1)),
    ]
}

/// En Guang and Tian Gui: one step short of counting the day from Chang/Qu.
pub(super) fn en_guang_tian_gui(i: &RuleInputs, _: &RuleSet) -> Vec<Placement> {
    let chang = wen_chang_sector(i.hour) as i32;
    let qu = wen_qu_sector(i.hour) as i32;
    vec![
        Placement::new(StarName::EnGuang, Bucket::Minor, chang + i.d() - 2),
        Placement::new(StarName::TianGui, Bucket::Minor, qu + i.d() - 2),
    ]
}

/// Tian Shang sits in Friends, Tian Shi in Health.
pub(super) fn tian_shang_shi(i: &RuleInputs, _: &RuleSet) -> Vec<Placement> {
    vec![
        Placement::new(StarName::TianShang, Bucket::Minor, i.life as i32 - 7),
        Placement::new(StarName::TianShi, Bucket::Minor, i.life as i32 - 5),
    ]
}
