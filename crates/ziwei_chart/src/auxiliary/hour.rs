//! Rules keyed by the hour slot, plus the flow Chang/Qu sequence.

use ziwei_lunar::Stem;

use super::{Bucket, Placement, RuleInputs, RuleSet};
use crate::star::StarName;
use crate::util::fix12;

/// Branches that are not graves (辰戌丑未 skipped), used by flow Chang/Qu.
pub const NON_GRAVE_SEQ: [u8; 8] = [0, 2, 3, 5, 6, 8, 9, 11];

/// Wen Chang: from Xu backward by hour.
pub(super) const fn wen_chang_sector(hour: u8) -> u8 {
    fix12(10 - hour as i32)
}

/// Wen Qu: from Chen forward by hour.
pub(super) const fn wen_qu_sector(hour: u8) -> u8 {
    fix12(4 + hour as i32)
}

/// Flow Wen Chang (from Si, forward) and Wen Qu (from You, backward) by stem.
pub const fn flow_chang_qu_sectors(stem: Stem) -> (u8, u8) {
    let len = NON_GRAVE_SEQ.len() as i32;
    let s = stem.index() as i32;
    let chang = NON_GRAVE_SEQ[(3 + s).rem_euclid(len) as usize];
    let qu = NON_GRAVE_SEQ[(6 - s).rem_euclid(len) as usize];
    (chang, qu)
}

pub(super) fn wen_chang_qu(i: &RuleInputs, _: &RuleSet) -> Vec<Placement> {
    vec![
        Placement::new(StarName::WenChang, Bucket::Auxiliary, wen_chang_sector(i.hour) as i32),
        Placement::new(StarName::WenQu, Bucket::Auxiliary, wen_qu_sector(i.hour) as i32),
    ]
}

pub(super) fn di_kong_jie(i: &RuleInputs, _: &RuleSet) -> Vec<Placement> {
    vec![
        Placement::new(StarName::DiJie, Bucket::Inauspicious, 11 + i.h()),
        Placement::new(StarName::DiKong, Bucket::Inauspicious, 11 - i.h()),
    ]
}

pub(super) fn tai_fu_feng_gao(i: &RuleInputs, _: &RuleSet) -> Vec<Placement> {
    vec![
        Placement::new(StarName::TaiFu, Bucket::Minor, 6 + i.h()),
        Placement::new(StarName::FengGao, Bucket::Minor, 2 + i.h()),
    ]
}
