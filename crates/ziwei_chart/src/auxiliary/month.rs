//! Rules keyed by the lunar month.

use super::{Bucket, Placement, RuleInputs, RuleSet};
use crate::star::StarName;
use crate::util::fix12;

/// Zuo Fu: from Chen forward by month.
pub(super) const fn zuo_fu_sector(month: u8) -> u8 {
    fix12(4 + (month as i32 - 1))
}

/// You Bi: from Xu backward by month.
pub(super) const fn you_bi_sector(month: u8) -> u8 {
    fix12(10 - (month as i32 - 1))
}

pub(super) fn zuo_you(i: &RuleInputs, _: &RuleSet) -> Vec<Placement> {
    vec![
        Placement::new(StarName::ZuoFu, Bucket::Auxiliary, zuo_fu_sector(i.month) as i32),
        Placement::new(StarName::YouBi, Bucket::Auxiliary, you_bi_sector(i.month) as i32),
    ]
}

pub(super) fn tian_xing_yao(i: &RuleInputs, _: &RuleSet) -> Vec<Placement> {
    vec![
        Placement::new(StarName::TianXing, Bucket::Minor, 9 + i.m()),
        Placement::new(StarName::TianYao, Bucket::Minor, 1 + i.m()),
    ]
}

/// Jie Shen moves every two months: Shen, Xu, Zi, Yin, Chen, Wu.
pub(super) fn jie_shen(i: &RuleInputs, _: &RuleSet) -> Vec<Placement> {
    vec![Placement::new(StarName::JieShen, Bucket::Minor, 8 + 2 * (i.m() / 2))]
}

pub(super) fn tian_wu(i: &RuleInputs, _: &RuleSet) -> Vec<Placement> {
    // months 1,5,9 / 2,6,10 / 3,7,11 / 4,8,12
    let sector = match i.m() % 4 {
        0 => 5,
        1 => 8,
        2 => 11,
        _ => 2,
    };
    vec![Placement::new(StarName::TianWu, Bucket::Minor, sector)]
}

pub(super) fn tian_yue_month(i: &RuleInputs, _: &RuleSet) -> Vec<Placement> {
    const BY_MONTH: [i32; 12] = [10, 5, 4, 2, 7, 3, 11, 7, 2, 6, 10, 2];
    let sector = BY_MONTH[fix12(i.m()) as usize];
    vec![Placement::new(StarName::TianYueMonth, Bucket::Minor, sector)]
}

pub(super) fn yin_sha(i: &RuleInputs, _: &RuleSet) -> Vec<Placement> {
    // Yin, Zi, Xu, Shen, Wu, Chen, repeating every six months
    const BY_MONTH: [i32; 6] = [2, 0, 10, 8, 6, 4];
    let sector = BY_MONTH[(fix12(i.m()) % 6) as usize];
    vec![Placement::new(StarName::YinSha, Bucket::Minor, sector)]
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    fn at_month(month: u8) -> RuleInputs {
        RuleInputs {
            month,
            ..geng_chen_inputs()
        }
    }

    #[test]
    fn zuo_you_mirror() {
        assert_eq!(zuo_fu_sector(1), 4);
        assert_eq!(you_bi_sector(1), 10);
        assert_eq!(zuo_fu_sector(12), 3);
        assert_eq!(you_bi_sector(12), 11);
    }

    #[test]
    fn xing_yao_first_month() {
        let placed = tian_xing_yao(&at_month(1), &default_rules());
        assert_eq!(sector_of(&placed, StarName::TianXing), vec![9]);
        assert_eq!(sector_of(&placed, StarName::TianYao), vec![1]);
    }

    #[test]
    fn jie_shen_pairs() {
        let r = default_rules();
        let expected = [8, 8, 10, 10, 0, 0, 2, 2, 4, 4, 6, 6];
        for (m, want) in (1..=12u8).zip(expected) {
            let placed = jie_shen(&at_month(m), &r);
            assert_eq!(sector_of(&placed, StarName::JieShen), vec![want], "month {m}");
        }
    }

    #[test]
    fn tian_wu_cycle() {
        let r = default_rules();
        let expected = [5, 8, 11, 2, 5, 8, 11, 2, 5, 8, 11, 2];
        for (m, want) in (1..=12u8).zip(expected) {
            let placed = tian_wu(&at_month(m), &r);
            assert_eq!(sector_of(&placed, StarName::TianWu), vec![want], "month {m}");
        }
    }

    #[test]
    fn tian_yue_and_yin_sha() {
        let r = default_rules();
        let placed = tian_yue_month(&at_month(5), &r);
        assert_eq!(sector_of(&placed, StarName::TianYueMonth), vec![7]);
        let placed = yin_sha(&at_month(9), &r);
        assert_eq!(sector_of(&placed, StarName::YinSha), vec![10]);
        let placed = yin_sha(&at_month(12), &r);
        assert_eq!(sector_of(&placed, StarName::YinSha), vec![4]);
    }
}
