//! Rules keyed by the year stem.

use ziwei_config::NobilityScheme;
use ziwei_lunar::Stem;

use super::{Bucket, KuiYueFn, Placement, RuleInputs, RuleSet};
use crate::star::StarName;

/// Sector of Lu Cun for a stem.
pub const fn lu_cun_sector(stem: Stem) -> u8 {
    match stem {
        Stem::Jia => 2,
        Stem::Yi => 3,
        Stem::Bing | Stem::Wu => 5,
        Stem::Ding | Stem::Ji => 6,
        Stem::Geng => 8,
        Stem::Xin => 9,
        Stem::Ren => 11,
        Stem::Gui => 0,
    }
}

/// Kui/Yue pair shared by every scheme; `None` for Geng and Xin.
const fn kui_yue_common(stem: Stem) -> Option<(u8, u8)> {
    match stem {
        Stem::Jia | Stem::Wu => Some((1, 7)),
        Stem::Yi | Stem::Ji => Some((0, 8)),
        Stem::Bing | Stem::Ding => Some((11, 9)),
        Stem::Ren | Stem::Gui => Some((3, 5)),
        Stem::Geng | Stem::Xin => None,
    }
}

/// Tiger-horse pair: Kui in Wu, Yue in Yin.
const HU_MA: (u8, u8) = (6, 2);
/// Horse-tiger pair: Kui in Yin, Yue in Wu.
const MA_HU: (u8, u8) = (2, 6);
/// Ox-goat pair Geng shares with Jia and Wu.
const NIU_YANG: (u8, u8) = (1, 7);

fn kui_yue_xin_hu_ma(stem: Stem) -> (u8, u8) {
    match stem {
        Stem::Geng => NIU_YANG,
        Stem::Xin => HU_MA,
        _ => kui_yue_common(stem).unwrap_or(NIU_YANG),
    }
}

fn kui_yue_xin_ma_hu(stem: Stem) -> (u8, u8) {
    match stem {
        Stem::Geng => NIU_YANG,
        Stem::Xin => MA_HU,
        _ => kui_yue_common(stem).unwrap_or(NIU_YANG),
    }
}

fn kui_yue_geng_hu_ma(stem: Stem) -> (u8, u8) {
    kui_yue_common(stem).unwrap_or(HU_MA)
}

fn kui_yue_geng_ma_hu(stem: Stem) -> (u8, u8) {
    kui_yue_common(stem).unwrap_or(MA_HU)
}

/// Kui/Yue strategy for a nobility scheme.
pub fn kui_yue_scheme(scheme: NobilityScheme) -> KuiYueFn {
    match scheme {
        NobilityScheme::XinHuMa => kui_yue_xin_hu_ma,
        NobilityScheme::XinMaHu => kui_yue_xin_ma_hu,
        NobilityScheme::GengHuMa => kui_yue_geng_hu_ma,
        NobilityScheme::GengMaHu => kui_yue_geng_ma_hu,
    }
}

/// Tian Kui and Tian Yue sectors for `stem` under the chosen scheme.
pub fn kui_yue_sectors(stem: Stem, rules: &RuleSet) -> (u8, u8) {
    (rules.kui_yue)(stem)
}

pub(super) fn lu_cun(i: &RuleInputs, _: &RuleSet) -> Vec<Placement> {
    let lu = lu_cun_sector(i.year_stem) as i32;
    vec![
        Placement::new(StarName::LuCun, Bucket::Auxiliary, lu),
        Placement::new(StarName::QingYang, Bucket::Inauspicious, lu + 1),
        Placement::new(StarName::TuoLuo, Bucket::Inauspicious, lu - 1),
    ]
}

pub(super) fn kui_yue(i: &RuleInputs, rules: &RuleSet) -> Vec<Placement> {
    let (kui, yue) = kui_yue_sectors(i.year_stem, rules);
    vec![
        Placement::new(StarName::TianKui, Bucket::Auxiliary, kui as i32),
        Placement::new(StarName::TianYue, Bucket::Auxiliary, yue as i32),
    ]
}

/// (main, deputy) Jie Kong sectors by stem.
const fn jie_kong_sectors(stem: Stem) -> (u8, u8) {
    match stem {
        Stem::Jia => (8, 9),
        Stem::Yi => (7, 6),
        Stem::Bing => (4, 5),
        Stem::Ding => (3, 2),
        Stem::Wu => (0, 1),
        Stem::Ji => (9, 8),
        Stem::Geng => (6, 7),
        Stem::Xin => (5, 4),
        Stem::Ren => (2, 3),
        Stem::Gui => (1, 0),
    }
}

pub(super) fn jie_kong(i: &RuleInputs, rules: &RuleSet) -> Vec<Placement> {
    let (main, deputy) = jie_kong_sectors(i.year_stem);
    let mut out = vec![Placement::new(StarName::JieKong, Bucket::Minor, main as i32)];
    if rules.dual_void {
        out.push(Placement::new(StarName::JieKong, Bucket::Minor, deputy as i32));
    }
    out
}

pub(super) fn tian_guan_fu(i: &RuleInputs, _: &RuleSet) -> Vec<Placement> {
    let (guan, fu) = match i.year_stem {
        Stem::Jia => (7, 9),
        Stem::Yi => (4, 8),
        Stem::Bing => (5, 0),
        Stem::Ding => (2, 11),
        Stem::Wu => (3, 3),
        Stem::Ji => (9, 2),
        Stem::Geng => (11, 6),
        Stem::Xin => (9, 5),
        Stem::Ren => (10, 6),
        Stem::Gui => (6, 5),
    };
    vec![
        Placement::new(StarName::TianGuan, Bucket::Minor, guan),
        Placement::new(StarName::TianFuBlessing, Bucket::Minor, fu),
    ]
}

pub(super) fn tian_chu(i: &RuleInputs, _: &RuleSet) -> Vec<Placement> {
    let sector = match i.year_stem {
        Stem::Jia | Stem::Ding => 5,
        Stem::Yi | Stem::Wu | Stem::Xin => 6,
        Stem::Bing => 0,
        Stem::Ji => 8,
        Stem::Geng => 2,
        Stem::Ren => 9,
        Stem::Gui => 11,
    };
    vec![Placement::new(StarName::TianChu, Bucket::Minor, sector)]
}
