//! Auxiliary and minor star placement.
//!
//! Every rule is a pure function of the birth scalars (`RuleInputs`) and the
//! variant strategies chosen once per chart (`RuleSet`). Rules do not read
//! each other's output; where a star is counted from another star's sector
//! the rule calls the shared position helper directly.

mod branch;
mod derived;
mod hour;
mod month;
mod stem;

pub use branch::{hong_xi_sectors, huo_ling_sectors, tian_ma_sector};
pub use hour::{NON_GRAVE_SEQ, flow_chang_qu_sectors};
pub use stem::{kui_yue_sectors, lu_cun_sector};

use serde::{Deserialize, Serialize};
use ziwei_config::{HorseBasis, PlacementSettings, VoidBasis, VoidMode};
use ziwei_lunar::{Branch, Stem};

use crate::star::StarName;
use crate::util::fix12;

/// Which list of a palace a star is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bucket {
    Major,
    Auxiliary,
    Inauspicious,
    Minor,
}

/// One star deposited in one sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub star: StarName,
    pub bucket: Bucket,
    pub sector: u8,
}

impl Placement {
    pub const fn new(star: StarName, bucket: Bucket, sector: i32) -> Self {
        Self {
            star,
            bucket,
            sector: fix12(sector),
        }
    }
}

/// Birth scalars read by the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleInputs {
    pub year_stem: Stem,
    pub year_branch: Branch,
    /// Effective lunar month 1..=12.
    pub month: u8,
    /// Lunar day 1..=30.
    pub day: u8,
    pub hour: u8,
    pub life: u8,
    pub body: u8,
}

impl RuleInputs {
    pub(crate) const fn yb(&self) -> i32 {
        self.year_branch.index() as i32
    }

    pub(crate) const fn m(&self) -> i32 {
        self.month as i32 - 1
    }

    pub(crate) const fn h(&self) -> i32 {
        self.hour as i32
    }

    pub(crate) const fn d(&self) -> i32 {
        self.day as i32
    }
}

/// Tian Kui / Tian Yue sectors for a stem.
pub type KuiYueFn = fn(Stem) -> (u8, u8);
/// Branch the horse is looked up by.
pub type HorseFn = fn(&RuleInputs) -> Branch;
/// Sector of Tian Kong.
pub type TianKongFn = fn(&RuleInputs) -> u8;

/// Variant strategies, selected once from the placement settings.
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    pub kui_yue: KuiYueFn,
    pub horse: HorseFn,
    pub tian_kong: TianKongFn,
    pub dual_void: bool,
}

impl RuleSet {
    pub fn new(settings: &PlacementSettings) -> Self {
        let horse: HorseFn = match settings.horse_basis {
            HorseBasis::Year => |i: &RuleInputs| i.year_branch,
            // month 1 is the Yin month
            HorseBasis::Month => |i: &RuleInputs| Branch::from_index(i.month as i32 + 1),
        };
        let tian_kong: TianKongFn = match settings.void_basis {
            VoidBasis::Year => |i: &RuleInputs| fix12(i.yb() + 1),
            VoidBasis::Seq => |i: &RuleInputs| fix12(i.yb() + 1 + i.h()),
        };
        Self {
            kui_yue: stem::kui_yue_scheme(settings.nobility),
            horse,
            tian_kong,
            dual_void: settings.void_mode == VoidMode::Dual,
        }
    }
}

/// A named placement rule.
#[derive(Debug, Clone, Copy)]
pub struct AuxiliaryRule {
    pub name: &'static str,
    pub place: fn(&RuleInputs, &RuleSet) -> Vec<Placement>,
}

/// Every birth-chart auxiliary and minor rule.
pub const AUXILIARY_RULES: &[AuxiliaryRule] = &[
    AuxiliaryRule { name: "lu_cun", place: stem::lu_cun },
    AuxiliaryRule { name: "kui_yue", place: stem::kui_yue },
    AuxiliaryRule { name: "tian_ma", place: branch::tian_ma },
    AuxiliaryRule { name: "wen_chang_qu", place: hour::wen_chang_qu },
    AuxiliaryRule { name: "zuo_you", place: month::zuo_you },
    AuxiliaryRule { name: "huo_ling", place: branch::huo_ling },
    AuxiliaryRule { name: "di_kong_jie", place: hour::di_kong_jie },
    AuxiliaryRule { name: "tian_kong", place: branch::tian_kong },
    AuxiliaryRule { name: "xun_kong", place: branch::xun_kong },
    AuxiliaryRule { name: "jie_kong", place: stem::jie_kong },
    AuxiliaryRule { name: "tai_fu_feng_gao", place: hour::tai_fu_feng_gao },
    AuxiliaryRule { name: "tian_xing_yao", place: month::tian_xing_yao },
    AuxiliaryRule { name: "jie_shen", place: month::jie_shen },
    AuxiliaryRule { name: "nian_jie", place: branch::nian_jie },
    AuxiliaryRule { name: "tian_wu", place: month::tian_wu },
    AuxiliaryRule { name: "tian_yue_month", place: month::tian_yue_month },
    AuxiliaryRule { name: "yin_sha", place: month::yin_sha },
    AuxiliaryRule { name: "tian_guan_fu", place: stem::tian_guan_fu },
    AuxiliaryRule { name: "tian_ku_xu", place: branch::tian_ku_xu },
    AuxiliaryRule { name: "long_feng", place: branch::long_feng },
    AuxiliaryRule { name: "hong_xi", place: branch::hong_xi },
    AuxiliaryRule { name: "gu_gua", place: branch::gu_gua },
    AuxiliaryRule { name: "fei_lian", place: branch::fei_lian },
    AuxiliaryRule { name: "po_sui", place: branch::po_sui },
    AuxiliaryRule { name: "hua_gai", place: branch::hua_gai },
    AuxiliaryRule { name: "xian_chi", place: branch::xian_chi },
    AuxiliaryRule { name: "tian_de", place: branch::tian_de },
    AuxiliaryRule { name: "tian_cai_shou", place: derived::tian_cai_shou },
    AuxiliaryRule { name: "san_tai_ba_zuo", place: derived::san_tai_ba_zuo },
    AuxiliaryRule { name: "en_guang_tian_gui", place: derived::en_guang_tian_gui },
    AuxiliaryRule { name: "tian_chu", place: stem::tian_chu },
    AuxiliaryRule { name: "tian_shang_shi", place: derived::tian_shang_shi },
    AuxiliaryRule { name: "da_hao", place: branch::da_hao },
    AuxiliaryRule { name: "jie_sha", place: branch::jie_sha },
];

/// Run every rule in registry order.
pub fn place_auxiliary_stars(inputs: &RuleInputs, rules: &RuleSet) -> Vec<Placement> {
    AUXILIARY_RULES
        .iter()
        .flat_map(|rule| (rule.place)(inputs, rules))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn rule_names_unique() {
        let mut names: Vec<_> = AUXILIARY_RULES.iter().map(|r| r.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), AUXILIARY_RULES.len());
    }

    #[test]
    fn every_non_major_star_placed() {
        let placed = place_auxiliary_stars(&geng_chen_inputs(), &default_rules());
        for star in crate::star::ALL_STAR_NAMES {
            if star.kind() == crate::star::StarKind::Major {
                continue;
            }
            assert!(
                !sector_of(&placed, star).is_empty(),
                "{star} was not placed"
            );
        }
    }

    #[test]
    fn month_horse_uses_month_branch() {
        let settings = PlacementSettings {
            horse_basis: HorseBasis::Month,
            ..PlacementSettings::default()
        };
        let rules = RuleSet::new(&settings);
        // first month = Yin branch → Shen
        assert_eq!((rules.horse)(&geng_chen_inputs()), Branch::Yin);
        let placed = place_auxiliary_stars(&geng_chen_inputs(), &rules);
        assert_eq!(sector_of(&placed, StarName::TianMa), vec![8]);
    }

    #[test]
    fn seq_tian_kong_adds_hour() {
        let settings = PlacementSettings {
            void_basis: VoidBasis::Seq,
            ..PlacementSettings::default()
        };
        let rules = RuleSet::new(&settings);
        let mut inputs = geng_chen_inputs();
        inputs.hour = 3;
        assert_eq!((rules.tian_kong)(&inputs), 8);
        assert_eq!((default_rules().tian_kong)(&inputs), 5);
    }

    #[test]
    fn placements_always_on_ring() {
        let rules = default_rules();
        for ys in 0..10 {
            for yb in (ys % 2..12).step_by(2) {
                for month in [1u8, 6, 12] {
                    for hour in [0u8, 5, 11] {
                        let inputs = RuleInputs {
                            year_stem: Stem::from_index(ys),
                            year_branch: Branch::from_index(yb),
                            month,
                            day: 30,
                            hour,
                            life: crate::ring::life_sector(month, hour),
                            body: crate::ring::body_sector(month, hour),
                        };
                        for p in place_auxiliary_stars(&inputs, &rules) {
                            assert!(p.sector < 12);
                        }
                    }
                }
            }
        }
    }
}
