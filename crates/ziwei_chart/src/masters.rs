//! Life master (命主), Body master (身主) and the Zi Dou (子斗) sector.

use ziwei_config::MasterStarTable;
use ziwei_lunar::Branch;

use crate::star::StarName;
use crate::util::fix12;

const LIFE_MASTER: [StarName; 12] = [
    StarName::TanLang,
    StarName::JuMen,
    StarName::LuCun,
    StarName::WenQu,
    StarName::LianZhen,
    StarName::WuQu,
    StarName::PoJun,
    StarName::WuQu,
    StarName::LianZhen,
    StarName::WenQu,
    StarName::LuCun,
    StarName::JuMen,
];

const BODY_MASTER: [StarName; 6] = [
    StarName::HuoXing,
    StarName::TianXiang,
    StarName::TianLiang,
    StarName::TianTong,
    StarName::WenChang,
    StarName::TianJi,
];

/// Life master, keyed by the Life palace branch (`Quan`) or the birth year
/// branch (`Zhongzhou`).
pub const fn life_master(table: MasterStarTable, life: Branch, year_branch: Branch) -> StarName {
    let key = match table {
        MasterStarTable::Quan => life,
        MasterStarTable::Zhongzhou => year_branch,
    };
    LIFE_MASTER[key.index() as usize]
}

/// Body master by year branch.
pub const fn body_master(year_branch: Branch) -> StarName {
    BODY_MASTER[(year_branch.index() % 6) as usize]
}

/// Zi Dou: the Dou-Jun of a Zi year, `(0 - (month-1) + hour) mod 12`.
pub const fn zi_dou(month: u8, hour: u8) -> Branch {
    Branch::from_index(fix12(-(month as i32 - 1) + hour as i32) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn life_master_yin_is_lu_cun() {
        assert_eq!(
            life_master(MasterStarTable::Quan, Branch::Yin, Branch::Chen),
            StarName::LuCun
        );
        assert_eq!(
            life_master(MasterStarTable::Zhongzhou, Branch::Yin, Branch::Chen),
            StarName::LianZhen
        );
    }

    #[test]
    fn body_master_repeats_every_six() {
        assert_eq!(body_master(Branch::Zi), StarName::HuoXing);
        assert_eq!(body_master(Branch::Wu), StarName::HuoXing);
        assert_eq!(body_master(Branch::Chen), StarName::WenChang);
        assert_eq!(body_master(Branch::Hai), StarName::TianJi);
    }

    #[test]
    fn zi_dou_first_month_zi_hour() {
        assert_eq!(zi_dou(1, 0), Branch::Zi);
        assert_eq!(zi_dou(3, 0), Branch::Xu);
        assert_eq!(zi_dou(1, 5), Branch::Si);
    }
}
