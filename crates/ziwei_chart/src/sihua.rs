//! Four transformations (四化) by stem.

use serde::Serialize;
use ziwei_config::{GengSiHua, GuiSiHua, RenSiHua, SiHuaSettings, WuSiHua};
use ziwei_lunar::Stem;

use crate::star::{ALL_TRANSFORMATIONS, StarName, Transformation};

/// Stars receiving Wealth, Power, Fame and Obstruction, in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SiHua {
    pub stars: [StarName; 4],
}

impl SiHua {
    /// Resolve the table row for `stem` under the configured variants.
    pub const fn resolve(stem: Stem, settings: &SiHuaSettings) -> Self {
        use StarName::*;
        let stars = match stem {
            Stem::Jia => [LianZhen, PoJun, WuQu, TaiYang],
            Stem::Yi => [TianJi, TianLiang, ZiWei, TaiYin],
            Stem::Bing => [TianTong, TianJi, WenChang, LianZhen],
            Stem::Ding => [TaiYin, TianTong, TianJi, JuMen],
            Stem::Wu => match settings.wu {
                WuSiHua::TanYinYouJi => [TanLang, TaiYin, YouBi, TianJi],
                WuSiHua::TanYinYangJi => [TanLang, TaiYin, TaiYang, TianJi],
            },
            Stem::Ji => [WuQu, TanLang, TianLiang, WenQu],
            Stem::Geng => match settings.geng {
                GengSiHua::YangWuYinTong => [TaiYang, WuQu, TaiYin, TianTong],
                GengSiHua::YangWuTongYin => [TaiYang, WuQu, TianTong, TaiYin],
                GengSiHua::YangWuFuTong => [TaiYang, WuQu, TianFu, TianTong],
                GengSiHua::YangWuFuXiang => [TaiYang, WuQu, TianFu, TianXiang],
                GengSiHua::YangWuTongXiang => [TaiYang, WuQu, TianTong, TianXiang],
            },
            Stem::Xin => [JuMen, TaiYang, WenQu, WenChang],
            Stem::Ren => match settings.ren {
                RenSiHua::LiangZiZuoWu => [TianLiang, ZiWei, ZuoFu, WuQu],
                RenSiHua::LiangZiFuWu => [TianLiang, ZiWei, TianFu, WuQu],
                RenSiHua::LiangZiXiangWu => [TianLiang, ZiWei, TianXiang, WuQu],
            },
            Stem::Gui => match settings.gui {
                GuiSiHua::PoJuYinTan => [PoJun, JuMen, TaiYin, TanLang],
                GuiSiHua::PoJuYangTan => [PoJun, JuMen, TaiYang, TanLang],
            },
        };
        Self { stars }
    }

    /// Transformation carried by `star`, if any.
    pub fn of(&self, star: StarName) -> Option<Transformation> {
        self.iter().find(|&(s, _)| s == star).map(|(_, t)| t)
    }

    /// Star receiving transformation `t`.
    pub const fn star(&self, t: Transformation) -> StarName {
        self.stars[t as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (StarName, Transformation)> + '_ {
        self.stars.iter().copied().zip(ALL_TRANSFORMATIONS)
    }
}
