//! Golden chart: 2000-02-05, Zi hour, male (lunar 2000 正月初一, 庚辰 year).

use ziwei_chart::{
    BirthInput, Brightness, Bureau, Chart, Gender, GodCycle, PalaceName, StarName,
    Transformation, compute_chart,
};
use ziwei_config::{ChangShengStart, GengSiHua, MasterStarTable, Settings, VoidMode};
use ziwei_lunar::{Branch, Stem, TableLunarConverter};
use ziwei_time::CivilDate;

fn golden_with(settings: &Settings) -> Chart {
    let date = CivilDate::new(2000, 2, 5).unwrap();
    let input = BirthInput::from_slot("golden", date, 0, Gender::Male);
    compute_chart(&TableLunarConverter, &input, settings).unwrap()
}

fn golden() -> Chart {
    golden_with(&Settings::default())
}

// ---------------------------------------------------------------------------
// Ring and bureau
// ---------------------------------------------------------------------------

#[test]
fn ring_anchors() {
    let c = golden();
    assert_eq!(c.month, 1);
    assert_eq!(c.hour_slot, 0);
    assert_eq!(c.life, 2);
    assert_eq!(c.body, 2);
    assert!(c.palaces[2].is_body);
    assert_eq!(c.palaces[2].name, PalaceName::Life);
    assert_eq!(c.palaces[1].name, PalaceName::Siblings);
    assert_eq!(c.palaces[3].name, PalaceName::Parents);
    assert_eq!(c.palace(PalaceName::Travel).index, 8);
}

#[test]
fn palace_stems() {
    let c = golden();
    assert_eq!(c.palaces[2].stem, Stem::Wu);
    assert_eq!(c.palaces[3].stem, Stem::Ji);
    assert_eq!(c.palaces[11].stem, Stem::Ding);
    // Zi and Chou repeat the Yin and Mao stems
    assert_eq!(c.palaces[0].stem, Stem::Wu);
    assert_eq!(c.palaces[1].stem, Stem::Ji);
    assert_eq!(c.life_palace().title(), "戊寅 命宫");
}

#[test]
fn bureau_is_earth_five() {
    let c = golden();
    assert_eq!(c.bureau, Bureau::Earth);
    assert_eq!(c.bureau.to_string(), "土五局");
    assert!(c.yang_year);
    assert!(c.clockwise());
}

// ---------------------------------------------------------------------------
// Stars
// ---------------------------------------------------------------------------

#[test]
fn major_stars() {
    let c = golden();
    let expect = [
        (StarName::ZiWei, 6),
        (StarName::TianJi, 5),
        (StarName::TaiYang, 3),
        (StarName::WuQu, 2),
        (StarName::TianTong, 1),
        (StarName::LianZhen, 10),
        (StarName::TianFu, 10),
        (StarName::TaiYin, 11),
        (StarName::TanLang, 0),
        (StarName::JuMen, 1),
        (StarName::TianXiang, 2),
        (StarName::TianLiang, 3),
        (StarName::QiSha, 4),
        (StarName::PoJun, 8),
    ];
    for (star, sector) in expect {
        assert_eq!(c.sector_of(star), Some(sector), "{star}");
    }
}

#[test]
fn auxiliary_stars() {
    let c = golden();
    let expect = [
        (StarName::LuCun, 8),
        (StarName::QingYang, 9),
        (StarName::TuoLuo, 7),
        (StarName::TianKui, 1),
        (StarName::TianYue, 7),
        (StarName::TianMa, 2),
        (StarName::WenChang, 10),
        (StarName::WenQu, 4),
        (StarName::ZuoFu, 4),
        (StarName::YouBi, 10),
        (StarName::HuoXing, 2),
        (StarName::LingXing, 10),
        (StarName::DiKong, 11),
        (StarName::DiJie, 11),
    ];
    for (star, sector) in expect {
        assert_eq!(c.sector_of(star), Some(sector), "{star}");
    }
}

#[test]
fn geng_si_hua_default() {
    let c = golden();
    let t = |star| {
        c.palaces
            .iter()
            .flat_map(|p| p.stars())
            .find(|s| s.name == star)
            .and_then(|s| s.transformation)
    };
    assert_eq!(t(StarName::TaiYang), Some(Transformation::Wealth));
    assert_eq!(t(StarName::WuQu), Some(Transformation::Power));
    assert_eq!(t(StarName::TaiYin), Some(Transformation::Fame));
    assert_eq!(t(StarName::TianTong), Some(Transformation::Obstruction));
    assert_eq!(t(StarName::ZiWei), None);
}

#[test]
fn geng_si_hua_variant() {
    let settings = Settings {
        si_hua: ziwei_config::SiHuaSettings {
            geng: GengSiHua::YangWuFuXiang,
            ..Default::default()
        },
        ..Settings::default()
    };
    let c = golden_with(&settings);
    let fu = c.palaces[10].find(StarName::TianFu).unwrap();
    assert_eq!(fu.transformation, Some(Transformation::Fame));
    let xiang = c.palaces[2].find(StarName::TianXiang).unwrap();
    assert_eq!(xiang.transformation, Some(Transformation::Obstruction));
    assert_eq!(c.palaces[11].find(StarName::TaiYin).unwrap().transformation, None);
}

#[test]
fn geng_si_hua_tong_yin_swaps_fame_and_obstruction() {
    let settings = Settings {
        si_hua: ziwei_config::SiHuaSettings {
            geng: GengSiHua::YangWuTongYin,
            ..Default::default()
        },
        ..Settings::default()
    };
    let c = golden_with(&settings);
    let t = |star| {
        c.palaces
            .iter()
            .flat_map(|p| p.stars())
            .find(|s| s.name == star)
            .and_then(|s| s.transformation)
    };
    assert_eq!(t(StarName::TaiYang), Some(Transformation::Wealth));
    assert_eq!(t(StarName::WuQu), Some(Transformation::Power));
    assert_eq!(t(StarName::TianTong), Some(Transformation::Fame));
    assert_eq!(t(StarName::TaiYin), Some(Transformation::Obstruction));
}

#[test]
fn zi_wei_in_wu_is_miao() {
    let c = golden();
    let zw = c.palaces[6].find(StarName::ZiWei).unwrap();
    assert_eq!(zw.brightness, Some(Brightness::Miao));
    assert!(zw.label().starts_with("紫微庙"));
}

#[test]
fn single_void_mode_drops_jie_kong_deputy() {
    let dual = golden();
    let single = golden_with(&Settings {
        placement: ziwei_config::PlacementSettings {
            void_mode: VoidMode::Single,
            ..Default::default()
        },
        ..Settings::default()
    });
    assert_eq!(dual.sectors_of(StarName::JieKong), vec![6, 7]);
    assert_eq!(single.sectors_of(StarName::JieKong), vec![6]);
    // Xun Kong keeps both voids in either mode
    assert_eq!(single.sectors_of(StarName::XunKong), vec![8, 9]);
}

// ---------------------------------------------------------------------------
// Gods, limits, masters
// ---------------------------------------------------------------------------

#[test]
fn god_cycles() {
    let c = golden();
    assert_eq!(c.palaces[8].god(GodCycle::ChangSheng).unwrap().name(), "长生");
    assert_eq!(c.palaces[9].god(GodCycle::ChangSheng).unwrap().name(), "沐浴");
    assert_eq!(c.palaces[4].god(GodCycle::SuiJian).unwrap().name(), "太岁");
    assert_eq!(c.palaces[8].god(GodCycle::BoShi).unwrap().name(), "博士");
    assert_eq!(c.palaces[0].god(GodCycle::JiangQian).unwrap().name(), "将星");
}

#[test]
fn fire_earth_chang_sheng() {
    let c = golden_with(&Settings {
        placement: ziwei_config::PlacementSettings {
            chang_sheng: ChangShengStart::FireEarth,
            ..Default::default()
        },
        ..Settings::default()
    });
    assert_eq!(c.palaces[2].god(GodCycle::ChangSheng).unwrap().name(), "长生");
}

#[test]
fn decade_limits() {
    let c = golden();
    assert_eq!(c.palaces[2].decade, (5, 14));
    assert_eq!(c.palaces[3].decade, (15, 24));
    assert_eq!(c.palaces[1].decade, (115, 124));
    assert_eq!(c.max_age(), 124);
    assert_eq!(c.decade_palace(30).map(|p| p.index), Some(4));
    assert!(c.decade_palace(3).is_none());
}

#[test]
fn small_limits() {
    let c = golden();
    assert_eq!(c.palaces[10].small_limits[..3], [1, 13, 25]);
    assert_eq!(c.palaces[11].small_limits[0], 2);
}

#[test]
fn masters_and_zi_dou() {
    let c = golden();
    assert_eq!(c.life_master, StarName::LuCun);
    assert_eq!(c.body_master, StarName::WenChang);
    assert_eq!(c.zi_dou, Branch::Zi);

    let zz = golden_with(&Settings {
        placement: ziwei_config::PlacementSettings {
            master_star: MasterStarTable::Zhongzhou,
            ..Default::default()
        },
        ..Settings::default()
    });
    assert_eq!(zz.life_master, StarName::LianZhen);
}

// ---------------------------------------------------------------------------
// Labels and serialization
// ---------------------------------------------------------------------------

#[test]
fn labels() {
    let c = golden();
    assert_eq!(c.labels.solar, "阳历 2000年2月5日 00:00");
    assert_eq!(c.labels.lunar, "农历 2000年 正月 初一 壬子时");
    assert_eq!(c.labels.pillars, "庚辰 戊寅 癸巳 壬子");
    assert!(c.labels.true_solar.is_none());
}

#[test]
fn serializes_to_json() {
    let c = golden();
    let v = serde_json::to_value(&c).unwrap();
    assert_eq!(v["palaces"].as_array().unwrap().len(), 12);
    assert_eq!(v["bureau"], "Earth");
    assert_eq!(v["gender"], "male");
}

#[test]
fn out_of_range_date_fails() {
    let date = CivilDate::new(1899, 6, 1).unwrap();
    let input = BirthInput::from_slot("x", date, 3, Gender::Female);
    assert!(compute_chart(&TableLunarConverter, &input, &Settings::default()).is_err());
}
