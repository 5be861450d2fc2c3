//! Star catalogue and the value records placed on the ring.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::flow::FlowFrame;

/// Broad category of a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarKind {
    Major,
    Auxiliary,
    /// Inauspicious (煞).
    Malefic,
    /// Auspicious minor star.
    Benefic,
    /// Projected by a flow frame.
    Flow,
}

/// Qualitative strength of a star in a sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Brightness {
    /// 庙
    Miao,
    /// 旺
    Wang,
    /// 得
    De,
    /// 利
    Li,
    /// 平
    Ping,
    /// 不
    Bu,
    /// 陷
    Xian,
}

impl Brightness {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Miao => "庙",
            Self::Wang => "旺",
            Self::De => "得",
            Self::Li => "利",
            Self::Ping => "平",
            Self::Bu => "不",
            Self::Xian => "陷",
        }
    }
}

/// The four transformations (四化).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Transformation {
    /// 化禄
    Wealth,
    /// 化权
    Power,
    /// 化科
    Fame,
    /// 化忌
    Obstruction,
}

/// All four transformations in table order.
pub const ALL_TRANSFORMATIONS: [Transformation; 4] = [
    Transformation::Wealth,
    Transformation::Power,
    Transformation::Fame,
    Transformation::Obstruction,
];

impl Transformation {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wealth => "禄",
            Self::Power => "权",
            Self::Fame => "科",
            Self::Obstruction => "忌",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Wealth => "Wealth",
            Self::Power => "Power",
            Self::Fame => "Fame",
            Self::Obstruction => "Obstruction",
        }
    }
}

/// The fixed star catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StarName {
    // 14 major stars
    ZiWei,
    TianJi,
    TaiYang,
    WuQu,
    TianTong,
    LianZhen,
    TianFu,
    TaiYin,
    TanLang,
    JuMen,
    TianXiang,
    TianLiang,
    QiSha,
    PoJun,
    // auxiliary
    WenChang,
    WenQu,
    ZuoFu,
    YouBi,
    LuCun,
    TianKui,
    TianYue,
    TianMa,
    // inauspicious
    QingYang,
    TuoLuo,
    HuoXing,
    LingXing,
    DiKong,
    DiJie,
    // minor
    TianKong,
    XunKong,
    JieKong,
    TaiFu,
    FengGao,
    TianXing,
    TianYao,
    JieShen,
    NianJie,
    TianWu,
    /// 天月, keyed by birth month. Not the nobility star 天钺.
    TianYueMonth,
    YinSha,
    TianGuan,
    /// 天福, keyed by year stem. Not the major star 天府.
    TianFuBlessing,
    TianKu,
    TianXu,
    LongChi,
    FengGe,
    HongLuan,
    TianXi,
    GuChen,
    GuaSu,
    FeiLian,
    PoSui,
    HuaGai,
    XianChi,
    TianDe,
    TianCai,
    TianShou,
    SanTai,
    BaZuo,
    EnGuang,
    TianGui,
    TianChu,
    TianShang,
    TianShi,
    DaHao,
    JieSha,
}

/// All 66 star names in catalogue order.
pub const ALL_STAR_NAMES: [StarName; 66] = [
    StarName::ZiWei,
    StarName::TianJi,
    StarName::TaiYang,
    StarName::WuQu,
    StarName::TianTong,
    StarName::LianZhen,
    StarName::TianFu,
    StarName::TaiYin,
    StarName::TanLang,
    StarName::JuMen,
    StarName::TianXiang,
    StarName::TianLiang,
    StarName::QiSha,
    StarName::PoJun,
    StarName::WenChang,
    StarName::WenQu,
    StarName::ZuoFu,
    StarName::YouBi,
    StarName::LuCun,
    StarName::TianKui,
    StarName::TianYue,
    StarName::TianMa,
    StarName::QingYang,
    StarName::TuoLuo,
    StarName::HuoXing,
    StarName::LingXing,
    StarName::DiKong,
    StarName::DiJie,
    StarName::TianKong,
    StarName::XunKong,
    StarName::JieKong,
    StarName::TaiFu,
    StarName::FengGao,
    StarName::TianXing,
    StarName::TianYao,
    StarName::JieShen,
    StarName::NianJie,
    StarName::TianWu,
    StarName::TianYueMonth,
    StarName::YinSha,
    StarName::TianGuan,
    StarName::TianFuBlessing,
    StarName::TianKu,
    StarName::TianXu,
    StarName::LongChi,
    StarName::FengGe,
    StarName::HongLuan,
    StarName::TianXi,
    StarName::GuChen,
    StarName::GuaSu,
    StarName::FeiLian,
    StarName::PoSui,
    StarName::HuaGai,
    StarName::XianChi,
    StarName::TianDe,
    StarName::TianCai,
    StarName::TianShou,
    StarName::SanTai,
    StarName::BaZuo,
    StarName::EnGuang,
    StarName::TianGui,
    StarName::TianChu,
    StarName::TianShang,
    StarName::TianShi,
    StarName::DaHao,
    StarName::JieSha,
];

impl StarName {
    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ZiWei => "紫微",
            Self::TianJi => "天机",
            Self::TaiYang => "太阳",
            Self::WuQu => "武曲",
            Self::TianTong => "天同",
            Self::LianZhen => "廉贞",
            Self::TianFu => "天府",
            Self::TaiYin => "太阴",
            Self::TanLang => "贪狼",
            Self::JuMen => "巨门",
            Self::TianXiang => "天相",
            Self::TianLiang => "天梁",
            Self::QiSha => "七杀",
            Self::PoJun => "破军",
            Self::WenChang => "文昌",
            Self::WenQu => "文曲",
            Self::ZuoFu => "左辅",
            Self::YouBi => "右弼",
            Self::LuCun => "禄存",
            Self::TianKui => "天魁",
            Self::TianYue => "天钺",
            Self::TianMa => "天马",
            Self::QingYang => "擎羊",
            Self::TuoLuo => "陀罗",
            Self::HuoXing => "火星",
            Self::LingXing => "铃星",
            Self::DiKong => "地空",
            Self::DiJie => "地劫",
            Self::TianKong => "天空",
            Self::XunKong => "旬空",
            Self::JieKong => "截空",
            Self::TaiFu => "台辅",
            Self::FengGao => "封诰",
            Self::TianXing => "天刑",
            Self::TianYao => "天姚",
            Self::JieShen => "解神",
            Self::NianJie => "年解",
            Self::TianWu => "天巫",
            Self::TianYueMonth => "天月",
            Self::YinSha => "阴煞",
            Self::TianGuan => "天官",
            Self::TianFuBlessing => "天福",
            Self::TianKu => "天哭",
            Self::TianXu => "天虚",
            Self::LongChi => "龙池",
            Self::FengGe => "凤阁",
            Self::HongLuan => "红鸾",
            Self::TianXi => "天喜",
            Self::GuChen => "孤辰",
            Self::GuaSu => "寡宿",
            Self::FeiLian => "蜚廉",
            Self::PoSui => "破碎",
            Self::HuaGai => "华盖",
            Self::XianChi => "咸池",
            Self::TianDe => "天德",
            Self::TianCai => "天才",
            Self::TianShou => "天寿",
            Self::SanTai => "三台",
            Self::BaZuo => "八座",
            Self::EnGuang => "恩光",
            Self::TianGui => "天贵",
            Self::TianChu => "天厨",
            Self::TianShang => "天伤",
            Self::TianShi => "天使",
            Self::DaHao => "大耗",
            Self::JieSha => "劫煞",
        }
    }

    /// Pinyin romanisation.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::ZiWei => "Zi Wei",
            Self::TianJi => "Tian Ji",
            Self::TaiYang => "Tai Yang",
            Self::WuQu => "Wu Qu",
            Self::TianTong => "Tian Tong",
            Self::LianZhen => "Lian Zhen",
            Self::TianFu => "Tian Fu",
            Self::TaiYin => "Tai Yin",
            Self::TanLang => "Tan Lang",
            Self::JuMen => "Ju Men",
            Self::TianXiang => "Tian Xiang",
            Self::TianLiang => "Tian Liang",
            Self::QiSha => "Qi Sha",
            Self::PoJun => "Po Jun",
            Self::WenChang => "Wen Chang",
            Self::WenQu => "Wen Qu",
            Self::ZuoFu => "Zuo Fu",
            Self::YouBi => "You Bi",
            Self::LuCun => "Lu Cun",
            Self::TianKui => "Tian Kui",
            Self::TianYue => "Tian Yue",
            Self::TianMa => "Tian Ma",
            Self::QingYang => "Qing Yang",
            Self::TuoLuo => "Tuo Luo",
            Self::HuoXing => "Huo Xing",
            Self::LingXing => "Ling Xing",
            Self::DiKong => "Di Kong",
            Self::DiJie => "Di Jie",
            Self::TianKong => "Tian Kong",
            Self::XunKong => "Xun Kong",
            Self::JieKong => "Jie Kong",
            Self::TaiFu => "Tai Fu",
            Self::FengGao => "Feng Gao",
            Self::TianXing => "Tian Xing",
            Self::TianYao => "Tian Yao",
            Self::JieShen => "Jie Shen",
            Self::NianJie => "Nian Jie",
            Self::TianWu => "Tian Wu",
            Self::TianYueMonth => "Tian Yue (month)",
            Self::YinSha => "Yin Sha",
            Self::TianGuan => "Tian Guan",
            Self::TianFuBlessing => "Tian Fu (blessing)",
            Self::TianKu => "Tian Ku",
            Self::TianXu => "Tian Xu",
            Self::LongChi => "Long Chi",
            Self::FengGe => "Feng Ge",
            Self::HongLuan => "Hong Luan",
            Self::TianXi => "Tian Xi",
            Self::GuChen => "Gu Chen",
            Self::GuaSu => "Gua Su",
            Self::FeiLian => "Fei Lian",
            Self::PoSui => "Po Sui",
            Self::HuaGai => "Hua Gai",
            Self::XianChi => "Xian Chi",
            Self::TianDe => "Tian De",
            Self::TianCai => "Tian Cai",
            Self::TianShou => "Tian Shou",
            Self::SanTai => "San Tai",
            Self::BaZuo => "Ba Zuo",
            Self::EnGuang => "En Guang",
            Self::TianGui => "Tian Gui",
            Self::TianChu => "Tian Chu",
            Self::TianShang => "Tian Shang",
            Self::TianShi => "Tian Shi",
            Self::DaHao => "Da Hao",
            Self::JieSha => "Jie Sha",
        }
    }

    /// Category of the star when placed at birth.
    pub const fn kind(self) -> StarKind {
        match self {
            Self::ZiWei
            | Self::TianJi
            | Self::TaiYang
            | Self::WuQu
            | Self::TianTong
            | Self::LianZhen
            | Self::TianFu
            | Self::TaiYin
            | Self::TanLang
            | Self::JuMen
            | Self::TianXiang
            | Self::TianLiang
            | Self::QiSha
            | Self::PoJun => StarKind::Major,
            Self::WenChang
            | Self::WenQu
            | Self::ZuoFu
            | Self::YouBi
            | Self::LuCun
            | Self::TianKui
            | Self::TianYue
            | Self::TianMa => StarKind::Auxiliary,
            Self::QingYang
            | Self::TuoLuo
            | Self::HuoXing
            | Self::LingXing
            | Self::DiKong
            | Self::DiJie
            | Self::TianKong
            | Self::XunKong
            | Self::JieKong
            | Self::TianXing
            | Self::TianYao
            | Self::TianYueMonth
            | Self::YinSha
            | Self::TianKu
            | Self::TianXu
            | Self::GuChen
            | Self::GuaSu
            | Self::FeiLian
            | Self::PoSui
            | Self::XianChi
            | Self::TianShang
            | Self::TianShi
            | Self::DaHao
            | Self::JieSha => StarKind::Malefic,
            Self::TaiFu
            | Self::FengGao
            | Self::JieShen
            | Self::NianJie
            | Self::TianWu
            | Self::TianGuan
            | Self::TianFuBlessing
            | Self::LongChi
            | Self::FengGe
            | Self::HongLuan
            | Self::TianXi
            | Self::HuaGai
            | Self::TianDe
            | Self::TianCai
            | Self::TianShou
            | Self::SanTai
            | Self::BaZuo
            | Self::EnGuang
            | Self::TianGui
            | Self::TianChu => StarKind::Benefic,
        }
    }

    /// 0-based catalogue index.
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl StarName {
    /// Single-glyph tag used for flow stars (`禄`, `羊`, `魁` ...).
    pub const fn flow_glyph(self) -> Option<&'static str> {
        match self {
            Self::LuCun => Some("禄"),
            Self::QingYang => Some("羊"),
            Self::TuoLuo => Some("陀"),
            Self::TianKui => Some("魁"),
            Self::TianYue => Some("钺"),
            Self::WenChang => Some("昌"),
            Self::WenQu => Some("曲"),
            Self::TianMa => Some("马"),
            Self::HongLuan => Some("鸾"),
            Self::TianXi => Some("喜"),
            Self::HuoXing => Some("火"),
            Self::LingXing => Some("铃"),
            _ => None,
        }
    }
}

impl fmt::Display for StarName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A star placed in a sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Star {
    pub name: StarName,
    pub kind: StarKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<Brightness>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transformation: Option<Transformation>,
    /// Originating frame, flow stars only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame: Option<FlowFrame>,
}

impl Star {
    /// A birth-chart star with the catalogue kind.
    pub const fn new(name: StarName) -> Self {
        Self {
            name,
            kind: name.kind(),
            brightness: None,
            transformation: None,
            frame: None,
        }
    }

    /// A star projected by a flow frame.
    pub const fn flow(name: StarName, frame: FlowFrame) -> Self {
        Self {
            name,
            kind: StarKind::Flow,
            brightness: None,
            transformation: None,
            frame: Some(frame),
        }
    }

    /// Display label: `紫微庙禄` for birth stars, `年禄` for flow stars.
    pub fn label(&self) -> String {
        if let Some(frame) = self.frame {
            let glyph = self.name.flow_glyph().unwrap_or(self.name.name());
            return format!("{}{}", frame.prefix(), glyph);
        }
        let mut s = self.name.name().to_string();
        if let Some(b) = self.brightness {
            s.push_str(b.name());
        }
        if let Some(t) = self.transformation {
            s.push_str(t.name());
        }
        s
    }
}
