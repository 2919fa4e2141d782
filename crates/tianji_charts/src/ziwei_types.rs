//! Types for the Zi Wei Dou Shu calculator.

use serde::{Deserialize, Serialize};

use tianji_base::{Branch, Stem};

use crate::input::{Gender, QueryMoment};

/// Input record for the Zi Wei calculator. An unknown hour is treated
/// as the 子 double-hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZiweiInput {
    pub moment: QueryMoment,
    pub gender: Gender,
}

/// The 14 main stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MainStar {
    ZiWei = 0,
    TianJi = 1,
    TaiYang = 2,
    WuQu = 3,
    TianTong = 4,
    LianZhen = 5,
    TianFu = 6,
    TaiYin = 7,
    TanLang = 8,
    JuMen = 9,
    TianXiang = 10,
    TianLiang = 11,
    QiSha = 12,
    PoJun = 13,
}

/// All 14 main stars.
pub const ALL_MAIN_STARS: [MainStar; 14] = [
    MainStar::ZiWei,
    MainStar::TianJi,
    MainStar::TaiYang,
    MainStar::WuQu,
    MainStar::TianTong,
    MainStar::LianZhen,
    MainStar::TianFu,
    MainStar::TaiYin,
    MainStar::TanLang,
    MainStar::JuMen,
    MainStar::TianXiang,
    MainStar::TianLiang,
    MainStar::QiSha,
    MainStar::PoJun,
];

impl MainStar {
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
        }
    }
}

/// Star brightness levels (庙旺得平陷).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Brightness {
    Miao,
    Wang,
    De,
    Ping,
    Xian,
}

impl Brightness {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Miao => "庙",
            Self::Wang => "旺",
            Self::De => "得",
            Self::Ping => "平",
            Self::Xian => "陷",
        }
    }
}

/// The Four Transformations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SiHua {
    Lu,
    Quan,
    Ke,
    Ji,
}

impl SiHua {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lu => "化禄",
            Self::Quan => "化权",
            Self::Ke => "化科",
            Self::Ji => "化忌",
        }
    }
}

/// The five-element bureau (五行局), each implying a step divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bureau {
    Water2,
    Wood3,
    Metal4,
    Earth5,
    Fire6,
}

impl Bureau {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Water2 => "水二局",
            Self::Wood3 => "木三局",
            Self::Metal4 => "金四局",
            Self::Earth5 => "土五局",
            Self::Fire6 => "火六局",
        }
    }

    /// Numeric divisor (2-6).
    pub const fn divisor(self) -> u8 {
        match self {
            Self::Water2 => 2,
            Self::Wood3 => 3,
            Self::Metal4 => 4,
            Self::Earth5 => 5,
            Self::Fire6 => 6,
        }
    }
}

/// The twelve palace names, walked counterclockwise from 命宫.
pub const PALACE_NAMES: [&str; 12] = [
    "命宫", "兄弟", "夫妻", "子女", "财帛", "疾厄", "迁移", "交友", "官禄", "田宅", "福德", "父母",
];

/// One star as placed in a palace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PalaceStar {
    pub name: String,
    /// True for the 14 main stars, false for auxiliary stars.
    pub main: bool,
    /// Brightness, main stars only.
    pub brightness: Option<Brightness>,
    /// Four-Transformations tag, at most four across the whole chart.
    pub si_hua: Option<SiHua>,
}

/// One of the twelve palaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZiweiPalace {
    pub name: String,
    pub stem: Stem,
    pub branch: Branch,
    pub stars: Vec<PalaceStar>,
    /// True when 身宫 coincides with this palace.
    pub is_shen_gong: bool,
}

/// One decade-luck (大限) span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecadeLuck {
    pub palace_branch: Branch,
    pub start_age: u32,
    pub end_age: u32,
}

/// A complete Zi Wei chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZiweiChart {
    /// Twelve palaces ordered counterclockwise from 命宫.
    pub palaces: Vec<ZiweiPalace>,
    pub bureau: Bureau,
    pub ming_gong_branch: Branch,
    pub shen_gong_branch: Branch,
    /// 命主 star name.
    pub ming_zhu: String,
    /// 身主 star name.
    pub shen_zhu: String,
    pub decade_luck: Vec<DecadeLuck>,
    pub lunar_text: String,
}

/// Flattened plain-text summary for prompt assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZiweiAnalysisContext {
    pub birth: String,
    pub bureau: String,
    pub ming_gong: String,
    pub palaces: Vec<String>,
    pub si_hua: String,
    pub decade_luck: String,
}

impl ZiweiAnalysisContext {
    /// All summary lines in presentation order.
    pub fn lines(&self) -> Vec<&str> {
        let mut out = vec![
            self.birth.as_str(),
            self.bureau.as_str(),
            self.ming_gong.as_str(),
        ];
        out.extend(self.palaces.iter().map(String::as_str));
        out.push(self.si_hua.as_str());
        out.push(self.decade_luck.as_str());
        out
    }
}
