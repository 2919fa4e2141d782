//! Types for the Qi Men Dun Jia calculator.

use serde::{Deserialize, Serialize};

use tianji_base::{Branch, Stem, StemBranch, Trigram};

use crate::input::QueryMoment;

/// Input record for the Qi Men calculator. An unknown hour is treated
/// as the 子 double-hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QimenInput {
    pub moment: QueryMoment,
}

/// Yang or Yin escaping regime, set by the solar-term half-year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DunType {
    Yang,
    Yin,
}

impl DunType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "阳遁",
            Self::Yin => "阴遁",
        }
    }
}

/// The Nine Stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NineStar {
    TianPeng = 0,
    TianRui = 1,
    TianChong = 2,
    TianFu = 3,
    TianQin = 4,
    TianXin = 5,
    TianZhu = 6,
    TianRen = 7,
    TianYing = 8,
}

impl NineStar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::TianPeng => "天蓬",
            Self::TianRui => "天芮",
            Self::TianChong => "天冲",
            Self::TianFu => "天辅",
            Self::TianQin => "天禽",
            Self::TianXin => "天心",
            Self::TianZhu => "天柱",
            Self::TianRen => "天任",
            Self::TianYing => "天英",
        }
    }
}

/// The Eight Gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Gate {
    Rest = 0,
    Life = 1,
    Harm = 2,
    Block = 3,
    Scenery = 4,
    Death = 5,
    Fright = 6,
    Open = 7,
}

impl Gate {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rest => "休门",
            Self::Life => "生门",
            Self::Harm => "伤门",
            Self::Block => "杜门",
            Self::Scenery => "景门",
            Self::Death => "死门",
            Self::Fright => "惊门",
            Self::Open => "开门",
        }
    }
}

/// The Eight Deities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Deity {
    ZhiFu = 0,
    TengShe = 1,
    TaiYin = 2,
    LiuHe = 3,
    BaiHu = 4,
    XuanWu = 5,
    JiuDi = 6,
    JiuTian = 7,
}

impl Deity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::ZhiFu => "值符",
            Self::TengShe => "螣蛇",
            Self::TaiYin => "太阴",
            Self::LiuHe => "六合",
            Self::BaiHu => "白虎",
            Self::XuanWu => "玄武",
            Self::JiuDi => "九地",
            Self::JiuTian => "九天",
        }
    }
}

/// One of the nine palaces of the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QimenPalace {
    /// Luoshu palace number 1-9.
    pub number: u8,
    /// The palace trigram; the center palace (5) has none.
    pub trigram: Option<Trigram>,
    /// Compass direction (北, 东南, …); 中 for the center.
    pub direction: String,
    /// Heaven-plate stem; the center palace carries none.
    pub heaven_stem: Option<Stem>,
    /// Earth-plate stem.
    pub earth_stem: Stem,
    pub star: Option<NineStar>,
    pub gate: Option<Gate>,
    pub deity: Option<Deity>,
    /// Detected classical pattern tags (伏吟, 青龙返首, …).
    pub patterns: Vec<String>,
}

/// A complete Qi Men board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QimenBoard {
    /// Nine palaces in Luoshu number order.
    pub palaces: Vec<QimenPalace>,
    pub dun: DunType,
    /// Ju number 1-9.
    pub ju: u8,
    pub solar_term: String,
    /// 上元 / 中元 / 下元.
    pub yuan: String,
    /// The duty star (值符).
    pub zhi_fu: NineStar,
    /// The duty gate (值使).
    pub zhi_shi: Gate,
    /// Decade head of the hour pillar (旬首).
    pub xun_shou: String,
    /// The hidden yi stem of the decade (六仪).
    pub xun_yi: Stem,
    /// Void branches of the hour decade.
    pub xun_kong: [Branch; 2],
    pub day_pillar: StemBranch,
    pub hour_pillar: StemBranch,
}

/// Flattened plain-text summary for prompt assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QimenAnalysisContext {
    pub board: String,
    pub duty: String,
    pub palaces: Vec<String>,
    pub patterns: String,
}

impl QimenAnalysisContext {
    /// All summary lines in presentation order.
    pub fn lines(&self) -> Vec<&str> {
        let mut out = vec![self.board.as_str(), self.duty.as_str()];
        out.extend(self.palaces.iter().map(String::as_str));
        out.push(self.patterns.as_str());
        out
    }
}
