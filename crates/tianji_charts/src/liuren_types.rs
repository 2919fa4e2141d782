//! Types for the Da Liu Ren calculator.

use serde::{Deserialize, Serialize};

use tianji_base::{Branch, ElementRelation, StemBranch};

use crate::input::QueryMoment;

/// Input record for the Da Liu Ren calculator. An unknown hour is
/// treated as the 子 double-hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiurenInput {
    pub moment: QueryMoment,
}

/// The Twelve Generals in walking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TwelveGeneral {
    GuiRen = 0,
    TengShe = 1,
    ZhuQue = 2,
    LiuHe = 3,
    GouChen = 4,
    QingLong = 5,
    TianKong = 6,
    BaiHu = 7,
    TaiChang = 8,
    XuanWu = 9,
    TaiYin = 10,
    TianHou = 11,
}

/// The general walking sequence starting from 贵人.
pub const GENERAL_SEQUENCE: [TwelveGeneral; 12] = [
    TwelveGeneral::GuiRen,
    TwelveGeneral::TengShe,
    TwelveGeneral::ZhuQue,
    TwelveGeneral::LiuHe,
    TwelveGeneral::GouChen,
    TwelveGeneral::QingLong,
    TwelveGeneral::TianKong,
    TwelveGeneral::BaiHu,
    TwelveGeneral::TaiChang,
    TwelveGeneral::XuanWu,
    TwelveGeneral::TaiYin,
    TwelveGeneral::TianHou,
];

impl TwelveGeneral {
    pub const fn name(self) -> &'static str {
        match self {
            Self::GuiRen => "贵人",
            Self::TengShe => "螣蛇",
            Self::ZhuQue => "朱雀",
            Self::LiuHe => "六合",
            Self::GouChen => "勾陈",
            Self::QingLong => "青龙",
            Self::TianKong => "天空",
            Self::BaiHu => "白虎",
            Self::TaiChang => "太常",
            Self::XuanWu => "玄武",
            Self::TaiYin => "太阴",
            Self::TianHou => "天后",
        }
    }
}

/// One of the twelve board positions: a fixed earth branch, the heaven
/// branch rotated above it, and the general riding there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiurenPosition {
    pub earth: Branch,
    pub heaven: Branch,
    pub general: TwelveGeneral,
}

/// One of the Four Lessons: a top/bottom branch pair and the element
/// relation of the top toward the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiurenLesson {
    /// Lesson number 1-4.
    pub index: u8,
    pub top: Branch,
    pub bottom: Branch,
    /// Relation of the top's element toward the bottom's.
    pub relation: ElementRelation,
}

/// The Three Transmissions with the extraction method that selected the
/// initial branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiurenTransmission {
    pub initial: Branch,
    pub middle: Branch,
    pub last: Branch,
    pub initial_general: TwelveGeneral,
    pub middle_general: TwelveGeneral,
    pub last_general: TwelveGeneral,
    /// Classical method name (贼克法, 比用法, 涉害法, 遥克法, 昴星法,
    /// 伏吟, 返吟).
    pub method: String,
}

/// A complete Da Liu Ren board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiurenBoard {
    /// Twelve positions in earth-branch order (子 first).
    pub positions: Vec<LiurenPosition>,
    pub lessons: Vec<LiurenLesson>,
    pub transmission: LiurenTransmission,
    pub month_general: Branch,
    /// Classical month-general name (登明, 河魁, …).
    pub month_general_name: String,
    /// True when the daytime Noble Person was used.
    pub daytime: bool,
    pub day_pillar: StemBranch,
    pub hour_pillar: StemBranch,
    /// Void branches of the day decade.
    pub xun_kong: [Branch; 2],
}

/// Flattened plain-text summary for prompt assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiurenAnalysisContext {
    pub board: String,
    pub lessons: Vec<String>,
    pub transmission: String,
    pub positions: String,
}

impl LiurenAnalysisContext {
    /// All summary lines in presentation order.
    pub fn lines(&self) -> Vec<&str> {
        let mut out = vec![self.board.as_str()];
        out.extend(self.lessons.iter().map(String::as_str));
        out.push(self.transmission.as_str());
        out.push(self.positions.as_str());
        out
    }
}
