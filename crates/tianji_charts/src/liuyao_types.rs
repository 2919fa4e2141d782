//! Types for the Liu Yao calculator.

use serde::{Deserialize, Serialize};

use tianji_base::{Branch, Stem, StemBranch, WuXing};

use crate::input::QueryMoment;

/// Input record for the Liu Yao calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiuyaoInput {
    pub moment: QueryMoment,
    /// Six cast values bottom-to-top (6=old yin, 7=young yang,
    /// 8=young yin, 9=old yang). `None` draws a random cast.
    pub lines: Option<Vec<u8>>,
}

/// The Six Relations (六亲) of a line to its palace element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SixRelation {
    XiongDi = 0,
    ZiSun = 1,
    QiCai = 2,
    GuanGui = 3,
    FuMu = 4,
}

/// All five relation categories.
pub const ALL_RELATIONS: [SixRelation; 5] = [
    SixRelation::XiongDi,
    SixRelation::ZiSun,
    SixRelation::QiCai,
    SixRelation::GuanGui,
    SixRelation::FuMu,
];

impl SixRelation {
    pub const fn name(self) -> &'static str {
        match self {
            Self::XiongDi => "兄弟",
            Self::ZiSun => "子孙",
            Self::QiCai => "妻财",
            Self::GuanGui => "官鬼",
            Self::FuMu => "父母",
        }
    }

    /// Classify a line's element against the palace element
    /// (生我者父母, 我生者子孙, 克我者官鬼, 我克者妻财, 比和者兄弟,
    /// 我 being the palace).
    pub fn classify(palace: WuXing, line: WuXing) -> Self {
        use tianji_base::ElementRelation::*;
        match palace.relation_to(line) {
            Same => Self::XiongDi,
            Generates => Self::ZiSun,
            GeneratedBy => Self::FuMu,
            Controls => Self::QiCai,
            ControlledBy => Self::GuanGui,
        }
    }
}

/// The Six Spirits (六神), assigned cyclically from the day stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum SixSpirit {
    QingLong = 0,
    ZhuQue = 1,
    GouChen = 2,
    TengShe = 3,
    BaiHu = 4,
    XuanWu = 5,
}

/// The spirit cycle in order.
pub const SPIRIT_CYCLE: [SixSpirit; 6] = [
    SixSpirit::QingLong,
    SixSpirit::ZhuQue,
    SixSpirit::GouChen,
    SixSpirit::TengShe,
    SixSpirit::BaiHu,
    SixSpirit::XuanWu,
];

impl SixSpirit {
    pub const fn name(self) -> &'static str {
        match self {
            Self::QingLong => "青龙",
            Self::ZhuQue => "朱雀",
            Self::GouChen => "勾陈",
            Self::TengShe => "螣蛇",
            Self::BaiHu => "白虎",
            Self::XuanWu => "玄武",
        }
    }

    /// First-line spirit for a day stem (甲乙起青龙, 丙丁朱雀, 戊勾陈,
    /// 己螣蛇, 庚辛白虎, 壬癸玄武).
    pub const fn first_for_day(day_stem: Stem) -> Self {
        match day_stem {
            Stem::Jia | Stem::Yi => Self::QingLong,
            Stem::Bing | Stem::Ding => Self::ZhuQue,
            Stem::Wu => Self::GouChen,
            Stem::Ji => Self::TengShe,
            Stem::Geng | Stem::Xin => Self::BaiHu,
            Stem::Ren | Stem::Gui => Self::XuanWu,
        }
    }
}

/// The changed side of a moving line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChangedLine {
    pub branch: Branch,
    pub element: WuXing,
    pub relation: SixRelation,
}

/// One line of a cast hexagram, bottom-to-top position 1-6.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiuyaoLine {
    pub position: u8,
    pub cast_value: u8,
    pub yang: bool,
    pub moving: bool,
    pub stem: Stem,
    pub branch: Branch,
    pub element: WuXing,
    pub relation: SixRelation,
    pub spirit: SixSpirit,
    pub shi: bool,
    pub ying: bool,
    /// Present only on moving lines.
    pub changed: Option<ChangedLine>,
}

/// Name, palace, and element of a (possibly changed) hexagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HexagramSummary {
    pub name: String,
    pub king_wen: u8,
    pub palace: String,
    pub palace_element: WuXing,
}

/// A hidden (伏神) god for a relation absent from the visible lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiddenGodEntry {
    pub relation: SixRelation,
    pub stem: Stem,
    pub branch: Branch,
    pub element: WuXing,
    /// Line position of the pure palace hexagram it hides beneath.
    pub position: u8,
}

/// A complete Liu Yao cast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiuyaoResult {
    pub original: HexagramSummary,
    /// Present when at least one line moves.
    pub changed: Option<HexagramSummary>,
    pub lines: Vec<LiuyaoLine>,
    pub moving_positions: Vec<u8>,
    pub hidden_gods: Vec<HiddenGodEntry>,
    pub shi_position: u8,
    pub ying_position: u8,
    pub day_pillar: StemBranch,
    pub month_pillar: StemBranch,
    /// Void branches of the day decade.
    pub xun_kong: [Branch; 2],
}

/// Flattened plain-text summary for prompt assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiuyaoAnalysisContext {
    pub cast: String,
    pub hexagram: String,
    pub lines: Vec<String>,
    pub moving: String,
    pub hidden: String,
}

impl LiuyaoAnalysisContext {
    /// All summary lines in presentation order.
    pub fn lines(&self) -> Vec<&str> {
        let mut out = vec![self.cast.as_str(), self.hexagram.as_str()];
        out.extend(self.lines.iter().map(String::as_str));
        out.push(self.moving.as_str());
        out.push(self.hidden.as_str());
        out
    }
}
