//! Types for the BaZi (Four Pillars) calculator.

use serde::{Deserialize, Serialize};

use tianji_base::{Branch, Stem, StemBranch, WuXing};

use crate::input::{Gender, QueryMoment};

/// Input record for the BaZi calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaziInput {
    pub moment: QueryMoment,
    pub gender: Gender,
}

/// The ten classifications of a stem's relation to the day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TenGod {
    BiJian = 0,
    JieCai = 1,
    ShiShen = 2,
    ShangGuan = 3,
    PianCai = 4,
    ZhengCai = 5,
    QiSha = 6,
    ZhengGuan = 7,
    PianYin = 8,
    ZhengYin = 9,
}

impl TenGod {
    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BiJian => "比肩",
            Self::JieCai => "劫财",
            Self::ShiShen => "食神",
            Self::ShangGuan => "伤官",
            Self::PianCai => "偏财",
            Self::ZhengCai => "正财",
            Self::QiSha => "七杀",
            Self::ZhengGuan => "正官",
            Self::PianYin => "偏印",
            Self::ZhengYin => "正印",
        }
    }

    /// Classify `other` against the day master through the
    /// generating/controlling cycle and polarity comparison.
    pub fn classify(day_master: Stem, other: Stem) -> Self {
        let same_polarity = day_master.is_yang() == other.is_yang();
        use tianji_base::ElementRelation::*;
        match day_master.element().relation_to(other.element()) {
            Same => {
                if same_polarity {
                    Self::BiJian
                } else {
                    Self::JieCai
                }
            }
            Generates => {
                if same_polarity {
                    Self::ShiShen
                } else {
                    Self::ShangGuan
                }
            }
            Controls => {
                if same_polarity {
                    Self::PianCai
                } else {
                    Self::ZhengCai
                }
            }
            ControlledBy => {
                if same_polarity {
                    Self::QiSha
                } else {
                    Self::ZhengGuan
                }
            }
            GeneratedBy => {
                if same_polarity {
                    Self::PianYin
                } else {
                    Self::ZhengYin
                }
            }
        }
    }
}

/// The twelve life-cycle stages (十二长生).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum LifeStage {
    ChangSheng = 0,
    MuYu = 1,
    GuanDai = 2,
    LinGuan = 3,
    DiWang = 4,
    Shuai = 5,
    Bing = 6,
    Si = 7,
    Mu = 8,
    Jue = 9,
    Tai = 10,
    Yang = 11,
}

impl LifeStage {
    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ChangSheng => "长生",
            Self::MuYu => "沐浴",
            Self::GuanDai => "冠带",
            Self::LinGuan => "临官",
            Self::DiWang => "帝旺",
            Self::Shuai => "衰",
            Self::Bing => "病",
            Self::Si => "死",
            Self::Mu => "墓",
            Self::Jue => "绝",
            Self::Tai => "胎",
            Self::Yang => "养",
        }
    }
}

/// One pillar with its derived attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pillar {
    pub stem_branch: StemBranch,
    pub stem_element: WuXing,
    pub stem_yang: bool,
    pub branch_element: WuXing,
    /// Hidden stems of the branch, primary qi first.
    pub hidden_stems: Vec<Stem>,
    pub nayin: String,
    /// Life-cycle stage of the branch relative to the day master.
    pub dishi: LifeStage,
    /// Head of the enclosing sexagenary decade.
    pub xun: String,
    /// The decade's two void branches.
    pub xun_kong: [Branch; 2],
}

/// Ten-God labels for one pillar: the stem's label (absent on the day
/// pillar, which is the 日主 itself) and one label per hidden stem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PillarGods {
    pub stem_god: Option<TenGod>,
    pub hidden_gods: Vec<HiddenGod>,
}

/// A hidden stem with its Ten-God label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HiddenGod {
    pub stem: Stem,
    pub god: TenGod,
}

/// Count of each element over stems, branches, and hidden stems.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiveElementCount {
    pub wood: u32,
    pub fire: u32,
    pub earth: u32,
    pub metal: u32,
    pub water: u32,
}

impl FiveElementCount {
    pub fn add(&mut self, element: WuXing) {
        match element {
            WuXing::Wood => self.wood += 1,
            WuXing::Fire => self.fire += 1,
            WuXing::Earth => self.earth += 1,
            WuXing::Metal => self.metal += 1,
            WuXing::Water => self.water += 1,
        }
    }

    pub const fn get(&self, element: WuXing) -> u32 {
        match element {
            WuXing::Wood => self.wood,
            WuXing::Fire => self.fire,
            WuXing::Earth => self.earth,
            WuXing::Metal => self.metal,
            WuXing::Water => self.water,
        }
    }

    pub const fn total(&self) -> u32 {
        self.wood + self.fire + self.earth + self.metal + self.water
    }
}

/// The four derived palaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PalaceKind {
    MingGong,
    ShenGong,
    TaiYuan,
    TaiXi,
}

impl PalaceKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::MingGong => "命宫",
            Self::ShenGong => "身宫",
            Self::TaiYuan => "胎元",
            Self::TaiXi => "胎息",
        }
    }
}

/// A derived palace: a stem-branch with its NaYin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palace {
    pub kind: PalaceKind,
    pub stem_branch: StemBranch,
    pub nayin: String,
}

/// A named auspicious or inauspicious star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShenSha {
    pub name: String,
    /// True for 吉神, false for 凶煞.
    pub auspicious: bool,
}

/// One ten-year fortune cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaYunCycle {
    pub stem_branch: StemBranch,
    pub start_age: u32,
    pub end_age: u32,
    pub start_year: i32,
    pub end_year: i32,
}

/// One annual fortune entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiuNianFortune {
    pub year: i32,
    /// Nominal age (虚岁), starting at 1 in the birth year.
    pub age: u32,
    pub stem_branch: StemBranch,
    pub nayin: String,
}

/// Fortune cycles: starting age, walking direction, decade cycles, and
/// the parallel annual sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YunInfo {
    pub start_age: u32,
    pub forward: bool,
    pub cycles: Vec<DaYunCycle>,
    pub annual: Vec<LiuNianFortune>,
}

/// The four pillars; the hour pillar is absent when the hour is unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Option<Pillar>,
}

/// Ten-God labels for all four pillars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FourPillarGods {
    pub year: PillarGods,
    pub month: PillarGods,
    pub day: PillarGods,
    pub hour: Option<PillarGods>,
}

/// A complete BaZi chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaziChart {
    pub pillars: FourPillars,
    pub day_master: Stem,
    pub gods: FourPillarGods,
    pub five_elements: FiveElementCount,
    /// Needs the birth hour; absent otherwise.
    pub ming_gong: Option<Palace>,
    /// Needs the birth hour; absent otherwise.
    pub shen_gong: Option<Palace>,
    pub tai_yuan: Palace,
    pub tai_xi: Palace,
    pub shen_sha: Vec<ShenSha>,
    /// Overall pattern name (命格).
    pub ming_ge: String,
    /// True when the day master counts as strong (身强).
    pub day_master_strong: bool,
    pub yun: YunInfo,
    /// Lunisolar rendering of the birth date.
    pub lunar_text: String,
}

/// Flattened plain-text summary for prompt assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaziAnalysisContext {
    pub pillars: String,
    pub day_master: String,
    pub five_elements: String,
    pub shi_shen: String,
    pub palaces: String,
    pub shen_sha: String,
    pub ming_ge: String,
    pub yun: String,
}

impl BaziAnalysisContext {
    /// All summary lines in presentation order.
    pub fn lines(&self) -> Vec<&str> {
        vec![
            &self.pillars,
            &self.day_master,
            &self.five_elements,
            &self.shi_shen,
            &self.palaces,
            &self.shen_sha,
            &self.ming_ge,
            &self.yun,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_god_classification() {
        // day master 癸 (yin water)
        assert_eq!(TenGod::classify(Stem::Gui, Stem::Gui), TenGod::BiJian);
        assert_eq!(TenGod::classify(Stem::Gui, Stem::Ren), TenGod::JieCai);
        assert_eq!(TenGod::classify(Stem::Gui, Stem::Yi), TenGod::ShiShen);
        assert_eq!(TenGod::classify(Stem::Gui, Stem::Jia), TenGod::ShangGuan);
        assert_eq!(TenGod::classify(Stem::Gui, Stem::Ding), TenGod::PianCai);
        assert_eq!(TenGod::classify(Stem::Gui, Stem::Bing), TenGod::ZhengCai);
        assert_eq!(TenGod::classify(Stem::Gui, Stem::Ji), TenGod::QiSha);
        assert_eq!(TenGod::classify(Stem::Gui, Stem::Wu), TenGod::ZhengGuan);
        assert_eq!(TenGod::classify(Stem::Gui, Stem::Xin), TenGod::PianYin);
        assert_eq!(TenGod::classify(Stem::Gui, Stem::Geng), TenGod::ZhengYin);
    }

    #[test]
    fn five_element_count_totals() {
        let mut c = FiveElementCount::default();
        c.add(WuXing::Water);
        c.add(WuXing::Water);
        c.add(WuXing::Fire);
        assert_eq!(c.get(WuXing::Water), 2);
        assert_eq!(c.total(), 3);
    }
}
