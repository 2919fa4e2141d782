//! Types for the Mei Hua Yi Shu calculator.

use serde::{Deserialize, Serialize};

use tianji_base::{ElementRelation, WuXing};

use crate::input::QueryMoment;

/// How the cast numbers are obtained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MeihuaCast {
    /// Two positive integers supplied directly.
    Numbers { upper: u64, lower: u64 },
    /// Numbers derived from a date and hour through the lunar calendar.
    Time { moment: QueryMoment },
}

/// Input record for the Meihua calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeihuaInput {
    pub cast: MeihuaCast,
}

/// One derived hexagram with its trigram decomposition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeihuaHexagram {
    pub name: String,
    pub king_wen: u8,
    pub upper: String,
    pub lower: String,
}

/// Ti/Yong roles and their five-element relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TiYongAnalysis {
    /// 体卦 trigram name.
    pub ti: String,
    pub ti_element: WuXing,
    /// 用卦 trigram name.
    pub yong: String,
    pub yong_element: WuXing,
    /// Relation of Ti toward Yong.
    pub relation: ElementRelation,
    /// Natural-language reading of the relation.
    pub summary: String,
}

/// A complete Meihua cast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeihuaResult {
    /// The numbers the trigrams were folded from.
    pub upper_number: u64,
    pub lower_number: u64,
    /// 本卦.
    pub original: MeihuaHexagram,
    /// 互卦.
    pub mutual: MeihuaHexagram,
    /// 变卦.
    pub changed: MeihuaHexagram,
    /// Changing line position 1-6.
    pub moving_line: u8,
    pub ti_yong: TiYongAnalysis,
}

/// Flattened plain-text summary for prompt assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeihuaAnalysisContext {
    pub cast: String,
    pub hexagrams: String,
    pub ti_yong: String,
}

impl MeihuaAnalysisContext {
    /// All summary lines in presentation order.
    pub fn lines(&self) -> Vec<&str> {
        vec![&self.cast, &self.hexagrams, &self.ti_yong]
    }
}
