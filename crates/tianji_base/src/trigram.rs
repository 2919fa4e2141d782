//! The eight trigrams (八卦) in the early-heaven (先天) number order
//! used by Mei Hua casting: 乾1 兑2 离3 震4 巽5 坎6 艮7 坤8.

use serde::{Deserialize, Serialize};

use crate::wuxing::WuXing;

/// The eight trigrams, early-heaven order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Trigram {
    Qian = 0,
    Dui = 1,
    Li = 2,
    Zhen = 3,
    Xun = 4,
    Kan = 5,
    Gen = 6,
    Kun = 7,
}

/// All eight trigrams in early-heaven order.
pub const ALL_TRIGRAMS: [Trigram; 8] = [
    Trigram::Qian,
    Trigram::Dui,
    Trigram::Li,
    Trigram::Zhen,
    Trigram::Xun,
    Trigram::Kan,
    Trigram::Gen,
    Trigram::Kun,
];

impl Trigram {
    /// Create from raw u8 value (early-heaven index 0-7).
    pub fn from_u8(v: u8) -> Option<Self> {
        if (v as usize) < ALL_TRIGRAMS.len() {
            Some(ALL_TRIGRAMS[v as usize])
        } else {
            None
        }
    }

    /// Create from an early-heaven number 1-8 (乾=1 … 坤=8).
    pub fn from_number(n: u8) -> Option<Self> {
        if (1..=8).contains(&n) {
            Self::from_u8(n - 1)
        } else {
            None
        }
    }

    /// Early-heaven number 1-8.
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Qian => "乾",
            Self::Dui => "兑",
            Self::Li => "离",
            Self::Zhen => "震",
            Self::Xun => "巽",
            Self::Kan => "坎",
            Self::Gen => "艮",
            Self::Kun => "坤",
        }
    }

    /// Nature image used in hexagram names (天泽火雷风水山地).
    pub const fn image(self) -> &'static str {
        match self {
            Self::Qian => "天",
            Self::Dui => "泽",
            Self::Li => "火",
            Self::Zhen => "雷",
            Self::Xun => "风",
            Self::Kan => "水",
            Self::Gen => "山",
            Self::Kun => "地",
        }
    }

    /// Element of the trigram.
    pub const fn element(self) -> WuXing {
        match self {
            Self::Qian | Self::Dui => WuXing::Metal,
            Self::Li => WuXing::Fire,
            Self::Zhen | Self::Xun => WuXing::Wood,
            Self::Kan => WuXing::Water,
            Self::Gen | Self::Kun => WuXing::Earth,
        }
    }

    /// The three lines bottom-to-top, `true` = yang.
    pub const fn lines(self) -> [bool; 3] {
        match self {
            Self::Qian => [true, true, true],
            Self::Dui => [true, true, false],
            Self::Li => [true, false, true],
            Self::Zhen => [true, false, false],
            Self::Xun => [false, true, true],
            Self::Kan => [false, true, false],
            Self::Gen => [false, false, true],
            Self::Kun => [false, false, false],
        }
    }

    /// Recover a trigram from its three lines (bottom-to-top).
    pub const fn from_lines(lines: [bool; 3]) -> Self {
        // lines encode the early-heaven index: yin=1 bit, bottom line
        // as the high bit (乾 111 → 0, 兑 110 → 1, 坤 000 → 7)
        let bits = (!lines[0] as u8) << 2 | (!lines[1] as u8) << 1 | (!lines[2] as u8);
        ALL_TRIGRAMS[bits as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_early_heaven() {
        assert_eq!(Trigram::Qian.number(), 1);
        assert_eq!(Trigram::Xun.number(), 5);
        assert_eq!(Trigram::Kun.number(), 8);
        assert_eq!(Trigram::from_number(8), Some(Trigram::Kun));
        assert_eq!(Trigram::from_number(0), None);
        assert_eq!(Trigram::from_number(9), None);
    }

    #[test]
    fn lines_round_trip() {
        for &t in &ALL_TRIGRAMS {
            assert_eq!(Trigram::from_lines(t.lines()), t);
        }
    }

    #[test]
    fn line_shapes() {
        assert_eq!(Trigram::Dui.lines(), [true, true, false]);
        assert_eq!(Trigram::Kan.lines(), [false, true, false]);
        assert_eq!(Trigram::Gen.lines(), [false, false, true]);
    }

    #[test]
    fn elements() {
        assert_eq!(Trigram::Qian.element(), WuXing::Metal);
        assert_eq!(Trigram::Kan.element(), WuXing::Water);
        assert_eq!(Trigram::Kun.element(), WuXing::Earth);
    }
}
