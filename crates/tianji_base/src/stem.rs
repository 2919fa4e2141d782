//! The 10 Heavenly Stems (天干).
//!
//! Stems carry an element and a yin/yang polarity; both drive the Ten
//! Gods classification and every stem-keyed lookup table in the engine.

use serde::{Deserialize, Serialize};

use crate::wuxing::WuXing;

/// The 10 Heavenly Stems in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Stem {
    Jia = 0,
    Yi = 1,
    Bing = 2,
    Ding = 3,
    Wu = 4,
    Ji = 5,
    Geng = 6,
    Xin = 7,
    Ren = 8,
    Gui = 9,
}

/// All 10 stems in cycle order.
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// Create from raw u8 value.
    pub fn from_u8(v: u8) -> Option<Self> {
        if (v as usize) < ALL_STEMS.len() {
            Some(ALL_STEMS[v as usize])
        } else {
            None
        }
    }

    /// 0-based cycle index (甲=0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Element of the stem (甲乙木, 丙丁火, 戊己土, 庚辛金, 壬癸水).
    pub const fn element(self) -> WuXing {
        match self {
            Self::Jia | Self::Yi => WuXing::Wood,
            Self::Bing | Self::Ding => WuXing::Fire,
            Self::Wu | Self::Ji => WuXing::Earth,
            Self::Geng | Self::Xin => WuXing::Metal,
            Self::Ren | Self::Gui => WuXing::Water,
        }
    }

    /// Yang polarity (even cycle index).
    pub const fn is_yang(self) -> bool {
        self as u8 % 2 == 0
    }

    /// Yin/yang label.
    pub const fn polarity_name(self) -> &'static str {
        if self.is_yang() { "阳" } else { "阴" }
    }

    /// The stem's combination partner (五合: 甲己, 乙庚, 丙辛, 丁壬, 戊癸).
    pub const fn combine(self) -> Self {
        ALL_STEMS[(self as u8 as usize + 5) % 10]
    }

    /// Step `n` stems forward in the cycle.
    pub const fn shift(self, n: i32) -> Self {
        ALL_STEMS[(self as u8 as i32 + n).rem_euclid(10) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_from_u8() {
        assert_eq!(Stem::from_u8(0), Some(Stem::Jia));
        assert_eq!(Stem::from_u8(9), Some(Stem::Gui));
        assert_eq!(Stem::from_u8(10), None);
    }

    #[test]
    fn stem_elements() {
        assert_eq!(Stem::Jia.element(), WuXing::Wood);
        assert_eq!(Stem::Gui.element(), WuXing::Water);
        assert!(Stem::Jia.is_yang());
        assert!(!Stem::Yi.is_yang());
    }

    #[test]
    fn combination_pairs() {
        assert_eq!(Stem::Jia.combine(), Stem::Ji);
        assert_eq!(Stem::Wu.combine(), Stem::Gui);
        // combination is symmetric
        for &s in &ALL_STEMS {
            assert_eq!(s.combine().combine(), s);
        }
    }

    #[test]
    fn shift_wraps() {
        assert_eq!(Stem::Gui.shift(1), Stem::Jia);
        assert_eq!(Stem::Jia.shift(-1), Stem::Gui);
    }
}
