//! The 64 hexagrams: names, King Wen numbers, and the eight-palace
//! (八宫) affiliation used by Liu Yao.
//!
//! Palace affiliation is derived by the classical generation sequence
//! from each palace's pure hexagram (flip lines 1..5 in turn, then the
//! wandering-soul and returning-soul steps), which covers all 64
//! hexagrams exactly once.

use serde::{Deserialize, Serialize};

use crate::trigram::{ALL_TRIGRAMS, Trigram};

/// Hexagram names indexed `[upper][lower]` in early-heaven trigram order
/// (乾兑离震巽坎艮坤).
pub const HEXAGRAM_NAMES: [[&str; 8]; 8] = [
    [
        "乾为天", "天泽履", "天火同人", "天雷无妄", "天风姤", "天水讼", "天山遁", "天地否",
    ],
    [
        "泽天夬", "兑为泽", "泽火革", "泽雷随", "泽风大过", "泽水困", "泽山咸", "泽地萃",
    ],
    [
        "火天大有", "火泽睽", "离为火", "火雷噬嗑", "火风鼎", "火水未济", "火山旅", "火地晋",
    ],
    [
        "雷天大壮", "雷泽归妹", "雷火丰", "震为雷", "雷风恒", "雷水解", "雷山小过", "雷地豫",
    ],
    [
        "风天小畜", "风泽中孚", "风火家人", "风雷益", "巽为风", "风水涣", "风山渐", "风地观",
    ],
    [
        "水天需", "水泽节", "水火既济", "水雷屯", "水风井", "坎为水", "水山蹇", "水地比",
    ],
    [
        "山天大畜", "山泽损", "山火贲", "山雷颐", "山风蛊", "山水蒙", "艮为山", "山地剥",
    ],
    [
        "地天泰", "地泽临", "地火明夷", "地雷复", "地风升", "地水师", "地山谦", "坤为地",
    ],
];

/// King Wen sequence numbers indexed `[upper][lower]`.
pub const KING_WEN_NUMBERS: [[u8; 8]; 8] = [
    [1, 10, 13, 25, 44, 6, 33, 12],
    [43, 58, 49, 17, 28, 47, 31, 45],
    [14, 38, 30, 21, 50, 64, 56, 35],
    [34, 54, 55, 51, 32, 40, 62, 16],
    [9, 61, 37, 42, 57, 59, 53, 20],
    [5, 60, 63, 3, 48, 29, 39, 8],
    [26, 41, 22, 27, 18, 4, 52, 23],
    [11, 19, 36, 24, 46, 7, 15, 2],
];

/// A six-line hexagram, lines stored bottom-to-top, `true` = yang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hexagram {
    pub lines: [bool; 6],
}

impl Hexagram {
    /// Build from lower and upper trigrams.
    pub const fn from_trigrams(upper: Trigram, lower: Trigram) -> Self {
        let lo = lower.lines();
        let hi = upper.lines();
        Self {
            lines: [lo[0], lo[1], lo[2], hi[0], hi[1], hi[2]],
        }
    }

    /// Lower (inner) trigram, lines 1-3.
    pub const fn lower(self) -> Trigram {
        Trigram::from_lines([self.lines[0], self.lines[1], self.lines[2]])
    }

    /// Upper (outer) trigram, lines 4-6.
    pub const fn upper(self) -> Trigram {
        Trigram::from_lines([self.lines[3], self.lines[4], self.lines[5]])
    }

    /// Classical name, e.g. "风泽中孚".
    pub const fn name(self) -> &'static str {
        HEXAGRAM_NAMES[self.upper().index_usize()][self.lower().index_usize()]
    }

    /// King Wen sequence number (1-64).
    pub const fn king_wen(self) -> u8 {
        KING_WEN_NUMBERS[self.upper().index_usize()][self.lower().index_usize()]
    }

    /// Flip the polarity of one line (1-based position 1-6).
    pub fn with_line_flipped(self, position: u8) -> Self {
        let mut lines = self.lines;
        lines[(position - 1) as usize] = !lines[(position - 1) as usize];
        Self { lines }
    }

    /// Mutual hexagram (互卦): lines 2-3-4 as lower, 3-4-5 as upper.
    pub const fn mutual(self) -> Self {
        Self {
            lines: [
                self.lines[1],
                self.lines[2],
                self.lines[3],
                self.lines[2],
                self.lines[3],
                self.lines[4],
            ],
        }
    }
}

/// Palace affiliation of a hexagram: the owning palace trigram, and the
/// generation number (0 = pure palace hexagram, 1-5 = first through
/// fifth generation, 6 = wandering soul 游魂, 7 = returning soul 归魂).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalaceAffiliation {
    pub palace: Trigram,
    pub generation: u8,
}

/// The eight transformations of one palace, generation order.
fn palace_sequence(palace: Trigram) -> [Hexagram; 8] {
    let pure = Hexagram::from_trigrams(palace, palace);
    let mut seq = [pure; 8];
    let mut current = pure;
    // generations 1-5 flip lines 1-5 cumulatively
    for g in 1..=5u8 {
        current = current.with_line_flipped(g);
        seq[g as usize] = current;
    }
    // wandering soul: flip line 4 back
    current = current.with_line_flipped(4);
    seq[6] = current;
    // returning soul: restore the lower trigram
    current = current.with_line_flipped(1).with_line_flipped(2).with_line_flipped(3);
    seq[7] = current;
    seq
}

/// Look up the palace affiliation of any hexagram. Total over all 64.
pub fn palace_affiliation(hex: Hexagram) -> PalaceAffiliation {
    for &palace in &ALL_TRIGRAMS {
        for (generation, candidate) in palace_sequence(palace).iter().enumerate() {
            if *candidate == hex {
                return PalaceAffiliation {
                    palace,
                    generation: generation as u8,
                };
            }
        }
    }
    // the 8 sequences of 8 partition the 64 hexagrams
    unreachable!("palace sequences cover all 64 hexagrams")
}

/// Shi (世) line position for each generation number.
pub const SHI_POSITIONS: [u8; 8] = [6, 1, 2, 3, 4, 5, 4, 3];

/// Ying (应) position: three lines from Shi, wrapping within 1-6.
pub const fn ying_position(shi: u8) -> u8 {
    (shi + 2) % 6 + 1
}

impl Trigram {
    /// Const-friendly usize index.
    pub(crate) const fn index_usize(self) -> usize {
        self as u8 as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_hexagrams() -> Vec<Hexagram> {
        let mut v = Vec::with_capacity(64);
        for &u in &ALL_TRIGRAMS {
            for &l in &ALL_TRIGRAMS {
                v.push(Hexagram::from_trigrams(u, l));
            }
        }
        v
    }

    #[test]
    fn known_names() {
        let qian = Hexagram::from_trigrams(Trigram::Qian, Trigram::Qian);
        assert_eq!(qian.name(), "乾为天");
        assert_eq!(qian.king_wen(), 1);

        let zhongfu = Hexagram::from_trigrams(Trigram::Xun, Trigram::Dui);
        assert_eq!(zhongfu.name(), "风泽中孚");
        assert_eq!(zhongfu.king_wen(), 61);

        let kun = Hexagram::from_trigrams(Trigram::Kun, Trigram::Kun);
        assert_eq!(kun.name(), "坤为地");
        assert_eq!(kun.king_wen(), 2);
    }

    #[test]
    fn king_wen_numbers_are_a_permutation() {
        let mut seen = [false; 65];
        for hex in all_hexagrams() {
            let n = hex.king_wen();
            assert!((1..=64).contains(&n));
            assert!(!seen[n as usize], "duplicate King Wen number {n}");
            seen[n as usize] = true;
        }
    }

    #[test]
    fn trigram_round_trip() {
        for hex in all_hexagrams() {
            assert_eq!(Hexagram::from_trigrams(hex.upper(), hex.lower()), hex);
        }
    }

    #[test]
    fn palace_map_covers_all_64_with_8_each() {
        let mut per_palace = [0u8; 8];
        for hex in all_hexagrams() {
            let aff = palace_affiliation(hex);
            per_palace[aff.palace.index_usize()] += 1;
        }
        assert_eq!(per_palace, [8; 8]);
    }

    #[test]
    fn pure_hexagrams_are_generation_zero() {
        for &t in &ALL_TRIGRAMS {
            let aff = palace_affiliation(Hexagram::from_trigrams(t, t));
            assert_eq!(aff.palace, t);
            assert_eq!(aff.generation, 0);
        }
    }

    #[test]
    fn qian_palace_returning_soul_is_da_you() {
        // 乾宫归魂卦是火天大有
        let seq_last = palace_sequence(Trigram::Qian)[7];
        assert_eq!(seq_last.name(), "火天大有");
    }

    #[test]
    fn shi_ying_positions() {
        assert_eq!(SHI_POSITIONS[0], 6);
        assert_eq!(ying_position(6), 3);
        assert_eq!(ying_position(1), 4);
        assert_eq!(ying_position(4), 1);
        for shi in 1..=6u8 {
            let ying = ying_position(shi);
            assert!((1..=6).contains(&ying));
            assert_ne!(shi, ying);
        }
    }

    #[test]
    fn mutual_of_zhongfu() {
        // 风泽中孚 lines 110011 → mutual 山雷颐
        let zhongfu = Hexagram::from_trigrams(Trigram::Xun, Trigram::Dui);
        assert_eq!(zhongfu.mutual().name(), "山雷颐");
    }
}
