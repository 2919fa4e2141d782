//! NaYin (纳音): the 30 melodic names of the sexagenary cycle.
//!
//! Consecutive pairs of terms share one name, so the table has 30 rows
//! indexed by `term_index / 2`. Each name carries an element, which the
//! Zi Wei five-element bureau derivation consumes.

use crate::sexagenary::StemBranch;
use crate::wuxing::WuXing;

/// The 30 NaYin names with their elements, in cycle order.
pub const NAYIN: [(&str, WuXing); 30] = [
    ("海中金", WuXing::Metal), // 甲子 乙丑
    ("炉中火", WuXing::Fire),  // 丙寅 丁卯
    ("大林木", WuXing::Wood),  // 戊辰 己巳
    ("路旁土", WuXing::Earth), // 庚午 辛未
    ("剑锋金", WuXing::Metal), // 壬申 癸酉
    ("山头火", WuXing::Fire),  // 甲戌 乙亥
    ("涧下水", WuXing::Water), // 丙子 丁丑
    ("城头土", WuXing::Earth), // 戊寅 己卯
    ("白蜡金", WuXing::Metal), // 庚辰 辛巳
    ("杨柳木", WuXing::Wood),  // 壬午 癸未
    ("泉中水", WuXing::Water), // 甲申 乙酉
    ("屋上土", WuXing::Earth), // 丙戌 丁亥
    ("霹雳火", WuXing::Fire),  // 戊子 己丑
    ("松柏木", WuXing::Wood),  // 庚寅 辛卯
    ("长流水", WuXing::Water), // 壬辰 癸巳
    ("砂中金", WuXing::Metal), // 甲午 乙未
    ("山下火", WuXing::Fire),  // 丙申 丁酉
    ("平地木", WuXing::Wood),  // 戊戌 己亥
    ("壁上土", WuXing::Earth), // 庚子 辛丑
    ("金箔金", WuXing::Metal), // 壬寅 癸卯
    ("覆灯火", WuXing::Fire),  // 甲辰 乙巳
    ("天河水", WuXing::Water), // 丙午 丁未
    ("大驿土", WuXing::Earth), // 戊申 己酉
    ("钗钏金", WuXing::Metal), // 庚戌 辛亥
    ("桑柘木", WuXing::Wood),  // 壬子 癸丑
    ("大溪水", WuXing::Water), // 甲寅 乙卯
    ("沙中土", WuXing::Earth), // 丙辰 丁巳
    ("天上火", WuXing::Fire),  // 戊午 己未
    ("石榴木", WuXing::Wood),  // 庚申 辛酉
    ("大海水", WuXing::Water), // 壬戌 癸亥
];

/// NaYin name of a sexagenary term.
pub const fn nayin_name(sb: StemBranch) -> &'static str {
    NAYIN[(sb.index() / 2) as usize].0
}

/// NaYin element of a sexagenary term.
pub const fn nayin_element(sb: StemBranch) -> WuXing {
    NAYIN[(sb.index() / 2) as usize].1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sexagenary::all_sexagenary;

    #[test]
    fn table_has_30_rows() {
        assert_eq!(NAYIN.len(), 30);
    }

    #[test]
    fn pairs_share_a_name() {
        for sb in all_sexagenary() {
            let partner = StemBranch::from_index(sb.index() ^ 1).unwrap();
            assert_eq!(nayin_name(sb), nayin_name(partner));
        }
    }

    #[test]
    fn known_values() {
        let jiazi = StemBranch::from_index(0).unwrap();
        assert_eq!(nayin_name(jiazi), "海中金");
        assert_eq!(nayin_element(jiazi), WuXing::Metal);

        // 壬子 index 48 → 桑柘木
        let renzi = StemBranch::from_index(48).unwrap();
        assert_eq!(renzi.name(), "壬子");
        assert_eq!(nayin_name(renzi), "桑柘木");

        let guihai = StemBranch::from_index(59).unwrap();
        assert_eq!(nayin_name(guihai), "大海水");
        assert_eq!(nayin_element(guihai), WuXing::Water);
    }

    #[test]
    fn element_distribution_is_six_each() {
        let mut counts = [0u8; 5];
        for &(_, e) in &NAYIN {
            counts[e.index() as usize] += 1;
        }
        assert_eq!(counts, [6, 6, 6, 6, 6]);
    }
}
