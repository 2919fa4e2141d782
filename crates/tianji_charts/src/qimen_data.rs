//! Static data for the Qi Men calculator: palace geometry, original
//! star/gate seats, the solar-term Ju table, and stem-pair patterns.

use tianji_base::{Stem, Trigram};
use tianji_calendar::SolarTerm;

use crate::qimen_types::{DunType, Gate, NineStar};

/// Trigram of each palace, indexed by palace number − 1; palace 5 is
/// the center and has none.
pub const PALACE_TRIGRAMS: [Option<Trigram>; 9] = [
    Some(Trigram::Kan),  // 1 坎
    Some(Trigram::Kun),  // 2 坤
    Some(Trigram::Zhen), // 3 震
    Some(Trigram::Xun),  // 4 巽
    None,                // 5 中
    Some(Trigram::Qian), // 6 乾
    Some(Trigram::Dui),  // 7 兑
    Some(Trigram::Gen),  // 8 艮
    Some(Trigram::Li),   // 9 离
];

/// Compass direction of each palace, indexed by palace number − 1.
pub const PALACE_DIRECTIONS: [&str; 9] = [
    "北", "西南", "东", "东南", "中", "西北", "西", "东北", "南",
];

/// The eight outer palaces in clockwise ring order, starting north.
pub const RING: [u8; 8] = [1, 8, 3, 4, 9, 2, 7, 6];

/// Original (earth-plate) star of each palace, by palace number − 1.
pub const ORIGINAL_STARS: [NineStar; 9] = [
    NineStar::TianPeng,  // 1
    NineStar::TianRui,   // 2
    NineStar::TianChong, // 3
    NineStar::TianFu,    // 4
    NineStar::TianQin,   // 5
    NineStar::TianXin,   // 6
    NineStar::TianZhu,   // 7
    NineStar::TianRen,   // 8
    NineStar::TianYing,  // 9
];

/// Original gate of each palace (None for the center), by number − 1.
pub const ORIGINAL_GATES: [Option<Gate>; 9] = [
    Some(Gate::Rest),    // 1 休
    Some(Gate::Death),   // 2 死
    Some(Gate::Harm),    // 3 伤
    Some(Gate::Block),   // 4 杜
    None,                // 5
    Some(Gate::Open),    // 6 开
    Some(Gate::Fright),  // 7 惊
    Some(Gate::Life),    // 8 生
    Some(Gate::Scenery), // 9 景
];

/// Earth-plate stem sequence: the six yi (六仪) then three qi (三奇).
pub const EARTH_SEQUENCE: [Stem; 9] = [
    Stem::Wu,   // 戊
    Stem::Ji,   // 己
    Stem::Geng, // 庚
    Stem::Xin,  // 辛
    Stem::Ren,  // 壬
    Stem::Gui,  // 癸
    Stem::Ding, // 丁
    Stem::Bing, // 丙
    Stem::Yi,   // 乙
];

/// The hidden yi stem (六仪) covering each 甲-headed decade, indexed by
/// decade ordinal (甲子=0, 甲戌=1, …, 甲寅=5).
pub const XUN_YI: [Stem; 6] = [
    Stem::Wu,   // 甲子遁戊
    Stem::Ji,   // 甲戌遁己
    Stem::Geng, // 甲申遁庚
    Stem::Xin,  // 甲午遁辛
    Stem::Ren,  // 甲辰遁壬
    Stem::Gui,  // 甲寅遁癸
];

/// Dun type and the three Yuan Ju numbers (上/中/下元) per solar term.
pub fn term_ju(term: SolarTerm) -> (DunType, [u8; 3]) {
    use DunType::{Yang, Yin};
    match term {
        SolarTerm::DongZhi => (Yang, [1, 7, 4]),
        SolarTerm::XiaoHan => (Yang, [2, 8, 5]),
        SolarTerm::DaHan => (Yang, [3, 9, 6]),
        SolarTerm::LiChun => (Yang, [8, 5, 2]),
        SolarTerm::YuShui => (Yang, [9, 6, 3]),
        SolarTerm::JingZhe => (Yang, [1, 7, 4]),
        SolarTerm::ChunFen => (Yang, [3, 9, 6]),
        SolarTerm::QingMing => (Yang, [4, 1, 7]),
        SolarTerm::GuYu => (Yang, [5, 2, 8]),
        SolarTerm::LiXia => (Yang, [4, 1, 7]),
        SolarTerm::XiaoMan => (Yang, [5, 2, 8]),
        SolarTerm::MangZhong => (Yang, [6, 3, 9]),
        SolarTerm::XiaZhi => (Yin, [9, 3, 6]),
        SolarTerm::XiaoShu => (Yin, [8, 2, 5]),
        SolarTerm::DaShu => (Yin, [7, 1, 4]),
        SolarTerm::LiQiu => (Yin, [2, 5, 8]),
        SolarTerm::ChuShu => (Yin, [1, 4, 7]),
        SolarTerm::BaiLu => (Yin, [9, 3, 6]),
        SolarTerm::QiuFen => (Yin, [7, 1, 4]),
        SolarTerm::HanLu => (Yin, [6, 9, 3]),
        SolarTerm::ShuangJiang => (Yin, [5, 8, 2]),
        SolarTerm::LiDong => (Yin, [6, 9, 3]),
        SolarTerm::XiaoXue => (Yin, [5, 8, 2]),
        SolarTerm::DaXue => (Yin, [4, 7, 1]),
    }
}

/// Notable heaven-over-earth stem pairings.
pub fn stem_pair_pattern(heaven: Stem, earth: Stem) -> Option<&'static str> {
    match (heaven, earth) {
        (Stem::Bing, Stem::Wu) => Some("青龙返首"),
        (Stem::Wu, Stem::Bing) => Some("飞鸟跌穴"),
        (Stem::Yi, Stem::Xin) => Some("青龙逃走"),
        (Stem::Xin, Stem::Yi) => Some("白虎猖狂"),
        (Stem::Bing, Stem::Geng) => Some("荧入太白"),
        (Stem::Geng, Stem::Bing) => Some("太白入荧"),
        _ => None,
    }
}

/// Step a palace number through Luoshu order (1-9), wrapping.
pub fn step_palace(number: u8, steps: i32) -> u8 {
    ((number as i32 - 1 + steps).rem_euclid(9)) as u8 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_covers_outer_palaces() {
        let mut sorted = RING;
        sorted.sort_unstable();
        assert_eq!(sorted, [1, 2, 3, 4, 6, 7, 8, 9]);
    }

    #[test]
    fn yang_terms_are_the_ascending_half_year() {
        let (dun, ju) = term_ju(SolarTerm::DongZhi);
        assert_eq!(dun, DunType::Yang);
        assert_eq!(ju, [1, 7, 4]);
        let (dun, ju) = term_ju(SolarTerm::XiaZhi);
        assert_eq!(dun, DunType::Yin);
        assert_eq!(ju, [9, 3, 6]);
        // exactly 12 terms on each side
        let yang = tianji_calendar::ALL_TERMS
            .iter()
            .filter(|&&t| term_ju(t).0 == DunType::Yang)
            .count();
        assert_eq!(yang, 12);
    }

    #[test]
    fn earth_sequence_is_nine_distinct_stems_without_jia() {
        let mut seen = [false; 10];
        for &s in &EARTH_SEQUENCE {
            assert_ne!(s, Stem::Jia);
            assert!(!seen[s.index() as usize]);
            seen[s.index() as usize] = true;
        }
    }

    #[test]
    fn palace_stepping_wraps() {
        assert_eq!(step_palace(9, 1), 1);
        assert_eq!(step_palace(1, -1), 9);
        assert_eq!(step_palace(5, 4), 9);
    }
}
