//! Static data for the Da Liu Ren calculator: month-general names, the
//! stem lodging palaces, and the Noble Person tables.

use tianji_base::{Branch, Stem};
use tianji_calendar::SolarTerm;

/// Classical month-general name per branch.
pub const MONTH_GENERAL_NAMES: [&str; 12] = [
    "神后", // 子
    "大吉", // 丑
    "功曹", // 寅
    "太冲", // 卯
    "天罡", // 辰
    "太乙", // 巳
    "胜光", // 午
    "小吉", // 未
    "传送", // 申
    "从魁", // 酉
    "河魁", // 戌
    "登明", // 亥
];

/// Month general from the governing zhongqi (雨水→亥, 春分→戌, …,
/// 大寒→子): the Sun's opposite station walks backward through the
/// branches as the zhongqi advance.
pub fn month_general_for(zhongqi: SolarTerm) -> Branch {
    debug_assert!(!zhongqi.is_jie());
    let ordinal = (zhongqi as u8 - 1) / 2; // 雨水=0 … 大寒=11
    Branch::Hai.shift(-(ordinal as i32))
}

/// Lodging palace branch (寄宫) per day stem
/// (甲课寅兮乙课辰，丙戊课巳不须论，丁己课未庚申上，辛课戌兮壬课亥，
/// 癸课原来丑宫坐).
pub const STEM_PALACE: [Branch; 10] = [
    Branch::Yin,  // 甲
    Branch::Chen, // 乙
    Branch::Si,   // 丙
    Branch::Wei,  // 丁
    Branch::Si,   // 戊
    Branch::Wei,  // 己
    Branch::Shen, // 庚
    Branch::Xu,   // 辛
    Branch::Hai,  // 壬
    Branch::Chou, // 癸
];

/// Daytime Noble Person branch per day stem.
pub const DAY_NOBLE: [Branch; 10] = [
    Branch::Wei,  // 甲
    Branch::Shen, // 乙
    Branch::You,  // 丙
    Branch::Hai,  // 丁
    Branch::Chou, // 戊
    Branch::Zi,   // 己
    Branch::Chou, // 庚
    Branch::Yin,  // 辛
    Branch::Mao,  // 壬
    Branch::Si,   // 癸
];

/// Nighttime Noble Person branch per day stem.
pub const NIGHT_NOBLE: [Branch; 10] = [
    Branch::Chou, // 甲
    Branch::Zi,   // 乙
    Branch::Hai,  // 丙
    Branch::You,  // 丁
    Branch::Wei,  // 戊
    Branch::Shen, // 己
    Branch::Wei,  // 庚
    Branch::Wu,   // 辛
    Branch::Si,   // 壬
    Branch::Mao,  // 癸
];

/// Noble Person for a day stem, selected by daytime (卯-申 hours) or
/// nighttime (酉-寅 hours).
pub fn noble_person(day_stem: Stem, daytime: bool) -> Branch {
    if daytime {
        DAY_NOBLE[day_stem.index() as usize]
    } else {
        NIGHT_NOBLE[day_stem.index() as usize]
    }
}

/// Daytime covers the 卯 through 申 double-hours.
pub fn is_daytime(hour_branch: Branch) -> bool {
    (3..=8).contains(&hour_branch.index())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_generals_walk_backward_from_hai() {
        assert_eq!(month_general_for(SolarTerm::YuShui), Branch::Hai);
        assert_eq!(month_general_for(SolarTerm::ChunFen), Branch::Xu);
        assert_eq!(month_general_for(SolarTerm::XiaZhi), Branch::Wei);
        assert_eq!(month_general_for(SolarTerm::DongZhi), Branch::Chou);
        assert_eq!(month_general_for(SolarTerm::DaHan), Branch::Zi);
    }

    #[test]
    fn month_general_names_line_up() {
        assert_eq!(MONTH_GENERAL_NAMES[Branch::Hai.index() as usize], "登明");
        assert_eq!(MONTH_GENERAL_NAMES[Branch::Chen.index() as usize], "天罡");
        assert_eq!(MONTH_GENERAL_NAMES[Branch::Zi.index() as usize], "神后");
    }

    #[test]
    fn noble_person_tables_swap_by_daylight() {
        assert_eq!(noble_person(Stem::Jia, true), Branch::Wei);
        assert_eq!(noble_person(Stem::Jia, false), Branch::Chou);
        assert_eq!(noble_person(Stem::Gui, true), Branch::Si);
        assert_eq!(noble_person(Stem::Gui, false), Branch::Mao);
    }

    #[test]
    fn daytime_split() {
        assert!(is_daytime(Branch::Mao));
        assert!(is_daytime(Branch::Shen));
        assert!(!is_daytime(Branch::You));
        assert!(!is_daytime(Branch::Zi));
    }
}
