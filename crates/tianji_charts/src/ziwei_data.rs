//! Static data for the Zi Wei calculator: star-position rules, the
//! brightness table, and the Four-Transformations table.

use tianji_base::{Branch, Stem, WuXing};

use crate::ziwei_types::{Brightness, Bureau, MainStar, SiHua};

/// Bureau from the NaYin element of the 命宫 stem-branch.
pub const fn bureau_from_element(element: WuXing) -> Bureau {
    match element {
        WuXing::Water => Bureau::Water2,
        WuXing::Wood => Bureau::Wood3,
        WuXing::Metal => Bureau::Metal4,
        WuXing::Earth => Bureau::Earth5,
        WuXing::Fire => Bureau::Fire6,
    }
}

/// 紫微 position from the bureau divisor and the lunar birth day.
///
/// Take the smallest multiple of the divisor reaching the day count;
/// the excess walks forward from 寅 when even, backward when odd.
pub fn ziwei_branch(divisor: u8, lunar_day: u32) -> Branch {
    let d = divisor as i32;
    let day = lunar_day as i32;
    let quotient = (day + d - 1) / d;
    let excess = quotient * d - day;
    let offset = if excess % 2 == 0 {
        quotient - 1 + excess
    } else {
        quotient - 1 - excess
    };
    Branch::Yin.shift(offset)
}

/// 天府 mirrors 紫微 across the 寅-申 axis.
pub fn tianfu_branch(ziwei: Branch) -> Branch {
    Branch::from_u8((4 - ziwei.index() as i32).rem_euclid(12) as u8)
        .expect("rem_euclid(12) yields a branch index")
}

/// Offsets of the 紫微-series stars backward from 紫微.
pub const ZIWEI_SERIES: [(MainStar, i32); 6] = [
    (MainStar::ZiWei, 0),
    (MainStar::TianJi, -1),
    (MainStar::TaiYang, -3),
    (MainStar::WuQu, -4),
    (MainStar::TianTong, -5),
    (MainStar::LianZhen, -8),
];

/// Offsets of the 天府-series stars forward from 天府.
pub const TIANFU_SERIES: [(MainStar, i32); 8] = [
    (MainStar::TianFu, 0),
    (MainStar::TaiYin, 1),
    (MainStar::TanLang, 2),
    (MainStar::JuMen, 3),
    (MainStar::TianXiang, 4),
    (MainStar::TianLiang, 5),
    (MainStar::QiSha, 6),
    (MainStar::PoJun, 10),
];

/// Brightness of each main star per branch, indexed
/// `[star][branch]` with branches in 子-起 cycle order.
/// 庙=Miao 旺=Wang 得=De 平=Ping 陷=Xian.
pub const BRIGHTNESS: [[Brightness; 12]; 14] = {
    use Brightness::{De as D, Miao as M, Ping as P, Wang as W, Xian as X};
    [
        // 紫微
        [P, M, M, W, D, W, M, M, W, P, D, W],
        // 天机
        [M, X, D, W, P, P, M, X, D, W, P, P],
        // 太阳
        [X, X, W, M, W, W, W, D, D, P, X, X],
        // 武曲
        [W, M, D, X, M, P, W, M, D, W, M, P],
        // 天同
        [W, X, D, P, P, M, X, X, W, P, P, M],
        // 廉贞
        [P, W, M, P, D, X, P, W, M, P, D, X],
        // 天府
        [M, M, M, D, M, D, W, M, D, W, M, D],
        // 太阴
        [M, M, W, X, X, X, X, P, P, W, W, M],
        // 贪狼
        [W, M, P, P, M, X, W, M, P, P, M, X],
        // 巨门
        [W, W, M, M, P, P, W, X, M, M, W, W],
        // 天相
        [M, M, M, X, D, D, M, D, M, X, D, P],
        // 天梁
        [M, W, M, M, M, X, M, W, X, D, M, X],
        // 七杀
        [W, M, M, W, M, P, W, M, M, W, M, P],
        // 破军
        [M, W, D, W, W, P, M, W, D, X, W, P],
    ]
};

/// The four transformed stars per year stem, in 禄权科忌 order.
pub const SI_HUA_TABLE: [[&str; 4]; 10] = [
    ["廉贞", "破军", "武曲", "太阳"], // 甲
    ["天机", "天梁", "紫微", "太阴"], // 乙
    ["天同", "天机", "文昌", "廉贞"], // 丙
    ["太阴", "天同", "天机", "巨门"], // 丁
    ["贪狼", "太阴", "右弼", "天机"], // 戊
    ["武曲", "贪狼", "天梁", "文曲"], // 己
    ["太阳", "武曲", "太阴", "天同"], // 庚
    ["巨门", "太阳", "文曲", "文昌"], // 辛
    ["天梁", "紫微", "左辅", "武曲"], // 壬
    ["破军", "巨门", "太阴", "贪狼"], // 癸
];

/// The four transformation tags in table order.
pub const SI_HUA_ORDER: [SiHua; 4] = [SiHua::Lu, SiHua::Quan, SiHua::Ke, SiHua::Ji];

/// 禄存 branch per year stem.
pub const LU_CUN: [Branch; 10] = [
    Branch::Yin,  // 甲
    Branch::Mao,  // 乙
    Branch::Si,   // 丙
    Branch::Wu,   // 丁
    Branch::Si,   // 戊
    Branch::Wu,   // 己
    Branch::Shen, // 庚
    Branch::You,  // 辛
    Branch::Hai,  // 壬
    Branch::Zi,   // 癸
];

/// 天魁 and 天钺 branches per year stem.
pub const KUI_YUE: [(Branch, Branch); 10] = [
    (Branch::Chou, Branch::Wei), // 甲
    (Branch::Zi, Branch::Shen),  // 乙
    (Branch::Hai, Branch::You),  // 丙
    (Branch::Hai, Branch::You),  // 丁
    (Branch::Chou, Branch::Wei), // 戊
    (Branch::Zi, Branch::Shen),  // 己
    (Branch::Chou, Branch::Wei), // 庚
    (Branch::Wu, Branch::Yin),   // 辛
    (Branch::Mao, Branch::Si),   // 壬
    (Branch::Mao, Branch::Si),   // 癸
];

/// 火星 starting branch per year-branch trine.
pub fn huo_xing_start(year_branch: Branch) -> Branch {
    match year_branch.trine_leader() {
        Branch::Yin => Branch::Chou,  // 寅午戌
        Branch::Shen => Branch::Yin,  // 申子辰
        Branch::Si => Branch::Mao,    // 巳酉丑
        _ => Branch::You,             // 亥卯未
    }
}

/// 铃星 starting branch per year-branch trine.
pub fn ling_xing_start(year_branch: Branch) -> Branch {
    if year_branch.trine_leader() == Branch::Yin {
        Branch::Mao // 寅午戌
    } else {
        Branch::Xu
    }
}

/// 命主 star name per 命宫 branch.
pub const MING_ZHU: [&str; 12] = [
    "贪狼", // 子
    "巨门", // 丑
    "禄存", // 寅
    "文曲", // 卯
    "廉贞", // 辰
    "武曲", // 巳
    "破军", // 午
    "武曲", // 未
    "廉贞", // 申
    "文曲", // 酉
    "禄存", // 戌
    "巨门", // 亥
];

/// 身主 star name per year branch.
pub const SHEN_ZHU: [&str; 12] = [
    "火星", // 子
    "天相", // 丑
    "天梁", // 寅
    "天同", // 卯
    "文昌", // 辰
    "天机", // 巳
    "铃星", // 午
    "天相", // 未
    "天梁", // 申
    "天同", // 酉
    "文昌", // 戌
    "天机", // 亥
];

/// Branch walked by an auxiliary star keyed on hour/month offsets.
pub fn aux_positions(
    year_stem: Stem,
    year_branch: Branch,
    lunar_month: u32,
    hour_branch: Branch,
) -> Vec<(&'static str, Branch)> {
    let h = hour_branch.index() as i32;
    let m = lunar_month as i32 - 1; // months from 正月
    let lu_cun = LU_CUN[year_stem.index() as usize];
    let (kui, yue) = KUI_YUE[year_stem.index() as usize];
    vec![
        ("文昌", Branch::Xu.shift(-h)),
        ("文曲", Branch::Chen.shift(h)),
        ("左辅", Branch::Chen.shift(m)),
        ("右弼", Branch::Xu.shift(-m)),
        ("天魁", kui),
        ("天钺", yue),
        ("禄存", lu_cun),
        ("擎羊", lu_cun.shift(1)),
        ("陀罗", lu_cun.shift(-1)),
        ("火星", huo_xing_start(year_branch).shift(h)),
        ("铃星", ling_xing_start(year_branch).shift(h)),
        ("地空", Branch::Hai.shift(-h)),
        ("地劫", Branch::Hai.shift(h)),
        ("天马", year_branch.post_horse()),
    ]
}
