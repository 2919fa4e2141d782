//! Static data for the BaZi calculator: the Ten-God pair table, the
//! life-cycle anchors, and the ShenSha star rules.

use tianji_base::{Branch, Stem};

use crate::bazi_types::{LifeStage, TenGod};

use TenGod::*;

/// Ten-God pair table indexed `[day_master][other]`, both in stem cycle
/// order. The pipeline's arithmetic classification is cross-checked
/// against this table on every run.
pub const TEN_GOD_TABLE: [[TenGod; 10]; 10] = [
    // day 甲
    [
        BiJian, JieCai, ShiShen, ShangGuan, PianCai, ZhengCai, QiSha, ZhengGuan, PianYin, ZhengYin,
    ],
    // day 乙
    [
        JieCai, BiJian, ShangGuan, ShiShen, ZhengCai, PianCai, ZhengGuan, QiSha, ZhengYin, PianYin,
    ],
    // day 丙
    [
        PianYin, ZhengYin, BiJian, JieCai, ShiShen, ShangGuan, PianCai, ZhengCai, QiSha, ZhengGuan,
    ],
    // day 丁
    [
        ZhengYin, PianYin, JieCai, BiJian, ShangGuan, ShiShen, ZhengCai, PianCai, ZhengGuan, QiSha,
    ],
    // day 戊
    [
        QiSha, ZhengGuan, PianYin, ZhengYin, BiJian, JieCai, ShiShen, ShangGuan, PianCai, ZhengCai,
    ],
    // day 己
    [
        ZhengGuan, QiSha, ZhengYin, PianYin, JieCai, BiJian, ShangGuan, ShiShen, ZhengCai, PianCai,
    ],
    // day 庚
    [
        PianCai, ZhengCai, QiSha, ZhengGuan, PianYin, ZhengYin, BiJian, JieCai, ShiShen, ShangGuan,
    ],
    // day 辛
    [
        ZhengCai, PianCai, ZhengGuan, QiSha, ZhengYin, PianYin, JieCai, BiJian, ShangGuan, ShiShen,
    ],
    // day 壬
    [
        ShiShen, ShangGuan, PianCai, ZhengCai, QiSha, ZhengGuan, PianYin, ZhengYin, BiJian, JieCai,
    ],
    // day 癸
    [
        ShangGuan, ShiShen, ZhengCai, PianCai, ZhengGuan, QiSha, ZhengYin, PianYin, JieCai, BiJian,
    ],
];

/// 长生 anchor branch per stem; yang stems walk the stages forward,
/// yin stems backward.
pub const CHANG_SHENG_ANCHOR: [Branch; 10] = [
    Branch::Hai, // 甲
    Branch::Wu,  // 乙
    Branch::Yin, // 丙
    Branch::You, // 丁
    Branch::Yin, // 戊
    Branch::You, // 己
    Branch::Si,  // 庚
    Branch::Zi,  // 辛
    Branch::Shen, // 壬
    Branch::Mao, // 癸
];

/// Life-cycle stage of a branch relative to a stem.
pub fn life_stage(stem: Stem, branch: Branch) -> LifeStage {
    let anchor = CHANG_SHENG_ANCHOR[stem.index() as usize];
    let steps = if stem.is_yang() {
        (branch.index() as i32 - anchor.index() as i32).rem_euclid(12)
    } else {
        (anchor.index() as i32 - branch.index() as i32).rem_euclid(12)
    };
    const STAGES: [LifeStage; 12] = [
        LifeStage::ChangSheng,
        LifeStage::MuYu,
        LifeStage::GuanDai,
        LifeStage::LinGuan,
        LifeStage::DiWang,
        LifeStage::Shuai,
        LifeStage::Bing,
        LifeStage::Si,
        LifeStage::Mu,
        LifeStage::Jue,
        LifeStage::Tai,
        LifeStage::Yang,
    ];
    STAGES[steps as usize]
}

/// 天乙贵人 branches per day stem (甲戊庚牛羊, 乙己鼠猴乡, 丙丁猪鸡位,
/// 壬癸兔蛇藏, 六辛逢马虎).
pub const TIAN_YI_GUI_REN: [[Branch; 2]; 10] = [
    [Branch::Chou, Branch::Wei], // 甲
    [Branch::Zi, Branch::Shen],  // 乙
    [Branch::Hai, Branch::You],  // 丙
    [Branch::Hai, Branch::You],  // 丁
    [Branch::Chou, Branch::Wei], // 戊
    [Branch::Zi, Branch::Shen],  // 己
    [Branch::Chou, Branch::Wei], // 庚
    [Branch::Wu, Branch::Yin],   // 辛
    [Branch::Mao, Branch::Si],   // 壬
    [Branch::Mao, Branch::Si],   // 癸
];

/// 文昌贵人 branch per day stem.
pub const WEN_CHANG: [Branch; 10] = [
    Branch::Si,  // 甲
    Branch::Wu,  // 乙
    Branch::Shen, // 丙
    Branch::You, // 丁
    Branch::Shen, // 戊
    Branch::You, // 己
    Branch::Hai, // 庚
    Branch::Zi,  // 辛
    Branch::Yin, // 壬
    Branch::Mao, // 癸
];

/// 禄神 branch per day stem.
pub const LU_SHEN: [Branch; 10] = [
    Branch::Yin, // 甲
    Branch::Mao, // 乙
    Branch::Si,  // 丙
    Branch::Wu,  // 丁
    Branch::Si,  // 戊
    Branch::Wu,  // 己
    Branch::Shen, // 庚
    Branch::You, // 辛
    Branch::Hai, // 壬
    Branch::Zi,  // 癸
];

/// 羊刃 branch for yang day stems (the stage past 禄).
pub fn yang_ren(stem: Stem) -> Option<Branch> {
    if stem.is_yang() {
        Some(LU_SHEN[stem.index() as usize].shift(1))
    } else {
        None
    }
}

/// 金舆 branch per day stem (two past 禄).
pub fn jin_yu(stem: Stem) -> Branch {
    LU_SHEN[stem.index() as usize].shift(2)
}

/// 桃花 (咸池) branch of a branch's trine: the bath branch.
pub fn tao_hua(branch: Branch) -> Branch {
    // 申子辰→酉, 巳酉丑→午, 寅午戌→卯, 亥卯未→子
    branch.trine_leader().shift(1)
}

/// 将星 branch of a branch's trine: the trine's middle character.
pub fn jiang_xing(branch: Branch) -> Branch {
    branch.trine_leader().shift(4)
}

/// 华盖 branch of a branch's trine: the trine's grave character.
pub fn hua_gai(branch: Branch) -> Branch {
    branch.trine_leader().shift(8)
}

/// 劫煞 branch of a branch's trine.
pub fn jie_sha(branch: Branch) -> Branch {
    branch.trine_leader().shift(-3)
}

/// 孤辰 and 寡宿 branches keyed by the year branch's season group.
pub fn gu_chen_gua_su(year_branch: Branch) -> (Branch, Branch) {
    // 亥子丑→(寅,戌), 寅卯辰→(巳,丑), 巳午未→(申,辰), 申酉戌→(亥,未)
    match year_branch {
        Branch::Hai | Branch::Zi | Branch::Chou => (Branch::Yin, Branch::Xu),
        Branch::Yin | Branch::Mao | Branch::Chen => (Branch::Si, Branch::Chou),
        Branch::Si | Branch::Wu | Branch::Wei => (Branch::Shen, Branch::Chen),
        Branch::Shen | Branch::You | Branch::Xu => (Branch::Hai, Branch::Wei),
    }
}
