//! Na Jia (纳甲): stem and branch assignment to hexagram lines.
//!
//! Each trigram owns an inner-trigram stem/branch run (lines 1-3) and an
//! outer-trigram run (lines 4-6). 乾 and 坤 take different stems inside
//! and outside (甲/壬 and 乙/癸); the other six use one stem throughout.

use crate::branch::Branch;
use crate::stem::Stem;
use crate::trigram::Trigram;

/// Inner-trigram stems, early-heaven trigram order (乾兑离震巽坎艮坤).
pub const INNER_STEMS: [Stem; 8] = [
    Stem::Jia,  // 乾
    Stem::Ding, // 兑
    Stem::Ji,   // 离
    Stem::Geng, // 震
    Stem::Xin,  // 巽
    Stem::Wu,   // 坎
    Stem::Bing, // 艮
    Stem::Yi,   // 坤
];

/// Outer-trigram stems, early-heaven trigram order.
pub const OUTER_STEMS: [Stem; 8] = [
    Stem::Ren,  // 乾
    Stem::Ding, // 兑
    Stem::Ji,   // 离
    Stem::Geng, // 震
    Stem::Xin,  // 巽
    Stem::Wu,   // 坎
    Stem::Bing, // 艮
    Stem::Gui,  // 坤
];

/// Inner-trigram branches for lines 1-3, early-heaven trigram order.
pub const INNER_BRANCHES: [[Branch; 3]; 8] = [
    [Branch::Zi, Branch::Yin, Branch::Chen],  // 乾
    [Branch::Si, Branch::Mao, Branch::Chou],  // 兑
    [Branch::Mao, Branch::Chou, Branch::Hai], // 离
    [Branch::Zi, Branch::Yin, Branch::Chen],  // 震
    [Branch::Chou, Branch::Hai, Branch::You], // 巽
    [Branch::Yin, Branch::Chen, Branch::Wu],  // 坎
    [Branch::Chen, Branch::Wu, Branch::Shen], // 艮
    [Branch::Wei, Branch::Si, Branch::Mao],   // 坤
];

/// Outer-trigram branches for lines 4-6, early-heaven trigram order.
pub const OUTER_BRANCHES: [[Branch; 3]; 8] = [
    [Branch::Wu, Branch::Shen, Branch::Xu],   // 乾
    [Branch::Hai, Branch::You, Branch::Wei],  // 兑
    [Branch::You, Branch::Wei, Branch::Si],   // 离
    [Branch::Wu, Branch::Shen, Branch::Xu],   // 震
    [Branch::Wei, Branch::Si, Branch::Mao],   // 巽
    [Branch::Shen, Branch::Xu, Branch::Zi],   // 坎
    [Branch::Xu, Branch::Zi, Branch::Yin],    // 艮
    [Branch::Chou, Branch::Hai, Branch::You], // 坤
];

/// Stem and branch for one line (1-based position 1-6) keyed by trigram.
/// Positions 1-3 use the inner run, 4-6 the outer run.
pub const fn najia_for_line(trigram: Trigram, position: u8) -> (Stem, Branch) {
    let t = trigram as u8 as usize;
    if position <= 3 {
        (INNER_STEMS[t], INNER_BRANCHES[t][(position - 1) as usize])
    } else {
        (OUTER_STEMS[t], OUTER_BRANCHES[t][(position - 4) as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trigram::ALL_TRIGRAMS;

    #[test]
    fn qian_lines() {
        // 乾: 甲子 甲寅 甲辰 壬午 壬申 壬戌
        assert_eq!(najia_for_line(Trigram::Qian, 1), (Stem::Jia, Branch::Zi));
        assert_eq!(najia_for_line(Trigram::Qian, 3), (Stem::Jia, Branch::Chen));
        assert_eq!(najia_for_line(Trigram::Qian, 4), (Stem::Ren, Branch::Wu));
        assert_eq!(najia_for_line(Trigram::Qian, 6), (Stem::Ren, Branch::Xu));
    }

    #[test]
    fn kun_lines() {
        // 坤: 乙未 乙巳 乙卯 癸丑 癸亥 癸酉
        assert_eq!(najia_for_line(Trigram::Kun, 1), (Stem::Yi, Branch::Wei));
        assert_eq!(najia_for_line(Trigram::Kun, 6), (Stem::Gui, Branch::You));
    }

    #[test]
    fn only_qian_kun_switch_stems() {
        for &t in &ALL_TRIGRAMS {
            let switches = INNER_STEMS[t as u8 as usize] != OUTER_STEMS[t as u8 as usize];
            assert_eq!(switches, matches!(t, Trigram::Qian | Trigram::Kun));
        }
    }

    #[test]
    fn branch_parity_matches_trigram_polarity() {
        // yang trigrams (乾震坎艮) carry yang branches, yin trigrams yin
        for &t in &ALL_TRIGRAMS {
            let yang = matches!(
                t,
                Trigram::Qian | Trigram::Zhen | Trigram::Kan | Trigram::Gen
            );
            for pos in 1..=6u8 {
                let (_, b) = najia_for_line(t, pos);
                assert_eq!(b.is_yang(), yang, "{} line {pos}", t.name());
            }
        }
    }
}
