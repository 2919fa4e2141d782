//! The 12 Earthly Branches (地支).
//!
//! Branches index the double-hours, the lunar months and the board
//! positions of Da Liu Ren and Qi Men. Combination (六合), trine (三合)
//! and punishment (刑) relations live here because several calculators
//! share them.

use serde::{Deserialize, Serialize};

use crate::wuxing::WuXing;

/// The 12 Earthly Branches in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Branch {
    Zi = 0,
    Chou = 1,
    Yin = 2,
    Mao = 3,
    Chen = 4,
    Si = 5,
    Wu = 6,
    Wei = 7,
    Shen = 8,
    You = 9,
    Xu = 10,
    Hai = 11,
}

/// All 12 branches in cycle order.
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

/// Punishment (刑) partner for each branch, cycle order.
/// 辰午酉亥 punish themselves.
const XING: [Branch; 12] = [
    Branch::Mao,  // 子刑卯
    Branch::Xu,   // 丑刑戌
    Branch::Si,   // 寅刑巳
    Branch::Zi,   // 卯刑子
    Branch::Chen, // 辰自刑
    Branch::Shen, // 巳刑申
    Branch::Wu,   // 午自刑
    Branch::Chou, // 未刑丑
    Branch::Yin,  // 申刑寅
    Branch::You,  // 酉自刑
    Branch::Wei,  // 戌刑未
    Branch::Hai,  // 亥自刑
];

impl Branch {
    /// Create from raw u8 value.
    pub fn from_u8(v: u8) -> Option<Self> {
        if (v as usize) < ALL_BRANCHES.len() {
            Some(ALL_BRANCHES[v as usize])
        } else {
            None
        }
    }

    /// 0-based cycle index (子=0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Element of the branch.
    pub const fn element(self) -> WuXing {
        match self {
            Self::Zi | Self::Hai => WuXing::Water,
            Self::Yin | Self::Mao => WuXing::Wood,
            Self::Si | Self::Wu => WuXing::Fire,
            Self::Shen | Self::You => WuXing::Metal,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => WuXing::Earth,
        }
    }

    /// Yang polarity (even cycle index).
    pub const fn is_yang(self) -> bool {
        self as u8 % 2 == 0
    }

    /// Combination partner (六合: 子丑, 寅亥, 卯戌, 辰酉, 巳申, 午未).
    pub const fn combine(self) -> Self {
        ALL_BRANCHES[(13 - self as u8 as usize) % 12]
    }

    /// Punishment partner (刑); 辰午酉亥 punish themselves.
    pub const fn punishment(self) -> Self {
        XING[self as u8 as usize]
    }

    /// Opposite branch (冲), six positions away.
    pub const fn clash(self) -> Self {
        ALL_BRANCHES[(self as u8 as usize + 6) % 12]
    }

    /// First branch of this branch's trine (三合局): 申子辰, 巳酉丑,
    /// 寅午戌, 亥卯未. Trines share `index % 4`.
    pub const fn trine_leader(self) -> Self {
        // leaders in index%4 order: 申(0), 巳(1), 寅(2), 亥(3)
        const LEADERS: [Branch; 4] = [Branch::Shen, Branch::Si, Branch::Yin, Branch::Hai];
        LEADERS[self as u8 as usize % 4]
    }

    /// Post-horse (驿马) branch of this branch's trine:
    /// 申子辰→寅, 巳酉丑→亥, 寅午戌→申, 亥卯未→巳.
    pub const fn post_horse(self) -> Self {
        const HORSES: [Branch; 4] = [Branch::Yin, Branch::Hai, Branch::Shen, Branch::Si];
        HORSES[self as u8 as usize % 4]
    }

    /// Step `n` branches forward in the cycle.
    pub const fn shift(self, n: i32) -> Self {
        ALL_BRANCHES[(self as u8 as i32 + n).rem_euclid(12) as usize]
    }

    /// Double-hour branch for a wall-clock hour (0-23).
    /// 23:00-00:59 子, 01:00-02:59 丑, and so on.
    pub const fn from_clock_hour(hour: u32) -> Self {
        ALL_BRANCHES[(((hour + 1) / 2) % 12) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_from_u8() {
        assert_eq!(Branch::from_u8(0), Some(Branch::Zi));
        assert_eq!(Branch::from_u8(11), Some(Branch::Hai));
        assert_eq!(Branch::from_u8(12), None);
    }

    #[test]
    fn branch_elements() {
        assert_eq!(Branch::Zi.element(), WuXing::Water);
        assert_eq!(Branch::Chen.element(), WuXing::Earth);
        assert_eq!(Branch::You.element(), WuXing::Metal);
    }

    #[test]
    fn six_combinations() {
        assert_eq!(Branch::Zi.combine(), Branch::Chou);
        assert_eq!(Branch::Yin.combine(), Branch::Hai);
        assert_eq!(Branch::Wu.combine(), Branch::Wei);
        for &b in &ALL_BRANCHES {
            assert_eq!(b.combine().combine(), b);
        }
    }

    #[test]
    fn clash_is_involutive() {
        for &b in &ALL_BRANCHES {
            assert_eq!(b.clash().clash(), b);
            assert_ne!(b.clash(), b);
        }
    }

    #[test]
    fn self_punishing_branches() {
        for b in [Branch::Chen, Branch::Wu, Branch::You, Branch::Hai] {
            assert_eq!(b.punishment(), b);
        }
        assert_eq!(Branch::Yin.punishment(), Branch::Si);
        assert_eq!(Branch::Si.punishment(), Branch::Shen);
    }

    #[test]
    fn clock_hours() {
        assert_eq!(Branch::from_clock_hour(23), Branch::Zi);
        assert_eq!(Branch::from_clock_hour(0), Branch::Zi);
        assert_eq!(Branch::from_clock_hour(1), Branch::Chou);
        assert_eq!(Branch::from_clock_hour(9), Branch::Si);
        assert_eq!(Branch::from_clock_hour(14), Branch::Wei);
        assert_eq!(Branch::from_clock_hour(22), Branch::Hai);
    }

    #[test]
    fn trines() {
        assert_eq!(Branch::Zi.trine_leader(), Branch::Shen); // 申子辰
        assert_eq!(Branch::You.trine_leader(), Branch::Si); // 巳酉丑
        assert_eq!(Branch::Wu.post_horse(), Branch::Shen); // 寅午戌→申
        assert_eq!(Branch::Mao.post_horse(), Branch::Si); // 亥卯未→巳
    }
}
