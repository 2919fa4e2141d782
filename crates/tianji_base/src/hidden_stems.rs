//! Hidden stems (地支藏干): the 1-3 stems stored inside each branch.
//!
//! Listed primary qi first (本气, then 中气, then 余气); the BaZi
//! pattern derivation takes the primary, the element distribution
//! counts all of them.

use crate::branch::Branch;
use crate::stem::Stem;

/// Hidden stems per branch, cycle order, primary qi first.
pub const HIDDEN_STEMS: [&[Stem]; 12] = [
    &[Stem::Gui],                      // 子
    &[Stem::Ji, Stem::Gui, Stem::Xin], // 丑
    &[Stem::Jia, Stem::Bing, Stem::Wu], // 寅
    &[Stem::Yi],                       // 卯
    &[Stem::Wu, Stem::Yi, Stem::Gui],  // 辰
    &[Stem::Bing, Stem::Geng, Stem::Wu], // 巳
    &[Stem::Ding, Stem::Ji],           // 午
    &[Stem::Ji, Stem::Ding, Stem::Yi], // 未
    &[Stem::Geng, Stem::Ren, Stem::Wu], // 申
    &[Stem::Xin],                      // 酉
    &[Stem::Wu, Stem::Xin, Stem::Ding], // 戌
    &[Stem::Ren, Stem::Jia],           // 亥
];

/// Hidden stems of a branch, primary qi first.
pub const fn hidden_stems(branch: Branch) -> &'static [Stem] {
    HIDDEN_STEMS[branch.index() as usize]
}

/// Primary qi (本气) of a branch.
pub const fn primary_qi(branch: Branch) -> Stem {
    HIDDEN_STEMS[branch.index() as usize][0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;

    #[test]
    fn yin_holds_jia_bing_wu() {
        assert_eq!(hidden_stems(Branch::Yin), &[Stem::Jia, Stem::Bing, Stem::Wu]);
    }

    #[test]
    fn zi_holds_only_gui() {
        assert_eq!(hidden_stems(Branch::Zi), &[Stem::Gui]);
    }

    #[test]
    fn every_branch_has_one_to_three() {
        for &b in &ALL_BRANCHES {
            let n = hidden_stems(b).len();
            assert!((1..=3).contains(&n), "{} has {} hidden stems", b.name(), n);
        }
    }

    #[test]
    fn primary_qi_matches_branch_element() {
        // the primary hidden stem always carries the branch's own element
        for &b in &ALL_BRANCHES {
            assert_eq!(primary_qi(b).element(), b.element(), "branch {}", b.name());
        }
    }
}
