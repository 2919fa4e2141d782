//! The sexagenary cycle (六十甲子): stem-branch pairs.
//!
//! A `StemBranch` is one of the 60 valid stem/branch pairings. Stems and
//! branches of a valid pair always share parity, which the index
//! construction guarantees; `from_parts` rejects mismatched pairs.

use serde::{Deserialize, Serialize};

use crate::branch::{ALL_BRANCHES, Branch};
use crate::stem::{ALL_STEMS, Stem};

/// One term of the sexagenary cycle, stored as its 0-based index
/// (甲子=0 … 癸亥=59).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StemBranch {
    index: u8,
}

impl StemBranch {
    /// Create from a 0-based cycle index (0-59).
    pub fn from_index(index: u8) -> Option<Self> {
        if index < 60 { Some(Self { index }) } else { None }
    }

    /// Create from an arbitrary integer offset into the cycle.
    pub fn from_offset(offset: i64) -> Self {
        Self {
            index: offset.rem_euclid(60) as u8,
        }
    }

    /// Create from stem and branch. Returns `None` when parities differ
    /// (no such term exists in the cycle).
    pub fn from_parts(stem: Stem, branch: Branch) -> Option<Self> {
        if stem.is_yang() != branch.is_yang() {
            return None;
        }
        // index ≡ stem (mod 10), index ≡ branch (mod 12)
        for k in 0..6u8 {
            let idx = stem.index() + 10 * k;
            if idx % 12 == branch.index() {
                return Some(Self { index: idx });
            }
        }
        None
    }

    /// 0-based cycle index (甲子=0).
    pub const fn index(self) -> u8 {
        self.index
    }

    /// The stem component.
    pub const fn stem(self) -> Stem {
        ALL_STEMS[(self.index % 10) as usize]
    }

    /// The branch component.
    pub const fn branch(self) -> Branch {
        ALL_BRANCHES[(self.index % 12) as usize]
    }

    /// Combined textual form, e.g. "甲子".
    pub fn name(self) -> String {
        format!("{}{}", self.stem().name(), self.branch().name())
    }

    /// Step `n` terms through the cycle (negative steps backward).
    pub fn shift(self, n: i64) -> Self {
        Self::from_offset(self.index as i64 + n)
    }

    /// Head of the enclosing decade (旬首): the 甲-stem term opening the
    /// decade this term belongs to.
    pub const fn xun_head(self) -> Self {
        Self {
            index: self.index - self.index % 10,
        }
    }

    /// The two void branches (旬空) of the enclosing decade: the branches
    /// not reached before the decade's ten terms run out.
    pub const fn xun_kong(self) -> [Branch; 2] {
        let head_branch = (self.index - self.index % 10) % 12;
        [
            ALL_BRANCHES[((head_branch + 10) % 12) as usize],
            ALL_BRANCHES[((head_branch + 11) % 12) as usize],
        ]
    }
}

/// All 60 terms in cycle order.
pub fn all_sexagenary() -> impl Iterator<Item = StemBranch> {
    (0..60u8).map(|i| StemBranch { index: i })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last_terms() {
        let jiazi = StemBranch::from_index(0).unwrap();
        assert_eq!(jiazi.stem(), Stem::Jia);
        assert_eq!(jiazi.branch(), Branch::Zi);
        assert_eq!(jiazi.name(), "甲子");

        let guihai = StemBranch::from_index(59).unwrap();
        assert_eq!(guihai.name(), "癸亥");
        assert_eq!(StemBranch::from_index(60), None);
    }

    #[test]
    fn parity_always_shared() {
        for sb in all_sexagenary() {
            assert_eq!(sb.stem().is_yang(), sb.branch().is_yang());
        }
    }

    #[test]
    fn from_parts_round_trips() {
        for sb in all_sexagenary() {
            assert_eq!(StemBranch::from_parts(sb.stem(), sb.branch()), Some(sb));
        }
        // mismatched parity has no term
        assert_eq!(StemBranch::from_parts(Stem::Jia, Branch::Chou), None);
    }

    #[test]
    fn offset_wraps_both_ways() {
        assert_eq!(StemBranch::from_offset(60).index(), 0);
        assert_eq!(StemBranch::from_offset(-1).index(), 59);
        let sb = StemBranch::from_index(58).unwrap();
        assert_eq!(sb.shift(3).index(), 1);
        assert_eq!(sb.shift(-59).index(), 59);
    }

    #[test]
    fn xun_of_jiazi_decade() {
        // 癸酉 (index 9) sits in the 甲子 decade; 戌亥 are void
        let sb = StemBranch::from_index(9).unwrap();
        assert_eq!(sb.name(), "癸酉");
        assert_eq!(sb.xun_head().name(), "甲子");
        assert_eq!(sb.xun_kong(), [Branch::Xu, Branch::Hai]);
    }

    #[test]
    fn xun_of_jiayin_decade() {
        // 丙辰 (index 52) sits in the 甲寅 decade; 子丑 are void
        let sb = StemBranch::from_index(52).unwrap();
        assert_eq!(sb.xun_head().name(), "甲寅");
        assert_eq!(sb.xun_kong(), [Branch::Zi, Branch::Chou]);
    }
}
