//! The Five Elements (WuXing) and their generating/controlling cycles.
//!
//! Every relational derivation in the engine (Ten Gods, Six Relations,
//! Ti/Yong, lesson analysis) reduces to comparisons along these two
//! cycles.

use serde::{Deserialize, Serialize};

/// The Five Elements in generating-cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum WuXing {
    Wood = 0,
    Fire = 1,
    Earth = 2,
    Metal = 3,
    Water = 4,
}

/// All five elements in generating-cycle order (木→火→土→金→水).
pub const ALL_WUXING: [WuXing; 5] = [
    WuXing::Wood,
    WuXing::Fire,
    WuXing::Earth,
    WuXing::Metal,
    WuXing::Water,
];

impl WuXing {
    /// Create from raw u8 value.
    pub fn from_u8(v: u8) -> Option<Self> {
        if (v as usize) < ALL_WUXING.len() {
            Some(ALL_WUXING[v as usize])
        } else {
            None
        }
    }

    /// 0-based index in generating-cycle order.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// The element this one generates (木生火, 火生土, ...).
    pub const fn generates(self) -> Self {
        ALL_WUXING[(self as u8 as usize + 1) % 5]
    }

    /// The element this one controls (木克土, 土克水, ...).
    pub const fn controls(self) -> Self {
        ALL_WUXING[(self as u8 as usize + 2) % 5]
    }

    /// Relation of `self` toward `other`.
    pub fn relation_to(self, other: Self) -> ElementRelation {
        if self == other {
            ElementRelation::Same
        } else if self.generates() == other {
            ElementRelation::Generates
        } else if other.generates() == self {
            ElementRelation::GeneratedBy
        } else if self.controls() == other {
            ElementRelation::Controls
        } else {
            ElementRelation::ControlledBy
        }
    }
}

/// The five possible relations between two elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementRelation {
    /// Same element (比和).
    Same,
    /// Self generates other (生).
    Generates,
    /// Other generates self (被生).
    GeneratedBy,
    /// Self controls other (克).
    Controls,
    /// Other controls self (被克).
    ControlledBy,
}

impl ElementRelation {
    /// Classical label, from the perspective of the first element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Same => "比和",
            Self::Generates => "生",
            Self::GeneratedBy => "被生",
            Self::Controls => "克",
            Self::ControlledBy => "被克",
        }
    }
}
