//! Shared primitives for Chinese calendrical and divination calculations.
//!
//! This crate provides:
//! - Heavenly Stems, Earthly Branches, and the sexagenary cycle
//! - The Five Elements and their generating/controlling cycles
//! - Static correspondence tables: NaYin, hidden stems, Na Jia
//! - Trigrams, the 64 hexagrams, and eight-palace affiliation
//!
//! Everything here is pure data and const arithmetic; no I/O, no state.

pub mod branch;
pub mod hexagram;
pub mod hidden_stems;
pub mod najia;
pub mod nayin;
pub mod sexagenary;
pub mod stem;
pub mod trigram;
pub mod wuxing;

pub use branch::{ALL_BRANCHES, Branch};
pub use hexagram::{
    HEXAGRAM_NAMES, Hexagram, KING_WEN_NUMBERS, PalaceAffiliation, SHI_POSITIONS,
    palace_affiliation, ying_position,
};
pub use hidden_stems::{HIDDEN_STEMS, hidden_stems, primary_qi};
pub use najia::{INNER_BRANCHES, INNER_STEMS, OUTER_BRANCHES, OUTER_STEMS, najia_for_line};
pub use nayin::{NAYIN, nayin_element, nayin_name};
pub use sexagenary::{StemBranch, all_sexagenary};
pub use stem::{ALL_STEMS, Stem};
pub use trigram::{ALL_TRIGRAMS, Trigram};
pub use wuxing::{ALL_WUXING, ElementRelation, WuXing};
