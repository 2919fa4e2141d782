//! The six chart calculators: BaZi, Zi Wei Dou Shu, Qi Men Dun Jia,
//! Liu Yao, Da Liu Ren, and Mei Hua Yi Shu.
//!
//! Each system exposes a pure `calculate_*` entry point taking a plain
//! input record and returning a complete immutable result, plus an
//! `extract_*_analysis_context` flattener producing the plain-text
//! summary strings the prompt-assembly layer consumes. Pipelines log
//! their steps through `tracing` at debug level.

pub mod bazi;
pub mod bazi_data;
pub mod bazi_types;
pub mod error;
pub mod input;
pub mod liuren;
pub mod liuren_data;
pub mod liuren_types;
pub mod liuyao;
pub mod liuyao_types;
pub mod meihua;
pub mod meihua_types;
pub mod qimen;
pub mod qimen_data;
pub mod qimen_types;
pub mod ziwei;
pub mod ziwei_data;
pub mod ziwei_types;

pub use bazi::{calculate_bazi, extract_bazi_analysis_context};
pub use bazi_types::{
    BaziAnalysisContext, BaziChart, BaziInput, DaYunCycle, FiveElementCount, FourPillarGods,
    FourPillars, HiddenGod, LifeStage, LiuNianFortune, Palace, PalaceKind, Pillar, PillarGods,
    ShenSha, TenGod, YunInfo,
};
pub use error::ChartError;
pub use input::{CalendarType, Gender, QueryMoment};
pub use liuren::{calculate_liuren, extract_liuren_analysis_context};
pub use liuren_types::{
    GENERAL_SEQUENCE, LiurenAnalysisContext, LiurenBoard, LiurenInput, LiurenLesson,
    LiurenPosition, LiurenTransmission, TwelveGeneral,
};
pub use liuyao::{calculate_liuyao, calculate_liuyao_with_rng, extract_liuyao_analysis_context};
pub use liuyao_types::{
    ALL_RELATIONS, ChangedLine, HexagramSummary, HiddenGodEntry, LiuyaoAnalysisContext,
    LiuyaoInput, LiuyaoLine, LiuyaoResult, SixRelation, SixSpirit,
};
pub use meihua::{calculate_meihua, extract_meihua_analysis_context};
pub use meihua_types::{
    MeihuaAnalysisContext, MeihuaCast, MeihuaHexagram, MeihuaInput, MeihuaResult, TiYongAnalysis,
};
pub use qimen::{calculate_qimen, extract_qimen_analysis_context};
pub use qimen_types::{
    Deity, DunType, Gate, NineStar, QimenAnalysisContext, QimenBoard, QimenInput, QimenPalace,
};
pub use ziwei::{calculate_ziwei, extract_ziwei_analysis_context};
pub use ziwei_types::{
    ALL_MAIN_STARS, Brightness, Bureau, DecadeLuck, MainStar, PALACE_NAMES, PalaceStar, SiHua,
    ZiweiAnalysisContext, ZiweiChart, ZiweiInput, ZiweiPalace,
};
