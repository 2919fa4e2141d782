//! Convenience facade over the tianji calculation crates.
//!
//! Re-exports the six `calculate_*` entry points, their input/result
//! types, and the analysis-context extractors, plus one-call helpers
//! for the common solar-birth case.

pub use tianji_base::{
    Branch, ElementRelation, Hexagram, Stem, StemBranch, Trigram, WuXing,
};
pub use tianji_calendar::{
    CalendarError, ClockTime, LunarDate, MomentOptions, SexagenaryMoment, SolarDate, SolarTerm,
    ZiHourMode, lunar_to_solar, sexagenary_moment, solar_to_lunar,
};
pub use tianji_charts::{
    BaziAnalysisContext, BaziChart, BaziInput, CalendarType, ChartError, Gender,
    LiurenAnalysisContext, LiurenBoard, LiurenInput, LiuyaoAnalysisContext, LiuyaoInput,
    LiuyaoResult, MeihuaAnalysisContext, MeihuaCast, MeihuaInput, MeihuaResult,
    QimenAnalysisContext, QimenBoard, QimenInput, QueryMoment, ZiweiAnalysisContext, ZiweiChart,
    ZiweiInput, calculate_bazi, calculate_liuren, calculate_liuyao, calculate_liuyao_with_rng,
    calculate_meihua, calculate_qimen, calculate_ziwei, extract_bazi_analysis_context,
    extract_liuren_analysis_context, extract_liuyao_analysis_context,
    extract_meihua_analysis_context, extract_qimen_analysis_context,
    extract_ziwei_analysis_context,
};

/// BaZi chart for a solar birth moment.
pub fn bazi_chart(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    gender: Gender,
) -> Result<BaziChart, ChartError> {
    calculate_bazi(&BaziInput {
        moment: QueryMoment::solar(year, month, day, hour, minute),
        gender,
    })
}

/// Zi Wei chart for a solar birth moment.
pub fn ziwei_chart(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    gender: Gender,
) -> Result<ZiweiChart, ChartError> {
    calculate_ziwei(&ZiweiInput {
        moment: QueryMoment::solar(year, month, day, hour, minute),
        gender,
    })
}

/// Qi Men board for a solar query moment.
pub fn qimen_board(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
) -> Result<QimenBoard, ChartError> {
    calculate_qimen(&QimenInput {
        moment: QueryMoment::solar(year, month, day, hour, minute),
    })
}

/// Da Liu Ren board for a solar query moment.
pub fn liuren_board(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
) -> Result<LiurenBoard, ChartError> {
    calculate_liuren(&LiurenInput {
        moment: QueryMoment::solar(year, month, day, hour, minute),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_round_trip() {
        let chart = bazi_chart(1986, 5, 29, 0, 0, Gender::Male).unwrap();
        assert_eq!(chart.pillars.day.stem_branch.name(), "癸酉");
        let ctx = extract_bazi_analysis_context(&chart);
        assert!(ctx.pillars.contains("癸酉日"));
    }

    #[test]
    fn facade_propagates_validation() {
        let err = qimen_board(1899, 1, 1, 0, 0).unwrap_err();
        assert!(err.to_string().contains("1900-2100"));
    }
}
