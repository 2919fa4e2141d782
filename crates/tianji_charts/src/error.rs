//! Error type shared by the six calculators.

use thiserror::Error;

use tianji_calendar::CalendarError;

/// Errors from input validation or calendar resolution. Every
/// calculator fails fast, before any table lookup, or returns a
/// complete result; there is no partial state.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Calendar conversion or pillar derivation failed.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    /// A manual Liu Yao line value outside the four cast outcomes.
    #[error("invalid line value {0}: cast outcomes are 6, 7, 8, 9")]
    InvalidLineValue(u8),
    /// A manual Liu Yao cast with other than six lines.
    #[error("expected 6 line values, got {0}")]
    WrongLineCount(usize),
    /// A Meihua cast number must be positive.
    #[error("cast numbers must be positive, got {0}")]
    InvalidCastNumber(u64),
}
