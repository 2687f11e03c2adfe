use crate::consts::{MAX_MONTH, MAX_YEAR, MIN_YEAR};

/// Error type for date construction, mutation and arithmetic.
///
/// All variants are input-validation failures. A failed operation never leaves
/// a [`Date`](crate::Date) partially updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum DateError {
    /// Year outside `MIN_YEAR..=MAX_YEAR`.
    ///
    /// Carries an `i64` because arithmetic can produce years well outside
    /// the `u16` range before they are rejected.
    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(i64),

    /// Month outside `1..=MAX_MONTH`.
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    /// Day outside `1..=max` for the given year and month.
    #[error("Invalid day {day} for month {year:04}-{month:02} (must be 1-{max})")]
    InvalidDay { year: u16, month: u8, day: u8, max: u8 },
}
