//! Day-number conversion for the proleptic Gregorian calendar.
//!
//! Day numbers count days since 1970-01-01 (day 0). The conversions follow
//! Howard Hinnant's `days_from_civil`/`civil_from_days` algorithms, which work
//! in 400-year eras starting on March 1st so the leap day falls at the end of
//! the computational year.

use crate::consts::{DAYS_PER_ERA, MONTHS_PER_YEAR, UNIX_EPOCH_DAYS};

/// Converts a calendar date to its day number relative to 1970-01-01.
///
/// `month` and `day` are expected to be already validated; the year may be
/// any value, including ones outside the range a `Date` accepts.
pub fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let month = i64::from(month);
    let day = i64::from(day);

    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400; // [0, 399]
    let mp = (month + 9) % 12; // March = 0 .. February = 11
    let doy = (153 * mp + 2) / 5 + day - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * DAYS_PER_ERA + doe - UNIX_EPOCH_DAYS
}

/// Converts a day number relative to 1970-01-01 back to `(year, month, day)`.
///
/// The year is returned unchecked so callers can report out-of-range results.
pub fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + UNIX_EPOCH_DAYS;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z - era * DAYS_PER_ERA; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
    let month = if mp < 10 { mp + 3 } else { mp - 9 }; // [1, 12]
    let year = yoe + era * 400 + i64::from(month <= 2);

    // Both values are bounded by the ranges noted above
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    (year, month as u8, day as u8)
}

/// Moves `(year, month)` by `months`, carrying whole years in either direction.
///
/// The year is returned unchecked.
pub fn shift_months(year: i64, month: u8, months: i64) -> (i64, u8) {
    let index = year * MONTHS_PER_YEAR + i64::from(month) - 1 + months;
    let new_year = index.div_euclid(MONTHS_PER_YEAR);

    // rem_euclid keeps this in 0..12
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let new_month = index.rem_euclid(MONTHS_PER_YEAR) as u8 + 1;
    (new_year, new_month)
}
