//! A self-validating calendar date in the proleptic Gregorian calendar.
//!
//! [`Date`] always holds a real `(year, month, day)` triple with the year in
//! `1..=9999`. Strict operations ([`Date::new`], [`Date::set_date`],
//! [`Date::set_day`] and the `add_*` family) reject invalid results and leave
//! the date untouched. [`Date::set_year`] and [`Date::set_month`] instead clamp
//! the day to the end of the new month.
//!
//! ```
//! use gregorian_date::{Date, DateError};
//!
//! let mut date = Date::new(2024, 1, 31)?;
//! date.add_months(1)?;
//! assert_eq!(date.to_string(), "29.02.2024");
//!
//! date.set_year(2023)?;
//! assert_eq!(date.to_string(), "28.02.2023");
//!
//! assert_eq!(date.set_day(29), Err(DateError::InvalidDay { year: 2023, month: 2, day: 29, max: 28 }));
//! # Ok::<(), DateError>(())
//! ```

mod calendar;
mod clock;
mod consts;
mod error;
mod prelude;
mod types;

pub use calendar::{civil_from_days, days_from_civil};
pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use error::DateError;
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;

/// A calendar date that is valid by construction.
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:02}.{:02}.{:04}", "day.get()", "month.get()", "year.get()")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(u16, u8, u8)", into = "(u16, u8, u8)")
)]
pub struct Date {
    // Field order gives the derived `Ord` its chronological meaning
    year: Year,
    month: Month,
    day: Day,
}

impl Date {
    /// 0001-01-01
    pub const MIN: Self = Self {
        year: Year::MIN,
        month: Month::JANUARY,
        day: Day::FIRST,
    };

    /// 9999-12-31
    pub const MAX: Self = Self {
        year: Year::MAX,
        month: Month::DECEMBER,
        day: Day::LAST_OF_DECEMBER,
    };

    /// Creates a date from its components.
    ///
    /// # Errors
    /// Returns the first failing check, in order: `InvalidYear`,
    /// `InvalidMonth`, `InvalidDay`.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Self::validate(year, month, day)
    }

    /// Creates a date set to "today" as reported by `clock`.
    pub fn today(clock: &impl Clock) -> Self {
        clock.today()
    }

    /// Returns whether `Date::new(year, month, day)` would succeed.
    pub fn is_valid_date(year: u16, month: u8, day: u8) -> bool {
        Self::validate(year, month, day).is_ok()
    }

    /// Shared by construction, `set_date` and `is_valid_date`
    fn validate(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Validates a triple whose year came out of arithmetic
    pub(crate) fn from_civil(year: i64, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::from_i64(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Returns `(year, month, day)`.
    pub const fn to_ymd(&self) -> (u16, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }

    /// Length of the month this date falls in.
    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// Days since 1970-01-01; negative for earlier dates.
    pub fn day_number(&self) -> i64 {
        days_from_civil(self.year.get().into(), self.month.get(), self.day.get())
    }

    /// Replaces all three components at once.
    ///
    /// # Errors
    /// Same checks as [`Date::new`]. On error the date is unchanged.
    pub fn set_date(&mut self, year: u16, month: u8, day: u8) -> Result<(), DateError> {
        *self = Self::validate(year, month, day)?;
        Ok(())
    }

    /// Sets the year, then pulls the day back to the end of the month if it
    /// no longer fits (29 February in a non-leap year becomes the 28th).
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if `year` is outside `1..=9999`; the
    /// date is unchanged.
    pub fn set_year(&mut self, year: u16) -> Result<(), DateError> {
        self.year = Year::new(year)?;
        self.adjust_day_for_new_year_month();
        Ok(())
    }

    /// Sets the month, then pulls the day back to the end of the month if it
    /// no longer fits.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if `month` is outside `1..=12`; the
    /// date is unchanged.
    pub fn set_month(&mut self, month: u8) -> Result<(), DateError> {
        self.month = Month::new(month)?;
        self.adjust_day_for_new_year_month();
        Ok(())
    }

    /// Sets the day. Unlike the year and month setters this never clamps.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if `day` does not exist in the current
    /// month; the date is unchanged.
    pub fn set_day(&mut self, day: u8) -> Result<(), DateError> {
        self.day = Day::new(day, self.year, self.month)?;
        Ok(())
    }

    fn adjust_day_for_new_year_month(&mut self) {
        let clamped = self.day.clamp_to(self.year, self.month);
        if clamped != self.day {
            tracing::debug!(
                year = self.year.get(),
                month = self.month.get(),
                from = self.day.get(),
                to = clamped.get(),
                "clamped day to end of month"
            );
            self.day = clamped;
        }
    }

    /// Moves the date by `days`, crossing month and year boundaries.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the result falls outside
    /// 0001-01-01..=9999-12-31; the date is unchanged.
    pub fn add_days(&mut self, days: i32) -> Result<(), DateError> {
        if days == 0 {
            return Ok(());
        }
        let (year, month, day) = civil_from_days(self.day_number() + i64::from(days));
        self.apply_shift("days", days, Self::from_civil(year, month, day))
    }

    /// Moves the date by `months`, clamping the day to the target month's
    /// length (31 January + 1 month is the last day of February).
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the target year is outside
    /// `1..=9999`; the date is unchanged.
    pub fn add_months(&mut self, months: i32) -> Result<(), DateError> {
        if months == 0 {
            return Ok(());
        }
        let (year, month) =
            calendar::shift_months(self.year.get().into(), self.month.get(), months.into());
        self.apply_shift("months", months, self.with_year_month(year, month))
    }

    /// Moves the date by `years`, clamping 29 February to the 28th when the
    /// target year is not a leap year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the target year is outside
    /// `1..=9999`; the date is unchanged.
    pub fn add_years(&mut self, years: i32) -> Result<(), DateError> {
        if years == 0 {
            return Ok(());
        }
        let year = i64::from(self.year.get()) + i64::from(years);
        self.apply_shift("years", years, self.with_year_month(year, self.month.get()))
    }

    /// Same day in another month, clamped to fit
    fn with_year_month(&self, year: i64, month: u8) -> Result<Self, DateError> {
        let year = Year::from_i64(year)?;
        let month = Month::new(month)?;
        let day = self.day.clamp_to(year, month);
        Ok(Self { year, month, day })
    }

    fn apply_shift(
        &mut self,
        unit: &'static str,
        amount: i32,
        target: Result<Self, DateError>,
    ) -> Result<(), DateError> {
        let target = target.inspect_err(|err| {
            tracing::debug!(from = %self, unit, amount, error = %err, "rejected date shift");
        })?;
        self.set_date(target.year(), target.month(), target.day())
    }
}

impl TryFrom<(u16, u8, u8)> for Date {
    type Error = DateError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<Date> for (u16, u8, u8) {
    fn from(date: Date) -> Self {
        date.to_ymd()
    }
}
