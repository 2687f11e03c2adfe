use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_YEAR,
};
use crate::error::DateError;
use crate::prelude::*;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}", _0)]
pub struct Year(NonZeroU16);

impl Year {
    /// The earliest representable year (1)
    pub const MIN: Self = Self(NonZeroU16::MIN);
    /// The latest representable year (`MAX_YEAR`)
    pub const MAX: Self = Self(match NonZeroU16::new(MAX_YEAR) {
        Some(year) => year,
        None => panic!("MAX_YEAR is non-zero"),
    });

    /// Creates a new Year, validating that it lies in `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        let non_zero = NonZeroU16::new(value).ok_or(DateError::InvalidYear(value.into()))?;
        if value < MIN_YEAR || value > MAX_YEAR {
            return Err(DateError::InvalidYear(value.into()));
        }
        Ok(Self(non_zero))
    }

    /// Validates a year produced by arithmetic, which may not fit in `u16`
    pub(crate) fn from_i64(value: i64) -> Result<Self, DateError> {
        u16::try_from(value)
            .map_err(|_| DateError::InvalidYear(value))
            .and_then(Self::new)
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether this year has a February 29th
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}", _0)]
pub struct Month(NonZeroU8);

impl Month {
    pub const JANUARY: Self = Self(NonZeroU8::MIN);
    pub const DECEMBER: Self = Self(match NonZeroU8::new(DECEMBER) {
        Some(month) => month,
        None => panic!("DECEMBER is non-zero"),
    });

    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

/// A day value guaranteed to be valid for the year and month it was checked against.
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
///
/// There is no context-free `TryFrom<u8>`: a day is only meaningful next to
/// its year and month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}", _0)]
pub struct Day(NonZeroU8);

impl Day {
    /// The first day of any month
    pub const FIRST: Self = Self(NonZeroU8::MIN);
    /// The last day of December
    pub(crate) const LAST_OF_DECEMBER: Self =
        Self(match NonZeroU8::new(DAYS_IN_MONTH[DECEMBER as usize]) {
            Some(day) => day,
            None => panic!("December has days"),
        });

    /// Creates a new Day, validating that it's non-zero and fits the given year and month
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, DateError> {
        let max = days_in_month(year, month);
        let invalid = || DateError::InvalidDay {
            year: year.get(),
            month: month.get(),
            day: value,
            max,
        };

        let non_zero = NonZeroU8::new(value).ok_or_else(invalid)?;
        if value > max {
            return Err(invalid());
        }
        Ok(Self(non_zero))
    }

    /// Lowers the day to the last day of `year`/`month` if it runs past it.
    /// Never fails; returns `self` unchanged when it already fits.
    pub(crate) fn clamp_to(self, year: Year, month: Month) -> Self {
        let max = days_in_month(year, month);
        if self.get() <= max {
            return self;
        }
        // `max` is a month length, never zero
        NonZeroU8::new(max).map_or(self, Self)
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

// Helper functions

/// Gregorian leap rule: every 4th year, except centuries not divisible by 400.
pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`.
pub const fn days_in_month(year: Year, month: Month) -> u8 {
    if month.get() == FEBRUARY && year.is_leap() {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.get() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: u16, month: u8) -> (Year, Month) {
        (Year::new(year).unwrap(), Month::new(month).unwrap())
    }

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(2000).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_invalid_zero() {
        let result = Year::new(0);
        assert!(matches!(result, Err(DateError::InvalidYear(0))));
    }

    #[test]
    fn test_year_new_invalid_too_large() {
        let result = Year::new(10000);
        assert!(matches!(result, Err(DateError::InvalidYear(10000))));
    }

    #[test]
    fn test_year_from_i64_out_of_u16_range() {
        assert!(matches!(
            Year::from_i64(-1),
            Err(DateError::InvalidYear(-1))
        ));
        assert!(matches!(
            Year::from_i64(70_000),
            Err(DateError::InvalidYear(70_000))
        ));
        assert_eq!(Year::from_i64(2024).unwrap().get(), 2024);
    }

    #[test]
    fn test_year_display() {
        let year = Year::new(2024).unwrap();
        assert_eq!(year.to_string(), "2024");
    }

    #[test]
    fn test_year_try_from_and_into_u16() {
        let year: Year = 2024.try_into().unwrap();
        let value: u16 = year.into();
        assert_eq!(value, 2024);

        let result: Result<Year, _> = 0.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(DateError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(DateError::InvalidMonth(13))));
        assert!(matches!(Month::new(255), Err(DateError::InvalidMonth(255))));
    }

    #[test]
    fn test_month_ordering() {
        let m1 = Month::new(3).unwrap();
        let m2 = Month::new(8).unwrap();
        assert!(m1 < m2);
        assert_eq!(u8::from(m2), 8);
    }

    #[test]
    fn test_day_new_valid() {
        let (y, m) = ym(2024, 1);
        assert!(Day::new(1, y, m).is_ok());
        assert!(Day::new(31, y, m).is_ok());

        let (y, m) = ym(2023, 2);
        assert!(Day::new(28, y, m).is_ok());
        assert!(Day::new(29, y, m).is_err());

        let (y, m) = ym(2024, 2);
        assert!(Day::new(29, y, m).is_ok());
        assert!(Day::new(30, y, m).is_err());

        let (y, m) = ym(2024, 4);
        assert!(Day::new(30, y, m).is_ok());
        assert!(Day::new(31, y, m).is_err());
    }

    #[test]
    fn test_day_new_invalid_reports_context() {
        let (y, m) = ym(2024, 1);
        assert_eq!(
            Day::new(32, y, m),
            Err(DateError::InvalidDay {
                year: 2024,
                month: 1,
                day: 32,
                max: 31
            })
        );
        assert!(matches!(
            Day::new(0, y, m),
            Err(DateError::InvalidDay { day: 0, .. })
        ));
    }

    #[test]
    fn test_day_clamp_to() {
        let (y, m) = ym(2024, 1);
        let day = Day::new(31, y, m).unwrap();

        let (y, m) = ym(2023, 2);
        assert_eq!(day.clamp_to(y, m).get(), 28);
        let (y, m) = ym(2024, 2);
        assert_eq!(day.clamp_to(y, m).get(), 29);
        let (y, m) = ym(2024, 6);
        assert_eq!(day.clamp_to(y, m).get(), 30);
        let (y, m) = ym(2024, 12);
        assert_eq!(day.clamp_to(y, m).get(), 31);

        let (y, m) = ym(2024, 1);
        let early = Day::new(15, y, m).unwrap();
        let (y, m) = ym(2023, 2);
        assert_eq!(early.clamp_to(y, m), early);
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: u16,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 4,
                is_leap: true,
                description: "first leap year of the era",
            },
            TestCase {
                year: 9996,
                is_leap: true,
                description: "last leap year in range",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap {
                    "leap year"
                } else {
                    "not leap year"
                }
            );
        }
    }

    #[test]
    fn test_is_leap_year_matches_rule_everywhere() {
        for year in 1..=MAX_YEAR {
            let expected = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
            assert_eq!(is_leap_year(year), expected, "Year {year}");
        }
    }

    #[test]
    fn test_days_in_month_full_range() {
        let table = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for year in 1..=MAX_YEAR {
            for month in 1..=MAX_MONTH {
                let (y, m) = ym(year, month);
                let expected = if month == 2 && is_leap_year(year) {
                    29
                } else {
                    table[month as usize]
                };
                assert_eq!(days_in_month(y, m), expected, "{year}-{month:02}");
            }
        }
    }
}
