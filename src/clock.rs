//! Source of "today" for [`Date::today`].
//!
//! The date type never reads the system clock on its own; callers hand it a
//! [`Clock`] so tests and deterministic code can pin the current date.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::Date;
use crate::calendar::civil_from_days;

const SECONDS_PER_DAY: u64 = 86_400;

/// Provides the current calendar date.
pub trait Clock: Send + Sync {
    /// Returns today's date.
    fn today(&self) -> Date;
}

/// A clock that always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

/// The operating system clock, read as a UTC calendar date.
///
/// Times before 1970-01-01 or past 9999-12-31 saturate to the nearest
/// representable date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl SystemClock {
    fn date_from_unix_days(days: i64) -> Date {
        if days <= Date::MIN.day_number() {
            return Date::MIN;
        }
        if days >= Date::MAX.day_number() {
            return Date::MAX;
        }
        let (year, month, day) = civil_from_days(days);
        Date::from_civil(year, month, day).unwrap_or(Date::MIN)
    }
}

impl Clock for SystemClock {
    fn today(&self) -> Date {
        let days = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs() / SECONDS_PER_DAY);
        Self::date_from_unix_days(i64::try_from(days).unwrap_or(i64::MAX))
    }
}
