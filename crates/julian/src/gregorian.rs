//! Validated proleptic Gregorian date and Julian day conversions.

use serde::Serialize;

use crate::day::JulianDay;
use crate::error::DateError;

/// First Julian day number of the Gregorian calendar reform
/// (1582-10-15). Below this threshold the conversion formulas switch to
/// Julian-calendar arithmetic.
const GREGORIAN_REFORM_JDN: i64 = 2_299_161;

/// Number of days in each month of a common year (index 0 unused).
const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A date in the proleptic Gregorian calendar.
///
/// The constructor validates the month and the day-within-month
/// (leap-year aware), so every `GregorianDate` denotes a real calendar
/// day and the conversion core stays total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl PartialOrd for GregorianDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GregorianDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

/// Returns whether `year` is a leap year in the proleptic Gregorian
/// calendar.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the given month of the given year.
///
/// Months outside 1..=12 return 0.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    if !(1..=12).contains(&month) {
        return 0;
    }
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[month as usize]
    }
}

impl GregorianDate {
    /// Creates a new `GregorianDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`DateError`] if the month is outside 1..=12 or the day
    /// does not exist in that month of that year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidMonth { month });
        }
        let max_day = days_in_month(year, month);
        if !(1..=max_day).contains(&day) {
            return Err(DateError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Converts this date to its Julian day number.
    ///
    /// Uses the standard integer formula; dates that land below the
    /// Gregorian reform threshold are recomputed with Julian-calendar
    /// arithmetic, matching the reference algorithm.
    pub fn julian_day(self) -> JulianDay {
        let (dd, mm, yy) = (self.day as i64, self.month as i64, self.year as i64);
        let a = (14 - mm) / 12;
        let y = yy + 4800 - a;
        let m = mm + 12 * a - 3;
        let mut jd = dd + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045;
        if jd < GREGORIAN_REFORM_JDN {
            jd = dd + (153 * m + 2) / 5 + 365 * y + y / 4 - 32083;
        }
        JulianDay::new(jd)
    }

    /// Converts a Julian day number back to a calendar date.
    ///
    /// Inverse of [`julian_day`](Self::julian_day), with the same reform
    /// threshold branch. The result is valid by construction, so no
    /// validation is performed.
    pub fn from_julian_day(jd: JulianDay) -> Self {
        let z = jd.get();
        let a = if z >= GREGORIAN_REFORM_JDN {
            let alpha = ((z as f64 - 1_867_216.25) / 36_524.25) as i64;
            z + 1 + alpha - alpha / 4
        } else {
            z
        };
        let b = a + 1524;
        let c = ((b as f64 - 122.1) / 365.25) as i64;
        let d = (365.25 * c as f64) as i64;
        let e = ((b - d) as f64 / 30.6001) as i64;
        let day = b - d - (30.6001 * e as f64) as i64;
        let month = if e < 14 { e - 1 } else { e - 13 };
        let year = if month > 2 { c - 4716 } else { c - 4715 };
        Self {
            year: year as i32,
            month: month as u8,
            day: day as u8,
        }
    }
}
