//! Lunisolar date value type.

use serde::Serialize;

use crate::error::LunisolarError;

/// A date in the Vietnamese lunisolar calendar.
///
/// `day` is the 1-based offset from the new moon that starts the month,
/// `month` is the 1-based month ordinal within the lunar year, and
/// `leap` is true only when the month is the inserted 13th month that
/// duplicates the previous month's ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LunarDate {
    day: u8,
    month: u8,
    year: i32,
    leap: bool,
}

impl LunarDate {
    /// Creates a new `LunarDate` from day, month, year, and leap flag.
    ///
    /// # Errors
    ///
    /// Returns [`LunisolarError`] if the day is outside 1..=30 or the
    /// month is outside 1..=12. Whether the named month actually exists
    /// in the named lunar year (a 30th day in a 29-day month, a leap
    /// flag on a year without that leap month) is not checked here;
    /// conversion treats such inputs as the caller's responsibility.
    pub fn new(day: u8, month: u8, year: i32, leap: bool) -> Result<Self, LunisolarError> {
        if !(1..=12).contains(&month) {
            return Err(LunisolarError::InvalidMonth { month });
        }
        if !(1..=30).contains(&day) {
            return Err(LunisolarError::InvalidDay { day });
        }
        Ok(Self {
            day,
            month,
            year,
            leap,
        })
    }

    /// Builds a `LunarDate` whose fields were already range-checked by
    /// the converter.
    pub(crate) fn from_parts(day: u8, month: u8, year: i32, leap: bool) -> Self {
        Self {
            day,
            month,
            year,
            leap,
        }
    }

    /// Returns the lunar day (1..=30).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the lunar month ordinal (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the lunar year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns whether this month is an inserted leap month.
    pub fn leap(self) -> bool {
        self.leap
    }
}
