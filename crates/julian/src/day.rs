//! Julian day number newtype.

use serde::Serialize;

/// A Julian day number: the count of days since the conventional Julian
/// epoch (noon UTC, 4713 BC January 1 in the Julian calendar).
///
/// `JulianDay` is the universal comparable axis between calendars: a
/// Gregorian date and a lunisolar date that denote the same civil day map
/// to the same `JulianDay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct JulianDay(i64);

impl JulianDay {
    /// Wraps a raw day count.
    pub fn new(jdn: i64) -> Self {
        Self(jdn)
    }

    /// Returns the inner day count.
    pub fn get(self) -> i64 {
        self.0
    }

    /// Returns the day `days` after this one (negative values step back).
    pub fn add_days(self, days: i64) -> Self {
        Self(self.0 + days)
    }

    /// Returns the signed number of days from `other` to `self`.
    pub fn days_since(self, other: JulianDay) -> i64 {
        self.0 - other.0
    }
}
