//! Error types for the amlich-julian crate.

/// Error type for Gregorian date validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DateError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number does not exist in the given month of the
    /// given proleptic-Gregorian year.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year, which decides whether February has 29 days.
        year: i32,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },
}
