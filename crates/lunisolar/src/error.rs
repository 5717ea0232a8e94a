//! Error types for the amlich-lunisolar crate.

/// Error type for all fallible operations in the amlich-lunisolar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LunisolarError {
    /// Returned when a lunar month number is outside 1..=12.
    #[error("invalid lunar month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a lunar day number is outside 1..=30.
    #[error("invalid lunar day: {day} (must be 1..=30)")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
    },

    /// Returned when a conversion lands outside the range the truncated
    /// astronomical series stay coherent over and produces an impossible
    /// lunar day or month.
    #[error("lunisolar conversion out of supported range at julian day {jdn}")]
    OutOfRange {
        /// The Julian day number of the failing input.
        jdn: i64,
    },
}
