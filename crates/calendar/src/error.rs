//! Error types for the boreas-calendar crate.

/// Error type for all fallible operations in the boreas-calendar crate.
///
/// Covers validation failures for month numbers and day-within-month
/// values in the Gregorian calendar.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given
    /// month of the given year.
    #[error("invalid day: {day} for month {month} of {year} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year used to determine February's length.
        year: i32,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },
}
