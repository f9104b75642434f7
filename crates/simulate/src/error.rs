//! Error types for the boreas-simulate crate.

use boreas_calendar::CalendarError;

/// Error type for series-span validation.
///
/// The simulation itself is pure arithmetic over validated inputs and
/// cannot fail; all failure modes live in [`crate::SeriesSpec`]
/// construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulateError {
    /// Returned when the list of years to simulate is empty.
    #[error("no years to simulate")]
    EmptyYears,

    /// Returned when the year list is not consecutive ascending.
    ///
    /// State is carried across year seams, which only makes sense for
    /// contiguous spans.
    #[error("years must be consecutive ascending: {next} follows {prev}")]
    NonConsecutiveYears {
        /// The earlier year in the offending pair.
        prev: i32,
        /// The year that followed it.
        next: i32,
    },

    /// Returned when the final-year cutoff is not a valid calendar date.
    #[error("invalid cutoff date: {0}")]
    InvalidCutoff(#[from] CalendarError),
}
