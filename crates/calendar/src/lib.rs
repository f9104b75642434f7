//! # boreas-calendar
//!
//! Pure date arithmetic for the proleptic Gregorian calendar.
//!
//! ## Quick Start
//!
//! ```ignore
//! use boreas_calendar::{MonthDay, days_in_month, is_leap_year};
//!
//! assert!(is_leap_year(2024));
//! assert_eq!(days_in_month(2024, 2).unwrap(), 29);
//! assert_eq!(days_in_month(2023, 2).unwrap(), 28);
//!
//! // Validated mid-year cutoff
//! let cutoff = MonthDay::new(2024, 2, 29).unwrap();
//! assert_eq!(cutoff.month_day(), (2, 29));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `leap` | Gregorian leap-year rule and year lengths |
//! | `month` | Month lengths |
//! | `month_day` | Validated month/day pair |
//! | `error` | Error types |

mod error;
mod leap;
mod month;
mod month_day;

pub use error::CalendarError;
pub use leap::{days_in_year, is_leap_year};
pub use month::days_in_month;
pub use month_day::MonthDay;
