//! Month-to-season assignment.

use crate::profile::{PROFILES, SeasonProfile};

/// The eight seasonal parameter profiles.
///
/// The partition is finer than the four meteorological seasons so that
/// month-to-month transitions stay gradual: February ("late winter") is
/// milder than January, June ("early summer") cooler than July, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Season {
    DeepWinter = 0,
    LateWinter = 1,
    EarlySpring = 2,
    Spring = 3,
    EarlySummer = 4,
    Summer = 5,
    EarlyFall = 6,
    Fall = 7,
}

impl Season {
    /// All eight seasons in profile-table order.
    pub const ALL: [Season; 8] = [
        Self::DeepWinter,
        Self::LateWinter,
        Self::EarlySpring,
        Self::Spring,
        Self::EarlySummer,
        Self::Summer,
        Self::EarlyFall,
        Self::Fall,
    ];

    /// Maps a calendar month to its season.
    ///
    /// `day` and `days_in_month` are accepted so mid-month blending can
    /// be added later; they do not currently alter the result, and the
    /// boundaries are month-only. Out-of-range months fall back to spring.
    pub fn for_month(month: u8, _day: u8, _days_in_month: u8) -> Season {
        match month {
            1 | 12 => Self::DeepWinter,
            2 => Self::LateWinter,
            3 => Self::EarlySpring,
            4 | 5 => Self::Spring,
            6 => Self::EarlySummer,
            7 | 8 => Self::Summer,
            9 => Self::EarlyFall,
            10 | 11 => Self::Fall,
            _ => Self::Spring,
        }
    }

    /// Returns the parameter profile for this season.
    pub fn profile(self) -> &'static SeasonProfile {
        &PROFILES[self as usize]
    }

    /// Returns the zero-based index of this season (matches the
    /// `#[repr(u8)]` discriminant and the profile-table order).
    pub fn as_index(self) -> usize {
        self as usize
    }
}
