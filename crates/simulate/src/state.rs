//! Carried-forward continuity state between consecutive simulated days.

use boreas_season::Forecast;

/// The state threaded through the day-by-day fold.
///
/// Holds the previous day's emitted values (the smoothing references for
/// the next day) plus the bookkeeping for any active weather event.
/// One simulation pass owns exactly one `DayState`; concurrent passes
/// must each use their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayState {
    /// Previous day's low temperature in whole degrees Fahrenheit.
    pub low_f: i32,
    /// Previous day's high temperature in whole degrees Fahrenheit.
    pub high_f: i32,
    /// Previous day's forecast label.
    pub forecast: Forecast,
    /// Previous day's humidity fraction.
    pub humidity: f64,
    /// Previous day's wind speed in whole miles per hour.
    pub wind: i32,
    /// Remaining days of the active weather event; 0 when none.
    pub event_days_left: u8,
    /// Signed temperature shift of the active event; positive warms,
    /// negative cools, 0 when no trend is in effect.
    pub trend: i32,
}

impl DayState {
    /// Neutral starting state used when no prior day exists: a mild
    /// winter day with a light wind and no active event.
    pub fn initial() -> Self {
        Self {
            low_f: 30,
            high_f: 45,
            forecast: Forecast::PartlyCloudy,
            humidity: 0.3,
            wind: 3,
            event_days_left: 0,
            trend: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_values() {
        let s = DayState::initial();
        assert_eq!(s.low_f, 30);
        assert_eq!(s.high_f, 45);
        assert_eq!(s.forecast, Forecast::PartlyCloudy);
        assert_eq!(s.humidity, 0.3);
        assert_eq!(s.wind, 3);
        assert_eq!(s.event_days_left, 0);
        assert_eq!(s.trend, 0);
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<DayState>();
    }
}
