//! The per-day simulation step.

use rand::Rng;

use boreas_season::{Forecast, Season, SeasonProfile};

use crate::daily::DailyWeather;
use crate::event;
use crate::state::DayState;

/// Weight of today's target over the previous day's low temperature.
const LOW_TEMP_CONTINUITY: f64 = 0.7;
/// Weight of today's target over the previous day's high temperature.
const HIGH_TEMP_CONTINUITY: f64 = 0.6;
/// Weight of today's target over the previous day's humidity.
const HUMIDITY_CONTINUITY: f64 = 0.6;
/// Weight of today's target over the previous day's wind.
const WIND_CONTINUITY: f64 = 0.5;

/// Chance of picking a neighbor of yesterday's forecast instead of a
/// fresh seasonal draw.
const FORECAST_CONTINUITY: f64 = 0.7;

/// Linear interpolation from the previous value toward the target.
///
/// The result always lies between `prev` and `target` inclusive for
/// weights in `[0, 1]`.
pub(crate) fn smooth(prev: f64, target: f64, weight: f64) -> f64 {
    prev + (target - prev) * weight
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Simulates one calendar day.
///
/// Consumes the previous day's [`DayState`] and returns the emitted
/// observation together with the state for the next day. The step order
/// is fixed: event bookkeeping, temperature targets and smoothing,
/// forecast selection, precipitation, humidity, wind.
pub fn simulate_day(
    month: u8,
    day: u8,
    days_in_month: u8,
    state: DayState,
    rng: &mut impl Rng,
) -> (DailyWeather, DayState) {
    let mut state = state;
    event::advance(&mut state, month, rng);

    let season = Season::for_month(month, day, days_in_month);
    let params = season.profile();

    // Seasonal temperature ranges, shifted by any active trend.
    let low_min = params.low_f.min + state.trend;
    let low_max = params.low_f.max + state.trend;
    let high_min = params.high_f.min + state.trend;
    let high_max = params.high_f.max + state.trend;

    let target_low = rng.random_range(low_min..=low_max);
    // At least a 10 degree spread before smoothing. Every profile keeps
    // high max at least 10 above low max, so this range is never empty.
    let target_high = rng.random_range(high_min.max(target_low + 10)..=high_max);

    let low_f = smooth(f64::from(state.low_f), f64::from(target_low), LOW_TEMP_CONTINUITY).round()
        as i32;
    let mut high_f = smooth(
        f64::from(state.high_f),
        f64::from(target_high),
        HIGH_TEMP_CONTINUITY,
    )
    .round() as i32;
    // Smoothing from opposing directions can cross the two values; force
    // the gap back open.
    if low_f >= high_f {
        high_f = low_f + rng.random_range(8..=15);
    }

    let forecast = if rng.random::<f64>() < FORECAST_CONTINUITY && !state.forecast.is_severe() {
        let options = state.forecast.neighbors();
        options[rng.random_range(0..options.len())]
    } else {
        params.sample_forecast(rng)
    };

    let precipitation = sample_precipitation(forecast, params, rng);
    let humidity = sample_humidity(precipitation, params, state.humidity, rng);
    let wind = sample_wind(forecast, params, state.wind, rng);

    let weather = DailyWeather {
        low_f,
        high_f,
        precipitation,
        humidity,
        wind,
        forecast,
    };
    let next = DayState {
        low_f,
        high_f,
        forecast,
        humidity,
        wind,
        ..state
    };
    (weather, next)
}

/// Draws a precipitation amount for the day's forecast.
///
/// Clear skies never produce precipitation; everything else is gated by
/// the season's precipitation probability, with the amount range keyed
/// to forecast severity.
fn sample_precipitation(forecast: Forecast, params: &SeasonProfile, rng: &mut impl Rng) -> f64 {
    if forecast.is_clear() {
        return 0.0;
    }
    if rng.random::<f64>() >= params.precipitation.probability {
        return 0.0;
    }
    let max = params.precipitation.max;
    let amount = match forecast {
        Forecast::Rain | Forecast::Snow => rng.random_range(0.1..max),
        Forecast::SnowStorm | Forecast::Thunderstorm => rng.random_range(1.5..max),
        Forecast::Cloudy => {
            if rng.random::<f64>() < 0.3 {
                rng.random_range(0.1..max / 2.0)
            } else {
                0.0
            }
        }
        Forecast::PartlyCloudy => {
            if rng.random::<f64>() < 0.1 {
                rng.random_range(0.1..max / 3.0)
            } else {
                0.0
            }
        }
        _ => 0.0,
    };
    round1(amount)
}

/// Draws and smooths the day's humidity.
///
/// Wet days widen the target range upward (clamped at 0.9) and couple
/// humidity to the precipitation amount.
fn sample_humidity(
    precipitation: f64,
    params: &SeasonProfile,
    prev_humidity: f64,
    rng: &mut impl Rng,
) -> f64 {
    let (target_min, target_max) = if precipitation > 0.0 {
        (
            (params.humidity.min + 0.1).min(0.9),
            (params.humidity.max + 0.2).min(0.9),
        )
    } else {
        (params.humidity.min, params.humidity.max)
    };
    let target = round2(rng.random_range(target_min..target_max));
    let mut humidity = smooth(prev_humidity, target, HUMIDITY_CONTINUITY);
    if precipitation > 0.0 {
        let increase = (precipitation * 0.08).min(0.35);
        humidity = (humidity + increase).min(0.9);
    }
    round2(humidity)
}

/// Draws and smooths the day's wind speed.
///
/// A high-wind trial (or a storm forecast) draws from the top of the
/// seasonal range; storms additionally floor the smoothed value.
fn sample_wind(forecast: Forecast, params: &SeasonProfile, prev_wind: i32, rng: &mut impl Rng) -> i32 {
    let target = if rng.random::<f64>() < params.wind.high_probability || forecast.is_storm() {
        rng.random_range(5..=params.wind.max)
    } else {
        rng.random_range(params.wind.min..=5)
    };
    let mut wind = smooth(f64::from(prev_wind), f64::from(target), WIND_CONTINUITY).round() as i32;
    if forecast.is_storm() {
        wind = wind.max(rng.random_range(4..=params.wind.max));
    }
    wind
}
