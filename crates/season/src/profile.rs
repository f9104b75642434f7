//! Seasonal weather parameter table and categorical forecast sampling.

use crate::forecast::Forecast;

/// Inclusive whole-degree Fahrenheit temperature range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TempRange {
    pub min: i32,
    pub max: i32,
}

/// Daily precipitation parameters: maximum amount in inches and the
/// chance that a non-clear day produces any precipitation at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecipParams {
    pub max: f64,
    pub probability: f64,
}

/// Relative humidity range as fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HumidityRange {
    pub min: f64,
    pub max: f64,
}

/// Wind speed range in whole miles per hour, plus the chance of drawing
/// from the high end of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindParams {
    pub min: i32,
    pub max: i32,
    pub high_probability: f64,
}

/// One season's full parameter set.
///
/// `forecasts` is a categorical distribution over the nine labels in
/// [`Forecast::ALL`] order; the masses sum to 1.0 per season.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonProfile {
    pub low_f: TempRange,
    pub high_f: TempRange,
    pub precipitation: PrecipParams,
    pub humidity: HumidityRange,
    pub wind: WindParams,
    pub forecasts: [(Forecast, f64); 9],
}

impl SeasonProfile {
    /// Samples a forecast from this season's categorical distribution.
    ///
    /// Draws a uniform random number and walks the table's cumulative
    /// distribution, returning the first label whose cumulative mass
    /// meets or exceeds the draw. Falls back to partly cloudy if
    /// floating-point rounding prevents a match.
    pub fn sample_forecast(&self, rng: &mut impl rand::Rng) -> Forecast {
        let u: f64 = rng.random();
        let mut cumulative = 0.0;
        for &(forecast, p) in &self.forecasts {
            cumulative += p;
            if cumulative >= u {
                return forecast;
            }
        }
        Forecast::PartlyCloudy
    }
}

/// The fixed per-season parameter table, indexed by `Season as usize`.
///
/// Tuned for a semi-arid mountain-valley climate: cold snowy winters,
/// hot dry summers, and generally low humidity.
#[rustfmt::skip]
pub(crate) static PROFILES: [SeasonProfile; 8] = [
    // DeepWinter (December, January)
    SeasonProfile {
        low_f: TempRange { min: -10, max: 20 },
        high_f: TempRange { min: 10, max: 35 },
        precipitation: PrecipParams { max: 6.0, probability: 0.4 },
        humidity: HumidityRange { min: 0.2, max: 0.55 },
        wind: WindParams { min: 1, max: 12, high_probability: 0.2 },
        forecasts: [
            (Forecast::Sunny, 0.15),
            (Forecast::Clear, 0.1),
            (Forecast::PartlyCloudy, 0.2),
            (Forecast::Cloudy, 0.2),
            (Forecast::Rain, 0.05),
            (Forecast::Snow, 0.2),
            (Forecast::SnowStorm, 0.08),
            (Forecast::Fog, 0.01),
            (Forecast::Thunderstorm, 0.01),
        ],
    },
    // LateWinter (February)
    SeasonProfile {
        low_f: TempRange { min: -5, max: 25 },
        high_f: TempRange { min: 20, max: 40 },
        precipitation: PrecipParams { max: 5.0, probability: 0.35 },
        humidity: HumidityRange { min: 0.2, max: 0.5 },
        wind: WindParams { min: 1, max: 10, high_probability: 0.2 },
        forecasts: [
            (Forecast::Sunny, 0.2),
            (Forecast::Clear, 0.1),
            (Forecast::PartlyCloudy, 0.2),
            (Forecast::Cloudy, 0.2),
            (Forecast::Rain, 0.1),
            (Forecast::Snow, 0.15),
            (Forecast::SnowStorm, 0.03),
            (Forecast::Fog, 0.01),
            (Forecast::Thunderstorm, 0.01),
        ],
    },
    // EarlySpring (March)
    SeasonProfile {
        low_f: TempRange { min: 25, max: 40 },
        high_f: TempRange { min: 40, max: 60 },
        precipitation: PrecipParams { max: 4.0, probability: 0.4 },
        humidity: HumidityRange { min: 0.15, max: 0.5 },
        wind: WindParams { min: 1, max: 10, high_probability: 0.25 },
        forecasts: [
            (Forecast::Sunny, 0.25),
            (Forecast::Clear, 0.15),
            (Forecast::PartlyCloudy, 0.2),
            (Forecast::Cloudy, 0.15),
            (Forecast::Rain, 0.15),
            (Forecast::Snow, 0.05),
            (Forecast::SnowStorm, 0.01),
            (Forecast::Fog, 0.02),
            (Forecast::Thunderstorm, 0.02),
        ],
    },
    // Spring (April, May)
    SeasonProfile {
        low_f: TempRange { min: 35, max: 52 },
        high_f: TempRange { min: 55, max: 76 },
        precipitation: PrecipParams { max: 3.0, probability: 0.35 },
        humidity: HumidityRange { min: 0.15, max: 0.45 },
        wind: WindParams { min: 1, max: 9, high_probability: 0.2 },
        forecasts: [
            (Forecast::Sunny, 0.3),
            (Forecast::Clear, 0.15),
            (Forecast::PartlyCloudy, 0.2),
            (Forecast::Cloudy, 0.15),
            (Forecast::Rain, 0.12),
            (Forecast::Snow, 0.02),
            (Forecast::SnowStorm, 0.0),
            (Forecast::Fog, 0.02),
            (Forecast::Thunderstorm, 0.04),
        ],
    },
    // EarlySummer (June)
    SeasonProfile {
        low_f: TempRange { min: 45, max: 65 },
        high_f: TempRange { min: 70, max: 90 },
        precipitation: PrecipParams { max: 2.5, probability: 0.25 },
        humidity: HumidityRange { min: 0.1, max: 0.4 },
        wind: WindParams { min: 1, max: 8, high_probability: 0.15 },
        forecasts: [
            (Forecast::Sunny, 0.35),
            (Forecast::Clear, 0.2),
            (Forecast::PartlyCloudy, 0.15),
            (Forecast::Cloudy, 0.1),
            (Forecast::Rain, 0.1),
            (Forecast::Snow, 0.0),
            (Forecast::SnowStorm, 0.0),
            (Forecast::Fog, 0.02),
            (Forecast::Thunderstorm, 0.08),
        ],
    },
    // Summer (July, August)
    SeasonProfile {
        low_f: TempRange { min: 55, max: 88 },
        high_f: TempRange { min: 85, max: 104 },
        precipitation: PrecipParams { max: 2.0, probability: 0.15 },
        humidity: HumidityRange { min: 0.1, max: 0.35 },
        wind: WindParams { min: 1, max: 7, high_probability: 0.1 },
        forecasts: [
            (Forecast::Sunny, 0.45),
            (Forecast::Clear, 0.25),
            (Forecast::PartlyCloudy, 0.15),
            (Forecast::Cloudy, 0.05),
            (Forecast::Rain, 0.05),
            (Forecast::Snow, 0.0),
            (Forecast::SnowStorm, 0.0),
            (Forecast::Fog, 0.01),
            (Forecast::Thunderstorm, 0.04),
        ],
    },
    // EarlyFall (September)
    SeasonProfile {
        low_f: TempRange { min: 40, max: 60 },
        high_f: TempRange { min: 65, max: 80 },
        precipitation: PrecipParams { max: 3.0, probability: 0.25 },
        humidity: HumidityRange { min: 0.15, max: 0.45 },
        wind: WindParams { min: 1, max: 8, high_probability: 0.15 },
        forecasts: [
            (Forecast::Sunny, 0.3),
            (Forecast::Clear, 0.2),
            (Forecast::PartlyCloudy, 0.2),
            (Forecast::Cloudy, 0.15),
            (Forecast::Rain, 0.1),
            (Forecast::Snow, 0.0),
            (Forecast::SnowStorm, 0.0),
            (Forecast::Fog, 0.02),
            (Forecast::Thunderstorm, 0.03),
        ],
    },
    // Fall (October, November)
    SeasonProfile {
        low_f: TempRange { min: 25, max: 45 },
        high_f: TempRange { min: 45, max: 65 },
        precipitation: PrecipParams { max: 4.0, probability: 0.3 },
        humidity: HumidityRange { min: 0.15, max: 0.5 },
        wind: WindParams { min: 1, max: 10, high_probability: 0.2 },
        forecasts: [
            (Forecast::Sunny, 0.25),
            (Forecast::Clear, 0.15),
            (Forecast::PartlyCloudy, 0.2),
            (Forecast::Cloudy, 0.15),
            (Forecast::Rain, 0.15),
            (Forecast::Snow, 0.05),
            (Forecast::SnowStorm, 0.01),
            (Forecast::Fog, 0.02),
            (Forecast::Thunderstorm, 0.02),
        ],
    },
];
