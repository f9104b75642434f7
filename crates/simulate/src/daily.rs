//! The emitted per-day observation record.

use boreas_season::Forecast;
use serde::Serialize;

/// One simulated day's weather record. Immutable once emitted.
///
/// Field names serialize to the output document's JSON keys
/// (`lowF`, `highF`, `precipitation`, `humidity`, `wind`, `forecast`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyWeather {
    /// Low temperature in whole degrees Fahrenheit.
    #[serde(rename = "lowF")]
    pub low_f: i32,
    /// High temperature in whole degrees Fahrenheit; always strictly
    /// greater than `low_f`.
    #[serde(rename = "highF")]
    pub high_f: i32,
    /// Precipitation in inches, rounded to one decimal place, never
    /// negative.
    pub precipitation: f64,
    /// Relative humidity fraction in `[0, 0.9]`, rounded to two decimal
    /// places.
    pub humidity: f64,
    /// Sustained wind speed in whole miles per hour.
    pub wind: i32,
    /// Categorical forecast label.
    pub forecast: Forecast,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_document_keys() {
        let day = DailyWeather {
            low_f: 28,
            high_f: 41,
            precipitation: 0.4,
            humidity: 0.52,
            wind: 6,
            forecast: Forecast::Snow,
        };
        let value = serde_json::to_value(day).unwrap();
        assert_eq!(value["lowF"], 28);
        assert_eq!(value["highF"], 41);
        assert_eq!(value["precipitation"], 0.4);
        assert_eq!(value["humidity"], 0.52);
        assert_eq!(value["wind"], 6);
        assert_eq!(value["forecast"], "snow");
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<DailyWeather>();
    }
}
