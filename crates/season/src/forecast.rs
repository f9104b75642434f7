//! Forecast labels and the day-to-day continuity neighbor table.

use serde::Serialize;

/// Categorical daily forecast label.
///
/// Serializes to the lowercase label strings used in the output
/// document (`"partly cloudy"`, `"snow storm"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Forecast {
    #[serde(rename = "sunny")]
    Sunny,
    #[serde(rename = "clear")]
    Clear,
    #[serde(rename = "partly cloudy")]
    PartlyCloudy,
    #[serde(rename = "cloudy")]
    Cloudy,
    #[serde(rename = "rain")]
    Rain,
    #[serde(rename = "snow")]
    Snow,
    #[serde(rename = "snow storm")]
    SnowStorm,
    #[serde(rename = "fog")]
    Fog,
    #[serde(rename = "thunderstorm")]
    Thunderstorm,
}

impl Forecast {
    /// All nine labels in the fixed order used by the seasonal
    /// probability tables.
    pub const ALL: [Forecast; 9] = [
        Self::Sunny,
        Self::Clear,
        Self::PartlyCloudy,
        Self::Cloudy,
        Self::Rain,
        Self::Snow,
        Self::SnowStorm,
        Self::Fog,
        Self::Thunderstorm,
    ];

    /// Returns the lowercase label string.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Clear => "clear",
            Self::PartlyCloudy => "partly cloudy",
            Self::Cloudy => "cloudy",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::SnowStorm => "snow storm",
            Self::Fog => "fog",
            Self::Thunderstorm => "thunderstorm",
        }
    }

    /// Returns the similar-forecast options used for day-to-day
    /// continuity, keyed by the previous day's forecast.
    ///
    /// Each list starts with the label itself, so staying unchanged is
    /// always one of the options.
    pub fn neighbors(self) -> &'static [Forecast] {
        match self {
            Self::Clear => &[Self::Clear, Self::Sunny],
            Self::Sunny => &[Self::Sunny, Self::Clear],
            Self::PartlyCloudy => &[Self::PartlyCloudy, Self::Cloudy, Self::Clear],
            Self::Cloudy => &[Self::Cloudy, Self::PartlyCloudy, Self::Rain],
            Self::Rain => &[Self::Rain, Self::Cloudy, Self::Thunderstorm],
            Self::Snow => &[Self::Snow, Self::Cloudy, Self::SnowStorm],
            Self::SnowStorm => &[Self::SnowStorm, Self::Snow, Self::Cloudy],
            Self::Fog => &[Self::Fog, Self::Cloudy, Self::PartlyCloudy],
            Self::Thunderstorm => &[Self::Thunderstorm, Self::Rain, Self::Cloudy],
        }
    }

    /// Dry-sky labels that never produce precipitation.
    pub fn is_clear(self) -> bool {
        matches!(self, Self::Sunny | Self::Clear)
    }

    /// Severe labels that always force a fresh seasonal draw the next
    /// day instead of neighbor continuity.
    pub fn is_severe(self) -> bool {
        matches!(self, Self::Snow | Self::SnowStorm | Self::Thunderstorm)
    }

    /// Storm labels that raise precipitation and wind floors.
    pub fn is_storm(self) -> bool {
        matches!(self, Self::SnowStorm | Self::Thunderstorm)
    }
}

impl std::fmt::Display for Forecast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_nine_distinct_labels() {
        let mut labels: Vec<&str> = Forecast::ALL.iter().map(|f| f.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 9);
    }

    #[test]
    fn neighbors_start_with_self() {
        for f in Forecast::ALL {
            let n = f.neighbors();
            assert!(!n.is_empty());
            assert_eq!(n[0], f, "{f} neighbors must start with itself");
        }
    }

    #[test]
    fn neighbor_table_entries() {
        assert_eq!(
            Forecast::Rain.neighbors(),
            &[Forecast::Rain, Forecast::Cloudy, Forecast::Thunderstorm]
        );
        assert_eq!(Forecast::Clear.neighbors(), &[Forecast::Clear, Forecast::Sunny]);
        assert_eq!(
            Forecast::SnowStorm.neighbors(),
            &[Forecast::SnowStorm, Forecast::Snow, Forecast::Cloudy]
        );
    }

    #[test]
    fn severity_classes() {
        assert!(Forecast::Snow.is_severe());
        assert!(Forecast::SnowStorm.is_severe());
        assert!(Forecast::Thunderstorm.is_severe());
        assert!(!Forecast::Rain.is_severe());

        assert!(Forecast::SnowStorm.is_storm());
        assert!(Forecast::Thunderstorm.is_storm());
        assert!(!Forecast::Snow.is_storm());

        assert!(Forecast::Sunny.is_clear());
        assert!(Forecast::Clear.is_clear());
        assert!(!Forecast::PartlyCloudy.is_clear());
    }

    #[test]
    fn serializes_to_label_strings() {
        let json = serde_json::to_string(&Forecast::PartlyCloudy).unwrap();
        assert_eq!(json, "\"partly cloudy\"");
        let json = serde_json::to_string(&Forecast::SnowStorm).unwrap();
        assert_eq!(json, "\"snow storm\"");
    }

    #[test]
    fn display_matches_label() {
        for f in Forecast::ALL {
            assert_eq!(f.to_string(), f.label());
        }
    }
}
