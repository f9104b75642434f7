//! Multi-year day-by-day series fold and span specification.

use std::collections::BTreeMap;

use rand::Rng;
use tracing::debug;

use boreas_calendar::{MonthDay, days_in_month};

use crate::daily::DailyWeather;
use crate::error::SimulateError;
use crate::state::DayState;
use crate::step::simulate_day;

/// Nested mapping `year -> month -> day -> DailyWeather`.
pub type YearMap = BTreeMap<i32, BTreeMap<u8, BTreeMap<u8, DailyWeather>>>;

/// A validated span of calendar years to simulate.
///
/// Years must be consecutive ascending; the optional cutoff trims the
/// final year to end on the given month/day instead of December 31.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    years: Vec<i32>,
    cutoff: Option<MonthDay>,
}

impl SeriesSpec {
    /// Creates a validated series specification.
    ///
    /// The cutoff, if given, is validated against the final year (so
    /// February 29 is accepted only when that year is a leap year).
    ///
    /// # Errors
    ///
    /// Returns [`SimulateError::EmptyYears`] if `years` is empty,
    /// [`SimulateError::NonConsecutiveYears`] if the years are not
    /// consecutive ascending, or [`SimulateError::InvalidCutoff`] if the
    /// cutoff is not a valid date in the final year.
    pub fn new(years: Vec<i32>, cutoff: Option<(u8, u8)>) -> Result<Self, SimulateError> {
        if years.is_empty() {
            return Err(SimulateError::EmptyYears);
        }
        for pair in years.windows(2) {
            if pair[1] != pair[0] + 1 {
                return Err(SimulateError::NonConsecutiveYears {
                    prev: pair[0],
                    next: pair[1],
                });
            }
        }
        let last_year = years[years.len() - 1];
        let cutoff = match cutoff {
            Some((month, day)) => Some(MonthDay::new(last_year, month, day)?),
            None => None,
        };
        Ok(Self { years, cutoff })
    }

    /// Returns the years to simulate, in chronological order.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Returns the final simulated year.
    pub fn last_year(&self) -> i32 {
        self.years[self.years.len() - 1]
    }

    /// Returns the final-year cutoff, if any.
    pub fn cutoff(&self) -> Option<MonthDay> {
        self.cutoff
    }
}

/// Result of one simulation pass: the nested mapping plus the state
/// after the final simulated day.
///
/// The final state lets callers chain spans: simulating `[Y]` and then
/// `[Y + 1]` from the returned state on the same RNG stream is identical
/// to simulating `[Y, Y + 1]` in one pass.
#[derive(Debug, Clone)]
pub struct SimulatedSeries {
    data: YearMap,
    final_state: DayState,
}

impl SimulatedSeries {
    /// Returns the nested `year -> month -> day` mapping.
    pub fn data(&self) -> &YearMap {
        &self.data
    }

    /// Consumes the series, returning the nested mapping.
    pub fn into_data(self) -> YearMap {
        self.data
    }

    /// Returns the continuity state after the final simulated day.
    pub fn final_state(&self) -> DayState {
        self.final_state
    }

    /// Returns the total number of simulated days.
    pub fn n_days(&self) -> usize {
        self.data
            .values()
            .flat_map(|months| months.values())
            .map(BTreeMap::len)
            .sum()
    }
}

/// Simulates the span starting from an explicit initial state.
///
/// The fold is strictly sequential: every day's output depends on the
/// previous day's state, and the December 31 state of each year becomes
/// the smoothing reference for January 1 of the next.
pub fn simulate_span(
    spec: &SeriesSpec,
    initial: DayState,
    rng: &mut impl Rng,
) -> SimulatedSeries {
    let mut data = YearMap::new();
    let mut state = initial;
    let last_year = spec.last_year();

    for &year in spec.years() {
        let (last_month, last_day) = match spec.cutoff() {
            Some(c) if year == last_year => c.month_day(),
            _ => (12, 31),
        };
        debug!(year, last_month, last_day, "simulating year");

        let year_map = data.entry(year).or_default();
        for month in 1..=last_month {
            // Months are 1..=12 by construction, so this cannot fail.
            let dim = days_in_month(year, month).expect("month is 1..=12");
            // The cutoff day was validated against this month's length.
            let day_count = if month == last_month { last_day } else { dim };

            let month_map = year_map.entry(month).or_default();
            for day in 1..=day_count {
                let (weather, next) = simulate_day(month, day, dim, state, rng);
                month_map.insert(day, weather);
                state = next;
            }
        }
    }

    SimulatedSeries {
        data,
        final_state: state,
    }
}

/// Simulates the span from the neutral starting state.
pub fn simulate_series(spec: &SeriesSpec, rng: &mut impl Rng) -> SimulatedSeries {
    simulate_span(spec, DayState::initial(), rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn spec_rejects_empty_years() {
        assert_eq!(
            SeriesSpec::new(vec![], None).unwrap_err(),
            SimulateError::EmptyYears
        );
    }

    #[test]
    fn spec_rejects_gaps_and_reversals() {
        assert_eq!(
            SeriesSpec::new(vec![2022, 2024], None).unwrap_err(),
            SimulateError::NonConsecutiveYears {
                prev: 2022,
                next: 2024
            }
        );
        assert_eq!(
            SeriesSpec::new(vec![2023, 2022], None).unwrap_err(),
            SimulateError::NonConsecutiveYears {
                prev: 2023,
                next: 2022
            }
        );
    }

    #[test]
    fn spec_validates_cutoff_against_final_year() {
        // 2024 is a leap year, 2023 is not.
        assert!(SeriesSpec::new(vec![2023, 2024], Some((2, 29))).is_ok());
        assert!(matches!(
            SeriesSpec::new(vec![2022, 2023], Some((2, 29))).unwrap_err(),
            SimulateError::InvalidCutoff(_)
        ));
    }

    #[test]
    fn full_single_year_day_count() {
        let spec = SeriesSpec::new(vec![2023], None).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let series = simulate_series(&spec, &mut rng);
        assert_eq!(series.n_days(), 365);
        assert_eq!(series.data()[&2023][&2].len(), 28);
    }

    #[test]
    fn cutoff_trims_final_year() {
        let spec = SeriesSpec::new(vec![2023], Some((3, 15))).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let series = simulate_series(&spec, &mut rng);
        let year = &series.data()[&2023];
        assert_eq!(year.len(), 3);
        assert_eq!(year[&1].len(), 31);
        assert_eq!(year[&2].len(), 28);
        assert_eq!(year[&3].len(), 15);
        assert_eq!(series.n_days(), 31 + 28 + 15);
    }

    #[test]
    fn final_state_matches_last_emitted_day() {
        let spec = SeriesSpec::new(vec![2023], None).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let series = simulate_series(&spec, &mut rng);
        let dec31 = series.data()[&2023][&12][&31];
        let state = series.final_state();
        assert_eq!(state.low_f, dec31.low_f);
        assert_eq!(state.high_f, dec31.high_f);
        assert_eq!(state.forecast, dec31.forecast);
        assert_eq!(state.humidity, dec31.humidity);
        assert_eq!(state.wind, dec31.wind);
    }
}
