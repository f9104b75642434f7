//! Transient multi-day weather events (warm and cold fronts).

use rand::Rng;
use tracing::trace;

use crate::state::DayState;

/// Months in which fronts are markedly more likely (season transitions).
const TRANSITION_MONTHS: [u8; 4] = [3, 5, 9, 11];

/// Daily chance of a new front outside transition months.
const BASE_PROBABILITY: f64 = 0.03;

/// Daily chance of a new front during transition months.
const TRANSITION_PROBABILITY: f64 = 0.08;

/// Returns the chance that a new front begins on a day of the given month.
pub(crate) fn trigger_probability(month: u8) -> f64 {
    if TRANSITION_MONTHS.contains(&month) {
        TRANSITION_PROBABILITY
    } else {
        BASE_PROBABILITY
    }
}

/// Applies one day of event bookkeeping to `state`.
///
/// If no event is active, rolls for a new front: duration uniform in
/// 2..=5 days, intensity uniform in 5..=15 degrees with a 50/50 sign
/// (warming vs cooling). While an event is active its remaining duration
/// is decremented; the trend resets to 0 the day the duration runs out,
/// so the shift no longer applies on that day.
pub(crate) fn advance(state: &mut DayState, month: u8, rng: &mut impl Rng) {
    if state.event_days_left == 0 && rng.random::<f64>() < trigger_probability(month) {
        state.event_days_left = rng.random_range(2..=5);
        let magnitude: i32 = rng.random_range(5..=15);
        state.trend = if rng.random::<f64>() < 0.5 {
            magnitude
        } else {
            -magnitude
        };
        trace!(
            month,
            duration = state.event_days_left,
            trend = state.trend,
            "weather front begins"
        );
    }

    if state.event_days_left > 0 {
        state.event_days_left -= 1;
        if state.event_days_left == 0 {
            state.trend = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn trigger_probability_by_month() {
        for month in [3, 5, 9, 11] {
            assert_eq!(trigger_probability(month), 0.08, "month {month}");
        }
        for month in [1, 2, 4, 6, 7, 8, 10, 12] {
            assert_eq!(trigger_probability(month), 0.03, "month {month}");
        }
    }

    #[test]
    fn active_event_decrements() {
        let mut state = DayState::initial();
        state.event_days_left = 3;
        state.trend = 10;
        let mut rng = StdRng::seed_from_u64(1);

        advance(&mut state, 7, &mut rng);
        assert_eq!(state.event_days_left, 2);
        assert_eq!(state.trend, 10);
    }

    #[test]
    fn trend_resets_when_event_ends() {
        let mut state = DayState::initial();
        state.event_days_left = 1;
        state.trend = -12;
        let mut rng = StdRng::seed_from_u64(1);

        advance(&mut state, 7, &mut rng);
        assert_eq!(state.event_days_left, 0);
        assert_eq!(state.trend, 0);
    }

    #[test]
    fn new_events_have_bounded_parameters() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut triggered = 0usize;
        for _ in 0..10_000 {
            let mut state = DayState::initial();
            advance(&mut state, 3, &mut rng);
            if state.event_days_left > 0 {
                triggered += 1;
                // Duration is drawn in 2..=5 and advance consumes one day
                // immediately, so 1..=4 days remain and the trend is active.
                assert!((1..=4).contains(&state.event_days_left));
                assert!((5..=15).contains(&state.trend.abs()), "trend {}", state.trend);
            }
        }
        // March is a transition month: expect roughly 8% trigger rate.
        let rate = triggered as f64 / 10_000.0;
        assert!((rate - 0.08).abs() < 0.015, "trigger rate {rate}");
    }

    #[test]
    fn quiet_month_trigger_rate() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut triggered = 0usize;
        for _ in 0..10_000 {
            let mut state = DayState::initial();
            advance(&mut state, 7, &mut rng);
            if state.event_days_left > 0 {
                triggered += 1;
            }
        }
        let rate = triggered as f64 / 10_000.0;
        assert!((rate - 0.03).abs() < 0.01, "trigger rate {rate}");
    }

    #[test]
    fn no_retrigger_while_active() {
        // With an event already running, advance never starts a new one,
        // regardless of the RNG draw.
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..1_000 {
            let mut state = DayState::initial();
            state.event_days_left = 5;
            state.trend = 8;
            advance(&mut state, 3, &mut rng);
            assert_eq!(state.event_days_left, 4);
            assert_eq!(state.trend, 8);
        }
    }
}
