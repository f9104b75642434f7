//! # boreas-simulate
//!
//! Day-by-day synthetic weather series simulation.
//!
//! The simulation is a strictly sequential fold over calendar days: each
//! day consumes the previous day's [`DayState`], draws seasonal targets,
//! smooths them against the carried state, and emits an immutable
//! [`DailyWeather`] record. Transient multi-day weather events (warm and
//! cold fronts) shift the temperature targets while they last. State is
//! carried across year boundaries, so multi-year series are continuous
//! at the December/January seam.
//!
//! ## Quick Start
//!
//! ```ignore
//! use boreas_simulate::{SeriesSpec, simulate_series};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let spec = SeriesSpec::new(vec![2022, 2023, 2024], None)?;
//! let mut rng = StdRng::seed_from_u64(42);
//! let series = simulate_series(&spec, &mut rng);
//! assert_eq!(series.data()[&2024][&2].len(), 29); // leap year
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `daily` | The emitted per-day observation record |
//! | `state` | Carried-forward continuity state |
//! | `event` | Transient weather events (fronts) |
//! | `step` | The per-day simulation step |
//! | `series` | Multi-year fold and span specification |
//! | `error` | Error types |

mod daily;
mod error;
mod event;
mod series;
mod state;
mod step;

pub use daily::DailyWeather;
pub use error::SimulateError;
pub use series::{SeriesSpec, SimulatedSeries, YearMap, simulate_series, simulate_span};
pub use state::DayState;
pub use step::simulate_day;
