//! # boreas-season
//!
//! Immutable seasonal parameter tables and categorical forecast labels.
//!
//! The tables are `static` lookup data shared read-only by every
//! generator instance; nothing here is mutated after load.
//!
//! ## Quick Start
//!
//! ```ignore
//! use boreas_season::{Forecast, Season};
//!
//! let season = Season::for_month(7, 15, 31);
//! assert_eq!(season, Season::Summer);
//!
//! let profile = season.profile();
//! assert_eq!(profile.high_f.max, 104);
//!
//! // Forecast continuity neighbors
//! assert_eq!(
//!     Forecast::Rain.neighbors(),
//!     &[Forecast::Rain, Forecast::Cloudy, Forecast::Thunderstorm]
//! );
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `forecast` | Forecast labels and the continuity neighbor table |
//! | `season` | Month-to-season assignment |
//! | `profile` | Seasonal parameter table and categorical sampling |

mod forecast;
mod profile;
mod season;

pub use forecast::Forecast;
pub use profile::{HumidityRange, PrecipParams, SeasonProfile, TempRange, WindParams};
pub use season::Season;
