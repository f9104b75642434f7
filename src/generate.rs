use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::{Datelike, Local};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::info;

use boreas_simulate::{SeriesSpec, YearMap, simulate_series};

use crate::cli::GenerateArgs;
use crate::config::BoreasConfig;

/// JSON document envelope written to the output path.
#[derive(Serialize)]
struct WeatherDocument {
    data: YearMap,
    updated: String,
}

/// Run the generation pipeline: load config, simulate the span, write
/// the JSON document.
pub fn run(args: &GenerateArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config: {}", args.config.display()))?;
    let config: BoreasConfig = toml::from_str(&raw)
        .with_context(|| format!("failed to parse config: {}", args.config.display()))?;

    let output: PathBuf = args
        .output
        .clone()
        .or_else(|| config.io.output.clone())
        .ok_or_else(|| {
            anyhow::anyhow!("no output path: set [io].output in config or use --output")
        })?;

    let seed = args.seed.or(config.seed);
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let today = Local::now();
    let end_year = config.series.end_year.unwrap_or_else(|| today.year());
    let start_year = config.series.start_year.unwrap_or(end_year - 3);
    if start_year > end_year {
        bail!("start_year {start_year} is after end_year {end_year}");
    }
    let years: Vec<i32> = (start_year..=end_year).collect();

    // Only the current wall-clock year is cut off at today's date; past
    // end years are simulated in full.
    let cutoff = (end_year == today.year()).then(|| (today.month() as u8, today.day() as u8));

    let spec = SeriesSpec::new(years, cutoff).context("invalid series span")?;
    info!(start_year, end_year, seed = ?seed, cutoff = ?cutoff, "generating weather series");

    let series = simulate_series(&spec, &mut rng);
    info!(n_days = series.n_days(), "series generated");

    let document = WeatherDocument {
        data: series.into_data(),
        updated: today.to_rfc3339(),
    };
    let json = if config.io.pretty {
        serde_json::to_string_pretty(&document)
    } else {
        serde_json::to_string(&document)
    }
    .context("failed to serialize weather document")?;

    fs::write(&output, json)
        .with_context(|| format!("failed to write output: {}", output.display()))?;
    info!(path = %output.display(), "weather document written");

    Ok(())
}
