use std::path::PathBuf;

use serde::Deserialize;

/// Top-level Boreas configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoreasConfig {
    /// Global RNG seed. Unset means seed from the OS.
    #[serde(default)]
    pub seed: Option<u64>,

    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,

    /// Series span settings.
    #[serde(default)]
    pub series: SeriesToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    /// Output path for the weather JSON document.
    pub output: Option<PathBuf>,
    /// Pretty-print the JSON document.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            output: None,
            pretty: default_true(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesToml {
    /// First simulated year. Defaults to three years before the end year.
    #[serde(default)]
    pub start_year: Option<i32>,

    /// Last simulated year. Defaults to the current year, which is then
    /// cut off at today's date.
    #[serde(default)]
    pub end_year: Option<i32>,
}

fn default_true() -> bool {
    true
}
