use std::path::PathBuf;

use serde::Deserialize;

/// Top-level SPEI configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SpeiConfig {
    /// Historical period and accumulation settings.
    #[serde(default)]
    pub period: PeriodToml,

    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,

    /// Distribution fitting settings.
    #[serde(default)]
    pub fit: FitToml,

    /// Post-processing of the written table.
    #[serde(default)]
    pub output: OutputToml,

    /// Process the twelve calendar months in parallel.
    #[serde(default = "default_true")]
    pub parallel: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PeriodToml {
    #[serde(default = "default_start_year")]
    pub start_year: i32,
    #[serde(default = "default_end_year")]
    pub end_year: i32,
    #[serde(default = "default_accumulation_period")]
    pub accumulation_period: u32,
}

impl Default for PeriodToml {
    fn default() -> Self {
        Self {
            start_year: default_start_year(),
            end_year: default_end_year(),
            accumulation_period: default_accumulation_period(),
        }
    }
}

fn default_start_year() -> i32 {
    1961
}
fn default_end_year() -> i32 {
    2022
}
fn default_accumulation_period() -> u32 {
    1
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    pub rainfall: Option<PathBuf>,
    pub pet: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FitToml {
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default = "default_transform")]
    pub transform: String,
    #[serde(default = "default_max_iters")]
    pub max_iters: u64,
    #[serde(default = "default_min_mle_samples")]
    pub min_mle_samples: usize,
    #[serde(default = "default_sd_tolerance")]
    pub sd_tolerance: f64,
}

impl Default for FitToml {
    fn default() -> Self {
        Self {
            method: default_method(),
            transform: default_transform(),
            max_iters: default_max_iters(),
            min_mle_samples: default_min_mle_samples(),
            sd_tolerance: default_sd_tolerance(),
        }
    }
}

fn default_method() -> String {
    "mle".to_string()
}
fn default_transform() -> String {
    "probability".to_string()
}
fn default_max_iters() -> u64 {
    2000
}
fn default_min_mle_samples() -> usize {
    20
}
fn default_sd_tolerance() -> f64 {
    1e-8
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    /// Truncate scores to `[-clamp, clamp]`.
    #[serde(default)]
    pub clamp: Option<f64>,
    /// Head area columns with display names instead of identifiers.
    #[serde(default)]
    pub relabel: bool,
}
