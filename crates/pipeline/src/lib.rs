//! # spei-pipeline
//!
//! Computes SPEI scores from monthly rainfall and PET tables in four stages:
//!
//! ```text
//! Imported ──aggregate()──▶ Aggregated ──balance()──▶ Balanced ──standardise()──▶ Standardised
//! ```
//!
//! Each transition consumes the previous stage. The twelve calendar months
//! are independent and run on the rayon thread pool unless
//! [`PipelineConfig::with_parallel`] turns that off; results are identical
//! either way.
//!
//! [`run`] performs all four transitions.

mod config;
mod error;
mod stages;

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use stages::{Aggregated, Balanced, Imported, MonthPair, Standardised, run};
