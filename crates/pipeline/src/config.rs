//! Configuration for a full pipeline run.

use spei_aggregate::AggregateConfig;
use spei_standardise::StandardiseConfig;

use crate::error::PipelineError;

/// Settings for every pipeline stage.
///
/// # Example
///
/// ```
/// use spei_aggregate::{AccumulationPeriod, AggregateConfig};
/// use spei_pipeline::PipelineConfig;
///
/// let config = PipelineConfig::new()
///     .with_aggregate(AggregateConfig::new().with_accumulation(AccumulationPeriod::new(12).unwrap()))
///     .with_parallel(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineConfig {
    aggregate: AggregateConfig,
    standardise: StandardiseConfig,
    parallel: bool,
}

impl PipelineConfig {
    /// Creates a configuration with default stage settings and month
    /// parallelism enabled.
    pub fn new() -> Self {
        Self {
            aggregate: AggregateConfig::new(),
            standardise: StandardiseConfig::new(),
            parallel: true,
        }
    }

    /// Sets the aggregation settings.
    pub fn with_aggregate(mut self, aggregate: AggregateConfig) -> Self {
        self.aggregate = aggregate;
        self
    }

    /// Sets the fitting and transform settings.
    pub fn with_standardise(mut self, standardise: StandardiseConfig) -> Self {
        self.standardise = standardise;
        self
    }

    /// Enables or disables processing the twelve months in parallel.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns the aggregation settings.
    pub fn aggregate(&self) -> &AggregateConfig {
        &self.aggregate
    }

    /// Returns the fitting and transform settings.
    pub fn standardise(&self) -> &StandardiseConfig {
        &self.standardise
    }

    /// Returns whether months run in parallel.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Validates every stage's settings.
    pub fn validate(&self) -> Result<(), PipelineError> {
        self.aggregate
            .validate()
            .map_err(|e| PipelineError::Config {
                reason: e.to_string(),
            })?;
        self.standardise
            .validate()
            .map_err(|e| PipelineError::Config {
                reason: e.to_string(),
            })
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new()
    }
}
