//! Error types for the spei-pipeline crate.

use spei_aggregate::AggregateError;
use spei_standardise::StandardiseError;

/// Error type for all fallible operations in the spei-pipeline crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PipelineError {
    /// Returned when the pipeline configuration is invalid.
    #[error("invalid configuration: {reason}")]
    Config {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the rainfall and PET tables share no area.
    #[error("rainfall and PET tables have no areas in common")]
    NoCommonAreas,

    /// Returned when aggregation fails for a calendar month.
    #[error("aggregation failed for month {month}: {source}")]
    Aggregate {
        /// Calendar month (1..=12).
        month: u8,
        /// Underlying error.
        source: AggregateError,
    },

    /// Returned when standardisation fails for a calendar month.
    #[error("standardisation failed for month {month}: {source}")]
    Standardise {
        /// Calendar month (1..=12), or 0 when combining months.
        month: u8,
        /// Underlying error.
        source: StandardiseError,
    },

    /// Wraps a table operation failure.
    #[error("table error: {reason}")]
    Table {
        /// Description of the underlying failure.
        reason: String,
    },
}

impl From<spei_table::TableError> for PipelineError {
    fn from(e: spei_table::TableError) -> Self {
        PipelineError::Table {
            reason: e.to_string(),
        }
    }
}
