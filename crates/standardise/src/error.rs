//! Error types for the spei-standardise crate.

use spei_table::AreaId;

/// Why a single column could not be fitted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FitError {
    /// Returned when fewer observations are present than the fit needs.
    #[error("insufficient data: got {n} observations, need at least {min}")]
    InsufficientData {
        /// Number of present observations.
        n: usize,
        /// Minimum required.
        min: usize,
    },

    /// Returned when every observation has the same value.
    #[error("sample is constant (zero spread)")]
    ConstantSample,

    /// Returned when the L-moment ratios fall outside the distribution's range.
    #[error("L-skewness {t3} is outside (-1, 1)")]
    LMomentsOutOfRange {
        /// Sample L-skewness.
        t3: f64,
    },

    /// Returned when the likelihood optimiser hits its iteration cap.
    #[error("maximum-likelihood fit did not converge in {iterations} iterations")]
    NotConverged {
        /// Iterations performed.
        iterations: u64,
    },

    /// Returned when the optimiser fails or yields invalid parameters.
    #[error("optimisation failed: {reason}")]
    OptimizationFailed {
        /// Description of the failure.
        reason: String,
    },
}

/// A column-level fit failure with the cell coordinates needed to find it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("fit failed for area '{area}' in month {month}: {error}")]
pub struct FitFailure {
    /// Calendar month of the series (1..=12).
    pub month: u8,
    /// Area whose column failed.
    pub area: AreaId,
    /// Underlying cause.
    pub error: FitError,
}

/// Error type for whole-series operations in the spei-standardise crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StandardiseError {
    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a month value is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month value.
        month: u8,
    },

    /// Wraps a table operation failure.
    #[error("table error: {reason}")]
    Table {
        /// Description of the underlying failure.
        reason: String,
    },
}

impl From<spei_table::TableError> for StandardiseError {
    fn from(e: spei_table::TableError) -> Self {
        StandardiseError::Table {
            reason: e.to_string(),
        }
    }
}
