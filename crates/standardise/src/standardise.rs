//! Per-month standardisation of a water-balance series.

use spei_table::{AreaId, Series};
use tracing::{debug, trace, warn};

use crate::config::{FitMethod, StandardiseConfig};
use crate::error::{FitFailure, StandardiseError};
use crate::fit::{GloFit, fit_glo};
use crate::transform::score;

/// The fit obtained for one area column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFit {
    /// Area the column belongs to.
    pub area: AreaId,
    /// Fitted distribution.
    pub fit: GloFit,
}

/// Scores for one calendar month, with the fits that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardisedMonth {
    month: u8,
    scores: Series,
    fits: Vec<ColumnFit>,
    failures: Vec<FitFailure>,
}

impl StandardisedMonth {
    /// Calendar month (1..=12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Standardised scores, same schema and dates as the input series.
    pub fn scores(&self) -> &Series {
        &self.scores
    }

    /// Fits for columns that succeeded, in schema order.
    pub fn fits(&self) -> &[ColumnFit] {
        &self.fits
    }

    /// Columns that could not be fitted. Their scores are all missing.
    pub fn failures(&self) -> &[FitFailure] {
        &self.failures
    }

    /// Consumes the month, returning its scores.
    pub fn into_scores(self) -> Series {
        self.scores
    }
}

/// Fits each area column of `series` and maps it to standardised scores.
///
/// Missing values are dropped before fitting and stay missing in the output.
/// A column that cannot be fitted becomes all missing and is recorded as a
/// [`FitFailure`]; the remaining columns are unaffected.
///
/// # Errors
///
/// - [`StandardiseError::InvalidMonth`] if `month` is outside 1..=12.
/// - [`StandardiseError::InvalidConfig`] if `config` fails validation.
pub fn standardise_month(
    series: &Series,
    month: u8,
    config: &StandardiseConfig,
) -> Result<StandardisedMonth, StandardiseError> {
    if !(1..=12).contains(&month) {
        return Err(StandardiseError::InvalidMonth { month });
    }
    config.validate()?;

    let mut fits = Vec::new();
    let mut failures = Vec::new();
    let mut columns: Vec<Vec<Option<f64>>> = Vec::with_capacity(series.schema().len());

    for (area, column) in series.schema().areas().iter().zip(series.columns()) {
        let sample: Vec<f64> = column.iter().flatten().copied().collect();
        match fit_glo(&sample, config) {
            Ok(fit) => {
                if config.fit_method() == FitMethod::MaximumLikelihood
                    && fit.method() == FitMethod::LMoments
                {
                    debug!(
                        month,
                        area = %area,
                        n = fit.n(),
                        "sample below MLE minimum, using L-moment estimates"
                    );
                }
                let params = *fit.params();
                let scores: Vec<Option<f64>> = column
                    .iter()
                    .map(|v| v.map(|x| score(x, &params, config.transform())))
                    .collect();
                let present: Vec<f64> = scores.iter().flatten().copied().collect();
                trace!(
                    month,
                    area = %area,
                    location = params.location(),
                    scale = params.scale(),
                    shape = params.shape(),
                    score_mean = spei_stats::mean(&present),
                    score_sd = spei_stats::sd(&present),
                    "column fitted"
                );
                columns.push(scores);
                fits.push(ColumnFit {
                    area: area.clone(),
                    fit,
                });
            }
            Err(error) => {
                let failure = FitFailure {
                    month,
                    area: area.clone(),
                    error,
                };
                warn!(%failure, "column left missing");
                columns.push(vec![None; column.len()]);
                failures.push(failure);
            }
        }
    }

    let scores = Series::new(series.schema().clone(), series.dates().to_vec(), columns)?;
    debug!(
        month,
        fitted = fits.len(),
        failed = failures.len(),
        "month standardised"
    );
    Ok(StandardisedMonth {
        month,
        scores,
        fits,
        failures,
    })
}

/// Concatenates the months' scores and sorts the result by date.
///
/// # Errors
///
/// Returns [`StandardiseError::Table`] if the months do not share one schema.
pub fn combine(months: Vec<StandardisedMonth>) -> Result<Series, StandardiseError> {
    let parts = months
        .into_iter()
        .map(StandardisedMonth::into_scores)
        .collect();
    Ok(Series::concat(parts)?.sort_by_date())
}
