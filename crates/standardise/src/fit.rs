//! Generalised-logistic parameter estimation.
//!
//! L-moment estimates are always computed first. Maximum likelihood refines
//! them with Nelder–Mead over (ξ, α, k); infeasible points cost `f64::MAX`.

use argmin::core::{CostFunction, Executor, State};
use argmin::solver::neldermead::NelderMead;
use tracing::trace;

use crate::config::{FitMethod, StandardiseConfig};
use crate::error::FitError;
use crate::glo::GloParams;

/// Fewest present observations a column may have and still be fitted.
pub const MIN_FIT_SAMPLES: usize = 3;

/// A fitted distribution together with how it was obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct GloFit {
    params: GloParams,
    method: FitMethod,
    n: usize,
    log_likelihood: f64,
    iterations: u64,
}

impl GloFit {
    /// Fitted parameters.
    pub fn params(&self) -> &GloParams {
        &self.params
    }

    /// Method that produced the parameters. May be `LMoments` even when
    /// maximum likelihood was requested, for samples below the MLE minimum.
    pub fn method(&self) -> FitMethod {
        self.method
    }

    /// Number of observations fitted.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Log-likelihood of the sample under the fitted parameters.
    pub fn log_likelihood(&self) -> f64 {
        self.log_likelihood
    }

    /// Optimiser iterations (0 for L-moment fits).
    pub fn iterations(&self) -> u64 {
        self.iterations
    }
}

/// Fits a generalised-logistic distribution to `sample`.
///
/// `sample` must contain only finite values; missing observations are
/// dropped by the caller.
///
/// # Errors
///
/// - [`FitError::InsufficientData`] with fewer than [`MIN_FIT_SAMPLES`] values.
/// - [`FitError::ConstantSample`] when all values are equal.
/// - [`FitError::LMomentsOutOfRange`] when L-skewness is not in (−1, 1).
/// - [`FitError::NotConverged`] when maximum likelihood hits `max_iters`.
/// - [`FitError::OptimizationFailed`] when the optimiser errors or its
///   result is not a valid parameter set.
pub fn fit_glo(sample: &[f64], config: &StandardiseConfig) -> Result<GloFit, FitError> {
    let n = sample.len();
    if n < MIN_FIT_SAMPLES {
        return Err(FitError::InsufficientData {
            n,
            min: MIN_FIT_SAMPLES,
        });
    }

    let mut sorted = sample.to_vec();
    sorted.sort_by(f64::total_cmp);
    let lo = sorted[0];
    let hi = sorted[n - 1];
    if hi - lo <= f64::EPSILON * lo.abs().max(hi.abs()).max(1.0) {
        return Err(FitError::ConstantSample);
    }

    let lm = spei_stats::sample_l_moments(&sorted).ok_or(FitError::InsufficientData {
        n,
        min: MIN_FIT_SAMPLES,
    })?;
    let t3 = lm.t3();
    if !t3.is_finite() || t3.abs() >= 1.0 {
        return Err(FitError::LMomentsOutOfRange { t3 });
    }
    let lmom = GloParams::from_l_moments(&lm).ok_or(FitError::LMomentsOutOfRange { t3 })?;

    let use_mle =
        config.fit_method() == FitMethod::MaximumLikelihood && n >= config.min_mle_samples();
    if !use_mle {
        return Ok(GloFit {
            params: lmom,
            method: FitMethod::LMoments,
            n,
            log_likelihood: lmom.log_likelihood(sample),
            iterations: 0,
        });
    }

    // Some observations can fall outside the L-moment fit's support; the
    // plain logistic covers the whole real line.
    let start = if lmom.log_likelihood(sample).is_finite() {
        lmom
    } else {
        trace!(t3, "L-moment start infeasible, using logistic start");
        GloParams::new(lm.l1, lm.l2, 0.0).ok_or(FitError::ConstantSample)?
    };

    maximum_likelihood(sample, start, config)
}

fn maximum_likelihood(
    sample: &[f64],
    start: GloParams,
    config: &StandardiseConfig,
) -> Result<GloFit, FitError> {
    let (xi, alpha, k) = (start.location(), start.scale(), start.shape());
    let k_step = if k > 0.5 { -0.2 } else { 0.2 };
    let simplex = vec![
        vec![xi, alpha, k],
        vec![xi + 0.5 * alpha, alpha, k],
        vec![xi, 1.5 * alpha, k],
        vec![xi, alpha, k + k_step],
    ];

    let cost = GloCost { sample };
    let solver = NelderMead::new(simplex)
        .with_sd_tolerance(config.sd_tolerance())
        .map_err(|e| FitError::OptimizationFailed {
            reason: e.to_string(),
        })?;
    let max_iters = config.max_iters();
    let result = Executor::new(cost, solver)
        .configure(|state| state.max_iters(max_iters))
        .run()
        .map_err(|e| FitError::OptimizationFailed {
            reason: e.to_string(),
        })?;

    let iterations = result.state().get_iter();
    if iterations >= max_iters {
        return Err(FitError::NotConverged { iterations });
    }

    let best = result
        .state()
        .best_param
        .as_ref()
        .ok_or(FitError::OptimizationFailed {
            reason: "optimiser returned no parameters".to_string(),
        })?;
    let params =
        GloParams::new(best[0], best[1], best[2]).ok_or_else(|| FitError::OptimizationFailed {
            reason: format!("invalid parameters {best:?}"),
        })?;
    let log_likelihood = params.log_likelihood(sample);
    if !log_likelihood.is_finite() {
        return Err(FitError::OptimizationFailed {
            reason: "non-finite log-likelihood at optimum".to_string(),
        });
    }

    Ok(GloFit {
        params,
        method: FitMethod::MaximumLikelihood,
        n: sample.len(),
        log_likelihood,
        iterations,
    })
}

/// Negative log-likelihood over `[location, scale, shape]`.
struct GloCost<'a> {
    sample: &'a [f64],
}

impl CostFunction for GloCost<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, p: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
        let ll = GloParams::new(p[0], p[1], p[2]).map(|g| g.log_likelihood(self.sample));
        match ll {
            Some(ll) if ll.is_finite() => Ok(-ll),
            _ => Ok(f64::MAX),
        }
    }
}
