//! Mapping observations to standardised scores.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::config::Transform;
use crate::glo::GloParams;

/// Fitted probabilities are clamped to `[PROB_CLAMP, 1 - PROB_CLAMP]` before
/// the normal quantile is taken, so scores stay finite.
pub const PROB_CLAMP: f64 = 1e-10;

/// Standardised score of `x` under `params`.
pub fn score(x: f64, params: &GloParams, transform: Transform) -> f64 {
    match transform {
        Transform::Probability => {
            let p = params.cdf(x).clamp(PROB_CLAMP, 1.0 - PROB_CLAMP);
            standard_normal_quantile(p)
        }
        Transform::LocationScale => (x - params.location()) / params.scale(),
    }
}

fn standard_normal_quantile(p: f64) -> f64 {
    // Mean 0, sd 1 is always a valid normal.
    match Normal::new(0.0, 1.0) {
        Ok(n) => n.inverse_cdf(p),
        Err(_) => f64::NAN,
    }
}
