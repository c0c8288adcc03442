//! Generalised logistic distribution (Hosking parameterisation).
//!
//! With location ξ, scale α > 0 and shape k:
//!
//! - reduced variate y = (x − ξ)/α for k = 0, otherwise −ln(1 − k(x − ξ)/α)/k
//! - F(x) = 1 / (1 + e^(−y))
//! - f(x) = e^(−(1 − k)y) / (α (1 + e^(−y))²)
//!
//! k > 0 bounds the support above at ξ + α/k, k < 0 bounds it below.

use std::f64::consts::PI;

use spei_stats::LMoments;

/// Below this magnitude the shape is treated as zero (plain logistic).
const SHAPE_EPS: f64 = 1e-8;

/// Validated generalised-logistic parameters.
///
/// `scale` must be finite and positive, `location` finite and `shape` in
/// (−1, 1), the range in which the distribution's L-moments exist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GloParams {
    location: f64,
    scale: f64,
    shape: f64,
}

impl GloParams {
    /// Creates parameters, returning `None` if any is out of range.
    pub fn new(location: f64, scale: f64, shape: f64) -> Option<Self> {
        let valid = location.is_finite()
            && scale.is_finite()
            && scale > 0.0
            && shape.is_finite()
            && shape.abs() < 1.0;
        valid.then_some(Self {
            location,
            scale,
            shape,
        })
    }

    /// Closed-form estimates from sample L-moments.
    ///
    /// - k = −t3
    /// - α = l2 sin(kπ)/(kπ)
    /// - ξ = l1 − α(1/k − π/sin(kπ))
    ///
    /// Returns `None` when `l2` is not positive or `|t3| >= 1`.
    pub fn from_l_moments(lm: &LMoments) -> Option<Self> {
        if lm.l2.is_nan() || lm.l2 <= 0.0 {
            return None;
        }
        let k = -lm.t3();
        if k.abs() < SHAPE_EPS {
            return Self::new(lm.l1, lm.l2, 0.0);
        }
        let kpi = k * PI;
        let scale = lm.l2 * kpi.sin() / kpi;
        let location = lm.l1 - scale * (1.0 / k - PI / kpi.sin());
        Self::new(location, scale, k)
    }

    /// Location ξ.
    pub fn location(&self) -> f64 {
        self.location
    }

    /// Scale α.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Shape k.
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Reduced variate y, or `None` if `x` is outside the support.
    pub fn reduced(&self, x: f64) -> Option<f64> {
        let z = (x - self.location) / self.scale;
        if self.shape.abs() < SHAPE_EPS {
            return Some(z);
        }
        let arg = 1.0 - self.shape * z;
        (arg > 0.0).then(|| -arg.ln() / self.shape)
    }

    /// Cumulative distribution function.
    pub fn cdf(&self, x: f64) -> f64 {
        match self.reduced(x) {
            Some(y) => 1.0 / (1.0 + (-y).exp()),
            // Past the upper bound for k > 0, below the lower bound for k < 0.
            None if self.shape > 0.0 => 1.0,
            None => 0.0,
        }
    }

    /// Quantile function for `p` in (0, 1).
    pub fn quantile(&self, p: f64) -> f64 {
        let odds = (1.0 - p) / p;
        if self.shape.abs() < SHAPE_EPS {
            self.location - self.scale * odds.ln()
        } else {
            self.location + self.scale * (1.0 - odds.powf(self.shape)) / self.shape
        }
    }

    /// Log density; negative infinity outside the support.
    pub fn ln_pdf(&self, x: f64) -> f64 {
        match self.reduced(x) {
            Some(y) => -self.scale.ln() - (1.0 - self.shape) * y - 2.0 * softplus(-y),
            None => f64::NEG_INFINITY,
        }
    }

    /// Sum of log densities over `sample`.
    pub fn log_likelihood(&self, sample: &[f64]) -> f64 {
        sample.iter().map(|&x| self.ln_pdf(x)).sum()
    }
}

/// ln(1 + e^t) without overflow.
fn softplus(t: f64) -> f64 {
    if t > 0.0 {
        t + (-t).exp().ln_1p()
    } else {
        t.exp().ln_1p()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use spei_stats::sample_l_moments;

    #[test]
    fn new_valid() {
        let p = GloParams::new(10.0, 2.0, -0.1).unwrap();
        assert_relative_eq!(p.location(), 10.0);
        assert_relative_eq!(p.scale(), 2.0);
        assert_relative_eq!(p.shape(), -0.1);
    }

    #[test]
    fn new_invalid() {
        assert!(GloParams::new(0.0, 0.0, 0.0).is_none());
        assert!(GloParams::new(0.0, -1.0, 0.0).is_none());
        assert!(GloParams::new(0.0, 1.0, 1.0).is_none());
        assert!(GloParams::new(f64::NAN, 1.0, 0.0).is_none());
    }

    #[test]
    fn logistic_special_case() {
        let p = GloParams::new(0.0, 1.0, 0.0).unwrap();
        assert_relative_eq!(p.cdf(0.0), 0.5);
        assert_relative_eq!(p.ln_pdf(0.0), (0.25f64).ln(), epsilon = 1e-12);
        assert_relative_eq!(p.quantile(0.5), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn median_is_location() {
        for k in [-0.4, -0.1, 0.0, 0.2, 0.6] {
            let p = GloParams::new(3.0, 1.5, k).unwrap();
            assert_relative_eq!(p.cdf(3.0), 0.5, epsilon = 1e-12);
            assert_relative_eq!(p.quantile(0.5), 3.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn cdf_quantile_round_trip() {
        let p = GloParams::new(-2.0, 0.7, 0.25).unwrap();
        for &q in &[0.01, 0.1, 0.3, 0.5, 0.7, 0.9, 0.99] {
            assert_relative_eq!(p.cdf(p.quantile(q)), q, epsilon = 1e-10);
        }
    }

    #[test]
    fn support_bounds() {
        // k > 0: upper bound at 0 + 1/0.5 = 2
        let upper = GloParams::new(0.0, 1.0, 0.5).unwrap();
        assert_eq!(upper.cdf(2.5), 1.0);
        assert_eq!(upper.ln_pdf(2.5), f64::NEG_INFINITY);
        // k < 0: lower bound at 0 - 1/0.5 = -2
        let lower = GloParams::new(0.0, 1.0, -0.5).unwrap();
        assert_eq!(lower.cdf(-2.5), 0.0);
        assert!(lower.ln_pdf(-1.9).is_finite());
    }

    #[test]
    fn density_integrates_to_one() {
        let p = GloParams::new(1.0, 2.0, -0.2).unwrap();
        let (lo, hi) = (p.quantile(1e-9), p.quantile(1.0 - 1e-9));
        let n = 200_000;
        let h = (hi - lo) / n as f64;
        let integral: f64 = (0..n)
            .map(|i| p.ln_pdf(lo + (i as f64 + 0.5) * h).exp() * h)
            .sum();
        assert_relative_eq!(integral, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn l_moment_estimates_symmetric() {
        let lm = sample_l_moments(&[-1.0, 0.0, 1.0]).unwrap();
        let p = GloParams::from_l_moments(&lm).unwrap();
        assert_relative_eq!(p.location(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.scale(), 2.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(p.shape(), 0.0);
    }

    #[test]
    fn l_moment_estimates_skewed() {
        let lm = sample_l_moments(&[0.0, 1.0, 3.0]).unwrap();
        let p = GloParams::from_l_moments(&lm).unwrap();
        let k: f64 = -1.0 / 3.0;
        let scale = (k * PI).sin() / (k * PI);
        assert_relative_eq!(p.shape(), k, epsilon = 1e-12);
        assert_relative_eq!(p.scale(), scale, epsilon = 1e-12);
        assert_relative_eq!(
            p.location(),
            4.0 / 3.0 - scale * (1.0 / k - PI / (k * PI).sin()),
            epsilon = 1e-12
        );
    }

    #[test]
    fn softplus_is_stable() {
        assert_relative_eq!(softplus(0.0), 2f64.ln());
        assert_relative_eq!(softplus(800.0), 800.0);
        assert!(softplus(-800.0) >= 0.0);
    }
}
