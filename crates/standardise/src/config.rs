//! Configuration for distribution fitting and standardisation.

use crate::error::StandardiseError;

/// Method used to estimate generalised-logistic parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitMethod {
    /// Maximum likelihood, started from the L-moment estimates.
    #[default]
    MaximumLikelihood,
    /// Closed-form L-moment estimates.
    LMoments,
}

/// How an observation is turned into a score once its column is fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transform {
    /// Standard-normal quantile of the fitted CDF: z = Φ⁻¹(F(x)).
    #[default]
    Probability,
    /// Linear shift by fitted location and scale: z = (x − ξ)/α. The shape
    /// parameter is estimated but ignored.
    LocationScale,
}

/// Configuration for [`standardise_month`](crate::standardise_month).
///
/// # Example
///
/// ```
/// use spei_standardise::{FitMethod, StandardiseConfig, Transform};
///
/// let config = StandardiseConfig::new()
///     .with_fit_method(FitMethod::LMoments)
///     .with_transform(Transform::LocationScale);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StandardiseConfig {
    fit_method: FitMethod,
    transform: Transform,
    max_iters: u64,
    min_mle_samples: usize,
    sd_tolerance: f64,
}

impl StandardiseConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `fit_method = MaximumLikelihood`, `transform = Probability`,
    /// `max_iters = 2000`, `min_mle_samples = 20`, `sd_tolerance = 1e-8`.
    pub fn new() -> Self {
        Self {
            fit_method: FitMethod::MaximumLikelihood,
            transform: Transform::Probability,
            max_iters: 2000,
            min_mle_samples: 20,
            sd_tolerance: 1e-8,
        }
    }

    /// Sets the fitting method.
    pub fn with_fit_method(mut self, m: FitMethod) -> Self {
        self.fit_method = m;
        self
    }

    /// Sets the score transform.
    pub fn with_transform(mut self, t: Transform) -> Self {
        self.transform = t;
        self
    }

    /// Sets the optimiser iteration cap.
    pub fn with_max_iters(mut self, n: u64) -> Self {
        self.max_iters = n;
        self
    }

    /// Sets the sample size below which maximum likelihood falls back to
    /// L-moment estimates.
    pub fn with_min_mle_samples(mut self, n: usize) -> Self {
        self.min_mle_samples = n;
        self
    }

    /// Sets the Nelder–Mead convergence tolerance on the simplex cost spread.
    pub fn with_sd_tolerance(mut self, tol: f64) -> Self {
        self.sd_tolerance = tol;
        self
    }

    /// Returns the fitting method.
    pub fn fit_method(&self) -> FitMethod {
        self.fit_method
    }

    /// Returns the score transform.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Returns the optimiser iteration cap.
    pub fn max_iters(&self) -> u64 {
        self.max_iters
    }

    /// Returns the minimum sample size for maximum likelihood.
    pub fn min_mle_samples(&self) -> usize {
        self.min_mle_samples
    }

    /// Returns the convergence tolerance.
    pub fn sd_tolerance(&self) -> f64 {
        self.sd_tolerance
    }

    /// Validates this configuration.
    ///
    /// Checks that `max_iters` is at least 1 and `sd_tolerance` is finite and
    /// positive.
    pub fn validate(&self) -> Result<(), StandardiseError> {
        if self.max_iters < 1 {
            return Err(StandardiseError::InvalidConfig {
                reason: format!("max_iters must be >= 1, got {}", self.max_iters),
            });
        }
        if !self.sd_tolerance.is_finite() || self.sd_tolerance <= 0.0 {
            return Err(StandardiseError::InvalidConfig {
                reason: format!(
                    "sd_tolerance must be finite and > 0, got {}",
                    self.sd_tolerance
                ),
            });
        }
        Ok(())
    }
}

impl Default for StandardiseConfig {
    fn default() -> Self {
        Self::new()
    }
}
