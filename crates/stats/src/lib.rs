//! Statistical helper functions for the SPEI pipeline.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Mean of the present values, skipping missing ones.
///
/// Returns `None` when no value is present, so an empty accumulation window
/// never divides by zero.
pub fn mean_present<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, n) = values
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 { None } else { Some(sum / n as f64) }
}

/// First three sample L-moments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LMoments {
    /// L-location (the sample mean).
    pub l1: f64,
    /// L-scale.
    pub l2: f64,
    /// Third L-moment.
    pub l3: f64,
}

impl LMoments {
    /// L-skewness `l3 / l2`.
    pub fn t3(&self) -> f64 {
        self.l3 / self.l2
    }
}

/// Sample L-moments from unbiased probability-weighted moments.
///
/// **Expects pre-sorted input** (caller's responsibility). Returns `None`
/// for fewer than 3 values.
pub fn sample_l_moments(sorted: &[f64]) -> Option<LMoments> {
    let n = sorted.len();
    if n < 3 {
        return None;
    }
    let nf = n as f64;
    let (mut b0, mut b1, mut b2) = (0.0, 0.0, 0.0);
    for (i, &x) in sorted.iter().enumerate() {
        let j = i as f64;
        b0 += x;
        b1 += x * j / (nf - 1.0);
        b2 += x * j * (j - 1.0) / ((nf - 1.0) * (nf - 2.0));
    }
    b0 /= nf;
    b1 /= nf;
    b2 /= nf;

    Some(LMoments {
        l1: b0,
        l2: 2.0 * b1 - b0,
        l3: 6.0 * b2 - 6.0 * b1 + b0,
    })
}
