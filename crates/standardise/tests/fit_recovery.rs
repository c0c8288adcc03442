//! Parameter recovery on synthetic generalised-logistic samples.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spei_standardise::{FitMethod, GloParams, StandardiseConfig, fit_glo};

const TRIALS: u64 = 8;

fn draw(truth: &GloParams, n: usize, rng: &mut StdRng) -> Vec<f64> {
    (0..n)
        .map(|_| truth.quantile(rng.random_range(1e-9..1.0 - 1e-9)))
        .collect()
}

/// Mean absolute (location error, relative scale error) over seeded trials.
fn mean_errors(truth: &GloParams, n: usize, config: &StandardiseConfig) -> (f64, f64) {
    let mut loc = 0.0;
    let mut scale = 0.0;
    for seed in 0..TRIALS {
        let mut rng = StdRng::seed_from_u64(1000 + seed);
        let sample = draw(truth, n, &mut rng);
        let fit = fit_glo(&sample, config).unwrap();
        loc += (fit.params().location() - truth.location()).abs();
        scale += (fit.params().scale() / truth.scale() - 1.0).abs();
    }
    (loc / TRIALS as f64, scale / TRIALS as f64)
}

#[test]
fn maximum_likelihood_converges_to_truth() {
    let truth = GloParams::new(10.0, 3.0, -0.1).unwrap();
    let config = StandardiseConfig::new();

    let (loc_small, scale_small) = mean_errors(&truth, 50, &config);
    let (loc_large, scale_large) = mean_errors(&truth, 2000, &config);

    assert!(loc_large < 0.3, "location error {loc_large}");
    assert!(scale_large < 0.1, "scale error {scale_large}");
    assert!(
        loc_large < loc_small,
        "location error should shrink: {loc_small} -> {loc_large}"
    );
    assert!(
        scale_large < scale_small,
        "scale error should shrink: {scale_small} -> {scale_large}"
    );
}

#[test]
fn l_moments_converge_to_truth() {
    let truth = GloParams::new(-4.0, 0.5, 0.2).unwrap();
    let config = StandardiseConfig::new().with_fit_method(FitMethod::LMoments);

    let (loc_small, _) = mean_errors(&truth, 30, &config);
    let (loc_large, scale_large) = mean_errors(&truth, 3000, &config);

    assert!(loc_large < 0.05, "location error {loc_large}");
    assert!(scale_large < 0.1, "scale error {scale_large}");
    assert!(loc_large < loc_small);
}

#[test]
fn shape_sign_is_recovered() {
    let config = StandardiseConfig::new();
    for shape in [-0.25, 0.25] {
        let truth = GloParams::new(0.0, 1.0, shape).unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        let sample = draw(&truth, 2000, &mut rng);
        let fit = fit_glo(&sample, &config).unwrap();
        assert_eq!(
            fit.params().shape().signum(),
            shape.signum(),
            "shape {shape} fitted as {}",
            fit.params().shape()
        );
    }
}
