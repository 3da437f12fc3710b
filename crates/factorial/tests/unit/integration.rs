//! End-to-end integration tests.

use factorial::{
    Config, DesignError, DesignMatrix, Experiment, ExperimentError, FactorialError, SeedSource,
};
use factorial_core::analysis::{check_orthogonality, estimate_effects, expected_effects};
use factorial_core::simulate::{seeded_rng, simulate_response, NoiseModel};
use factorial_core::Matrix;

/// Two factors: M, M + 10, R, E with shapes (4,2), (4,2), (4,1), (1,2).
#[test]
fn two_factor_pipeline() {
    let report = Experiment::new().seed(42).run(2).unwrap();

    #[rustfmt::skip]
    let expected = Matrix::from_row_slice(4, 2, &[
        -1.0, -1.0,
         1.0, -1.0,
        -1.0,  1.0,
         1.0,  1.0,
    ]);
    assert_eq!(report.design, expected);
    assert_eq!(report.shifted, expected.add_scalar(10.0));
    assert_eq!(report.shapes(), [(4, 2), (4, 2), (4, 1), (1, 2)]);

    // R[i] = sum of squares of shifted row + N(0, 0.5) noise
    let clean = [162.0, 202.0, 202.0, 242.0];
    for (r, c) in report.response.iter().zip(clean) {
        assert!((r - c).abs() < 3.0, "response {} far from {}", r, c);
    }

    // E[j] = M[:, j] · R / 4, recomputed by hand
    for j in 0..2 {
        let dot: f64 = (0..4)
            .map(|i| report.design[(i, j)] * report.response[(i, 0)])
            .sum();
        assert!((report.effect_values()[j] - dot / 4.0).abs() < 1e-9);
    }
}

/// The pipeline matches composing the core stages by hand with the same seed.
#[test]
fn pipeline_matches_core_stages() {
    let seed = 0xDEAD_BEEF;
    let report = Experiment::new().seed(seed).run(3).unwrap();

    let design = DesignMatrix::full_factorial(3).unwrap();
    let shifted = design.shifted(10.0);
    let noise = NoiseModel::gaussian(0.5).unwrap();
    let response = simulate_response(&shifted, &noise, &mut seeded_rng(seed));
    let effects = estimate_effects(&design, &response).unwrap();

    assert_eq!(report.response.as_slice(), response.values());
    assert_eq!(report.effect_values(), effects.values());
    assert!(check_orthogonality(&design).is_orthogonal());
}

/// Build and Shift are deterministic; only Simulate depends on the seed.
#[test]
fn only_simulation_depends_on_seed() {
    let a = Experiment::new().seed(1).run(4).unwrap();
    let b = Experiment::new().seed(2).run(4).unwrap();

    assert_eq!(a.design, b.design);
    assert_eq!(a.shifted, b.shifted);
    assert_ne!(a.response, b.response);
    assert_ne!(a.effects, b.effects);
}

/// Averaged noisy estimates converge to the analytic effect 2 * shift.
#[test]
fn estimator_bias_is_bounded() {
    let report = Experiment::with_config(Config::new().seed(9).replicates(2_000))
        .run(4)
        .unwrap();
    let summary = report.replicates.unwrap();
    let expected = expected_effects(4, 10.0);

    // Per-replicate σ = 0.5 / 4; over 2000 replicates ≈ 0.003
    assert!(summary.max_bias < 0.02, "bias {}", summary.max_bias);
    assert_eq!(summary.mean_effects.len(), expected.len());
}

#[test]
fn zero_factors_rejected() {
    let err = Experiment::new().seed(1).run(0).unwrap_err();
    assert_eq!(
        err,
        ExperimentError::Pipeline(FactorialError::Design(DesignError::NoFactors))
    );
}

#[test]
fn oversized_design_fails_fast() {
    // 2^60 runs would be an opaque allocation failure; the cap rejects it first
    let err = Experiment::new().seed(1).run(60).unwrap_err();
    assert_eq!(
        err,
        ExperimentError::Pipeline(FactorialError::Design(DesignError::TooManyFactors {
            factors: 60,
            max: 20
        }))
    );
    assert!(err.to_string().contains("at most 20 factors"));
}

/// Raising the cap past the hard ceiling is a config error, not an allocation.
#[test]
fn cap_above_ceiling_rejected_before_building() {
    let config = Config {
        max_factors: 24,
        ..Config::default()
    };
    let err = Experiment::with_config(config).run(24).unwrap_err();
    assert!(matches!(err, ExperimentError::Config(_)), "{:?}", err);
}

/// Without a configured seed the seed actually used is reported, and
/// re-running with it reproduces the whole report.
#[test]
fn reported_seed_reproduces_unseeded_run() {
    let first = Experiment::new().run(3).unwrap();
    let again = Experiment::new().seed(first.seed).run(3).unwrap();
    assert_eq!(first, again);
}

#[test]
fn env_seed_string_drives_the_run() {
    let (seed, source) = Config::new().resolve_seed_from(Some("0x2a"));
    assert_eq!((seed, source), (42, SeedSource::Environment));
    let report = Experiment::new().seed(seed).run(2).unwrap();
    assert_eq!(report.seed, 42);
}
