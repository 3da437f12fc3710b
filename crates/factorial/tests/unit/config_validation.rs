//! Tests for configuration validation.
//!
//! Builder methods panic on invalid values; `Config::validate` reports the
//! same problems as typed errors for configs assembled field by field
//! (as the CLI does).

use factorial::{Config, ConfigError, Experiment, ExperimentError};
use factorial_core::constants::MAX_FACTORS;

// =============================================================================
// MAX FACTORS VALIDATION
// =============================================================================

#[test]
#[should_panic(expected = "max_factors must be in 1..=")]
fn max_factors_zero_panics() {
    let _ = Config::new().max_factors(0);
}

#[test]
#[should_panic(expected = "max_factors must be in 1..=")]
fn max_factors_above_ceiling_panics() {
    let _ = Config::new().max_factors(MAX_FACTORS + 1);
}

#[test]
fn max_factors_ceiling_valid() {
    let config = Config::new().max_factors(MAX_FACTORS);
    assert_eq!(config.max_factors, MAX_FACTORS);
    assert!(config.validate().is_ok());
}

#[test]
fn max_factors_field_out_of_range_rejected() {
    let config = Config {
        max_factors: 64,
        ..Config::default()
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::MaxFactorsOutOfRange {
            max_factors: 64,
            limit: MAX_FACTORS
        })
    );
}

// =============================================================================
// SHIFT VALIDATION
// =============================================================================

#[test]
#[should_panic(expected = "shift must be finite")]
fn shift_nan_panics() {
    let _ = Config::new().shift(f64::NAN);
}

#[test]
fn shift_negative_valid() {
    let config = Config::new().shift(-3.0);
    assert!(config.validate().is_ok());
}

#[test]
fn shift_infinite_field_rejected() {
    let config = Config {
        shift: f64::INFINITY,
        ..Config::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidShift { .. })
    ));
}

// =============================================================================
// NOISE VALIDATION
// =============================================================================

#[test]
#[should_panic(expected = "noise_sd must be finite and non-negative")]
fn noise_negative_panics() {
    let _ = Config::new().noise_sd(-0.5);
}

#[test]
fn noise_zero_valid() {
    let config = Config::new().noise_sd(0.0);
    assert_eq!(config.noise_sd, 0.0);
    assert!(config.validate().is_ok());
}

#[test]
fn noise_nan_field_rejected() {
    let config = Config {
        noise_sd: f64::NAN,
        ..Config::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidNoise { .. })
    ));
}

// =============================================================================
// REPLICATES VALIDATION
// =============================================================================

#[test]
#[should_panic(expected = "replicates must be positive")]
fn replicates_zero_panics() {
    let _ = Config::new().replicates(0);
}

#[test]
fn replicates_zero_field_rejected_by_run() {
    let config = Config {
        replicates: Some(0),
        seed: Some(1),
        ..Config::default()
    };
    let err = Experiment::with_config(config).run(2).unwrap_err();
    assert_eq!(err, ExperimentError::Config(ConfigError::ZeroReplicates));
}
