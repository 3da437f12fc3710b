//! Unit tests for report types and output rendering.
//!
//! Tests boundary conditions and method correctness for:
//! - ExperimentReport shapes and accessors
//! - ReplicateSummary bias computation
//! - Text and JSON rendering

use factorial::output::{format_report, to_json, to_json_pretty};
use factorial::{Config, Effects, Experiment, ExperimentReport, ReplicateSummary};

fn noiseless(factors: usize) -> ExperimentReport {
    Experiment::with_config(Config::noiseless().seed(1))
        .run(factors)
        .unwrap()
}

// ============================================================================
// ExperimentReport
// ============================================================================

#[test]
fn report_shapes_single_factor() {
    let report = noiseless(1);
    assert_eq!(report.shapes(), [(2, 1), (2, 1), (2, 1), (1, 1)]);
    assert_eq!(report.design.as_slice(), &[-1.0, 1.0]);
    assert_eq!(report.shifted.as_slice(), &[9.0, 11.0]);
    assert_eq!(report.response.as_slice(), &[81.0, 121.0]);
    assert_eq!(report.effect_values(), &[20.0]);
    assert_eq!(report.dominant(), Some((0, 20.0)));
}

#[test]
fn report_shapes_scale_with_factors() {
    for n in 1..=8 {
        let report = noiseless(n);
        let runs = 1usize << n;
        assert_eq!(report.runs, runs);
        assert_eq!(report.shapes(), [(runs, n), (runs, n), (runs, 1), (1, n)]);
    }
}

#[test]
fn report_records_noise_and_shift() {
    let report = Experiment::with_config(Config::new().seed(2).shift(3.0).noise_sd(0.25))
        .run(2)
        .unwrap();
    assert_eq!(report.shift, 3.0);
    assert_eq!(report.noise_sd, 0.25);
    assert_eq!(report.expected_effect, 6.0);
}

// ============================================================================
// ReplicateSummary
// ============================================================================

#[test]
fn replicate_summary_zero_bias() {
    let expected = Effects::from_values(vec![20.0, 20.0, 20.0]);
    let summary = ReplicateSummary::new(10, &expected, &expected);
    assert_eq!(summary.max_bias, 0.0);
    assert_eq!(summary.mean_effects, vec![20.0, 20.0, 20.0]);
}

#[test]
fn replicate_summary_takes_worst_factor() {
    let mean = Effects::from_values(vec![20.1, 19.7, 20.0]);
    let expected = Effects::from_values(vec![20.0, 20.0, 20.0]);
    let summary = ReplicateSummary::new(10, &mean, &expected);
    assert!((summary.max_bias - 0.3).abs() < 1e-9);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn text_report_lists_arrays_in_order() {
    let text = format_report(&noiseless(2));
    let positions: Vec<usize> = [
        "Design matrix",
        "Shifted design",
        "Simulated response",
        "Main effects",
    ]
    .iter()
    .map(|title| text.find(title).unwrap())
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn json_report_has_all_stages() {
    let json = to_json(&noiseless(2)).unwrap();
    for key in ["\"design\"", "\"shifted\"", "\"response\"", "\"effects\""] {
        assert!(json.contains(key), "missing {}", key);
    }
    assert!(json.contains("\"orthogonal\":true"));
    assert!(json.contains("\"dominant_factor\":1"));
}

#[test]
fn json_pretty_parses_back() {
    let report = noiseless(3);
    let json = to_json_pretty(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["runs"], 8);
    assert_eq!(value["effects"][0].as_array().unwrap().len(), 3);
}
