//! Result types for a factorial experiment run.

use core::fmt;
use serde::{Deserialize, Serialize};

use crate::analysis::{Effects, OrthogonalityReport};
use crate::design::{DesignMatrix, ShiftedDesign};
use crate::simulate::Response;
use crate::types::Matrix;

// ============================================================================
// ExperimentReport - everything one run produces
// ============================================================================

/// All arrays produced by one Build → Shift → Simulate → Estimate run.
///
/// The design matrices are moved in from the pipeline, not copied. Every
/// array serializes row-major as nested JSON arrays with the same shapes
/// that are printed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    /// Number of factors (n).
    pub factors: usize,

    /// Number of runs (2^n).
    pub runs: usize,

    /// Constant added to the design before squaring.
    pub shift: f64,

    /// Standard deviation of the response noise.
    pub noise_sd: f64,

    /// Seed of the response RNG. Re-running with this seed reproduces
    /// `response` and `effects` exactly.
    pub seed: u64,

    /// Coded design M, shape (runs, factors).
    #[serde(with = "rows")]
    pub design: Matrix,

    /// Shifted design M + shift, shape (runs, factors).
    #[serde(with = "rows")]
    pub shifted: Matrix,

    /// Simulated response, shape (runs, 1).
    #[serde(with = "rows")]
    pub response: Matrix,

    /// Estimated main effects, shape (1, factors).
    #[serde(with = "rows")]
    pub effects: Matrix,

    /// Analytic main effect of the noiseless response (same for every factor).
    pub expected_effect: f64,

    /// Factor with the largest |effect|.
    pub dominant_factor: Option<usize>,

    /// Whether the design passed the orthogonality check.
    pub orthogonal: bool,

    /// Monte-Carlo bias check, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicates: Option<ReplicateSummary>,
}

impl ExperimentReport {
    /// Assemble a report from the pipeline stages, taking ownership of both
    /// design matrices.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        design: DesignMatrix,
        shifted: ShiftedDesign,
        response: &Response,
        effects: &Effects,
        expected: &Effects,
        orthogonality: &OrthogonalityReport,
        noise_sd: f64,
        seed: u64,
    ) -> Self {
        Self {
            factors: design.factors(),
            runs: design.runs(),
            shift: shifted.shift(),
            noise_sd,
            seed,
            design: design.into_matrix(),
            shifted: shifted.into_matrix(),
            response: Matrix::from_column_slice(response.len(), 1, response.values()),
            effects: Matrix::from_row_slice(1, effects.len(), effects.values()),
            expected_effect: expected.values().first().copied().unwrap_or(0.0),
            dominant_factor: effects.dominant().map(|(factor, _)| factor),
            orthogonal: orthogonality.is_orthogonal(),
            replicates: None,
        }
    }

    /// Attach a replicate summary.
    pub fn with_replicates(mut self, summary: ReplicateSummary) -> Self {
        self.replicates = Some(summary);
        self
    }

    /// (rows, cols) of design, shifted, response and effects, in print order.
    pub fn shapes(&self) -> [(usize, usize); 4] {
        [
            self.design.shape(),
            self.shifted.shape(),
            self.response.shape(),
            self.effects.shape(),
        ]
    }

    /// Estimated effects as a flat slice.
    pub fn effect_values(&self) -> &[f64] {
        // A single row is contiguous in column-major storage.
        self.effects.as_slice()
    }

    /// Index and value of the factor with the largest |effect|.
    pub fn dominant(&self) -> Option<(usize, f64)> {
        let factor = self.dominant_factor?;
        self.effect_values().get(factor).map(|&value| (factor, value))
    }
}

impl fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::formatting::format_report_plain(self))
    }
}

/// Row-major (de)serialization of a matrix as nested sequences.
///
/// Rows are streamed straight out of the column-major storage.
mod rows {
    use serde::de::{Deserialize, Deserializer, Error};
    use serde::ser::{Serialize, SerializeSeq, Serializer};

    use crate::types::Matrix;

    struct Row<'a> {
        matrix: &'a Matrix,
        index: usize,
    }

    impl Serialize for Row<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(self.matrix.ncols()))?;
            for value in self.matrix.row(self.index).iter() {
                seq.serialize_element(value)?;
            }
            seq.end()
        }
    }

    pub fn serialize<S: Serializer>(matrix: &Matrix, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(matrix.nrows()))?;
        for index in 0..matrix.nrows() {
            seq.serialize_element(&Row { matrix, index })?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Matrix, D::Error> {
        let rows = Vec::<Vec<f64>>::deserialize(deserializer)?;
        let ncols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != ncols) {
            return Err(D::Error::custom("rows have different lengths"));
        }
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        Ok(Matrix::from_row_slice(rows.len(), ncols, &flat))
    }
}

// ============================================================================
// ReplicateSummary - Monte-Carlo bias check
// ============================================================================

/// Mean effects over repeated simulations of the same design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicateSummary {
    /// Number of simulations averaged.
    pub replicates: usize,

    /// Mean estimated effect per factor.
    pub mean_effects: Vec<f64>,

    /// Largest |mean − expected| over all factors.
    pub max_bias: f64,
}

impl ReplicateSummary {
    /// Summarise replicate means against the analytic expectation.
    pub fn new(replicates: usize, mean: &Effects, expected: &Effects) -> Self {
        Self {
            replicates,
            mean_effects: mean.values().to_vec(),
            max_bias: mean.max_abs_deviation(expected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{check_orthogonality, estimate_effects, expected_effects};
    use crate::simulate::noiseless_response;

    fn make_report(n: usize) -> ExperimentReport {
        let design = DesignMatrix::full_factorial(n).unwrap();
        let shifted = design.shifted(10.0);
        let response = noiseless_response(&shifted);
        let effects = estimate_effects(&design, &response).unwrap();
        let expected = expected_effects(n, 10.0);
        let orthogonality = check_orthogonality(&design);
        ExperimentReport::new(
            design,
            shifted,
            &response,
            &effects,
            &expected,
            &orthogonality,
            0.0,
            42,
        )
    }

    #[test]
    fn test_shapes_two_factors() {
        let report = make_report(2);
        assert_eq!(report.shapes(), [(4, 2), (4, 2), (4, 1), (1, 2)]);
        assert_eq!(report.expected_effect, 20.0);
        assert!(report.orthogonal);
        assert_eq!(report.effect_values(), &[20.0, 20.0]);
    }

    #[test]
    fn test_replicates_skipped_when_absent() {
        let json = serde_json::to_string(&make_report(1)).unwrap();
        assert!(!json.contains("replicates"));
        assert!(json.contains("\"design\":[[-1.0],[1.0]]"));
    }

    #[test]
    fn test_replicate_summary_bias() {
        let mean = Effects::from_values(vec![19.9, 20.05]);
        let expected = expected_effects(2, 10.0);
        let summary = ReplicateSummary::new(100, &mean, &expected);
        assert!((summary.max_bias - 0.1).abs() < 1e-9);

        let report = make_report(2).with_replicates(summary);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"replicates\":100"));
    }

    #[test]
    fn test_arrays_serialize_row_major() {
        let json = serde_json::to_string(&make_report(2)).unwrap();
        assert!(json.contains("\"design\":[[-1.0,-1.0],[1.0,-1.0],[-1.0,1.0],[1.0,1.0]]"));
        assert!(json.contains("\"response\":[[162.0],[202.0],[202.0],[242.0]]"));
        assert!(json.contains("\"effects\":[[20.0,20.0]]"));

        let back: ExperimentReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, make_report(2));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let json = serde_json::to_string(&make_report(1))
            .unwrap()
            .replace("[[-1.0],[1.0]]", "[[-1.0],[1.0,1.0]]");
        assert!(serde_json::from_str::<ExperimentReport>(&json).is_err());
    }

    #[test]
    fn test_dominant_factor() {
        let report = make_report(3);
        // Equal noiseless effects: the last maximum wins.
        assert_eq!(report.dominant(), Some((2, 20.0)));
    }
}
