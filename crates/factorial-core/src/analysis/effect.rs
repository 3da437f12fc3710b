//! Main-effect estimation for two-level factorial designs.
//!
//! For an orthogonal ±1 design M with N = 2^n runs, MᵀM = N·I, so the
//! least-squares main effects reduce to
//!
//! ```text
//! E = Mᵀ R / N        E[j] = (M[:, j] · R) / N
//! ```
//!
//! ## Expected effect of the simulated response
//!
//! With R[i] = Σ_j (x_ij + s)² = n(1 + s²) + 2s Σ_j x_ij, every column is
//! zero-sum and orthogonal to the others, so E[j] = 2s for every factor.
//! Gaussian noise adds a zero-mean term with standard deviation σ/√N.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::design::{DesignMatrix, ShiftedDesign};
use crate::error::EstimateError;
use crate::simulate::{simulate_response, NoiseModel, Response};

/// Estimated main effect per factor, in factor order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Effects {
    values: Vec<f64>,
}

impl Effects {
    /// Wrap per-factor effect values.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Number of factors.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if there are no factors.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Effect of one factor.
    pub fn get(&self, factor: usize) -> Option<f64> {
        self.values.get(factor).copied()
    }

    /// Effects in factor order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Index and value of the factor with the largest |effect|.
    pub fn dominant(&self) -> Option<(usize, f64)> {
        self.values
            .iter()
            .copied()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.abs().total_cmp(&b.abs()))
    }

    /// Largest absolute difference from `expected`, over all factors.
    pub fn max_abs_deviation(&self, expected: &Effects) -> f64 {
        self.values
            .iter()
            .zip(&expected.values)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0_f64, f64::max)
    }
}

/// Estimate main effects: `E[j] = (M[:, j] · R) / runs`.
///
/// # Errors
///
/// Returns `LengthMismatch` if the response does not have one value per run.
pub fn estimate_effects(design: &DesignMatrix, response: &Response) -> Result<Effects, EstimateError> {
    let runs = design.runs();
    if response.len() != runs {
        return Err(EstimateError::LengthMismatch {
            runs,
            responses: response.len(),
        });
    }

    let scaled = design.as_matrix().tr_mul(response.as_vector()) / runs as f64;
    Ok(Effects::from_values(scaled.iter().copied().collect()))
}

/// Analytic main effects of the noiseless sum-of-squares response.
///
/// Every factor has effect `2 * shift` (see module docs).
pub fn expected_effects(factors: usize, shift: f64) -> Effects {
    Effects::from_values(vec![2.0 * shift; factors])
}

/// Average the estimated effects over `replicates` independent simulations.
///
/// Used to bound estimator bias: the mean converges to
/// [`expected_effects`] as the replicate count grows.
///
/// # Errors
///
/// Returns `NoReplicates` if `replicates == 0`.
pub fn mean_effects_over_replicates<R: Rng + ?Sized>(
    design: &DesignMatrix,
    shifted: &ShiftedDesign,
    noise: &NoiseModel,
    replicates: usize,
    rng: &mut R,
) -> Result<Effects, EstimateError> {
    if replicates == 0 {
        return Err(EstimateError::NoReplicates);
    }

    let mut sums = vec![0.0_f64; design.factors()];
    for _ in 0..replicates {
        let response = simulate_response(shifted, noise, rng);
        let effects = estimate_effects(design, &response)?;
        for (sum, value) in sums.iter_mut().zip(effects.values()) {
            *sum += value;
        }
    }

    let n = replicates as f64;
    Ok(Effects::from_values(sums.into_iter().map(|s| s / n).collect()))
}
