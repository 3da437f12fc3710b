//! Synthetic response simulation.
//!
//! Each run's response is the sum of squares of its shifted row plus one
//! independent Gaussian draw. The random source is always supplied by the
//! caller; nothing here touches thread-local or global RNG state.

use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::design::ShiftedDesign;
use crate::error::SimulationError;
use crate::types::Vector;

/// Additive Gaussian noise N(0, σ²) applied once per run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseModel {
    normal: Normal<f64>,
}

impl NoiseModel {
    /// Zero-mean Gaussian noise with standard deviation `std_dev`.
    ///
    /// σ = 0 is accepted and yields a noiseless response (one draw per run
    /// is still consumed, so the RNG stream does not depend on σ).
    pub fn gaussian(std_dev: f64) -> Result<Self, SimulationError> {
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(SimulationError::InvalidNoise { std_dev });
        }
        let normal =
            Normal::new(0.0, std_dev).map_err(|_| SimulationError::InvalidNoise { std_dev })?;
        Ok(Self { normal })
    }

    /// Standard deviation of the noise.
    pub fn std_dev(&self) -> f64 {
        self.normal.std_dev()
    }

    /// Draw one noise value.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.normal.sample(rng)
    }
}

/// Simulated response, one value per design run.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    values: Vector,
}

impl Response {
    /// Wrap existing response values.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self {
            values: Vector::from_vec(values),
        }
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if there are no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values in run order.
    pub fn values(&self) -> &[f64] {
        self.values.as_slice()
    }

    /// Underlying column vector.
    pub fn as_vector(&self) -> &Vector {
        &self.values
    }
}

/// Simulate `R[i] = Σ_j M2[i,j]² + noise_i` with draws taken in run order.
pub fn simulate_response<R: Rng + ?Sized>(
    design: &ShiftedDesign,
    noise: &NoiseModel,
    rng: &mut R,
) -> Response {
    let values = Vector::from_iterator(
        design.runs(),
        (0..design.runs()).map(|run| design.row_sum_of_squares(run) + noise.sample(rng)),
    );
    Response { values }
}

/// Sum-of-squares response without noise.
pub fn noiseless_response(design: &ShiftedDesign) -> Response {
    let values = Vector::from_iterator(
        design.runs(),
        (0..design.runs()).map(|run| design.row_sum_of_squares(run)),
    );
    Response { values }
}

/// Seeded generator used for every simulation in the pipeline.
pub fn seeded_rng(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}
