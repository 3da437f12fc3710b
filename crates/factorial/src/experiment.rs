//! Main `Experiment` entry point and builder.

use std::time::Instant;

use factorial_core::analysis::{
    check_orthogonality, estimate_effects, expected_effects, mean_effects_over_replicates,
};
use factorial_core::design::{matrix_bytes, DesignMatrix};
use factorial_core::simulate::{seeded_rng, simulate_response, NoiseModel};
use factorial_core::{ExperimentReport, FactorialError, ReplicateSummary};
use thiserror::Error;

use crate::config::{Config, ConfigError};

/// Error returned by [`Experiment::run`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ExperimentError {
    /// The configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A pipeline stage failed.
    #[error(transparent)]
    Pipeline(#[from] FactorialError),
}

/// Runs the Build → Shift → Simulate → Estimate pipeline.
///
/// # Example
///
/// ```
/// use factorial::{Config, Experiment};
///
/// let report = Experiment::with_config(Config::noiseless().seed(1)).run(2)?;
/// assert_eq!(report.shapes(), [(4, 2), (4, 2), (4, 1), (1, 2)]);
/// assert_eq!(report.effect_values(), &[20.0, 20.0]);
/// # Ok::<(), factorial::ExperimentError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Experiment {
    config: Config,
}

impl Experiment {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Set the RNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Set the noise standard deviation.
    pub fn noise_sd(mut self, sd: f64) -> Self {
        self.config.noise_sd = sd;
        self
    }

    /// Set the shift added before squaring.
    pub fn shift(mut self, shift: f64) -> Self {
        self.config.shift = shift;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the whole pipeline for `factors` factors.
    ///
    /// Nothing is printed here; the returned report holds every stage so the
    /// caller can emit it all at once or not at all.
    ///
    /// # Errors
    ///
    /// Fails on an invalid config, on `factors == 0`, or when `factors`
    /// exceeds `max_factors`. The capacity check happens before allocation.
    pub fn run(&self, factors: usize) -> Result<ExperimentReport, ExperimentError> {
        self.config.validate()?;
        let start = Instant::now();

        let design = DesignMatrix::full_factorial_capped(factors, self.config.max_factors)
            .map_err(FactorialError::from)?;
        tracing::debug!(
            factors,
            runs = design.runs(),
            matrix_mib = matrix_bytes(factors) >> 20,
            "Built full factorial design"
        );

        let orthogonality = check_orthogonality(&design);
        if !orthogonality.is_orthogonal() {
            for pair in orthogonality.unbalanced_pairs() {
                tracing::warn!(
                    columns = ?pair.columns,
                    counts = ?pair.counts,
                    "Design columns are not balanced"
                );
            }
        }

        let shifted = design.shifted(self.config.shift);
        tracing::debug!(shift = self.config.shift, "Shifted design");

        let noise = NoiseModel::gaussian(self.config.noise_sd).map_err(FactorialError::from)?;
        let (seed, seed_source) = self.config.resolve_seed();
        tracing::debug!(seed, source = ?seed_source, "Seeded response RNG");
        let mut rng = seeded_rng(seed);

        let response = simulate_response(&shifted, &noise, &mut rng);
        tracing::debug!(values = response.len(), "Simulated response");

        let effects = estimate_effects(&design, &response).map_err(FactorialError::from)?;
        let expected = expected_effects(factors, self.config.shift);
        tracing::debug!(effects = ?effects.values(), "Estimated main effects");

        let summary = match self.config.replicates {
            Some(replicates) => {
                let mean =
                    mean_effects_over_replicates(&design, &shifted, &noise, replicates, &mut rng)
                        .map_err(FactorialError::from)?;
                let summary = ReplicateSummary::new(replicates, &mean, &expected);
                tracing::debug!(
                    replicates,
                    max_bias = summary.max_bias,
                    "Averaged replicate effects"
                );
                Some(summary)
            }
            None => None,
        };

        // The report takes both matrices; nothing below may borrow them.
        let mut report = ExperimentReport::new(
            design,
            shifted,
            &response,
            &effects,
            &expected,
            &orthogonality,
            noise.std_dev(),
            seed,
        );
        if let Some(summary) = summary {
            report = report.with_replicates(summary);
        }

        tracing::info!(
            factors,
            runs = report.runs,
            seed,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Experiment complete"
        );
        Ok(report)
    }
}
