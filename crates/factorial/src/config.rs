//! Configuration for a factorial experiment run.

use factorial_core::constants::{
    DEFAULT_MAX_FACTORS, DEFAULT_NOISE_SD, DEFAULT_SEED, DEFAULT_SHIFT, MAX_FACTORS,
};
use thiserror::Error;

/// Environment variable consulted for a seed when none is configured.
pub const SEED_ENV_VAR: &str = "FACTORIAL_SEED";

/// Configuration options for [`Experiment`](crate::Experiment).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // =========================================================================
    // Design
    // =========================================================================
    /// Largest number of factors accepted before allocating.
    ///
    /// A design over n factors has 2^n runs, so this bounds memory use.
    /// Values above [`MAX_FACTORS`] are rejected by [`Config::validate`].
    /// Default: 20.
    pub max_factors: usize,

    /// Constant added to every coded entry before squaring. Default: 10.0.
    pub shift: f64,

    // =========================================================================
    // Simulation
    // =========================================================================
    /// Standard deviation of the per-run Gaussian noise. Default: 0.5.
    ///
    /// Zero gives a noiseless response whose effects equal `2 * shift`.
    pub noise_sd: f64,

    /// Seed for the response RNG.
    ///
    /// `None` falls back to `FACTORIAL_SEED`, then to OS entropy. The seed
    /// actually used is always recorded in the report.
    pub seed: Option<u64>,

    // =========================================================================
    // Bias check
    // =========================================================================
    /// Number of extra simulations to average for the bias check.
    ///
    /// `None` skips the check. Replicates draw from the same RNG stream,
    /// after the reported response.
    pub replicates: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_factors: DEFAULT_MAX_FACTORS,
            shift: DEFAULT_SHIFT,
            noise_sd: DEFAULT_NOISE_SD,
            seed: None,
            replicates: None,
        }
    }
}

/// Where the seed of a run came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    /// Set explicitly on the config.
    Configured,
    /// Read from `FACTORIAL_SEED`.
    Environment,
    /// Drawn from OS entropy.
    Entropy,
}

/// Invalid configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// `max_factors` outside `1..=MAX_FACTORS`.
    #[error("max_factors must be in 1..={limit}, got {max_factors}")]
    MaxFactorsOutOfRange {
        /// Rejected value.
        max_factors: usize,
        /// Hard ceiling.
        limit: usize,
    },

    /// Shift is NaN or infinite.
    #[error("shift must be finite, got {shift}")]
    InvalidShift {
        /// Rejected value.
        shift: f64,
    },

    /// Noise standard deviation is negative, NaN or infinite.
    #[error("noise_sd must be finite and non-negative, got {noise_sd}")]
    InvalidNoise {
        /// Rejected value.
        noise_sd: f64,
    },

    /// Bias check asked for zero replicates.
    #[error("replicates must be positive")]
    ZeroReplicates,
}

impl Config {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Noiseless preset: effects come out exactly at `2 * shift`.
    pub fn noiseless() -> Self {
        Self {
            noise_sd: 0.0,
            ..Default::default()
        }
    }

    /// Fixed-seed preset for reproducible output.
    pub fn reproducible() -> Self {
        Self {
            seed: Some(DEFAULT_SEED),
            ..Default::default()
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the factor cap.
    ///
    /// # Panics
    ///
    /// Panics if `max` is zero or above [`MAX_FACTORS`].
    pub fn max_factors(mut self, max: usize) -> Self {
        assert!(
            (1..=MAX_FACTORS).contains(&max),
            "max_factors must be in 1..={}",
            MAX_FACTORS
        );
        self.max_factors = max;
        self
    }

    /// Set the shift added before squaring.
    ///
    /// # Panics
    ///
    /// Panics if `shift` is not finite.
    pub fn shift(mut self, shift: f64) -> Self {
        assert!(shift.is_finite(), "shift must be finite");
        self.shift = shift;
        self
    }

    /// Set the noise standard deviation.
    ///
    /// # Panics
    ///
    /// Panics if `sd` is negative or not finite.
    pub fn noise_sd(mut self, sd: f64) -> Self {
        assert!(sd.is_finite() && sd >= 0.0, "noise_sd must be finite and non-negative");
        self.noise_sd = sd;
        self
    }

    /// Fix the RNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable the bias check with `n` replicates.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn replicates(mut self, n: usize) -> Self {
        assert!(n > 0, "replicates must be positive");
        self.replicates = Some(n);
        self
    }

    // =========================================================================
    // Resolution methods
    // =========================================================================

    /// Seed to use for this run and where it came from.
    ///
    /// Reads `FACTORIAL_SEED` from the process environment; see
    /// [`Config::resolve_seed_from`].
    pub fn resolve_seed(&self) -> (u64, SeedSource) {
        let env = std::env::var(SEED_ENV_VAR).ok();
        self.resolve_seed_from(env.as_deref())
    }

    /// Resolve the seed against an explicit `FACTORIAL_SEED` value.
    ///
    /// Order: configured seed, then `env`, then OS entropy. An unparseable
    /// `env` is logged and ignored.
    pub fn resolve_seed_from(&self, env: Option<&str>) -> (u64, SeedSource) {
        if let Some(seed) = self.seed {
            return (seed, SeedSource::Configured);
        }
        if let Some(raw) = env {
            match parse_seed(raw) {
                Some(seed) => return (seed, SeedSource::Environment),
                None => tracing::warn!("Invalid {} '{}', using entropy", SEED_ENV_VAR, raw),
            }
        }
        (rand::random::<u64>(), SeedSource::Entropy)
    }

    /// Check every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_FACTORS).contains(&self.max_factors) {
            return Err(ConfigError::MaxFactorsOutOfRange {
                max_factors: self.max_factors,
                limit: MAX_FACTORS,
            });
        }
        if !self.shift.is_finite() {
            return Err(ConfigError::InvalidShift { shift: self.shift });
        }
        if !self.noise_sd.is_finite() || self.noise_sd < 0.0 {
            return Err(ConfigError::InvalidNoise {
                noise_sd: self.noise_sd,
            });
        }
        if self.replicates == Some(0) {
            return Err(ConfigError::ZeroReplicates);
        }
        Ok(())
    }
}

/// Parse a seed given in decimal or `0x`-prefixed hex.
pub fn parse_seed(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => raw.parse().ok(),
    }
}
