//! # factorial
//!
//! Two-level full-factorial experiments with a simulated response.
//!
//! For `n` binary factors this crate builds the 2^n × n design matrix in ±1
//! coding, shifts it by a constant, simulates one noisy response per run as
//! the sum of squares of the shifted row plus Gaussian noise, and estimates
//! each factor's main effect as the normalised dot product of its column
//! with the response.
//!
//! ## Quick Start
//!
//! ```
//! use factorial::{Config, Experiment};
//!
//! let report = Experiment::with_config(Config::new().seed(7)).run(3)?;
//!
//! assert_eq!(report.runs, 8);
//! assert!(report.orthogonal);
//! println!("{}", factorial::output::format_report(&report));
//! # Ok::<(), factorial::ExperimentError>(())
//! ```
//!
//! ## Reproducibility
//!
//! The response RNG is always seeded explicitly. Without a configured seed
//! one is taken from `FACTORIAL_SEED` or drawn from OS entropy, and the seed
//! used is recorded in the report so any run can be replayed.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod experiment;

// Functional modules
pub mod input;
pub mod output;

// Re-exports for public API
pub use config::{parse_seed, Config, ConfigError, SeedSource, SEED_ENV_VAR};
pub use experiment::{Experiment, ExperimentError};
pub use factorial_core::{
    DesignError, DesignMatrix, Effects, EstimateError, ExperimentReport, FactorialError,
    NoiseModel, ReplicateSummary, Response, ShiftedDesign, SimulationError,
};
