//! Core routines for two-level full-factorial experiments.
//!
//! This crate builds the ±1-coded design matrix of a full factorial
//! experiment, simulates a synthetic response over it, and estimates each
//! factor's main effect. It has no I/O and no global state: randomness is
//! always injected by the caller.
//!
//! # Features
//!
//! - `ansi` (default): ANSI colors in `Display` output via `colored`
//!
//! # Usage
//!
//! This crate is typically used through the `factorial` crate, which adds
//! configuration, logging, the pipeline runner and the CLI. It can also be
//! used directly:
//!
//! ```
//! use factorial_core::{
//!     analysis::{estimate_effects, expected_effects},
//!     design::DesignMatrix,
//!     simulate::{seeded_rng, simulate_response, NoiseModel},
//! };
//!
//! let design = DesignMatrix::full_factorial(3)?;
//! let shifted = design.shifted(10.0);
//! let noise = NoiseModel::gaussian(0.5)?;
//! let response = simulate_response(&shifted, &noise, &mut seeded_rng(42));
//! let effects = estimate_effects(&design, &response)?;
//!
//! assert_eq!(effects.len(), 3);
//! let expected = expected_effects(3, 10.0);
//! assert!(effects.max_abs_deviation(&expected) < 1.0);
//! # Ok::<(), factorial_core::FactorialError>(())
//! ```

pub mod analysis;
pub mod colors;
pub mod constants;
pub mod design;
pub mod error;
pub mod formatting;
pub mod result;
pub mod simulate;
pub mod types;

// Re-export commonly used items at crate root
pub use analysis::{Effects, OrthogonalityReport};
pub use design::{DesignMatrix, ShiftedDesign};
pub use error::{DesignError, EstimateError, FactorialError, SimulationError};
pub use result::{ExperimentReport, ReplicateSummary};
pub use simulate::{NoiseModel, Response};
pub use types::{Level, Matrix, Vector};
