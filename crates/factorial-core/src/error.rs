//! Error types for design construction, simulation and estimation.

use thiserror::Error;

/// Error returned when a design matrix cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DesignError {
    /// Zero factors gives a degenerate 1×0 design.
    #[error("a factorial design needs at least one factor")]
    NoFactors,

    /// The requested design would exceed the configured capacity.
    ///
    /// Raised before any allocation so that large requests fail with a
    /// descriptive message instead of an allocator abort.
    #[error("{factors} factors would need 2^{factors} runs; at most {max} factors are allowed")]
    TooManyFactors {
        /// Requested number of factors.
        factors: usize,
        /// Effective limit.
        max: usize,
    },
}

/// Error returned when a response cannot be simulated.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SimulationError {
    /// Noise standard deviation is negative, NaN or infinite.
    #[error("noise standard deviation must be finite and non-negative, got {std_dev}")]
    InvalidNoise {
        /// Rejected standard deviation.
        std_dev: f64,
    },
}

/// Error returned when effects cannot be estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// Response length does not match the number of design runs.
    #[error("response has {responses} values but the design has {runs} runs")]
    LengthMismatch {
        /// Rows in the design matrix.
        runs: usize,
        /// Values in the response vector.
        responses: usize,
    },

    /// Replicate averaging was asked for zero replicates.
    #[error("at least one replicate is required")]
    NoReplicates,
}

/// Any error raised by the factorial pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FactorialError {
    /// Design construction failed.
    #[error(transparent)]
    Design(#[from] DesignError),

    /// Response simulation failed.
    #[error(transparent)]
    Simulation(#[from] SimulationError),

    /// Effect estimation failed.
    #[error(transparent)]
    Estimate(#[from] EstimateError),
}

/// Result alias for pipeline operations.
pub type Result<T, E = FactorialError> = core::result::Result<T, E>;
