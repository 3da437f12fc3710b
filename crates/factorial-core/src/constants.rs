//! Constants used throughout the crate.

/// Default deterministic seed for RNG operations.
///
/// Same seed + same design = same simulated response.
/// The value `0x666163746F72` is "factor" encoded in ASCII.
pub const DEFAULT_SEED: u64 = 0x666163746F72;

/// Coded value of a factor at its low level.
pub const LOW: f64 = -1.0;

/// Coded value of a factor at its high level.
pub const HIGH: f64 = 1.0;

/// Hard ceiling on the number of factors.
///
/// 2^22 runs × 22 columns of `f64` is ~704 MiB per matrix. A run holds the
/// coded and shifted matrices plus two 32 MiB response vectors, about
/// 1.5 GiB at the ceiling. Requests above this never allocate.
pub const MAX_FACTORS: usize = 22;

// =============================================================================
// Default configuration constants
// =============================================================================

/// Default cap on the number of factors (2^20 runs, ~330 MiB per run).
pub const DEFAULT_MAX_FACTORS: usize = 20;

/// Default constant added to the coded design before squaring.
pub const DEFAULT_SHIFT: f64 = 10.0;

/// Default standard deviation of the Gaussian response noise.
pub const DEFAULT_NOISE_SD: f64 = 0.5;

/// Default number of Monte-Carlo replicates for the bias check.
pub const DEFAULT_REPLICATES: usize = 1_000;
