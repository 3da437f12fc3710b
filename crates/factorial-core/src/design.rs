//! Two-level full-factorial design construction.
//!
//! A design over `n` factors has 2^n runs, one per combination of factor
//! levels, coded ±1. Column j is the block pattern `[-1; 2^j] ++ [+1; 2^j]`
//! tiled down the runs, so factor 0 alternates every run and factor n-1
//! switches once halfway (standard Yates order).
//!
//! ```text
//! n = 2        f0  f1
//!   run 0  [   -1  -1 ]
//!   run 1  [   +1  -1 ]
//!   run 2  [   -1  +1 ]
//!   run 3  [   +1  +1 ]
//! ```

use crate::constants::MAX_FACTORS;
use crate::error::DesignError;
use crate::types::{Level, Matrix};

/// Coded ±1 design matrix of a full two-level factorial experiment.
///
/// Shape is (2^n, n). Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignMatrix {
    matrix: Matrix,
}

impl DesignMatrix {
    /// Build the full factorial design for `factors` factors, capped at
    /// [`MAX_FACTORS`].
    pub fn full_factorial(factors: usize) -> Result<Self, DesignError> {
        Self::full_factorial_capped(factors, MAX_FACTORS)
    }

    /// Build the full factorial design, rejecting `factors > max_factors`
    /// before allocating.
    ///
    /// `max_factors` is clamped to [`MAX_FACTORS`].
    pub fn full_factorial_capped(factors: usize, max_factors: usize) -> Result<Self, DesignError> {
        let runs = runs_for(factors, max_factors)?;
        let matrix = Matrix::from_iterator(
            runs,
            factors,
            (0..factors).flat_map(|factor| block_column(runs, factor)),
        );
        Ok(Self { matrix })
    }

    /// Number of factors (columns).
    pub fn factors(&self) -> usize {
        self.matrix.ncols()
    }

    /// Number of runs (rows), always 2^factors.
    pub fn runs(&self) -> usize {
        self.matrix.nrows()
    }

    /// Level of `factor` in `run`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn level(&self, run: usize, factor: usize) -> Level {
        if self.matrix[(run, factor)] < 0.0 {
            Level::Low
        } else {
            Level::High
        }
    }

    /// Coded values of one factor across all runs.
    pub fn column(&self, factor: usize) -> Vec<f64> {
        self.matrix.column(factor).iter().copied().collect()
    }

    /// Coded values of one run across all factors.
    pub fn row(&self, run: usize) -> Vec<f64> {
        self.matrix.row(run).iter().copied().collect()
    }

    /// Underlying matrix.
    pub fn as_matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Take the underlying matrix without copying.
    pub fn into_matrix(self) -> Matrix {
        self.matrix
    }

    /// Add `shift` to every entry.
    pub fn shifted(&self, shift: f64) -> ShiftedDesign {
        ShiftedDesign {
            matrix: self.matrix.add_scalar(shift),
            shift,
        }
    }
}

/// Design matrix offset by a constant (M + s).
///
/// Only used as input to the response simulator; keeps the shift alongside
/// the values so reports can show where they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftedDesign {
    matrix: Matrix,
    shift: f64,
}

impl ShiftedDesign {
    /// Constant that was added to the coded design.
    pub fn shift(&self) -> f64 {
        self.shift
    }

    /// Number of factors (columns).
    pub fn factors(&self) -> usize {
        self.matrix.ncols()
    }

    /// Number of runs (rows).
    pub fn runs(&self) -> usize {
        self.matrix.nrows()
    }

    /// Sum of squared entries of one run.
    pub fn row_sum_of_squares(&self, run: usize) -> f64 {
        self.matrix.row(run).norm_squared()
    }

    /// Underlying matrix.
    pub fn as_matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Take the underlying matrix without copying.
    pub fn into_matrix(self) -> Matrix {
        self.matrix
    }
}

/// Validate `factors` against the cap and return the run count.
pub fn runs_for(factors: usize, max_factors: usize) -> Result<usize, DesignError> {
    let max = max_factors.min(MAX_FACTORS);
    if factors == 0 {
        return Err(DesignError::NoFactors);
    }
    if factors > max {
        return Err(DesignError::TooManyFactors { factors, max });
    }
    Ok(1usize << factors)
}

/// Bytes of one (2^factors × factors) `f64` matrix.
///
/// A run holds two of these (coded and shifted) plus two 2^factors vectors.
pub fn matrix_bytes(factors: usize) -> usize {
    (1usize << factors) * factors * core::mem::size_of::<f64>()
}

/// One column of the design: `[-1; 2^j] ++ [+1; 2^j]` tiled to `runs` values.
///
/// 2^(j+1) divides 2^n for every j < n, so the tiling never has to be
/// truncated or padded.
fn block_column(runs: usize, factor: usize) -> impl Iterator<Item = f64> {
    let block_size = 1usize << factor;
    let period = 2 * block_size;
    (0..runs).map(move |run| {
        let level = if run % period < block_size {
            Level::Low
        } else {
            Level::High
        };
        level.value()
    })
}
