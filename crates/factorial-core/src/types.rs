//! Type aliases and common types.

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::constants::{HIGH, LOW};

/// Dense column-major matrix used for designs.
pub type Matrix = DMatrix<f64>;

/// Dense column vector used for responses and effects.
pub type Vector = DVector<f64>;

/// Level of a two-level factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    /// Coded as -1.
    Low,
    /// Coded as +1.
    High,
}

impl Level {
    /// Level of `factor` in `run` under standard (Yates) ordering.
    ///
    /// Factor j alternates in blocks of 2^j runs, starting low.
    #[inline]
    pub fn for_run(run: usize, factor: usize) -> Self {
        if (run >> factor) & 1 == 0 {
            Level::Low
        } else {
            Level::High
        }
    }

    /// Coded ±1 value.
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            Level::Low => LOW,
            Level::High => HIGH,
        }
    }
}
