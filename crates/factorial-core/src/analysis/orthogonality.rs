//! Orthogonality check for two-level designs.
//!
//! A full factorial design is orthogonal: for every pair of columns the four
//! sign combinations (−−, +−, −+, ++) occur equally often, each in N/4 runs,
//! and every column sums to zero. Effect estimation by normalised dot product
//! is only unbiased when this holds.

use serde::{Deserialize, Serialize};

use crate::design::DesignMatrix;
use crate::types::Matrix;

/// Sign-combination counts for one pair of columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairBalance {
    /// Column indices (j < k).
    pub columns: (usize, usize),
    /// Run counts for (−,−), (+,−), (−,+), (+,+).
    pub counts: [usize; 4],
}

impl PairBalance {
    /// All four combinations occur equally often.
    pub fn is_balanced(&self) -> bool {
        self.counts.iter().all(|&c| c == self.counts[0])
    }
}

/// Result of checking a design for orthogonality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrthogonalityReport {
    /// One entry per column pair, in (j, k) lexicographic order.
    pub pairs: Vec<PairBalance>,
    /// Sum of each column.
    pub column_sums: Vec<f64>,
}

impl OrthogonalityReport {
    /// Every column is zero-sum and every pair is balanced.
    pub fn is_orthogonal(&self) -> bool {
        self.column_sums.iter().all(|s| s.abs() < 1e-9) && self.pairs.iter().all(PairBalance::is_balanced)
    }

    /// Pairs whose sign combinations are not balanced.
    pub fn unbalanced_pairs(&self) -> impl Iterator<Item = &PairBalance> {
        self.pairs.iter().filter(|p| !p.is_balanced())
    }
}

/// Count sign combinations for every column pair and sum every column.
///
/// One Gram product MᵀM and one pass of column sums give every count: for
/// ±1 columns j, k over N runs with sums s_j, s_k and dot product g,
///
/// ```text
/// (−,−) = (N − s_j − s_k + g) / 4      (+,−) = (N + s_j − s_k − g) / 4
/// (−,+) = (N − s_j + s_k − g) / 4      (+,+) = (N + s_j + s_k + g) / 4
/// ```
pub fn check_orthogonality(design: &DesignMatrix) -> OrthogonalityReport {
    check_columns(design.as_matrix())
}

fn check_columns(matrix: &Matrix) -> OrthogonalityReport {
    let factors = matrix.ncols();
    let runs = matrix.nrows() as f64;

    let column_sums: Vec<f64> = matrix.column_iter().map(|c| c.sum()).collect();
    let gram = matrix.tr_mul(matrix);

    let mut pairs = Vec::with_capacity(factors * factors.saturating_sub(1) / 2);
    for j in 0..factors {
        for k in (j + 1)..factors {
            let (sj, sk, g) = (column_sums[j], column_sums[k], gram[(j, k)]);
            let count = |x: f64| (x / 4.0).round().max(0.0) as usize;
            pairs.push(PairBalance {
                columns: (j, k),
                counts: [
                    count(runs - sj - sk + g),
                    count(runs + sj - sk - g),
                    count(runs - sj + sk - g),
                    count(runs + sj + sk + g),
                ],
            });
        }
    }

    OrthogonalityReport { pairs, column_sums }
}
