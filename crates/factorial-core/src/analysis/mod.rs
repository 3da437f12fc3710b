//! Analysis of factorial designs and their responses.
//!
//! - **Effect estimation** (`effect`): main effects as normalised column
//!   dot products, analytic expectations, replicate averaging
//! - **Orthogonality** (`orthogonality`): sign-combination balance between
//!   design columns

pub mod effect;
pub mod orthogonality;

pub use effect::{estimate_effects, expected_effects, mean_effects_over_replicates, Effects};
pub use orthogonality::{check_orthogonality, OrthogonalityReport, PairBalance};
