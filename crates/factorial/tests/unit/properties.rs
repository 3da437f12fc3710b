//! Property tests for the design invariants, driven through the public API.

use factorial::DesignMatrix;
use factorial_core::analysis::{check_orthogonality, estimate_effects, expected_effects};
use factorial_core::simulate::noiseless_response;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Every column pair shows each sign combination in exactly N/4 runs
    #[test]
    fn prop_pairs_balanced(n in 2usize..=9) {
        let design = DesignMatrix::full_factorial(n).unwrap();
        let report = check_orthogonality(&design);
        let quarter = design.runs() / 4;
        for pair in &report.pairs {
            prop_assert_eq!(pair.counts, [quarter; 4]);
        }
        prop_assert!(report.column_sums.iter().all(|&s| s == 0.0));
    }

    /// Noiseless effects equal 2 * shift for any finite shift
    #[test]
    fn prop_noiseless_effect_is_twice_shift(n in 1usize..=8, shift in -50i32..=50) {
        let shift = shift as f64;
        let design = DesignMatrix::full_factorial(n).unwrap();
        let effects = estimate_effects(&design, &noiseless_response(&design.shifted(shift))).unwrap();
        prop_assert!(effects.max_abs_deviation(&expected_effects(n, shift)) < 1e-9);
    }
}
