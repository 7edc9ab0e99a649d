// ============================================================================
// Apportionment Engine Library
// Exact-decimal largest-remainder apportionment with pluggable strategies
// ============================================================================

//! # Apportionment Engine
//!
//! Splits a total quantity across weighted shares so that every share is
//! rounded to one decimal place while the rounded shares still sum exactly
//! to the rounded total.
//!
//! ## Features
//!
//! - **Exact decimal arithmetic** via `rust_decimal` (never binary floats)
//! - **Largest-remainder reconciliation** with stable, order-preserving
//!   tie-breaks
//! - **Pluggable allocation strategies** behind the `ApportionStrategy` trait
//! - **Soft-fail diagnostics** for precision anomalies (events, not errors)
//!
//! ## Example
//!
//! ```rust
//! use apportion_engine::prelude::*;
//! use std::sync::Arc;
//!
//! // Create an engine with the largest-remainder strategy
//! let engine = Apportioner::new(
//!     Box::new(LargestRemainder::new()),
//!     Arc::new(NoOpDiagnosticHandler),
//! );
//!
//! // Split 100 across three equal weights
//! let result = engine.apportion("100", &["1", "1", "1"]).unwrap();
//! assert_eq!(result.rendered, vec!["33.4", "33.3", "33.3"]);
//!
//! // The one-decimal shares always re-sum to the rounded total
//! assert_eq!(result.total().to_string(), "100.0");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{ApportionConfig, Apportionment, PrecisionWarning};
    pub use crate::engine::{
        create_from_config, Apportioner, ApportionerBuilder, LargestRemainder,
    };
    pub use crate::interfaces::{
        ApportionEvent, ApportionStrategy, DiagnosticHandler, LoggingDiagnosticHandler,
        NoOpDiagnosticHandler,
    };
    pub use crate::numeric::{ApportionError, ApportionResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn engine() -> Apportioner {
        Apportioner::new(
            Box::new(LargestRemainder::new()),
            Arc::new(NoOpDiagnosticHandler),
        )
    }

    #[test]
    fn test_equal_split_bumps_first_share() {
        let result = engine().apportion("100", &["1", "1", "1"]).unwrap();

        assert_eq!(result.rendered, vec!["33.4", "33.3", "33.3"]);
        assert_eq!(result.total(), dec!(100.0));
        assert!(result.warning.is_none());
    }

    #[test]
    fn test_weighted_split_without_adjustment() {
        let result = engine().apportion("10", &["1", "2", "3"]).unwrap();

        assert_eq!(result.rendered, vec!["1.7", "3.3", "5.0"]);
        assert_eq!(result.total(), dec!(10.0));
    }

    #[test]
    fn test_zero_total_yields_zeros() {
        let result = engine().apportion("0", &["5", "10"]).unwrap();

        assert_eq!(result.rendered, vec!["0.0", "0.0"]);
    }

    #[test]
    fn test_zero_weights_with_nonzero_total_fail() {
        let err = engine().apportion("50", &["0", "0"]).unwrap_err();
        assert_eq!(err, ApportionError::ZeroWeightSum);
    }

    #[test]
    fn test_unparseable_total_fails() {
        let err = engine().apportion("abc", &["1", "2"]).unwrap_err();
        assert_eq!(err, ApportionError::InvalidNumber);
    }

    #[test]
    fn test_output_preserves_input_order() {
        let result = engine().apportion("100", &["1", "2", "3", "4"]).unwrap();

        assert_eq!(result.len(), 4);
        assert_eq!(
            result.rendered,
            vec!["10.0", "20.0", "30.0", "40.0"]
        );
    }

    #[test]
    fn test_fractional_total_reconciles() {
        let result = engine()
            .apportion("123.4", &["2", "3", "5", "7"])
            .unwrap();

        assert_eq!(result.total(), dec!(123.4));
        assert!(result.warning.is_none());
    }

    #[test]
    fn test_share_monotonic_in_weight() {
        let eng = engine();
        let mut previous = dec!(0.0);

        // Raising one weight against fixed peers never drops its share by
        // more than a single 0.1 rounding step.
        for w in 1..=20u32 {
            let weights = ["5".to_string(), w.to_string(), "7".to_string()];
            let share = eng.apportion("100", &weights).unwrap().shares[1];
            assert!(
                share >= previous - dec!(0.1),
                "share {} fell more than one step below {}",
                share,
                previous
            );
            previous = share;
        }
    }

    #[test]
    fn test_builder_round_trip() {
        let eng = ApportionerBuilder::new()
            .with_max_shares(8)
            .build(Arc::new(NoOpDiagnosticHandler))
            .unwrap();

        let result = eng.apportion("1", &["1", "1", "1"]).unwrap();
        assert_eq!(result.rendered, vec!["0.4", "0.3", "0.3"]);
    }

    proptest! {
        #[test]
        fn prop_sum_invariant_and_shape(
            total_tenths in 0i64..1_000_000,
            weights in proptest::collection::vec(0u32..10_000u32, 1..16),
        ) {
            prop_assume!(weights.iter().any(|w| *w > 0));

            let total = Decimal::new(total_tenths, 1);
            let inputs: Vec<String> = weights.iter().map(|w| w.to_string()).collect();
            let result = engine().apportion(&total.to_string(), &inputs).unwrap();

            // Length and order
            prop_assert_eq!(result.len(), weights.len());
            // Exact-sum invariant against a one-decimal total
            prop_assert_eq!(result.total(), total);
            // Non-negativity
            prop_assert!(result.shares.iter().all(|s| *s >= Decimal::ZERO));
            // Reconciliation never needs a warning for one-decimal totals
            prop_assert!(result.warning.is_none());
            // Fixed one-decimal rendering
            let all_one_decimal = result.rendered.iter().all(|s| {
                s.split_once('.').map(|(_, frac)| frac.len() == 1).unwrap_or(false)
            });
            prop_assert!(all_one_decimal);
        }

        #[test]
        fn prop_zero_total_yields_all_zeros(
            weights in proptest::collection::vec(1u32..1_000u32, 1..12),
        ) {
            let inputs: Vec<String> = weights.iter().map(|w| w.to_string()).collect();
            let result = engine().apportion("0", &inputs).unwrap();
            prop_assert!(result.rendered.iter().all(|s| s == "0.0"));
        }
    }
}
