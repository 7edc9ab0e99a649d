// ============================================================================
// Apportioner
// Validation pipeline and orchestration around the allocation strategy
// ============================================================================

use crate::domain::{ApportionConfig, Apportionment, PrecisionWarning};
use crate::interfaces::{ApportionEvent, ApportionStrategy, DiagnosticHandler};
use crate::numeric::{
    format_one_dp, parse_decimal, quantize_one_dp, ApportionError, ApportionResult, GRANULARITY_DP,
};
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Apportionment engine with a pluggable allocation strategy.
///
/// The engine is pure and synchronous: every invocation owns all of its
/// state, so one instance can be shared behind an `Arc` across threads
/// without locking.
pub struct Apportioner {
    /// Pluggable allocation strategy
    strategy: Box<dyn ApportionStrategy>,

    /// Sink for anomaly diagnostics
    diagnostics: Arc<dyn DiagnosticHandler>,

    /// Engine configuration
    config: ApportionConfig,
}

impl Apportioner {
    /// Create an engine with the default (unbounded) configuration
    pub fn new(
        strategy: Box<dyn ApportionStrategy>,
        diagnostics: Arc<dyn DiagnosticHandler>,
    ) -> Self {
        Self::with_config(ApportionConfig::default(), strategy, diagnostics)
    }

    /// Create an engine with an explicit configuration
    pub fn with_config(
        config: ApportionConfig,
        strategy: Box<dyn ApportionStrategy>,
        diagnostics: Arc<dyn DiagnosticHandler>,
    ) -> Self {
        Self {
            strategy,
            diagnostics,
            config,
        }
    }

    /// Split `total` across `proportions`.
    ///
    /// Both inputs arrive as already-tokenized numeric strings. On success
    /// the returned [`Apportionment`] carries one-decimal shares in input
    /// order whose sum equals the total rounded to one decimal place.
    ///
    /// Validation order, first failure wins: parse errors, negative total,
    /// empty list, negative proportion, zero weight sum (allowed only when
    /// the total is also zero).
    pub fn apportion<S: AsRef<str>>(
        &self,
        total: &str,
        proportions: &[S],
    ) -> ApportionResult<Apportionment> {
        let total = parse_decimal(total)?;
        let weights = proportions
            .iter()
            .map(|p| parse_decimal(p.as_ref()))
            .collect::<ApportionResult<Vec<Decimal>>>()?;

        if total < Decimal::ZERO {
            return Err(ApportionError::NegativeTotal);
        }
        if weights.is_empty() {
            return Err(ApportionError::EmptyProportions);
        }
        if weights.iter().any(|w| *w < Decimal::ZERO) {
            return Err(ApportionError::NegativeProportion);
        }
        if let Some(bound) = self.config.max_shares {
            if weights.len() > bound {
                return Err(ApportionError::Internal(format!(
                    "proportion list length {} exceeds the configured bound {}",
                    weights.len(),
                    bound
                )));
            }
        }

        let weight_sum = weights
            .iter()
            .try_fold(Decimal::ZERO, |acc, w| acc.checked_add(*w))
            .ok_or_else(|| ApportionError::Internal("proportion sum overflowed".to_string()))?;

        if weight_sum.is_zero() {
            if total.is_zero() {
                // Nothing to divide: every share is exactly zero.
                let shares = vec![Decimal::new(0, GRANULARITY_DP); weights.len()];
                let rendered = shares.iter().map(|s| format_one_dp(*s)).collect();
                return Ok(Apportionment::new(shares, rendered, None));
            }
            return Err(ApportionError::ZeroWeightSum);
        }

        let shares = self
            .strategy
            .allocate(total, &weights, self.diagnostics.as_ref())?;
        let rendered: Vec<String> = shares.iter().map(|s| format_one_dp(*s)).collect();

        let warning = self.check_reconciliation(total, &rendered)?;
        Ok(Apportionment::new(shares, rendered, warning))
    }

    /// Re-parse the rendered strings and verify they sum to the quantized
    /// total. A mismatch is reported and attached as a warning, never
    /// failed: the caller still gets the best-effort result.
    fn check_reconciliation(
        &self,
        total: Decimal,
        rendered: &[String],
    ) -> ApportionResult<Option<PrecisionWarning>> {
        let mut actual = Decimal::ZERO;
        for s in rendered {
            let value = parse_decimal(s).map_err(|_| {
                ApportionError::Internal(format!("rendered share {:?} failed to re-parse", s))
            })?;
            actual += value;
        }

        let expected = quantize_one_dp(total);
        if actual != expected {
            self.diagnostics.on_event(ApportionEvent::SumMismatch {
                expected,
                actual,
                total,
                timestamp: Utc::now(),
            });
            return Ok(Some(PrecisionWarning { expected, actual }));
        }
        Ok(None)
    }

    /// Name of the configured strategy, for logging
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    pub fn config(&self) -> &ApportionConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::LargestRemainder;
    use crate::interfaces::NoOpDiagnosticHandler;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    fn engine() -> Apportioner {
        Apportioner::new(
            Box::new(LargestRemainder::new()),
            Arc::new(NoOpDiagnosticHandler),
        )
    }

    #[test]
    fn test_validation_order_parse_beats_negative() {
        // Total fails to parse even though a proportion is negative too
        let err = engine().apportion("abc", &["-1"]).unwrap_err();
        assert_eq!(err, ApportionError::InvalidNumber);
    }

    #[test]
    fn test_validation_order_negative_total_beats_empty_list() {
        let err = engine().apportion("-5", &[] as &[&str]).unwrap_err();
        assert_eq!(err, ApportionError::NegativeTotal);
    }

    #[test]
    fn test_empty_proportions_rejected() {
        let err = engine().apportion("10", &[] as &[&str]).unwrap_err();
        assert_eq!(err, ApportionError::EmptyProportions);
    }

    #[test]
    fn test_negative_proportion_rejected() {
        let err = engine().apportion("10", &["1", "-2"]).unwrap_err();
        assert_eq!(err, ApportionError::NegativeProportion);
    }

    #[test]
    fn test_zero_weights_with_zero_total_yield_zeros() {
        let result = engine().apportion("0", &["0", "0", "0"]).unwrap();
        assert_eq!(result.rendered, vec!["0.0", "0.0", "0.0"]);
        assert_eq!(result.total(), dec!(0.0));
        assert!(result.warning.is_none());
    }

    #[test]
    fn test_zero_weights_with_nonzero_total_rejected() {
        let err = engine().apportion("50", &["0", "0"]).unwrap_err();
        assert_eq!(err, ApportionError::ZeroWeightSum);
    }

    #[test]
    fn test_max_shares_bound_enforced() {
        let bounded = Apportioner::with_config(
            ApportionConfig::new().with_max_shares(2),
            Box::new(LargestRemainder::new()),
            Arc::new(NoOpDiagnosticHandler),
        );

        let err = bounded.apportion("10", &["1", "1", "1"]).unwrap_err();
        assert!(matches!(err, ApportionError::Internal(_)));

        // At the bound is still fine
        assert!(bounded.apportion("10", &["1", "1"]).is_ok());
    }

    #[test]
    fn test_whitespace_tolerated_around_numbers() {
        let result = engine().apportion(" 10 ", &[" 1", "2 ", " 3 "]).unwrap();
        assert_eq!(result.rendered, vec!["1.7", "3.3", "5.0"]);
    }

    #[test]
    fn test_strategy_name_exposed() {
        assert_eq!(engine().strategy_name(), "LargestRemainder");
    }

    // A deliberately broken strategy exercises the soft-fail reconciliation
    // path that real allocations cannot reach.
    struct ShortChanger;

    impl ApportionStrategy for ShortChanger {
        fn allocate(
            &self,
            _total: Decimal,
            weights: &[Decimal],
            _diagnostics: &dyn DiagnosticHandler,
        ) -> ApportionResult<Vec<Decimal>> {
            Ok(vec![Decimal::ZERO; weights.len()])
        }

        fn name(&self) -> &str {
            "ShortChanger"
        }
    }

    #[derive(Default)]
    struct RecordingHandler(Mutex<Vec<ApportionEvent>>);

    impl DiagnosticHandler for RecordingHandler {
        fn on_event(&self, event: ApportionEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    #[test]
    fn test_sum_mismatch_is_soft() {
        let handler = Arc::new(RecordingHandler::default());
        let broken = Apportioner::new(Box::new(ShortChanger), handler.clone());

        let result = broken.apportion("5", &["1"]).unwrap();

        assert_eq!(result.rendered, vec!["0.0"]);
        assert_eq!(
            result.warning,
            Some(PrecisionWarning {
                expected: dec!(5.0),
                actual: dec!(0.0),
            })
        );

        let events = handler.0.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], ApportionEvent::SumMismatch { .. }));
    }
}
