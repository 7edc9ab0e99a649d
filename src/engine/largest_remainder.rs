// ============================================================================
// Largest-Remainder Allocation
// Classic apportionment: round every share, then walk the residue back
// ============================================================================

use crate::interfaces::{ApportionEvent, ApportionStrategy, DiagnosticHandler};
use crate::numeric::{one_tenth, quantize_one_dp, ApportionError, ApportionResult};
use chrono::Utc;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Largest-remainder apportionment
///
/// Rounds each proportional share to one decimal place, then distributes
/// the rounding residue in ±0.1 steps to the entries whose exact shares
/// were distorted the most by rounding.
///
/// # Example
/// ```text
/// total 100, weights 1/1/1:
///   exact shares 33.333.. each, rounded 33.3 each, sum 99.9
///   difference +0.1 -> one step; all remainders tie, index 0 wins
///   result: 33.4 / 33.3 / 33.3
/// ```
#[derive(Debug, Default)]
pub struct LargestRemainder;

impl LargestRemainder {
    pub fn new() -> Self {
        Self
    }
}

impl ApportionStrategy for LargestRemainder {
    fn allocate(
        &self,
        total: Decimal,
        weights: &[Decimal],
        diagnostics: &dyn DiagnosticHandler,
    ) -> ApportionResult<Vec<Decimal>> {
        let weight_sum = weights
            .iter()
            .try_fold(Decimal::ZERO, |acc, w| acc.checked_add(*w))
            .ok_or_else(|| ApportionError::Internal("proportion sum overflowed".to_string()))?;

        // The engine validates this; guard anyway before dividing.
        if weight_sum.is_zero() {
            return Err(ApportionError::Internal(
                "weight sum is zero after validation".to_string(),
            ));
        }

        // Exact shares at full guard precision, rounded half-up to one
        // decimal. The signed remainder (exact - rounded) decides who
        // absorbs the rounding residue later.
        let mut rounded = Vec::with_capacity(weights.len());
        let mut remainders = Vec::with_capacity(weights.len());
        for (index, weight) in weights.iter().enumerate() {
            let ratio = weight.checked_div(weight_sum).ok_or_else(|| {
                ApportionError::Internal(format!("share division failed at index {}", index))
            })?;
            let exact = ratio.checked_mul(total).ok_or_else(|| {
                ApportionError::Internal(format!("share overflow at index {}", index))
            })?;
            let share = quantize_one_dp(exact);
            remainders.push((index, exact - share));
            rounded.push(share);
        }

        let current_sum: Decimal = rounded.iter().copied().sum();
        let difference = total - current_sum;

        if !difference.is_zero() {
            let step = if difference > Decimal::ZERO {
                one_tenth()
            } else {
                -one_tenth()
            };

            let mut num_steps = (difference.abs() / one_tenth())
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_usize()
                .ok_or_else(|| {
                    ApportionError::Internal(
                        "adjustment step count did not fit a machine integer".to_string(),
                    )
                })?;

            // Unreachable with exact decimal math; clamp and report rather
            // than index out of the remainder list.
            if num_steps > rounded.len() {
                diagnostics.on_event(ApportionEvent::AdjustmentClamped {
                    requested: num_steps,
                    available: rounded.len(),
                    timestamp: Utc::now(),
                });
                num_steps = rounded.len();
            }

            // Stable sort: entries with equal remainders keep input order.
            // Positive difference -> largest remainders first (rounded down
            // the most); negative -> most negative first (rounded up the most).
            if difference > Decimal::ZERO {
                remainders.sort_by(|a, b| b.1.cmp(&a.1));
            } else {
                remainders.sort_by(|a, b| a.1.cmp(&b.1));
            }

            for &(index, _) in remainders.iter().take(num_steps) {
                // A single 0.1 step on a one-decimal value never changes its
                // rounding; the re-quantize is idempotent.
                rounded[index] = quantize_one_dp(rounded[index] + step);
            }

            diagnostics.on_event(ApportionEvent::AdjustmentApplied {
                steps: num_steps,
                step,
                timestamp: Utc::now(),
            });
        }

        Ok(rounded)
    }

    fn name(&self) -> &str {
        "LargestRemainder"
    }
}
