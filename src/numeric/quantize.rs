// ============================================================================
// One-Decimal Quantization
// Exact-decimal parsing, half-up rounding and fixed formatting helpers
// ============================================================================

use super::errors::{ApportionError, ApportionResult};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Number of decimal places every apportioned share is quantized to.
pub const GRANULARITY_DP: u32 = 1;

/// The 0.1 adjustment step used when reconciling rounded shares.
#[inline]
pub fn one_tenth() -> Decimal {
    Decimal::new(1, GRANULARITY_DP)
}

/// Parse an exact decimal from caller-supplied text.
///
/// Input is trimmed first. The caller contract is plain decimal strings
/// ("12", "3.5", "-0.25"); anything else maps to `InvalidNumber`.
pub fn parse_decimal(s: &str) -> ApportionResult<Decimal> {
    Decimal::from_str(s.trim()).map_err(|_| ApportionError::InvalidNumber)
}

/// Round to one decimal place with ties away from zero (round half-up).
///
/// Banker's rounding would bias ties toward even digits; the reconciliation
/// step assumes plain half-up semantics.
#[inline]
pub fn quantize_one_dp(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(GRANULARITY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Format with exactly one digit after the decimal point.
///
/// Values carrying more than one fractional digit are quantized half-up
/// first, so `33.25` renders as `"33.3"` and `5` as `"5.0"`.
pub fn format_one_dp(value: Decimal) -> String {
    let quantized = quantize_one_dp(value);
    let rendered = quantized.to_string();
    // Quantization leaves a scale of 0 or 1; pad the integer case.
    if rendered.contains('.') {
        rendered
    } else {
        format!("{}.0", rendered)
    }
}
