// ============================================================================
// Numeric Module
// Exact-decimal helpers for one-decimal apportionment
// ============================================================================
//
// This module provides:
// - Parsing of caller-supplied numeric strings into rust_decimal::Decimal
// - Half-up quantization and fixed formatting at one decimal place
// - ApportionError: the engine's error taxonomy
//
// Design principles:
// - No floating-point operations
// - All fallible operations return Result (no panics)
// - Guard precision for the division step comes from Decimal's 96-bit
//   mantissa (28 significant digits)

mod errors;
mod quantize;

pub use errors::{ApportionError, ApportionResult};
pub use quantize::{format_one_dp, one_tenth, parse_decimal, quantize_one_dp, GRANULARITY_DP};
