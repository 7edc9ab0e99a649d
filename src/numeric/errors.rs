// ============================================================================
// Apportionment Errors
// Error types for input validation and exact-decimal apportionment
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors reported to the caller of the apportionment engine.
///
/// Exactly one kind is returned per call; validation stops at the first
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ApportionError {
    /// The total or one of the proportions did not parse as an exact decimal
    InvalidNumber,
    /// The total is negative
    NegativeTotal,
    /// The proportion list is empty
    EmptyProportions,
    /// One of the proportions is negative
    NegativeProportion,
    /// The proportions sum to zero while the total does not
    ZeroWeightSum,
    /// Unexpected internal failure (defensive catch-all, not a user-input class)
    Internal(String),
}

impl fmt::Display for ApportionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApportionError::InvalidNumber => write!(
                f,
                "invalid input: the total and every proportion must be a valid decimal number"
            ),
            ApportionError::NegativeTotal => write!(f, "the total value cannot be negative"),
            ApportionError::EmptyProportions => {
                write!(f, "the proportion list cannot be empty")
            },
            ApportionError::NegativeProportion => write!(f, "proportions cannot be negative"),
            ApportionError::ZeroWeightSum => write!(
                f,
                "the proportions sum to zero, a nonzero total cannot be divided"
            ),
            ApportionError::Internal(msg) => {
                write!(f, "unexpected error during apportionment: {}", msg)
            },
        }
    }
}

impl std::error::Error for ApportionError {}

/// Result type alias for apportionment operations
pub type ApportionResult<T> = Result<T, ApportionError>;
