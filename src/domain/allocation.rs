// ============================================================================
// Apportionment Result Domain Model
// ============================================================================

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Soft warning attached when the rendered shares do not re-sum to the
/// quantized total.
///
/// This happens only when the total carries more decimal information than
/// one-decimal apportionment can reconstruct; the result is still usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrecisionWarning {
    /// The total quantized to one decimal place
    pub expected: Decimal,

    /// What the rendered shares actually sum to
    pub actual: Decimal,
}

/// The outcome of one apportionment: adjusted one-decimal shares in input
/// order, together with their fixed-format renderings.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Apportionment {
    /// Unique result identifier
    pub id: Uuid,

    /// Adjusted shares, quantized to one decimal place, index-for-index
    /// with the input proportions
    pub shares: Vec<Decimal>,

    /// Fixed one-decimal renderings of `shares` (pattern `-?\d+\.\d`)
    pub rendered: Vec<String>,

    /// Set when the post-condition sum check did not reconcile
    pub warning: Option<PrecisionWarning>,

    /// Result timestamp
    pub timestamp: DateTime<Utc>,
}

impl Apportionment {
    pub fn new(
        shares: Vec<Decimal>,
        rendered: Vec<String>,
        warning: Option<PrecisionWarning>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            shares,
            rendered,
            warning,
            timestamp: Utc::now(),
        }
    }

    /// Number of shares (equals the number of input proportions)
    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    /// Sum of the adjusted shares
    pub fn total(&self) -> Decimal {
        self.shares.iter().copied().sum()
    }
}
