// ============================================================================
// Apportionment Strategy Interface
// Defines the contract for pluggable allocation policies
// ============================================================================

use crate::interfaces::DiagnosticHandler;
use crate::numeric::ApportionResult;
use rust_decimal::Decimal;

/// Strategy pattern interface for allocation policies.
///
/// The engine validates inputs before delegating, so implementations may
/// assume a non-negative total and a non-empty weight list with no negative
/// entries and a positive sum.
pub trait ApportionStrategy: Send + Sync {
    /// Split `total` across `weights`, returning one-decimal shares in
    /// input order that sum to the total quantized to one decimal place.
    ///
    /// # Arguments
    /// * `total` - The quantity to apportion
    /// * `weights` - Parsed, validated proportions
    /// * `diagnostics` - Sink for anomaly events; emitting never fails the call
    ///
    /// # Returns
    /// Adjusted shares, one per weight
    fn allocate(
        &self,
        total: Decimal,
        weights: &[Decimal],
        diagnostics: &dyn DiagnosticHandler,
    ) -> ApportionResult<Vec<Decimal>>;

    /// Get the strategy name for logging/metrics
    fn name(&self) -> &str;
}
