// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod apportion_strategy;
mod diagnostic_handler;

pub use apportion_strategy::ApportionStrategy;
pub use diagnostic_handler::{
    ApportionEvent, DiagnosticHandler, LoggingDiagnosticHandler, NoOpDiagnosticHandler,
};
