// ============================================================================
// Domain Models Module
// Contains the engine's configuration and result value objects
// ============================================================================

pub mod allocation;
pub mod config;

pub use allocation::{Apportionment, PrecisionWarning};
pub use config::ApportionConfig;
