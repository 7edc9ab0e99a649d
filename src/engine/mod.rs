// ============================================================================
// Engine Module
// Contains the core apportionment business logic
// ============================================================================

mod apportioner;
mod largest_remainder;

pub mod factory;

pub use apportioner::Apportioner;
pub use factory::{create_from_config, ApportionerBuilder};
pub use largest_remainder::LargestRemainder;
