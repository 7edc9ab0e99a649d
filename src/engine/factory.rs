// ============================================================================
// Engine Factory
// Creates apportioners with proper configuration
// ============================================================================

use crate::domain::ApportionConfig;
use crate::engine::{Apportioner, LargestRemainder};
use crate::interfaces::DiagnosticHandler;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates an apportionment engine from configuration
///
/// # Arguments
/// * `config` - Engine configuration
/// * `diagnostics` - Handler for anomaly diagnostics
///
/// # Returns
/// * `Result<Apportioner, String>` - Configured engine or validation error
///
/// # Example
/// ```
/// use apportion_engine::prelude::*;
/// use apportion_engine::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let config = ApportionConfig::web_form();
/// let engine = create_from_config(config, Arc::new(NoOpDiagnosticHandler)).unwrap();
/// assert_eq!(engine.strategy_name(), "LargestRemainder");
/// ```
pub fn create_from_config(
    config: ApportionConfig,
    diagnostics: Arc<dyn DiagnosticHandler>,
) -> Result<Apportioner, String> {
    // Validate configuration first
    config.validate()?;

    Ok(Apportioner::with_config(
        config,
        Box::new(LargestRemainder::new()),
        diagnostics,
    ))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating apportioners with fluent API
///
/// # Example
/// ```
/// use apportion_engine::prelude::*;
/// use std::sync::Arc;
///
/// let engine = ApportionerBuilder::new()
///     .with_max_shares(100)
///     .build(Arc::new(NoOpDiagnosticHandler))
///     .unwrap();
/// ```
pub struct ApportionerBuilder {
    config: ApportionConfig,
}

impl ApportionerBuilder {
    /// Create a new builder with the default configuration
    pub fn new() -> Self {
        Self {
            config: ApportionConfig::default(),
        }
    }

    /// Cap the accepted proportion-list length
    pub fn with_max_shares(mut self, bound: usize) -> Self {
        self.config.max_shares = Some(bound);
        self
    }

    /// Build an engine with the largest-remainder strategy
    pub fn build(self, diagnostics: Arc<dyn DiagnosticHandler>) -> Result<Apportioner, String> {
        create_from_config(self.config, diagnostics)
    }
}

impl Default for ApportionerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
