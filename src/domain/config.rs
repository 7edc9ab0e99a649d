// ============================================================================
// Engine Configuration
// Configuration for engine construction and defensive input bounds
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for an apportionment engine instance.
///
/// The engine itself has no hard upper bound on input size; `max_shares`
/// exists so a caller fronting untrusted input can cap the proportion-list
/// length before any allocation work happens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ApportionConfig {
    /// Optional: maximum accepted proportion-list length.
    /// None means unbounded.
    pub max_shares: Option<usize>,
}

impl ApportionConfig {
    /// Create a configuration with no input bound
    pub fn new() -> Self {
        Self { max_shares: None }
    }

    /// Builder method: cap the accepted proportion-list length
    pub fn with_max_shares(mut self, bound: usize) -> Self {
        self.max_shares = Some(bound);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(bound) = self.max_shares {
            if bound == 0 {
                return Err("Maximum share count must be at least 1".to_string());
            }
        }
        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ApportionConfig {
    /// Unbounded configuration for trusted callers
    pub fn unbounded() -> Self {
        Self::new()
    }

    /// Configuration suited to human-entered form input
    /// - Proportion lists capped well above any hand-typed length
    pub fn web_form() -> Self {
        Self::new().with_max_shares(1_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = ApportionConfig::new();
        assert_eq!(config.max_shares, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ApportionConfig::new().with_max_shares(50);
        assert_eq!(config.max_shares, Some(50));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_bound() {
        let config = ApportionConfig::new().with_max_shares(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(ApportionConfig::unbounded().max_shares, None);
        assert_eq!(ApportionConfig::web_form().max_shares, Some(1_000));
    }
}
