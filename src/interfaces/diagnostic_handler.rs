// ============================================================================
// Diagnostic Handler Interface
// Defines the contract for handling adjustment and anomaly diagnostics
// ============================================================================

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Diagnostics emitted by the apportionment engine.
///
/// Diagnostics never change the returned result: anomalous internal states
/// are reported here while the call still returns its best-effort outcome.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ApportionEvent {
    /// Rounded shares were reconciled against the total
    AdjustmentApplied {
        steps: usize,
        step: Decimal,
        timestamp: DateTime<Utc>,
    },

    /// More adjustment steps were requested than shares exist; clamped
    AdjustmentClamped {
        requested: usize,
        available: usize,
        timestamp: DateTime<Utc>,
    },

    /// Rendered shares did not re-sum to the quantized total
    SumMismatch {
        expected: Decimal,
        actual: Decimal,
        total: Decimal,
        timestamp: DateTime<Utc>,
    },
}

/// Handler trait for processing engine diagnostics
/// Implementations can handle logging, metrics, notifications, etc.
pub trait DiagnosticHandler: Send + Sync {
    /// Handle a diagnostic event
    fn on_event(&self, event: ApportionEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<ApportionEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op handler for callers that discard diagnostics
pub struct NoOpDiagnosticHandler;

impl DiagnosticHandler for NoOpDiagnosticHandler {
    fn on_event(&self, _event: ApportionEvent) {
        // Do nothing
    }
}

/// Logging handler backed by `tracing`
pub struct LoggingDiagnosticHandler;

impl DiagnosticHandler for LoggingDiagnosticHandler {
    fn on_event(&self, event: ApportionEvent) {
        match &event {
            ApportionEvent::AdjustmentApplied { .. } => {
                tracing::debug!("apportionment event: {:?}", event);
            },
            ApportionEvent::AdjustmentClamped { .. } | ApportionEvent::SumMismatch { .. } => {
                tracing::warn!("apportionment anomaly: {:?}", event);
            },
        }
    }
}
