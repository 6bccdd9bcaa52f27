// ============================================================================
// Event Handler Interface
// Defines the contract for observing a calculation as it runs
// ============================================================================

use crate::domain::{Operator, Side};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the calculator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculationEvent {
    /// Raw arguments handed to the calculator
    ArgumentsReceived {
        count: usize,
        timestamp: DateTime<Utc>,
    },

    /// One operand passed format, range and precision checks
    OperandAccepted {
        side: Side,
        value: Decimal,
        timestamp: DateTime<Utc>,
    },

    /// Arithmetic finished
    CalculationCompleted {
        operator: Operator,
        result: Decimal,
        timestamp: DateTime<Utc>,
    },

    /// Invocation failed with the given message
    CalculationRejected {
        reason: String,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for processing calculator events
pub trait EventHandler: Send + Sync {
    /// Handle a single event
    fn on_event(&self, event: CalculationEvent);

    /// Batch event handler
    fn on_events(&self, events: Vec<CalculationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculationEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        match &event {
            CalculationEvent::CalculationRejected { reason, .. } => {
                tracing::warn!(%reason, "Calculation rejected");
            }
            _ => tracing::debug!("Calculator event: {:?}", event),
        }
    }
}
