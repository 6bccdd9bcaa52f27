// ============================================================================
// Operand Limits
// Range configuration applied to both operands before any arithmetic
// ============================================================================

use crate::numeric::Operand;

/// Inclusive bounds every operand must fall within.
///
/// Precision is fixed by [`Operand`] itself (four decimal places); only the
/// magnitude range is configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandLimits {
    /// Largest accepted operand
    pub max: Operand,

    /// Smallest accepted operand
    pub min: Operand,
}

impl OperandLimits {
    /// 9999.9999
    pub const DEFAULT_MAX: Operand = Operand::from_raw(99_999_999);

    /// -9999.9999
    pub const DEFAULT_MIN: Operand = Operand::from_raw(-99_999_999);

    /// Create limits with explicit bounds
    pub fn new(min: Operand, max: Operand) -> Self {
        Self { max, min }
    }

    /// Builder method: Set the upper bound
    pub fn with_max(mut self, max: Operand) -> Self {
        self.max = max;
        self
    }

    /// Builder method: Set the lower bound
    pub fn with_min(mut self, min: Operand) -> Self {
        self.min = min;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.min > self.max {
            return Err(format!(
                "Minimum {} cannot exceed maximum {}",
                self.min, self.max
            ));
        }
        Ok(())
    }
}

impl Default for OperandLimits {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN, Self::DEFAULT_MAX)
    }
}
