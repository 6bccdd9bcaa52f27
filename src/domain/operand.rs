// ============================================================================
// Operand Parsing
// Turns one raw argument into a validated four-place operand
// ============================================================================

use super::config::OperandLimits;
use super::error::CalcError;
use crate::numeric::{DecimalLiteral, Exactness, Operand};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which side of the operator an operand came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Label used in user-facing messages
    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "左辺",
            Side::Right => "右辺",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse and validate one operand.
///
/// Checks run in a fixed order and the first failure wins:
/// 1. the text must be a decimal literal (`[+-]digits[.digits]`)
/// 2. the value must lie within `limits`
/// 3. the value must be exact at four decimal places
///
/// Range and precision are both judged on the literal's digits, so any
/// length of input is classified without rounding.
pub fn parse_operand(raw: &str, side: Side, limits: &OperandLimits) -> Result<Operand, CalcError> {
    let literal = DecimalLiteral::parse(raw).ok_or_else(|| CalcError::NotNumeric {
        side,
        raw: raw.to_string(),
    })?;

    // Truncation moves toward zero, so an inexact value sitting on a bound
    // lies past it.
    let (value, exactness): (Operand, _) = literal.to_fixed();
    let inexact = exactness != Exactness::Exact;

    if value > limits.max || (value == limits.max && inexact && !literal.is_negative()) {
        return Err(CalcError::AboveMaximum {
            side,
            raw: raw.to_string(),
            max: limits.max,
        });
    }
    if value < limits.min || (value == limits.min && inexact && literal.is_negative()) {
        return Err(CalcError::BelowMinimum {
            side,
            raw: raw.to_string(),
            min: limits.min,
        });
    }
    if inexact {
        return Err(CalcError::PrecisionExceeded {
            side,
            raw: raw.to_string(),
        });
    }

    Ok(value)
}
