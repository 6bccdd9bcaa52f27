// ============================================================================
// Operator
// The four supported arithmetic operations and their dispatch
// ============================================================================

use super::error::CalcError;
use crate::numeric::Operand;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Supported arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl Operator {
    /// All operators, in symbol order `+ - * /`
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Command-line symbol
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Apply the operator.
    ///
    /// Division checks for a zero divisor before dividing. Products and
    /// quotients are rounded half away from zero at four decimal places.
    pub fn apply(self, lhs: Operand, rhs: Operand) -> Result<Operand, CalcError> {
        let result = match self {
            Operator::Add => lhs.checked_add(rhs)?,
            Operator::Subtract => lhs.checked_sub(rhs)?,
            Operator::Multiply => lhs.checked_mul(rhs)?,
            Operator::Divide => {
                if rhs.is_zero() {
                    return Err(CalcError::DivisionByZero);
                }
                lhs.checked_div(rhs)?
            }
        };
        Ok(result)
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| CalcError::UnsupportedOperator {
                symbol: s.to_string(),
            })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
