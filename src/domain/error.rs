// ============================================================================
// Calculation Errors
// One variant per way an invocation can fail; Display is the user message
// ============================================================================

use super::operand::Side;
use crate::numeric::{NumericError, Operand};
use thiserror::Error;

/// Every failure an invocation can report.
///
/// Exactly one of these is produced per invocation, and its `Display` output
/// is the line printed to stdout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Anything other than `<lhs> <operator> <rhs>`
    #[error("引数値の数は3つである必要があります")]
    ArgumentCount { received: usize },

    /// Operand is not a decimal number
    #[error("{side}: {raw}は数値である必要があります")]
    NotNumeric { side: Side, raw: String },

    /// Operand above the configured maximum
    #[error("{side}: {raw}は最大値{max}を上回っています")]
    AboveMaximum { side: Side, raw: String, max: Operand },

    /// Operand below the configured minimum
    #[error("{}", below_minimum_message(*side, raw, min))]
    BelowMinimum { side: Side, raw: String, min: Operand },

    /// Operand has significant digits past the fourth decimal place
    #[error("{side}: {raw}は小数点第4位以下で収まっていません")]
    PrecisionExceeded { side: Side, raw: String },

    /// Operator symbol outside `+ - * /`
    #[error("演算子: {symbol}はサポートされていません")]
    UnsupportedOperator { symbol: String },

    /// Divisor is zero
    #[error("0で割ることはできません")]
    DivisionByZero,

    /// Result does not fit the fixed-point representation
    #[error("計算結果が扱える範囲を超えています")]
    Numeric(#[from] NumericError),
}

// The right-hand form names the bound, not the rejected input.
fn below_minimum_message(side: Side, raw: &str, min: &Operand) -> String {
    match side {
        Side::Left => format!("{side}: {raw}は最小値{min}を下回っています"),
        Side::Right => format!("{side}: {min}を下回っています"),
    }
}

impl CalcError {
    /// Side of the expression that triggered the error, if any.
    pub fn side(&self) -> Option<Side> {
        match self {
            CalcError::NotNumeric { side, .. }
            | CalcError::AboveMaximum { side, .. }
            | CalcError::BelowMinimum { side, .. }
            | CalcError::PrecisionExceeded { side, .. } => Some(*side),
            _ => None,
        }
    }
}
