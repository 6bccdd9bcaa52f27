// ============================================================================
// Calculator Library
// Exact four-place decimal arithmetic behind a three-argument command line
// ============================================================================

//! # Calculator
//!
//! A command-line calculator for `<lhs> <operator> <rhs>` with exact decimal
//! semantics.
//!
//! ## Features
//!
//! - **Fixed-point operands** stored as `value × 10^4` in an `i64`, so
//!   `0.1 + 0.2` is exactly `0.3`
//! - **Validated input**: operands must lie within ±9999.9999 and fit four
//!   decimal places
//! - **Grouped output**: `19,999.9998`, trailing fractional zeros trimmed
//! - **Event hooks** for observing each stage of a calculation
//!
//! ## Example
//!
//! ```rust
//! use calculator::prelude::*;
//! use std::sync::Arc;
//!
//! let calculator = Calculator::new(Arc::new(NoOpEventHandler));
//!
//! let result = calculator.calculate("9999.9999", "+", "9999.9999").unwrap();
//! assert_eq!(format_grouped(result), "19,999.9998");
//!
//! let err = calculator.calculate("1", "/", "0").unwrap_err();
//! assert_eq!(err.to_string(), "0で割ることはできません");
//! ```

pub mod cli;
pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{parse_operand, CalcError, OperandLimits, Operator, Side};
    pub use crate::engine::Calculator;
    pub use crate::interfaces::{
        CalculationEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
    };
    pub use crate::numeric::{format_grouped, FixedDecimal, NumericError, Operand};
}
