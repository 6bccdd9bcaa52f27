// ============================================================================
// Numeric Module
// Fixed-point arithmetic for exact calculator results
// ============================================================================
//
// This module provides:
// - FixedDecimal<D>: Fixed-point decimal with compile-time precision
// - DecimalLiteral: text grammar for operands ([+-]digits[.digits])
// - NumericError: Error types for arithmetic operations
// - format_grouped: thousands-separated rendering of results
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)
// - Operand text is parsed digit by digit, never through a wider type
// - rust_decimal only for reporting values outward

mod errors;
mod fixed_decimal;
mod format;
mod literal;

pub use errors::{NumericError, NumericResult};
pub use fixed_decimal::{FixedDecimal, Operand};
pub use format::format_grouped;
pub use literal::{DecimalLiteral, Exactness};
