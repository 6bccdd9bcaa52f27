// ============================================================================
// Numeric Errors
// Error types for fixed-point arithmetic operations
// ============================================================================

use thiserror::Error;

/// Errors that can occur during fixed-point arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NumericError {
    /// Result exceeded i64::MAX
    #[error("arithmetic overflow: result exceeded maximum value")]
    Overflow,
    /// Result below i64::MIN
    #[error("arithmetic underflow: result below minimum value")]
    Underflow,
    /// Attempted division by zero
    #[error("division by zero")]
    DivisionByZero,
    /// Conversion would lose significant digits
    #[error("precision loss: conversion would lose significant digits")]
    PrecisionLoss,
    /// Input string or value is invalid
    #[error("invalid input: could not parse value")]
    InvalidInput,
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
