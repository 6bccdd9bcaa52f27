// ============================================================================
// Fixed-Point Decimal
// Exact fixed-point arithmetic with compile-time precision
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::format::render;
use super::literal::{DecimalLiteral, Exactness};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Fixed-point decimal number with compile-time precision.
///
/// Internally stores `value × 10^DECIMALS` as an i64.
///
/// # Type Parameter
/// - `DECIMALS`: Number of decimal places (0-18). Default is 4.
///
/// # Value Range
/// With DECIMALS=4 (default):
/// - Minimum: -922,337,203,685,477.5808
/// - Maximum: +922,337,203,685,477.5807
/// - Precision: 0.0001
///
/// # Example
/// ```
/// use calculator::numeric::FixedDecimal;
///
/// let a: FixedDecimal<4> = "0.1".parse().unwrap();
/// let b: FixedDecimal<4> = "0.2".parse().unwrap();
/// assert_eq!(a.checked_add(b).unwrap().to_string(), "0.3");
/// ```
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct FixedDecimal<const DECIMALS: u8 = 4>(i64);

// ============================================================================
// Scale Constants
// ============================================================================

/// Compute 10^n at compile time
const fn pow10(n: u8) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

impl<const D: u8> FixedDecimal<D> {
    /// The scale factor (10^DECIMALS)
    pub const SCALE: i64 = pow10(D);

    /// Half scale for rounding (SCALE / 2)
    const HALF_SCALE: i64 = pow10(D) / 2;

    /// Zero value
    pub const ZERO: Self = Self(0);

    /// Maximum representable value
    pub const MAX: Self = Self(i64::MAX);

    /// Minimum representable value
    pub const MIN: Self = Self(i64::MIN);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation (already scaled).
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Narrow a wide intermediate back into the i64 representation.
    #[inline]
    fn from_wide(value: i128) -> NumericResult<Self> {
        if value > i64::MAX as i128 {
            Err(NumericError::Overflow)
        } else if value < i64::MIN as i128 {
            Err(NumericError::Underflow)
        } else {
            Ok(Self(value as i64))
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (value × 10^DECIMALS).
    #[inline]
    pub const fn raw_value(self) -> i64 {
        self.0
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Check if value is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_add(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 > 0 {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_sub(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 < 0 {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Checked multiplication, rounding half away from zero.
    ///
    /// Uses an i128 intermediate so the full product is exact before it is
    /// scaled back to DECIMALS places.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        let scale = Self::SCALE as i128;
        let half_scale = Self::HALF_SCALE as i128;
        let product = (self.0 as i128) * (rhs.0 as i128);

        let rounded = if product >= 0 {
            product + half_scale
        } else {
            product - half_scale
        };

        Self::from_wide(rounded / scale)
    }

    /// Checked division, rounding half away from zero.
    ///
    /// The dividend is widened and scaled before dividing so the quotient
    /// keeps DECIMALS places; the remainder decides the final digit.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow` or `Underflow` if the result is out of range
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.0 == 0 {
            return Err(NumericError::DivisionByZero);
        }

        let numerator = (self.0 as i128) * (Self::SCALE as i128);
        let divisor = rhs.0 as i128;
        let quotient = numerator / divisor;
        let remainder = numerator % divisor;

        let rounded = if remainder.abs() * 2 >= divisor.abs() {
            if (numerator < 0) == (divisor < 0) {
                quotient + 1
            } else {
                quotient - 1
            }
        } else {
            quotient
        };

        Self::from_wide(rounded)
    }

}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<const D: u8> Default for FixedDecimal<D> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const D: u8> PartialEq for FixedDecimal<D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<const D: u8> Eq for FixedDecimal<D> {}

impl<const D: u8> PartialOrd for FixedDecimal<D> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.0.cmp(&other.0))
    }
}

impl<const D: u8> Ord for FixedDecimal<D> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<const D: u8> Hash for FixedDecimal<D> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<const D: u8> fmt::Debug for FixedDecimal<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedDecimal<{}>({}, raw={})", D, self, self.0)
    }
}

/// Plain decimal text: no grouping, trailing fractional zeros trimmed.
impl<const D: u8> fmt::Display for FixedDecimal<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(*self, None))
    }
}

// ============================================================================
// Conversion to rust_decimal
// ============================================================================

impl<const D: u8> FixedDecimal<D> {
    /// Convert to rust_decimal::Decimal at exactly DECIMALS places.
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, u32::from(D))
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl<const D: u8> FromStr for FixedDecimal<D> {
    type Err = NumericError;

    /// Parse a plain decimal literal (`[+-]digits[.digits]`).
    ///
    /// # Errors
    /// - `InvalidInput` if the text is not a decimal literal
    /// - `PrecisionLoss` if significant digits go past DECIMALS places
    /// - `Overflow` or `Underflow` if the value is too large
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let literal = DecimalLiteral::parse(s).ok_or(NumericError::InvalidInput)?;
        match literal.to_fixed() {
            (value, Exactness::Exact) => Ok(value),
            (_, Exactness::Truncated) => Err(NumericError::PrecisionLoss),
            (_, Exactness::Saturated) if literal.is_negative() => Err(NumericError::Underflow),
            (_, Exactness::Saturated) => Err(NumericError::Overflow),
        }
    }
}

// ============================================================================
// Type Aliases
// ============================================================================

/// Calculator operand and result: four decimal places
pub type Operand = FixedDecimal<4>;

// ============================================================================
// Tests
// ============================================================================
