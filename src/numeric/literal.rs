// ============================================================================
// Decimal Literals
// Text-level grammar for operands, checked before any value is built
// ============================================================================

use super::fixed_decimal::FixedDecimal;

/// Most integer digits that are still converted digit by digit.
///
/// Anything longer is far outside the i64 representation at any precision,
/// and keeping the count at 20 bounds the i128 accumulator at 38 digits.
const MAX_INTEGER_DIGITS: usize = 20;

/// How a literal maps onto a fixed-point value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exactness {
    /// Every significant digit was kept
    Exact,
    /// Significant digits past DECIMALS were dropped (toward zero)
    Truncated,
    /// Magnitude beyond the i64 representation; clamped to MAX or MIN
    Saturated,
}

/// A syntactically valid decimal literal.
///
/// Grammar: an optional `+` or `-`, ASCII digits, then optionally `.` and
/// more ASCII digits, with at least one digit overall. Underscores,
/// exponents and whitespace are rejected.
///
/// # Example
/// ```
/// use calculator::numeric::{DecimalLiteral, Exactness, FixedDecimal};
///
/// let literal = DecimalLiteral::parse("-12.30000").unwrap();
/// let (value, exactness): (FixedDecimal<4>, _) = literal.to_fixed();
/// assert_eq!(value.raw_value(), -123_000);
/// assert_eq!(exactness, Exactness::Exact);
///
/// assert!(DecimalLiteral::parse("1e3").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalLiteral<'a> {
    negative: bool,
    /// Integer digits without leading zeros
    integer: &'a str,
    /// Fraction digits without trailing zeros
    fraction: &'a str,
}

impl<'a> DecimalLiteral<'a> {
    /// Match `text` against the literal grammar.
    pub fn parse(text: &'a str) -> Option<Self> {
        let (negative, unsigned) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };

        let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if integer.is_empty() && fraction.is_empty() {
            return None;
        }
        if !is_digits(integer) || !is_digits(fraction) {
            return None;
        }

        Some(Self {
            negative,
            integer: integer.trim_start_matches('0'),
            fraction: fraction.trim_end_matches('0'),
        })
    }

    /// Whether the literal carried a `-` sign
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Convert to DECIMALS places, truncating toward zero.
    ///
    /// The returned value is always the closest representable value on the
    /// zero side of the literal, so range checks against it stay meaningful
    /// even when the conversion is not exact.
    pub fn to_fixed<const D: u8>(&self) -> (FixedDecimal<D>, Exactness) {
        if self.integer.len() > MAX_INTEGER_DIGITS {
            return (self.saturated(), Exactness::Saturated);
        }

        let places = usize::from(D);
        let (kept, truncated) = if self.fraction.len() > places {
            (&self.fraction[..places], true)
        } else {
            (self.fraction, false)
        };

        let digits = self.integer.bytes().chain(kept.bytes());
        let mut magnitude = digits.fold(0i128, |acc, b| acc * 10 + i128::from(b - b'0'));
        for _ in kept.len()..places {
            magnitude *= 10;
        }

        let signed = if self.negative { -magnitude } else { magnitude };
        match i64::try_from(signed) {
            Ok(raw) if truncated => (FixedDecimal::from_raw(raw), Exactness::Truncated),
            Ok(raw) => (FixedDecimal::from_raw(raw), Exactness::Exact),
            Err(_) => (self.saturated(), Exactness::Saturated),
        }
    }

    fn saturated<const D: u8>(&self) -> FixedDecimal<D> {
        if self.negative {
            FixedDecimal::MIN
        } else {
            FixedDecimal::MAX
        }
    }
}

fn is_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}
