// ============================================================================
// Result Formatting
// Thousands-separated rendering with trimmed fractional zeros
// ============================================================================

use super::fixed_decimal::FixedDecimal;

/// Render a value with `,` between each group of three integer digits and
/// without trailing fractional zeros.
///
/// A whole value prints with no decimal point at all, and zero prints as `0`.
///
/// # Example
/// ```
/// use calculator::numeric::{format_grouped, Operand};
///
/// let value = Operand::from_raw(199_999_998);
/// assert_eq!(format_grouped(value), "19,999.9998");
/// ```
pub fn format_grouped<const D: u8>(value: FixedDecimal<D>) -> String {
    render(value, Some(','))
}

/// Shared by `format_grouped` and `Display`; `separator` splits the integer
/// digits into groups of three when present.
pub(crate) fn render<const D: u8>(value: FixedDecimal<D>, separator: Option<char>) -> String {
    let scale = FixedDecimal::<D>::SCALE as u64;
    let magnitude = value.raw_value().unsigned_abs();
    let integer_digits = (magnitude / scale).to_string();
    let fraction = magnitude % scale;

    let mut out = String::with_capacity(integer_digits.len() * 4 / 3 + D as usize + 2);
    if value.is_negative() {
        out.push('-');
    }

    let len = integer_digits.len();
    for (i, digit) in integer_digits.chars().enumerate() {
        if let Some(separator) = separator {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(separator);
            }
        }
        out.push(digit);
    }

    if fraction != 0 {
        let digits = format!("{:0>width$}", fraction, width = D as usize);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }

    out
}
