//! Exact decimal helpers on top of [BigDecimal].
//!
//! Amounts are never routed through floating point. Shifting by a power of ten only moves
//! the scale of the decimal, and rendering reads the digits back without exponent notation.

use std::str::FromStr;

use bigdecimal::{BigDecimal, ParseBigDecimalError};

/// Shift the decimal point of an unsigned integer literal `places` digits to the left
///
/// `shift_left("1500", 3)` is `1.500`
pub fn shift_left(magnitude: &str, places: u32) -> Result<BigDecimal, ParseBigDecimalError> {
    BigDecimal::from_str(&format!("{}e-{}", magnitude, places))
}

/// Shift the decimal point of a decimal literal `places` digits to the right
/// and drop whatever fraction is left, truncating toward zero
pub fn shift_right_truncated(amount: &str, places: u32) -> Result<BigDecimal, ParseBigDecimalError> {
    let amount = match amount.strip_prefix('-') {
        Some(rest) if rest.starts_with('.') => format!("-0{}", rest),
        _ if amount.starts_with('.') => format!("0{}", amount),
        _ => amount.to_string(),
    };

    let shifted = BigDecimal::from_str(&format!("{}e{}", amount, places))?;
    Ok(shifted.with_scale(0))
}

/// Render the magnitude of `value` as its integer digits and its fractional digits
///
/// The fractional part keeps every digit of the scale, trailing zeros included,
/// and is empty for whole values. The sign is not rendered.
pub fn to_plain_parts(value: &BigDecimal) -> (String, String) {
    let (int_val, scale) = value.as_bigint_and_exponent();
    let digits = int_val.to_string();
    let digits = digits.trim_start_matches('-');

    if scale <= 0 {
        let zeros = "0".repeat(scale.unsigned_abs() as usize);
        let integer = if digits == "0" { digits.to_string() } else { format!("{}{}", digits, zeros) };
        return (integer, String::new());
    }

    let scale = scale as usize;
    if digits.len() <= scale {
        let fraction = format!("{}{}", "0".repeat(scale - digits.len()), digits);
        ("0".to_string(), fraction)
    } else {
        let (integer, fraction) = digits.split_at(digits.len() - scale);
        (integer.to_string(), fraction.to_string())
    }
}

/// Render an integer value without exponent notation, sign included
pub fn to_integer_string(value: &BigDecimal) -> String {
    let (int_val, _) = value.with_scale(0).into_bigint_and_exponent();
    int_val.to_string()
}

/// Group a string of digits by thousands, `1234567` becomes `1,234,567`
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}
