//! Atomic amount formatting.
//!
//! [format_amount] turns a raw on chain integer (wei, atomic units) into a display string.
//! Every step works on decimal digits, so no amount is ever rounded through an `f64`,
//! and fractions are truncated, never rounded up, so a balance is never shown larger than it is.

use alloy_primitives::U256;
use bigdecimal::Zero;
use tracing::{debug, trace};

use dapp_types::{AmountError, FormatAmountOptions, MAX_PRECISION, ZERO};

use crate::decimal::{group_thousands, shift_left, to_plain_parts};
use crate::validation::string_is_integer;


/// Format an atomic amount for display
///
/// Fails with [AmountError::InvalidInput] if `options.input` is not an integer literal,
/// and with [AmountError::PrecisionTooLarge] if a non zero amount is asked for more than
/// [MAX_PRECISION] `decimals` or `digits`.
///
/// The precision policy:
/// - zero is always `0`, whatever the sign
/// - a display without a single non zero digit (`0`, `0.0000`) is never signed
/// - whole values never get a fractional part
/// - when the first `digits` decimals are all zero the amount is sub-precision and is shown as
///   `int.0000`, `<0.0001`, `0.0000` or its full fraction, depending on the options
/// - otherwise `show_last_non_zero_decimal` keeps every significant decimal,
///   while its absence truncates to exactly `digits` decimals
pub fn format_amount(options: &FormatAmountOptions) -> Result<String, AmountError> {
    let input = options.input.as_str();

    if !string_is_integer(input, false) {
        debug!("Rejected amount input {:?}", input);
        return Err(AmountError::InvalidInput);
    }

    let (is_negative, magnitude) = match input.strip_prefix('-') {
        Some(magnitude) => (true, magnitude),
        None => (false, input),
    };

    let value = shift_left(magnitude, options.decimals).map_err(|_| AmountError::InvalidInput)?;

    if value.is_zero() {
        return Ok(ZERO.to_string());
    }

    for precision in [options.decimals, options.digits] {
        if precision > MAX_PRECISION {
            debug!("Rejected precision {} for {:?}", precision, input);
            return Err(AmountError::PrecisionTooLarge(precision));
        }
    }

    let (integer_part, decimal_part) = to_plain_parts(&value);
    let formatted = compose(&integer_part, &decimal_part, options);

    trace!(
        "Formatted {} with {} decimals and {} digits as {}",
        input,
        options.decimals,
        options.digits,
        formatted
    );

    if is_negative && !displays_zero(&formatted) {
        Ok(format!("-{}", formatted))
    } else {
        Ok(formatted)
    }
}

/// Format a [U256] amount with `decimals`, keeping every significant decimal
pub fn format_units(amount: U256, decimals: u32) -> Result<String, AmountError> {
    let options = FormatAmountOptions::new(amount.to_string()).with_decimals(decimals);
    format_amount(&options)
}

/// Build the unsigned display string out of the plain digits of a non zero amount
fn compose(integer_part: &str, decimal_part: &str, options: &FormatAmountOptions) -> String {
    let digits = options.digits as usize;

    let integer = if options.add_commas {
        group_thousands(integer_part)
    } else {
        integer_part.to_string()
    };

    if is_all_zeros(decimal_part) {
        return integer;
    }

    let window = &decimal_part[..digits.min(decimal_part.len())];
    let all_zero_in_window = digits >= 1 && digits <= decimal_part.len() && is_all_zeros(window);

    if all_zero_in_window {
        return compose_sub_precision(&integer, integer_part, decimal_part, options);
    }

    let fraction = if options.show_last_non_zero_decimal {
        decimal_part.trim_end_matches('0').to_string()
    } else {
        pad_zeros(window, digits)
    };

    join(&integer, &fraction)
}

/// The first `digits` decimals are zero but the fraction is not
fn compose_sub_precision(
    integer: &str,
    integer_part: &str,
    decimal_part: &str,
    options: &FormatAmountOptions,
) -> String {
    let digits = options.digits as usize;

    if integer_part != ZERO {
        return join(integer, &"0".repeat(digits));
    }

    if options.show_is_less_than_decimals_label {
        let min_amount = format!("{}1", "0".repeat(digits - 1));
        return format!("<{}", join(integer, &min_amount));
    }

    if !options.show_last_non_zero_decimal {
        return join(integer, &"0".repeat(digits));
    }

    let fraction = pad_zeros(decimal_part.trim_end_matches('0'), digits);
    join(integer, &fraction)
}

fn join(integer: &str, fraction: &str) -> String {
    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{}.{}", integer, fraction)
    }
}

fn pad_zeros(fraction: &str, width: usize) -> String {
    format!("{:0<width$}", fraction, width = width)
}

fn is_all_zeros(digits: &str) -> bool {
    digits.bytes().all(|b| b == b'0')
}

fn displays_zero(formatted: &str) -> bool {
    formatted.bytes().all(|b| matches!(b, b'0' | b'.' | b','))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(options: FormatAmountOptions) -> String {
        format_amount(&options).unwrap()
    }

    #[test]
    fn default_options() {
        assert_eq!(format(FormatAmountOptions::new("1500000000000000000")), "1.5");
        assert_eq!(format(FormatAmountOptions::new("1000000000000000000")), "1");
        assert_eq!(format(FormatAmountOptions::new("123456789000000000000")), "123.456789");
        assert_eq!(format(FormatAmountOptions::new("1")), "0.000000000000000001");
    }

    #[test]
    fn invalid_input() {
        for input in ["abc", "", "-", "1.5", "1e18", " 1", "+1", "0x10"] {
            let res = format_amount(&FormatAmountOptions::new(input));
            assert_eq!(res, Err(AmountError::InvalidInput), "input {:?}", input);
        }
        assert_eq!(AmountError::InvalidInput.to_string(), "Invalid input");
    }

    #[test]
    fn zero_has_no_sign() {
        for input in ["0", "-0", "000", "-000"] {
            for decimals in [0, 6, 18] {
                for digits in [0, 2, 4] {
                    let options = FormatAmountOptions::new(input)
                        .with_decimals(decimals)
                        .with_digits(digits)
                        .with_last_non_zero_decimal(false);
                    assert_eq!(format(options), "0");
                }
            }
        }
    }

    #[test]
    fn whole_numbers_have_no_fraction() {
        let options = FormatAmountOptions::new("1000000000000000000000").with_commas(true);
        assert_eq!(format(options), "1,000");

        let options = FormatAmountOptions::new("-2000000").with_decimals(6).with_last_non_zero_decimal(false);
        assert_eq!(format(options), "-2");
    }

    #[test]
    fn truncates_to_digits() {
        let options = FormatAmountOptions::new("1123456789000000000").with_last_non_zero_decimal(false);
        assert_eq!(format(options), "1.1234");

        let options = FormatAmountOptions::new("1100000000000000000").with_last_non_zero_decimal(false);
        assert_eq!(format(options), "1.1000");

        // 1.99999 is never rounded up to 2
        let options = FormatAmountOptions::new("199999").with_decimals(5).with_digits(2).with_last_non_zero_decimal(false);
        assert_eq!(format(options), "1.99");
    }

    #[test]
    fn zero_digits_drops_the_fraction() {
        let options = FormatAmountOptions::new("1500000").with_decimals(6).with_digits(0).with_last_non_zero_decimal(false);
        assert_eq!(format(options), "1");

        let options = FormatAmountOptions::new("-500000").with_decimals(6).with_digits(0).with_last_non_zero_decimal(false);
        assert_eq!(format(options), "0");

        let options = FormatAmountOptions::new("1500000").with_decimals(6).with_digits(0);
        assert_eq!(format(options), "1.5");
    }

    #[test]
    fn sub_precision_with_integer_part() {
        let options = FormatAmountOptions::new("1000000000000000001");
        assert_eq!(format(options.clone()), "1.0000");
        assert_eq!(format(options.with_less_than_label(true)), "1.0000");

        let options = FormatAmountOptions::new("1234000000000000000000001").with_commas(true).with_digits(2);
        assert_eq!(format(options), "1,234,000.00");
    }

    #[test]
    fn sub_precision_without_integer_part() {
        let base = FormatAmountOptions::new("1");

        let options = base.clone().with_less_than_label(true).with_last_non_zero_decimal(false);
        assert_eq!(format(options), "<0.0001");

        let options = base.clone().with_less_than_label(true);
        assert_eq!(format(options), "<0.0001");

        let options = base.clone().with_last_non_zero_decimal(false);
        assert_eq!(format(options), "0.0000");

        assert_eq!(format(base.clone()), "0.000000000000000001");

        let options = base.with_digits(1).with_less_than_label(true);
        assert_eq!(format(options), "<0.1");
    }

    #[test]
    fn negative_sub_precision() {
        let options = FormatAmountOptions::new("-1").with_less_than_label(true);
        assert_eq!(format(options), "-<0.0001");

        let options = FormatAmountOptions::new("-1").with_last_non_zero_decimal(false);
        assert_eq!(format(options), "0.0000");
    }

    #[test]
    fn zero_displays_are_never_signed() {
        let fixed = FormatAmountOptions::new("-1").with_last_non_zero_decimal(false);
        assert_eq!(format(fixed.clone()), "0.0000");
        assert_eq!(format(fixed.clone().with_digits(1)), "0.0");
        assert_eq!(format(fixed.clone().with_digits(0)), "0");

        let options = FormatAmountOptions::new("-500000").with_decimals(6).with_digits(0).with_last_non_zero_decimal(false);
        assert_eq!(format(options), "0");

        // a visible digit keeps the sign
        assert_eq!(format(fixed.with_less_than_label(true)), "-<0.0001");
        let options = FormatAmountOptions::new("-1000000000000000001").with_last_non_zero_decimal(false);
        assert_eq!(format(options), "-1.0000");
    }

    #[test]
    fn precision_is_bounded() {
        let options = FormatAmountOptions::new("1").with_decimals(u32::MAX);
        assert_eq!(format_amount(&options), Err(AmountError::PrecisionTooLarge(u32::MAX)));

        let options = FormatAmountOptions::new("-1").with_digits(MAX_PRECISION + 1).with_last_non_zero_decimal(false);
        assert_eq!(format_amount(&options), Err(AmountError::PrecisionTooLarge(MAX_PRECISION + 1)));

        // zero never reaches the check
        let options = FormatAmountOptions::new("-0").with_decimals(u32::MAX).with_digits(u32::MAX);
        assert_eq!(format(options), "0");

        let options = FormatAmountOptions::new("1").with_decimals(MAX_PRECISION);
        let formatted = format(options);
        assert_eq!(formatted.len(), 2 + MAX_PRECISION as usize);
        assert!(formatted.ends_with("01"));
    }

    #[test]
    fn less_than_label_only_for_sub_precision() {
        let options = FormatAmountOptions::new("100000000000000").with_less_than_label(true);
        assert_eq!(format(options), "0.0001");

        let options = FormatAmountOptions::new("123").with_decimals(3).with_digits(4).with_less_than_label(true);
        assert_eq!(format(options), "0.123");
    }

    #[test]
    fn commas_leave_the_fraction_alone() {
        let options = FormatAmountOptions::new("1234567891234").with_decimals(6).with_commas(true);
        assert_eq!(format(options), "1,234,567.891234");
    }

    #[test]
    fn format_u256() {
        let amount = U256::from(1_500_000_000_000_000_000u128);
        assert_eq!(format_units(amount, 18).unwrap(), "1.5");
        assert_eq!(format_units(U256::MAX, 0).unwrap(), U256::MAX.to_string());
        assert_eq!(format_units(U256::ZERO, 18).unwrap(), "0");
        assert_eq!(format_units(U256::from(1u8), 300), Err(AmountError::PrecisionTooLarge(300)));
    }
}
