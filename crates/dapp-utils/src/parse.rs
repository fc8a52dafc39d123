use std::str::FromStr;

use alloy_primitives::U256;
use tracing::debug;

use dapp_types::{AmountError, MAX_PRECISION};

use crate::decimal::{shift_right_truncated, to_integer_string};
use crate::validation::string_is_float;


/// Parse a human readable amount into atomic units
///
/// `parse_amount("1.5", 18)` is `1500000000000000000`.
/// Decimals beyond `decimals` are truncated toward zero.
/// `decimals` above [MAX_PRECISION] is rejected.
pub fn parse_amount(amount: &str, decimals: u32) -> Result<String, AmountError> {
    if !string_is_float(amount) {
        debug!("Rejected amount {:?}", amount);
        return Err(AmountError::InvalidAmount(amount.to_string()));
    }

    if decimals > MAX_PRECISION {
        return Err(AmountError::PrecisionTooLarge(decimals));
    }

    let value = shift_right_truncated(amount, decimals)
        .map_err(|e| AmountError::InvalidAmount(e.to_string()))?;

    Ok(to_integer_string(&value))
}

/// Parse a human readable, non negative amount into atomic units as a [U256]
pub fn parse_amount_u256(amount: &str, decimals: u32) -> Result<U256, AmountError> {
    let atomic = parse_amount(amount, decimals)?;

    if atomic.starts_with('-') {
        return Err(AmountError::NegativeAmount(amount.to_string()));
    }

    U256::from_str(&atomic).map_err(|_| AmountError::Overflow(atomic))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format_amount;
    use dapp_types::FormatAmountOptions;

    #[test]
    fn parse_amounts() {
        let vals = vec![
            ("1", 18, "1000000000000000000"),
            ("1.5", 18, "1500000000000000000"),
            ("1.5", 6, "1500000"),
            ("0.000000000000000001", 18, "1"),
            ("0.0000000000000000001", 18, "0"),
            ("1.123456789", 4, "11234"),
            ("-2.5", 2, "-250"),
            ("-0.001", 2, "0"),
            ("000123", 0, "123"),
            (".25", 2, "25"),
            ("0", 18, "0"),
        ];

        for (amount, decimals, expected) in vals {
            assert_eq!(parse_amount(amount, decimals).unwrap(), expected, "amount {}", amount);
        }
    }

    #[test]
    fn invalid_amounts() {
        for amount in ["", "abc", "1,5", "1e18", "1.", "--1", " 1"] {
            assert_eq!(
                parse_amount(amount, 18),
                Err(AmountError::InvalidAmount(amount.to_string())),
                "amount {:?}",
                amount
            );
        }
    }

    #[test]
    fn absurd_decimals() {
        assert_eq!(parse_amount("1", u32::MAX), Err(AmountError::PrecisionTooLarge(u32::MAX)));
        assert_eq!(parse_amount("1", MAX_PRECISION).unwrap().len(), 1 + MAX_PRECISION as usize);
    }

    #[test]
    fn parse_then_format() {
        let atomic = parse_amount("1234.5678", 18).unwrap();
        let options = FormatAmountOptions::new(atomic).with_commas(true);
        assert_eq!(format_amount(&options).unwrap(), "1,234.5678");
    }

    #[test]
    fn parse_u256() {
        assert_eq!(parse_amount_u256("1", 18).unwrap(), U256::from(10u64).pow(U256::from(18)));
        assert_eq!(
            parse_amount_u256("-1", 18),
            Err(AmountError::NegativeAmount("-1".to_string()))
        );

        let too_big = format!("1{}", "0".repeat(78));
        assert!(matches!(parse_amount_u256(&too_big, 0), Err(AmountError::Overflow(_))));
    }
}
