/// Returns true if `value` is an integer literal
///
/// The grammar is `[0-9]+`, with an optional leading `-` unless `positive_only` is set.
/// No `+` sign, whitespace, decimal point or exponent is accepted.
pub fn string_is_integer(value: &str, positive_only: bool) -> bool {
    let digits = match value.strip_prefix('-') {
        Some(rest) if !positive_only => rest,
        Some(_) => return false,
        None => value,
    };

    is_digits(digits)
}

/// Returns true if `value` is a plain decimal literal such as `1`, `-0.5` or `.25`
pub fn string_is_float(value: &str) -> bool {
    let unsigned = value.strip_prefix('-').unwrap_or(value);

    match unsigned.split_once('.') {
        Some((integer, fraction)) => {
            (integer.is_empty() || is_digits(integer)) && is_digits(fraction)
        }
        None => is_digits(unsigned),
    }
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
