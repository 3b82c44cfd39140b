use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

use crate::alphabet::{check_base, digit_value};
use crate::error::{RadixError, Result};

/// Splits an optional leading `-` from a numeral, rejecting empty magnitudes.
pub(crate) fn split_sign(digits: &str) -> Result<(Sign, &str)> {
    let (sign, magnitude) = match digits.strip_prefix('-') {
        Some(rest) => (Sign::Minus, rest),
        None => (Sign::Plus, digits),
    };

    if magnitude.is_empty() {
        return Err(RadixError::MalformedNumeral(digits.to_string()));
    }

    Ok((sign, magnitude))
}

/// Decode `digits` written in `base` into an integer.
///
/// The numeral may start with a single `-` and is read case-insensitively.
/// Every symbol is checked against `base` before any arithmetic happens.
pub fn decode(digits: &str, base: u32) -> Result<BigInt> {
    check_base(base)?;
    let (sign, magnitude) = split_sign(digits)?;

    let values = magnitude
        .chars()
        .map(|symbol| digit_value(symbol, base))
        .collect::<Result<Vec<u32>>>()?;

    log::debug!("[decode] {digits} in base {base}");

    // Least significant symbol first, weight = base^position.
    let mut value = BigUint::zero();
    let mut weight = BigUint::one();
    for (position, &digit) in values.iter().rev().enumerate() {
        value += &weight * digit;
        weight *= base;
        log::trace!("[decode] position {position}: digit {digit}, running value {value}");
    }

    Ok(BigInt::from_biguint(sign, value))
}
