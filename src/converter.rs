use num_bigint::{BigInt, BigUint};

use crate::alphabet::check_base;
use crate::decoder::{decode, split_sign};
use crate::encoder::encode;
use crate::error::{RadixError, Result};

/// Strict base-10 parse: an optional `-` followed by one or more ASCII digits.
pub fn parse_decimal(digits: &str) -> Result<BigInt> {
    let (sign, magnitude) = split_sign(digits)?;

    if !magnitude.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RadixError::MalformedNumeral(digits.to_string()));
    }

    BigUint::parse_bytes(magnitude.as_bytes(), 10)
        .map(|value| BigInt::from_biguint(sign, value))
        .ok_or_else(|| RadixError::MalformedNumeral(digits.to_string()))
}

/// Convert `digits` from `base1` to `base2`.
///
/// Both bases are validated before the numeral is looked at. Decimal input
/// skips the general decoder and goes through [`parse_decimal`].
pub fn convert(digits: &str, base1: u32, base2: u32) -> Result<String> {
    check_base(base1)?;
    check_base(base2)?;

    let number = if base1 == 10 {
        parse_decimal(digits)?
    } else {
        decode(digits, base1)?
    };

    let converted = encode(number, base2)?;
    log::debug!("[convert] {digits} in base {base1} is {converted} in base {base2}");
    Ok(converted)
}
