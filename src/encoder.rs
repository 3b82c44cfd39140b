use num_bigint::{BigInt, Sign};
use num_traits::{ToPrimitive, Zero};

use crate::alphabet::{check_base, symbol_for};
use crate::error::{RadixError, Result};

/// Encode `number` as a lowercase numeral in `base`.
///
/// Negative numbers get a leading `-`; zero is always `"0"`.
pub fn encode<N>(number: N, base: u32) -> Result<String>
where
    N: Into<BigInt>,
{
    check_base(base)?;

    let number = number.into();
    log::debug!("[encode] {number} to base {base}");

    let (sign, mut magnitude) = number.into_parts();
    if magnitude.is_zero() {
        return Ok("0".to_string());
    }

    let mut symbols = Vec::new();
    while !magnitude.is_zero() {
        // remainder < base <= 36, so it always has a symbol.
        let remainder = &magnitude % base;
        let symbol = remainder
            .to_usize()
            .and_then(symbol_for)
            .ok_or(RadixError::InvalidBase(base))?;
        symbols.push(symbol);
        magnitude /= base;
        log::trace!("[encode] emitted '{symbol}', quotient {magnitude}");
    }

    let mut encoded = String::with_capacity(symbols.len() + 1);
    if sign == Sign::Minus {
        encoded.push('-');
    }
    encoded.extend(symbols.iter().rev());

    Ok(encoded)
}
