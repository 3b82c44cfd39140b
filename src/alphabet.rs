use crate::error::{RadixError, Result};

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

/// Symbols for every supported base; a symbol's index is its value.
pub const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

const INVALID: u8 = 0xFF;

// Byte -> value table, uppercase letters share the lowercase values.
static VALUE_TABLE: [u8; 256] = build_value_table();

const fn build_value_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        let symbol = ALPHABET[i];
        table[symbol as usize] = i as u8;
        table[symbol.to_ascii_uppercase() as usize] = i as u8;
        i += 1;
    }
    table
}

pub fn check_base(base: u32) -> Result<()> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(RadixError::InvalidBase(base))
    }
}

/// Value of `symbol`, or `None` if it is not in the alphabet.
pub fn value_of(symbol: char) -> Option<u32> {
    if !symbol.is_ascii() {
        return None;
    }
    match VALUE_TABLE[symbol as usize] {
        INVALID => None,
        value => Some(value as u32),
    }
}

/// Value of `symbol` if it is a legal digit in `base`.
pub fn digit_value(symbol: char, base: u32) -> Result<u32> {
    match value_of(symbol) {
        Some(value) if value < base => Ok(value),
        _ => Err(RadixError::InvalidDigit {
            digit: symbol,
            base,
        }),
    }
}

/// Lowercase symbol for `value`, or `None` past the end of the alphabet.
pub fn symbol_for(value: usize) -> Option<char> {
    ALPHABET.get(value).map(|&symbol| symbol as char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_symbols_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for &symbol in ALPHABET {
            assert!(seen.insert(symbol), "duplicate symbol {}", symbol as char);
        }
        assert_eq!(seen.len(), 36);
    }

    #[test]
    fn table_matches_alphabet_positions() {
        for (i, &symbol) in ALPHABET.iter().enumerate() {
            assert_eq!(value_of(symbol as char), Some(i as u32));
            assert_eq!(symbol_for(i), Some(symbol as char));
        }
        assert_eq!(symbol_for(36), None);
    }

    #[test]
    fn uppercase_maps_to_lowercase_value() {
        assert_eq!(value_of('A'), Some(10));
        assert_eq!(value_of('F'), value_of('f'));
        assert_eq!(value_of('Z'), Some(35));
    }

    #[test]
    fn unknown_symbols_have_no_value() {
        for c in ['-', '+', ' ', '.', '_', '\u{e9}', '\u{2603}', '\0'] {
            assert_eq!(value_of(c), None, "{c:?} should not be a digit");
        }
    }

    #[test]
    fn digit_value_respects_base() {
        assert_eq!(digit_value('7', 8), Ok(7));
        assert_eq!(
            digit_value('9', 8),
            Err(RadixError::InvalidDigit { digit: '9', base: 8 })
        );
        assert_eq!(digit_value('z', 36), Ok(35));
        assert!(digit_value('!', 36).is_err());
    }

    #[test]
    fn base_bounds() {
        assert_eq!(check_base(2), Ok(()));
        assert_eq!(check_base(36), Ok(()));
        assert_eq!(check_base(0), Err(RadixError::InvalidBase(0)));
        assert_eq!(check_base(1), Err(RadixError::InvalidBase(1)));
        assert_eq!(check_base(37), Err(RadixError::InvalidBase(37)));
    }
}
