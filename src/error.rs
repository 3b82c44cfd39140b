/// Errors raised while decoding, encoding or converting numerals.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RadixError {
    /// The base is outside the supported range of 2 to 36.
    #[error("base is out of range: {0}")]
    InvalidBase(u32),
    /// A symbol is not part of the alphabet, or its value is not below the base.
    #[error("invalid digit '{digit}' for base {base}")]
    InvalidDigit { digit: char, base: u32 },
    /// The numeral is empty, a bare sign, or not a decimal integer where one is required.
    #[error("malformed numeral: {0:?}")]
    MalformedNumeral(String),
}

pub type Result<T> = std::result::Result<T, RadixError>;
