//! Convert integer numerals between positional bases 2 to 36.
//!
//! ```
//! use base_convert::convert;
//!
//! assert_eq!(convert("255", 10, 16).as_deref(), Ok("ff"));
//! assert_eq!(convert("-101", 2, 10).as_deref(), Ok("-5"));
//! ```

pub mod alphabet;
pub mod converter;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod logger;

pub use converter::{convert, parse_decimal};
pub use decoder::decode;
pub use encoder::encode;
pub use error::{RadixError, Result};
