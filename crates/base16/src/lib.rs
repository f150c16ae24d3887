//! Base16 encoding and decoding utilities.
//!
//! Generic values handed to an HDL test bench travel through a channel whose
//! syntax does not tolerate quotes, braces or path separators. This crate
//! provides the transport form used for those values: every byte becomes two
//! uppercase hex digits, with no prefix and no separators.
//!
//! # Example
//!
//! ```
//! use json_tb_base16::{decode_str, encode_str};
//!
//! let encoded = encode_str(r#"{"b":"x"}"#);
//! assert_eq!(encoded, "7B2262223A2278227D");
//! assert_eq!(decode_str(&encoded).unwrap(), r#"{"b":"x"}"#);
//! ```

mod constants;
mod from_base16;
mod to_base16;

pub use constants::{ALPHABET, ALPHABET_BYTES};
pub use from_base16::{decode_str, from_base16};
pub use to_base16::{encode_str, to_base16};

/// Error type for base16 operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Base16Error {
    /// The input length is not a multiple of two.
    OddLength,
    /// The byte at `index` is not an uppercase base16 digit.
    InvalidDigit { index: usize },
    /// The decoded bytes are not valid UTF-8.
    InvalidUtf8,
}

impl std::fmt::Display for Base16Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Base16Error::OddLength => write!(f, "Base16 string length must be a multiple of 2"),
            Base16Error::InvalidDigit { index } => {
                write!(f, "INVALID_BASE16_DIGIT at offset {index}")
            }
            Base16Error::InvalidUtf8 => write!(f, "Decoded base16 payload is not valid UTF-8"),
        }
    }
}

impl std::error::Error for Base16Error {}
