//! Base16 decoding functions.

use crate::constants::{DECODE_TABLE, INVALID};
use crate::Base16Error;

/// Decodes an uppercase base16 string into bytes.
///
/// Decoding is strict: the input must have an even length and contain only
/// `0-9A-F`. Lowercase digits are rejected.
///
/// # Example
///
/// ```
/// use json_tb_base16::{from_base16, Base16Error};
///
/// assert_eq!(from_base16("7B7D").unwrap(), b"{}");
/// assert_eq!(from_base16("7b7d"), Err(Base16Error::InvalidDigit { index: 1 }));
/// ```
pub fn from_base16(encoded: &str) -> Result<Vec<u8>, Base16Error> {
    let bytes = encoded.as_bytes();
    if bytes.len() % 2 != 0 {
        return Err(Base16Error::OddLength);
    }
    let mut out = Vec::with_capacity(bytes.len() / 2);
    for (i, pair) in bytes.chunks_exact(2).enumerate() {
        let hi = DECODE_TABLE[pair[0] as usize];
        if hi == INVALID {
            return Err(Base16Error::InvalidDigit { index: i * 2 });
        }
        let lo = DECODE_TABLE[pair[1] as usize];
        if lo == INVALID {
            return Err(Base16Error::InvalidDigit { index: i * 2 + 1 });
        }
        out.push((hi << 4) | lo);
    }
    Ok(out)
}

/// Decodes an uppercase base16 string into a UTF-8 string.
///
/// Inverse of [`encode_str`](crate::encode_str).
pub fn decode_str(encoded: &str) -> Result<String, Base16Error> {
    let bytes = from_base16(encoded)?;
    String::from_utf8(bytes).map_err(|_| Base16Error::InvalidUtf8)
}
