//! Base16 encoding functions.

use crate::constants::ALPHABET_BYTES;

/// Encodes a byte slice as uppercase base16.
///
/// Every input byte becomes exactly two characters from `0-9A-F`. There is
/// no prefix and no separator, so the output length is always twice the
/// input length.
///
/// # Example
///
/// ```
/// use json_tb_base16::to_base16;
///
/// assert_eq!(to_base16(b"{}"), "7B7D");
/// assert_eq!(to_base16(b""), "");
/// ```
pub fn to_base16(uint8: &[u8]) -> String {
    let mut out = String::with_capacity(uint8.len() * 2);
    for &byte in uint8 {
        out.push(ALPHABET_BYTES[(byte >> 4) as usize] as char);
        out.push(ALPHABET_BYTES[(byte & 0x0f) as usize] as char);
    }
    out
}

/// Encodes the UTF-8 bytes of a string as uppercase base16.
///
/// This is the form used to push a serialized document or a file system
/// path through a generic whose value syntax rejects quotes, braces or
/// path separators.
///
/// # Example
///
/// ```
/// use json_tb_base16::encode_str;
///
/// assert_eq!(encode_str("/data/a.json"), "2F646174612F612E6A736F6E");
/// ```
pub fn encode_str(s: &str) -> String {
    to_base16(s.as_bytes())
}
