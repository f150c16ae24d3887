/// Uppercase base16 alphabet.
pub const ALPHABET: &str = "0123456789ABCDEF";

/// Uppercase base16 alphabet as a byte array (used for byte-level operations and const evaluation).
pub const ALPHABET_BYTES: &[u8; 16] = b"0123456789ABCDEF";

/// Marker for bytes that are not a base16 digit in [`DECODE_TABLE`].
pub(crate) const INVALID: u8 = 0xff;

/// Reverse lookup for [`ALPHABET_BYTES`]. Lowercase digits are not accepted.
pub(crate) static DECODE_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 16 {
        table[ALPHABET_BYTES[i] as usize] = i as u8;
        i += 1;
    }
    table
};
