//! Tests for base16 decoding (from_base16 / decode_str).

use json_tb_base16::{decode_str, encode_str, from_base16, to_base16, Base16Error};
use proptest::prelude::*;

#[test]
fn empty_input() {
    assert_eq!(from_base16("").unwrap(), b"");
    assert_eq!(decode_str("").unwrap(), "");
}

#[test]
fn decodes_known_vectors() {
    assert_eq!(decode_str("666F6F626172").unwrap(), "foobar");
    assert_eq!(from_base16("00FF10").unwrap(), vec![0x00, 0xff, 0x10]);
}

#[test]
fn rejects_lowercase() {
    assert_eq!(
        from_base16("6f"),
        Err(Base16Error::InvalidDigit { index: 1 })
    );
}

#[test]
fn rejects_odd_length() {
    assert_eq!(from_base16("666"), Err(Base16Error::OddLength));
}

#[test]
fn rejects_separators_and_prefix() {
    assert!(matches!(
        from_base16("0x66"),
        Err(Base16Error::InvalidDigit { index: 1 })
    ));
    assert!(matches!(
        from_base16("66 6F"),
        Err(Base16Error::OddLength)
    ));
}

#[test]
fn error_messages() {
    assert_eq!(
        Base16Error::OddLength.to_string(),
        "Base16 string length must be a multiple of 2"
    );
    assert_eq!(
        Base16Error::InvalidDigit { index: 3 }.to_string(),
        "INVALID_BASE16_DIGIT at offset 3"
    );
}

proptest! {
    #[test]
    fn string_roundtrip(s in ".*") {
        prop_assert_eq!(decode_str(&encode_str(&s)).unwrap(), s);
    }

    #[test]
    fn bytes_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(from_base16(&to_base16(&bytes)).unwrap(), bytes);
    }
}
