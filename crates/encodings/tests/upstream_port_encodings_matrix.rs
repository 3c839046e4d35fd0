//! Upstream: buffer (npm polyfill), string codec paths of `lib/index.js`.
//!
//! Cross-encoding matrix: known vectors for each codec and the alias table.

use byteview_encodings::{byte_length, decode, encode, Encoding};

#[test]
fn utf8_known_vectors() {
    assert_eq!(encode("abc", Encoding::Utf8), b"abc".to_vec());
    assert_eq!(encode("է", Encoding::Utf8), vec![0xD5, 0xA7]);
    assert_eq!(decode(&[0xD5, 0xA7], Encoding::Utf8), "է");
    assert_eq!(decode(&[0xFF, 0x61], Encoding::Utf8), "\u{FFFD}a");
}

#[test]
fn ascii_masks_but_latin1_does_not() {
    let bytes: Vec<u8> = vec![0x61, 0xE9, 0xFF];
    assert_eq!(decode(&bytes, Encoding::Ascii), "ai\u{7F}");
    assert_eq!(decode(&bytes, Encoding::Latin1), "aéÿ");
    // latin1 round-trips every byte value, ascii does not.
    let all: Vec<u8> = (0..=255).collect();
    assert_eq!(encode(&decode(&all, Encoding::Latin1), Encoding::Latin1), all);
}

#[test]
fn utf16le_pairs() {
    assert_eq!(
        encode("ab", Encoding::Utf16Le),
        vec![0x61, 0x00, 0x62, 0x00]
    );
    assert_eq!(decode(&[0x61, 0x00, 0x62, 0x00, 0x63], Encoding::Utf16Le), "ab");
}

#[test]
fn hex_vectors() {
    assert_eq!(decode(&[0xDE, 0xAD, 0xBE, 0xEF], Encoding::Hex), "deadbeef");
    assert_eq!(encode("deadbeef", Encoding::Hex), vec![0xDE, 0xAD, 0xBE, 0xEF]);
    assert_eq!(encode("deadbeets", Encoding::Hex), vec![0xDE, 0xAD, 0xBE]);
}

#[test]
fn base64_vectors() {
    assert_eq!(decode(b"hello world", Encoding::Base64), "aGVsbG8gd29ybGQ=");
    assert_eq!(encode("aGVsbG8gd29ybGQ=", Encoding::Base64), b"hello world".to_vec());
    assert_eq!(encode("aGVsbG8gd29ybGQ", Encoding::Base64), b"hello world".to_vec());
}

#[test]
fn byte_length_presizes_every_encoding() {
    let s = "hello է";
    for name in ["utf8", "ascii", "latin1", "ucs2", "hex", "base64"] {
        let enc = Encoding::from_name(name).unwrap();
        assert_eq!(byte_length(s, enc), encode(s, enc).len(), "{name}");
    }
}

#[test]
fn alias_names_resolve_to_same_codec() {
    let pairs = [
        ("utf8", "utf-8"),
        ("latin1", "binary"),
        ("ucs2", "utf-16le"),
        ("ucs-2", "utf16le"),
    ];
    for (a, b) in pairs {
        assert_eq!(
            Encoding::from_name(a).unwrap(),
            Encoding::from_name(b).unwrap()
        );
    }
}
