//! Legacy 7-bit ASCII codec.
//!
//! This is the upstream `Buffer` notion of ASCII, not a validating codec:
//! decoding masks every byte to its low 7 bits, encoding keeps the low 8 bits
//! of every UTF-16 code unit. Bytes ≥ 0x80 therefore do not round-trip; use
//! [`latin1`](crate::latin1) when they must.

/// Converts a string to ASCII bytes, one byte per UTF-16 code unit.
///
/// # Example
///
/// ```
/// use byteview_encodings::ascii;
///
/// assert_eq!(ascii::encode("hello"), b"hello".to_vec());
/// ```
pub fn encode(s: &str) -> Vec<u8> {
    s.encode_utf16().map(|u| (u & 0xFF) as u8).collect()
}

/// Converts bytes to a string, masking each byte to 7 bits.
///
/// # Example
///
/// ```
/// use byteview_encodings::ascii;
///
/// assert_eq!(ascii::decode(b"hi"), "hi");
/// // High bit is dropped: 0xC8 & 0x7F == b'H'.
/// assert_eq!(ascii::decode(&[0xC8, 0x69]), "Hi");
/// ```
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| (b & 0x7F) as char).collect()
}

/// Encoded length: one byte per UTF-16 code unit.
pub fn byte_length(s: &str) -> usize {
    s.encode_utf16().count()
}
