//! Latin-1 (ISO-8859-1) codec, upstream alias `binary`.
//!
//! Bytes map 1:1 to code points 0–255, so any byte sequence round-trips.

/// Converts a string to Latin-1 bytes, keeping the low 8 bits of each
/// UTF-16 code unit.
pub fn encode(s: &str) -> Vec<u8> {
    s.encode_utf16().map(|u| (u & 0xFF) as u8).collect()
}

/// Converts bytes to a string, one code point per byte.
///
/// # Example
///
/// ```
/// use byteview_encodings::latin1;
///
/// assert_eq!(latin1::decode(&[0x68, 0xE9]), "hé");
/// ```
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
