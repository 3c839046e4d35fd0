//! UTF-16 little-endian codec, upstream alias `ucs2`.

/// Converts a string to UTF-16LE bytes, two per code unit.
///
/// # Example
///
/// ```
/// use byteview_encodings::utf16;
///
/// assert_eq!(utf16::encode("ab"), vec![0x61, 0x00, 0x62, 0x00]);
/// ```
pub fn encode(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len() * 2);
    for unit in s.encode_utf16() {
        out.extend_from_slice(&unit.to_le_bytes());
    }
    out
}

/// Decodes UTF-16LE bytes to a string. An odd trailing byte is dropped;
/// unpaired surrogates become U+FFFD.
pub fn decode(bytes: &[u8]) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}

/// Encoded length: two bytes per UTF-16 code unit.
pub fn byte_length(s: &str) -> usize {
    s.encode_utf16().count() * 2
}
