//! UTF-8 codec.

use std::borrow::Cow;

/// Converts a string to its UTF-8 bytes.
///
/// # Example
///
/// ```
/// use byteview_encodings::utf8;
///
/// assert_eq!(utf8::encode("日本"), vec![0xE6, 0x97, 0xA5, 0xE6, 0x9C, 0xAC]);
/// ```
pub fn encode(s: &str) -> Vec<u8> {
    s.as_bytes().to_vec()
}

/// Decodes UTF-8 bytes to a string. Malformed sequences become U+FFFD and
/// decoding continues; this never fails.
pub fn decode(bytes: &[u8]) -> String {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}

/// Encoded length: the string's UTF-8 byte count.
pub fn byte_length(s: &str) -> usize {
    s.len()
}
