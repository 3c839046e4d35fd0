//! Hexadecimal codec.
//!
//! The string side is two hex digits per byte. Encoding (string → bytes)
//! truncates at the first invalid or unpaired digit rather than failing;
//! decoding (bytes → string) always produces lowercase digits.

const DIGITS: &[u8; 16] = b"0123456789abcdef";

fn nibble(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Parses a hex string to bytes, stopping at the last valid pair.
///
/// # Example
///
/// ```
/// use byteview_encodings::hex;
///
/// assert_eq!(hex::encode("deadBEEF"), vec![0xDE, 0xAD, 0xBE, 0xEF]);
/// // Truncates at the invalid digit and at an odd tail.
/// assert_eq!(hex::encode("abxycd"), vec![0xAB]);
/// assert_eq!(hex::encode("abc"), vec![0xAB]);
/// ```
pub fn encode(s: &str) -> Vec<u8> {
    let digits = s.as_bytes();
    let mut out = Vec::with_capacity(digits.len() / 2);
    for pair in digits.chunks_exact(2) {
        match (nibble(pair[0]), nibble(pair[1])) {
            (Some(hi), Some(lo)) => out.push((hi << 4) | lo),
            _ => break,
        }
    }
    out
}

/// Formats bytes as a lowercase hex string.
///
/// # Example
///
/// ```
/// use byteview_encodings::hex;
///
/// assert_eq!(hex::decode(&[0xDE, 0xAD]), "dead");
/// ```
pub fn decode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(DIGITS[(b >> 4) as usize] as char);
        out.push(DIGITS[(b & 0x0F) as usize] as char);
    }
    out
}

/// Encoded length: the number of leading valid digit pairs.
pub fn byte_length(s: &str) -> usize {
    let mut count = 0;
    for pair in s.as_bytes().chunks_exact(2) {
        if nibble(pair[0]).is_none() || nibble(pair[1]).is_none() {
            break;
        }
        count += 1;
    }
    count
}
