//! Base64 codec.
//!
//! Bytes format to the standard padded alphabet. The string → bytes direction
//! is permissive in the upstream way: characters outside the alphabet
//! (including padding) are stripped, the URL-safe alphabet is accepted, and a
//! dangling trailing character is dropped, so parsing never fails.

// Leading `::` disambiguates the registry crate from this module's own path.
use ::base64::alphabet;
use ::base64::engine::general_purpose::STANDARD;
use ::base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use ::base64::Engine as _;

/// Engine tolerant of missing padding and non-canonical trailing bits.
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Keeps alphabet characters only, folding the URL-safe alphabet into the
/// standard one, and drops a dangling character that cannot form a group.
fn clean(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '+' | '/' => out.push(c),
            '-' => out.push('+'),
            '_' => out.push('/'),
            _ => {}
        }
    }
    if out.len() % 4 == 1 {
        out.pop();
    }
    out
}

/// Parses a base64 string to bytes, permissively.
///
/// # Example
///
/// ```
/// use byteview_encodings::base64;
///
/// assert_eq!(base64::encode("aGVsbG8="), b"hello".to_vec());
/// // Padding optional, whitespace and junk ignored, url alphabet accepted.
/// assert_eq!(base64::encode("aGVs bG8"), b"hello".to_vec());
/// assert_eq!(base64::encode("+/+/"), base64::encode("-_-_"));
/// ```
pub fn encode(s: &str) -> Vec<u8> {
    FORGIVING.decode(clean(s)).unwrap_or_default()
}

/// Formats bytes as standard padded base64.
///
/// # Example
///
/// ```
/// use byteview_encodings::base64;
///
/// assert_eq!(base64::decode(b"hello world"), "aGVsbG8gd29ybGQ=");
/// ```
pub fn decode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Encoded length of a base64 string after cleaning: three bytes per full
/// group of four characters, plus one or two for a trailing partial group.
pub fn byte_length(s: &str) -> usize {
    let mut valid = 0usize;
    for c in s.chars() {
        if matches!(c, 'A'..='Z' | 'a'..='z' | '0'..='9' | '+' | '/' | '-' | '_') {
            valid += 1;
        }
    }
    (valid / 4) * 3
        + match valid % 4 {
            2 => 1,
            3 => 2,
            _ => 0,
        }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_round_trip() {
        for bytes in [b"".to_vec(), b"f".to_vec(), b"fo".to_vec(), b"foo".to_vec()] {
            assert_eq!(encode(&decode(&bytes)), bytes);
        }
    }

    #[test]
    fn test_permissive_parse() {
        assert_eq!(encode("aGVsbG8="), b"hello".to_vec());
        assert_eq!(encode("aGVsbG8"), b"hello".to_vec());
        assert_eq!(encode("aGV\ns\tbG8=\n"), b"hello".to_vec());
        assert_eq!(encode("!!!"), Vec::<u8>::new());
        // A dangling fifth character is dropped, not an error.
        assert_eq!(encode("aGVsb"), encode("aGVs"));
    }

    #[test]
    fn test_url_alphabet_folds() {
        let bytes = vec![0xFB, 0xEF, 0xBE];
        assert_eq!(decode(&bytes), "++++");
        assert_eq!(encode("----"), encode("++++"));
        assert_eq!(encode("----"), bytes);
        assert_eq!(encode("____"), encode("////"));
    }

    #[test]
    fn test_byte_length_matches_parse() {
        for s in ["", "aGVsbG8=", "aGVsbG8", "aGVsb", "!!!", "aGV s"] {
            assert_eq!(byte_length(s), encode(s).len(), "{s:?}");
        }
    }

    #[test]
    fn test_random_round_trip() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0xB64);
        for _ in 0..100 {
            let len = rng.gen_range(0..64);
            let bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            assert_eq!(encode(&decode(&bytes)), bytes);
        }
    }
}
