//! Text encodings for byteview.
//!
//! This crate implements the string codecs of the JS `Buffer` API: `ascii`,
//! `latin1`/`binary`, `utf8`, `utf16le`/`ucs2`, `hex`, and `base64`. Each
//! codec converts between a byte sequence and a string, with the permissive
//! decode posture of the upstream API: malformed input never fails, it is
//! repaired or truncated.
//!
//! # Example
//!
//! ```
//! use byteview_encodings::{decode, encode, Encoding};
//!
//! let enc = Encoding::from_name("UTF-8").unwrap();
//! assert_eq!(encode("hi", enc), b"hi".to_vec());
//! assert_eq!(decode(&[0x68, 0x69], enc), "hi");
//! ```

use thiserror::Error;

pub mod ascii;
pub mod base64;
pub mod hex;
pub mod latin1;
pub mod utf16;
pub mod utf8;

/// Error type for encoding-name resolution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// The encoding name is not recognized.
    #[error("unknown encoding: {0}")]
    Unknown(String),
}

/// A text encoding understood by the buffer API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// 7-bit ASCII. Decoding masks each byte to its low 7 bits.
    Ascii,
    /// ISO-8859-1, one byte per code point 0–255. Alias: `binary`.
    Latin1,
    /// UTF-8. Malformed sequences decode to U+FFFD.
    Utf8,
    /// UTF-16 little-endian. Alias: `ucs2`.
    Utf16Le,
    /// Two lowercase hex digits per byte.
    Hex,
    /// Standard base64 alphabet with padding.
    Base64,
}

impl Encoding {
    /// Resolves an encoding name, case-insensitively and with the upstream
    /// aliases (`binary` for latin1, `ucs2` for utf16le, dashed forms).
    ///
    /// # Example
    ///
    /// ```
    /// use byteview_encodings::Encoding;
    ///
    /// assert_eq!(Encoding::from_name("binary").unwrap(), Encoding::Latin1);
    /// assert_eq!(Encoding::from_name("UCS-2").unwrap(), Encoding::Utf16Le);
    /// assert!(Encoding::from_name("rot13").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Encoding, EncodingError> {
        match name.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "ascii" => Ok(Encoding::Ascii),
            "latin1" | "binary" => Ok(Encoding::Latin1),
            "ucs2" | "ucs-2" | "utf16le" | "utf-16le" => Ok(Encoding::Utf16Le),
            "hex" => Ok(Encoding::Hex),
            "base64" => Ok(Encoding::Base64),
            _ => Err(EncodingError::Unknown(name.to_string())),
        }
    }

    /// Canonical lowercase name of the encoding.
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Ascii => "ascii",
            Encoding::Latin1 => "latin1",
            Encoding::Utf8 => "utf8",
            Encoding::Utf16Le => "utf16le",
            Encoding::Hex => "hex",
            Encoding::Base64 => "base64",
        }
    }
}

impl Default for Encoding {
    /// The upstream default encoding is UTF-8.
    fn default() -> Self {
        Encoding::Utf8
    }
}

/// Encodes a string to bytes per the given encoding.
pub fn encode(s: &str, encoding: Encoding) -> Vec<u8> {
    match encoding {
        Encoding::Ascii => ascii::encode(s),
        Encoding::Latin1 => latin1::encode(s),
        Encoding::Utf8 => utf8::encode(s),
        Encoding::Utf16Le => utf16::encode(s),
        Encoding::Hex => hex::encode(s),
        Encoding::Base64 => base64::encode(s),
    }
}

/// Decodes bytes to a string per the given encoding. Never fails: malformed
/// input is repaired (U+FFFD) or truncated, per codec.
pub fn decode(bytes: &[u8], encoding: Encoding) -> String {
    match encoding {
        Encoding::Ascii => ascii::decode(bytes),
        Encoding::Latin1 => latin1::decode(bytes),
        Encoding::Utf8 => utf8::decode(bytes),
        Encoding::Utf16Le => utf16::decode(bytes),
        Encoding::Hex => hex::decode(bytes),
        Encoding::Base64 => base64::decode(bytes),
    }
}

/// Returns the encoded byte length of `s` without materializing the bytes.
///
/// Used to pre-size allocations before a real encode pass.
pub fn byte_length(s: &str, encoding: Encoding) -> usize {
    match encoding {
        Encoding::Ascii | Encoding::Latin1 => ascii::byte_length(s),
        Encoding::Utf8 => utf8::byte_length(s),
        Encoding::Utf16Le => utf16::byte_length(s),
        Encoding::Hex => hex::byte_length(s),
        Encoding::Base64 => base64::byte_length(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_aliases() {
        for (name, enc) in [
            ("utf8", Encoding::Utf8),
            ("utf-8", Encoding::Utf8),
            ("UTF8", Encoding::Utf8),
            ("ascii", Encoding::Ascii),
            ("latin1", Encoding::Latin1),
            ("binary", Encoding::Latin1),
            ("ucs2", Encoding::Utf16Le),
            ("ucs-2", Encoding::Utf16Le),
            ("utf16le", Encoding::Utf16Le),
            ("UTF-16LE", Encoding::Utf16Le),
            ("hex", Encoding::Hex),
            ("base64", Encoding::Base64),
        ] {
            assert_eq!(Encoding::from_name(name).unwrap(), enc, "{name}");
        }
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(
            Encoding::from_name("utf32"),
            Err(EncodingError::Unknown("utf32".to_string()))
        );
    }

    #[test]
    fn test_byte_length_matches_encode() {
        let samples = ["", "hello", "日本語", "a¢€𐍈", "էէէ"];
        for s in samples {
            for enc in [
                Encoding::Ascii,
                Encoding::Latin1,
                Encoding::Utf8,
                Encoding::Utf16Le,
                Encoding::Hex,
                Encoding::Base64,
            ] {
                assert_eq!(
                    byte_length(s, enc),
                    encode(s, enc).len(),
                    "{s:?} via {}",
                    enc.name()
                );
            }
        }
    }
}
