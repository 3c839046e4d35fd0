//! Forward and backward byte, sequence, and encoded-string search.

use byteview_encodings as encodings;
use byteview_encodings::Encoding;

use crate::ByteBuf;

fn forward(hay: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if needle.is_empty() {
        return Some(from.min(hay.len()));
    }
    let last = hay.len().checked_sub(needle.len())?;
    (from..=last).find(|&i| &hay[i..i + needle.len()] == needle)
}

fn backward(hay: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if needle.is_empty() {
        return Some(from.min(hay.len()));
    }
    let last = hay.len().checked_sub(needle.len())?;
    (0..=from.min(last)).rev().find(|&i| &hay[i..i + needle.len()] == needle)
}

impl ByteBuf {
    /// First occurrence of `needle` at an index `>= from`, scanning forward.
    ///
    /// An empty needle matches everywhere: the result is `from` clamped into
    /// range.
    ///
    /// # Example
    ///
    /// ```
    /// use byteview::ByteBuf;
    ///
    /// let buf = ByteBuf::from("abcabc");
    /// assert_eq!(buf.index_of(b"bc", 0), Some(1));
    /// assert_eq!(buf.index_of(b"bc", 2), Some(4));
    /// assert_eq!(buf.index_of(b"bd", 0), None);
    /// ```
    pub fn index_of(&self, needle: &[u8], from: usize) -> Option<usize> {
        forward(&self.as_bytes(), needle, from)
    }

    /// Last occurrence of `needle` at an index `<= from`, scanning backward.
    /// `from` of `None` means the end of the view.
    ///
    /// An empty needle matches everywhere: the result is the clamped `from`.
    pub fn last_index_of(&self, needle: &[u8], from: Option<usize>) -> Option<usize> {
        let hay = self.as_bytes();
        let from = from.unwrap_or(hay.len());
        backward(&hay, needle, from)
    }

    /// First occurrence of a single byte at an index `>= from`.
    pub fn index_of_byte(&self, byte: u8, from: usize) -> Option<usize> {
        self.index_of(&[byte], from)
    }

    /// Last occurrence of a single byte at an index `<= from`.
    pub fn last_index_of_byte(&self, byte: u8, from: Option<usize>) -> Option<usize> {
        self.last_index_of(&[byte], from)
    }

    /// First occurrence of a string needle, encoded per `encoding`, at an
    /// index `>= from`.
    pub fn index_of_text(&self, needle: &str, encoding: Encoding, from: usize) -> Option<usize> {
        self.index_of(&encodings::encode(needle, encoding), from)
    }

    /// Last occurrence of a string needle encoded per `encoding`, searching
    /// from the end.
    ///
    /// This is the typed form of the upstream call that passes an encoding
    /// name where an offset would go.
    pub fn last_index_of_text(&self, needle: &str, encoding: Encoding) -> Option<usize> {
        self.last_index_of(&encodings::encode(needle, encoding), None)
    }

    /// Whether `needle` occurs anywhere in the view.
    pub fn includes(&self, needle: &[u8]) -> bool {
        self.index_of(needle, 0).is_some()
    }
}
