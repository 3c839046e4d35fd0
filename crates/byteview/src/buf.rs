//! The buffer view type: construction, indexing, slicing, copy, and fill.

use std::cell::{Ref, RefMut};
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use byteview_encodings as encodings;
use byteview_encodings::Encoding;

use crate::storage::Storage;
use crate::BufError;

/// A view over a shared [`Storage`] block.
///
/// A `ByteBuf` is an `(storage, offset, length)` triple. [`Clone`] and
/// [`slice`](ByteBuf::slice) produce new views over the *same* storage, so
/// aliased views observe each other's writes; constructors and
/// [`copy_from`](ByteBuf::copy_from) allocate fresh storage.
///
/// # Example
///
/// ```
/// use byteview::ByteBuf;
///
/// let buf = ByteBuf::from_slice(&[1, 2, 3, 4]);
/// let tail = buf.slice(2, None);
/// tail.set(0, 9);
/// assert_eq!(buf.to_vec(), vec![1, 2, 9, 4]);
/// ```
#[derive(Clone)]
pub struct ByteBuf {
    storage: Rc<Storage>,
    offset: usize,
    len: usize,
}

/// Resolves a possibly negative index against a length, clamping into
/// `[0, len]`.
fn resolve_index(index: isize, len: usize) -> usize {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        (index as usize).min(len)
    }
}

impl ByteBuf {
    /// Allocates a zero-filled buffer of the given length.
    pub fn alloc(len: usize) -> ByteBuf {
        ByteBuf::with_storage(Storage::zeroed(len))
    }

    /// Allocates a buffer of the given length with every byte set to `value`.
    pub fn alloc_fill(len: usize, value: u8) -> ByteBuf {
        ByteBuf::with_storage(Storage::from_vec(vec![value; len]))
    }

    /// Copies a byte slice into a new buffer.
    pub fn from_slice(bytes: &[u8]) -> ByteBuf {
        ByteBuf::from_vec(bytes.to_vec())
    }

    /// Takes ownership of a byte vector as a new buffer.
    pub fn from_vec(bytes: Vec<u8>) -> ByteBuf {
        ByteBuf::with_storage(Storage::from_vec(bytes))
    }

    /// Decodes a string into a new buffer per the given encoding.
    ///
    /// # Example
    ///
    /// ```
    /// use byteview::{ByteBuf, Encoding};
    ///
    /// let buf = ByteBuf::from_text("deadbeef", Encoding::Hex);
    /// assert_eq!(buf.to_vec(), vec![0xDE, 0xAD, 0xBE, 0xEF]);
    /// ```
    pub fn from_text(s: &str, encoding: Encoding) -> ByteBuf {
        ByteBuf::from_vec(encodings::encode(s, encoding))
    }

    /// Deep-copies another view's bytes into a new buffer.
    pub fn copy_from(other: &ByteBuf) -> ByteBuf {
        ByteBuf::from_vec(other.to_vec())
    }

    fn with_storage(storage: Rc<Storage>) -> ByteBuf {
        let len = storage.len();
        ByteBuf {
            storage,
            offset: 0,
            len,
        }
    }

    /// Length of the view in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the view is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The view's bytes as a borrowed slice. Callers must not hold the
    /// guard across a mutating call on an aliasing view.
    pub(crate) fn as_bytes(&self) -> Ref<'_, [u8]> {
        Ref::map(self.storage.borrow(), |bytes| {
            &bytes[self.offset..self.offset + self.len]
        })
    }

    pub(crate) fn as_bytes_mut(&self) -> RefMut<'_, [u8]> {
        RefMut::map(self.storage.borrow_mut(), |bytes| {
            &mut bytes[self.offset..self.offset + self.len]
        })
    }

    /// Copies the view's bytes out into a fresh `Vec`.
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Reads the byte at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<u8> {
        if index < self.len {
            Some(self.as_bytes()[index])
        } else {
            None
        }
    }

    /// Writes the byte at `index`; out-of-range writes are a no-op.
    pub fn set(&self, index: usize, value: u8) {
        if index < self.len {
            self.as_bytes_mut()[index] = value;
        }
    }

    /// Returns a new view over the same storage covering `[start, end)`.
    ///
    /// Negative indices count from the end. Both bounds clamp into
    /// `[0, len]`; a start at or past the end yields an empty view, never an
    /// error. `end` of `None` means the view's length.
    ///
    /// # Example
    ///
    /// ```
    /// use byteview::{ByteBuf, Encoding};
    ///
    /// let buf = ByteBuf::from_text("hallo", Encoding::Utf8);
    /// assert_eq!(buf.slice(0, Some(10)).to_text(Encoding::Utf8, 0, None), "hallo");
    /// assert_eq!(buf.slice(10, Some(2)).len(), 0);
    /// assert_eq!(buf.slice(-2, None).to_text(Encoding::Utf8, 0, None), "lo");
    /// ```
    pub fn slice(&self, start: isize, end: Option<isize>) -> ByteBuf {
        let start = resolve_index(start, self.len);
        let end = end.map_or(self.len, |e| resolve_index(e, self.len));
        let len = end.saturating_sub(start);
        ByteBuf {
            storage: Rc::clone(&self.storage),
            offset: self.offset + start,
            len,
        }
    }

    /// Copies bytes `[source_start, source_end)` of this view into `target`
    /// beginning at `target_start`, and returns the number of bytes copied.
    ///
    /// All indices clamp; a zero-width source range or a start past the
    /// target's end copies nothing. When both views alias the same storage
    /// the copy has memmove semantics: the result is as if the source bytes
    /// were fully read before any write, for ascending and descending
    /// overlaps alike.
    pub fn copy(
        &self,
        target: &ByteBuf,
        target_start: usize,
        source_start: usize,
        source_end: Option<usize>,
    ) -> usize {
        let source_end = source_end.unwrap_or(self.len).min(self.len);
        let source_start = source_start.min(self.len);
        if source_start >= source_end || target_start >= target.len {
            return 0;
        }
        let count = (source_end - source_start).min(target.len - target_start);
        let src = self.offset + source_start;
        let dst = target.offset + target_start;
        if Rc::ptr_eq(&self.storage, &target.storage) {
            let mut bytes = self.storage.borrow_mut();
            bytes.copy_within(src..src + count, dst);
        } else {
            let source = self.storage.borrow();
            let mut dest = target.storage.borrow_mut();
            dest[dst..dst + count].copy_from_slice(&source[src..src + count]);
        }
        count
    }

    /// Sets every byte in `[start, end)` to `value`. Bounds clamp; an empty
    /// range is a no-op.
    pub fn fill_byte(&self, value: u8, start: usize, end: Option<usize>) {
        let end = end.unwrap_or(self.len).min(self.len);
        let start = start.min(end);
        self.as_bytes_mut()[start..end].fill(value);
    }

    /// Repeats an encoded string pattern across `[start, end)`, truncating
    /// the final repetition byte-wise at the boundary. Returns the number of
    /// bytes written.
    ///
    /// The pattern is encoded once and then treated as raw bytes, so a
    /// multi-byte character may be cut mid-sequence at the very end of the
    /// range, exactly as upstream.
    ///
    /// # Errors
    ///
    /// A pattern that encodes to zero bytes (the empty string, or e.g. a
    /// hex string with no valid digit pair) is `InvalidArgument`.
    ///
    /// # Example
    ///
    /// ```
    /// use byteview::{ByteBuf, Encoding};
    ///
    /// let buf = ByteBuf::alloc(10);
    /// buf.fill_text("abc", 0, None, Encoding::Utf8).unwrap();
    /// assert_eq!(buf.to_text(Encoding::Utf8, 0, None), "abcabcabca");
    /// ```
    pub fn fill_text(
        &self,
        pattern: &str,
        start: usize,
        end: Option<usize>,
        encoding: Encoding,
    ) -> Result<usize, BufError> {
        let pat = encodings::encode(pattern, encoding);
        if pat.is_empty() {
            return Err(BufError::InvalidArgument("fill pattern encodes to zero bytes"));
        }
        let end = end.unwrap_or(self.len).min(self.len);
        let start = start.min(end);
        let mut bytes = self.as_bytes_mut();
        let dest = &mut bytes[start..end];
        let mut written = 0;
        while written < dest.len() {
            let n = pat.len().min(dest.len() - written);
            dest[written..written + n].copy_from_slice(&pat[..n]);
            written += n;
        }
        Ok(written)
    }

    /// Decodes `[start, end)` of the view to a string. Bounds clamp like
    /// [`slice`](ByteBuf::slice); decoding never fails.
    pub fn to_text(&self, encoding: Encoding, start: usize, end: Option<usize>) -> String {
        let end = end.unwrap_or(self.len).min(self.len);
        let start = start.min(end);
        encodings::decode(&self.as_bytes()[start..end], encoding)
    }

    /// Encodes a string into the view at `offset`, truncating byte-wise at
    /// the view's end. Returns the number of bytes written.
    pub fn write_text(&self, s: &str, offset: usize, encoding: Encoding) -> usize {
        let encoded = encodings::encode(s, encoding);
        let offset = offset.min(self.len);
        let n = encoded.len().min(self.len - offset);
        self.as_bytes_mut()[offset..offset + n].copy_from_slice(&encoded[..n]);
        n
    }

    /// Byte-wise equality with another view.
    pub fn equals(&self, other: &ByteBuf) -> bool {
        *self.as_bytes() == *other.as_bytes()
    }

    /// Lexicographic byte-wise comparison with another view.
    pub fn compare(&self, other: &ByteBuf) -> Ordering {
        self.as_bytes().cmp(&other.as_bytes())
    }

    /// Swaps the byte order of every 16-bit unit in place.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when the view's length is not a multiple of 2.
    pub fn swap16(&self) -> Result<(), BufError> {
        if self.len % 2 != 0 {
            return Err(BufError::InvalidArgument("length is not a multiple of 16 bits"));
        }
        for unit in self.as_bytes_mut().chunks_exact_mut(2) {
            unit.swap(0, 1);
        }
        Ok(())
    }

    /// Swaps the byte order of every 32-bit unit in place.
    pub fn swap32(&self) -> Result<(), BufError> {
        if self.len % 4 != 0 {
            return Err(BufError::InvalidArgument("length is not a multiple of 32 bits"));
        }
        for unit in self.as_bytes_mut().chunks_exact_mut(4) {
            unit.reverse();
        }
        Ok(())
    }

    /// Swaps the byte order of every 64-bit unit in place.
    pub fn swap64(&self) -> Result<(), BufError> {
        if self.len % 8 != 0 {
            return Err(BufError::InvalidArgument("length is not a multiple of 64 bits"));
        }
        for unit in self.as_bytes_mut().chunks_exact_mut(8) {
            unit.reverse();
        }
        Ok(())
    }
}

impl PartialEq for ByteBuf {
    fn eq(&self, other: &ByteBuf) -> bool {
        self.equals(other)
    }
}

impl Eq for ByteBuf {}

impl From<&[u8]> for ByteBuf {
    fn from(bytes: &[u8]) -> ByteBuf {
        ByteBuf::from_slice(bytes)
    }
}

impl From<Vec<u8>> for ByteBuf {
    fn from(bytes: Vec<u8>) -> ByteBuf {
        ByteBuf::from_vec(bytes)
    }
}

impl From<&str> for ByteBuf {
    /// UTF-8, the upstream default encoding.
    fn from(s: &str) -> ByteBuf {
        ByteBuf::from_text(s, Encoding::Utf8)
    }
}

impl fmt::Debug for ByteBuf {
    /// The upstream inspect format: `<Buffer de ad be ef>`, elided past 50
    /// bytes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Buffer")?;
        let bytes = self.as_bytes();
        for b in bytes.iter().take(50) {
            write!(f, " {b:02x}")?;
        }
        if bytes.len() > 50 {
            write!(f, " ... {} more bytes", bytes.len() - 50)?;
        }
        write!(f, ">")
    }
}
