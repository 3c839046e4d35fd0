//! Concatenation of views and raw byte containers.

use crate::ByteBuf;

/// Anything that can contribute bytes to [`ByteBuf::concat`]: views, slices,
/// vectors, and arrays.
pub trait ByteSource {
    /// Number of bytes this source holds.
    fn len(&self) -> usize;

    /// Whether the source is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies the source's first `dest.len()` bytes into `dest`. The caller
    /// guarantees `dest.len() <= self.len()`.
    fn copy_into(&self, dest: &mut [u8]);
}

impl ByteSource for ByteBuf {
    fn len(&self) -> usize {
        ByteBuf::len(self)
    }

    fn copy_into(&self, dest: &mut [u8]) {
        let n = dest.len();
        dest.copy_from_slice(&self.as_bytes()[..n]);
    }
}

impl ByteSource for &[u8] {
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    fn copy_into(&self, dest: &mut [u8]) {
        let n = dest.len();
        dest.copy_from_slice(&self[..n]);
    }
}

impl ByteSource for Vec<u8> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn copy_into(&self, dest: &mut [u8]) {
        let n = dest.len();
        dest.copy_from_slice(&self[..n]);
    }
}

impl<const N: usize> ByteSource for [u8; N] {
    fn len(&self) -> usize {
        N
    }

    fn copy_into(&self, dest: &mut [u8]) {
        let n = dest.len();
        dest.copy_from_slice(&self[..n]);
    }
}

impl ByteBuf {
    /// Concatenates byte sources into one new buffer.
    ///
    /// The result length is the sum of the inputs unless `total_len` is
    /// given. A shorter explicit length silently drops the trailing inputs
    /// (or the tail of one); a longer one leaves trailing zeros. Zero inputs
    /// produce a zero-length buffer. The result never shares storage with
    /// the inputs.
    ///
    /// # Example
    ///
    /// ```
    /// use byteview::ByteBuf;
    ///
    /// let joined = ByteBuf::concat(&[[1u8, 2], [3, 4]], None);
    /// assert_eq!(joined.to_vec(), vec![1, 2, 3, 4]);
    ///
    /// let cut = ByteBuf::concat(&[[1u8, 2], [3, 4]], Some(3));
    /// assert_eq!(cut.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn concat<S: ByteSource>(items: &[S], total_len: Option<usize>) -> ByteBuf {
        let natural: usize = items.iter().map(ByteSource::len).sum();
        let total = total_len.unwrap_or(natural);
        let out = ByteBuf::alloc(total);
        let mut pos = 0;
        {
            let mut dest = out.as_bytes_mut();
            for item in items {
                if pos >= total {
                    break;
                }
                let n = item.len().min(total - pos);
                item.copy_into(&mut dest[pos..pos + n]);
                pos += n;
            }
        }
        out
    }
}
