//! Fixed-width integer and float reads/writes at arbitrary offsets.
//!
//! This is the strict family: offsets are validated against the view's
//! length and violations are [`BufError::OutOfRange`], never clamped. Writes
//! return the offset just past the written value so sequential writes chain:
//!
//! ```
//! use byteview::ByteBuf;
//!
//! let buf = ByteBuf::alloc(8);
//! let off = buf.write_u32_le(0xDEADBEEF, 0).unwrap();
//! let off = buf.write_u16_le(0xCAFE, off).unwrap();
//! assert_eq!(off, 6);
//! assert_eq!(buf.read_u32_le(0).unwrap(), 0xDEADBEEF);
//! ```

use crate::{BufError, ByteBuf};

impl ByteBuf {
    fn read_array<const N: usize>(&self, offset: usize) -> Result<[u8; N], BufError> {
        if N > self.len() || offset > self.len() - N {
            return Err(BufError::OutOfRange);
        }
        let bytes = self.as_bytes();
        let mut out = [0u8; N];
        out.copy_from_slice(&bytes[offset..offset + N]);
        Ok(out)
    }

    fn write_array<const N: usize>(&self, offset: usize, data: [u8; N]) -> Result<usize, BufError> {
        if N > self.len() || offset > self.len() - N {
            return Err(BufError::OutOfRange);
        }
        self.as_bytes_mut()[offset..offset + N].copy_from_slice(&data);
        Ok(offset + N)
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn read_u8(&self, offset: usize) -> Result<u8, BufError> {
        Ok(u8::from_le_bytes(self.read_array(offset)?))
    }

    /// Reads a signed 8-bit integer.
    #[inline]
    pub fn read_i8(&self, offset: usize) -> Result<i8, BufError> {
        Ok(i8::from_le_bytes(self.read_array(offset)?))
    }

    /// Reads an unsigned 16-bit integer (little-endian).
    #[inline]
    pub fn read_u16_le(&self, offset: usize) -> Result<u16, BufError> {
        Ok(u16::from_le_bytes(self.read_array(offset)?))
    }

    /// Reads an unsigned 16-bit integer (big-endian).
    #[inline]
    pub fn read_u16_be(&self, offset: usize) -> Result<u16, BufError> {
        Ok(u16::from_be_bytes(self.read_array(offset)?))
    }

    /// Reads a signed 16-bit integer (little-endian).
    #[inline]
    pub fn read_i16_le(&self, offset: usize) -> Result<i16, BufError> {
        Ok(i16::from_le_bytes(self.read_array(offset)?))
    }

    /// Reads a signed 16-bit integer (big-endian).
    #[inline]
    pub fn read_i16_be(&self, offset: usize) -> Result<i16, BufError> {
        Ok(i16::from_be_bytes(self.read_array(offset)?))
    }

    /// Reads an unsigned 32-bit integer (little-endian).
    #[inline]
    pub fn read_u32_le(&self, offset: usize) -> Result<u32, BufError> {
        Ok(u32::from_le_bytes(self.read_array(offset)?))
    }

    /// Reads an unsigned 32-bit integer (big-endian).
    #[inline]
    pub fn read_u32_be(&self, offset: usize) -> Result<u32, BufError> {
        Ok(u32::from_be_bytes(self.read_array(offset)?))
    }

    /// Reads a signed 32-bit integer (little-endian).
    #[inline]
    pub fn read_i32_le(&self, offset: usize) -> Result<i32, BufError> {
        Ok(i32::from_le_bytes(self.read_array(offset)?))
    }

    /// Reads a signed 32-bit integer (big-endian).
    #[inline]
    pub fn read_i32_be(&self, offset: usize) -> Result<i32, BufError> {
        Ok(i32::from_be_bytes(self.read_array(offset)?))
    }

    /// Reads an unsigned 64-bit integer (little-endian).
    #[inline]
    pub fn read_u64_le(&self, offset: usize) -> Result<u64, BufError> {
        Ok(u64::from_le_bytes(self.read_array(offset)?))
    }

    /// Reads an unsigned 64-bit integer (big-endian).
    #[inline]
    pub fn read_u64_be(&self, offset: usize) -> Result<u64, BufError> {
        Ok(u64::from_be_bytes(self.read_array(offset)?))
    }

    /// Reads a signed 64-bit integer (little-endian).
    #[inline]
    pub fn read_i64_le(&self, offset: usize) -> Result<i64, BufError> {
        Ok(i64::from_le_bytes(self.read_array(offset)?))
    }

    /// Reads a signed 64-bit integer (big-endian).
    #[inline]
    pub fn read_i64_be(&self, offset: usize) -> Result<i64, BufError> {
        Ok(i64::from_be_bytes(self.read_array(offset)?))
    }

    /// Reads a 32-bit float (little-endian).
    #[inline]
    pub fn read_f32_le(&self, offset: usize) -> Result<f32, BufError> {
        Ok(f32::from_le_bytes(self.read_array(offset)?))
    }

    /// Reads a 32-bit float (big-endian).
    #[inline]
    pub fn read_f32_be(&self, offset: usize) -> Result<f32, BufError> {
        Ok(f32::from_be_bytes(self.read_array(offset)?))
    }

    /// Reads a 64-bit float (little-endian).
    #[inline]
    pub fn read_f64_le(&self, offset: usize) -> Result<f64, BufError> {
        Ok(f64::from_le_bytes(self.read_array(offset)?))
    }

    /// Reads a 64-bit float (big-endian).
    #[inline]
    pub fn read_f64_be(&self, offset: usize) -> Result<f64, BufError> {
        Ok(f64::from_be_bytes(self.read_array(offset)?))
    }

    /// Writes an unsigned 8-bit integer and returns the next offset.
    #[inline]
    pub fn write_u8(&self, value: u8, offset: usize) -> Result<usize, BufError> {
        self.write_array(offset, value.to_le_bytes())
    }

    /// Writes a signed 8-bit integer and returns the next offset.
    #[inline]
    pub fn write_i8(&self, value: i8, offset: usize) -> Result<usize, BufError> {
        self.write_array(offset, value.to_le_bytes())
    }

    /// Writes an unsigned 16-bit integer (little-endian).
    #[inline]
    pub fn write_u16_le(&self, value: u16, offset: usize) -> Result<usize, BufError> {
        self.write_array(offset, value.to_le_bytes())
    }

    /// Writes an unsigned 16-bit integer (big-endian).
    #[inline]
    pub fn write_u16_be(&self, value: u16, offset: usize) -> Result<usize, BufError> {
        self.write_array(offset, value.to_be_bytes())
    }

    /// Writes a signed 16-bit integer (little-endian).
    #[inline]
    pub fn write_i16_le(&self, value: i16, offset: usize) -> Result<usize, BufError> {
        self.write_array(offset, value.to_le_bytes())
    }

    /// Writes a signed 16-bit integer (big-endian).
    #[inline]
    pub fn write_i16_be(&self, value: i16, offset: usize) -> Result<usize, BufError> {
        self.write_array(offset, value.to_be_bytes())
    }

    /// Writes an unsigned 32-bit integer (little-endian).
    #[inline]
    pub fn write_u32_le(&self, value: u32, offset: usize) -> Result<usize, BufError> {
        self.write_array(offset, value.to_le_bytes())
    }

    /// Writes an unsigned 32-bit integer (big-endian).
    #[inline]
    pub fn write_u32_be(&self, value: u32, offset: usize) -> Result<usize, BufError> {
        self.write_array(offset, value.to_be_bytes())
    }

    /// Writes a signed 32-bit integer (little-endian).
    #[inline]
    pub fn write_i32_le(&self, value: i32, offset: usize) -> Result<usize, BufError> {
        self.write_array(offset, value.to_le_bytes())
    }

    /// Writes a signed 32-bit integer (big-endian).
    #[inline]
    pub fn write_i32_be(&self, value: i32, offset: usize) -> Result<usize, BufError> {
        self.write_array(offset, value.to_be_bytes())
    }

    /// Writes an unsigned 64-bit integer (little-endian).
    #[inline]
    pub fn write_u64_le(&self, value: u64, offset: usize) -> Result<usize, BufError> {
        self.write_array(offset, value.to_le_bytes())
    }

    /// Writes an unsigned 64-bit integer (big-endian).
    #[inline]
    pub fn write_u64_be(&self, value: u64, offset: usize) -> Result<usize, BufError> {
        self.write_array(offset, value.to_be_bytes())
    }

    /// Writes a signed 64-bit integer (little-endian).
    #[inline]
    pub fn write_i64_le(&self, value: i64, offset: usize) -> Result<usize, BufError> {
        self.write_array(offset, value.to_le_bytes())
    }

    /// Writes a signed 64-bit integer (big-endian).
    #[inline]
    pub fn write_i64_be(&self, value: i64, offset: usize) -> Result<usize, BufError> {
        self.write_array(offset, value.to_be_bytes())
    }

    /// Writes a 32-bit float (little-endian).
    #[inline]
    pub fn write_f32_le(&self, value: f32, offset: usize) -> Result<usize, BufError> {
        self.write_array(offset, value.to_le_bytes())
    }

    /// Writes a 32-bit float (big-endian).
    #[inline]
    pub fn write_f32_be(&self, value: f32, offset: usize) -> Result<usize, BufError> {
        self.write_array(offset, value.to_be_bytes())
    }

    /// Writes a 64-bit float (little-endian).
    #[inline]
    pub fn write_f64_le(&self, value: f64, offset: usize) -> Result<usize, BufError> {
        self.write_array(offset, value.to_le_bytes())
    }

    /// Writes a 64-bit float (big-endian).
    #[inline]
    pub fn write_f64_be(&self, value: f64, offset: usize) -> Result<usize, BufError> {
        self.write_array(offset, value.to_be_bytes())
    }
}
