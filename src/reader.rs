use alloc::string::String;

use crate::ascii;
use crate::kind::Endian;

pub type Result<T> = core::result::Result<T, ReaderError>;

/// Decodes typed values sequentially out of a borrowed byte slice.
///
/// The reader keeps an explicit read position. Each `read_*` call decodes
/// one value at the current position and advances the position by exactly
/// the number of bytes consumed. The backing slice is borrowed and never
/// copied; there is no way to rewind other than constructing a new reader.
///
/// Every fixed-length read is bounds-checked: reading past the end of the
/// backing slice returns [`ReaderError::OutOfBounds`] and leaves the
/// position unchanged. [`read_strz`](BufferReader::read_strz) is the one
/// exception to needing data — a missing terminator is not an error, the
/// scan simply stops at the end of the slice.
///
/// To read from a textual source, convert it to bytes first with
/// [`crate::ascii::to_bytes`] and construct the reader over the result.
#[derive(Clone, Debug)]
pub struct BufferReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BufferReader<'a> {
    /// Creates a reader positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// The current read position, in bytes from the start of the backing
    /// slice.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The number of unread bytes left.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Reads `len` raw bytes. Returns a slice reference into the backing
    /// data; nothing is copied.
    #[inline(always)]
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self.pos.checked_add(len).ok_or(ReaderError::OutOfBounds)?;
        if end > self.data.len() {
            return Err(ReaderError::OutOfBounds);
        }
        let bytes = &self.data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    /// Reads a small array of bytes with a constant length.
    #[inline(always)]
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.read_bytes(N)?;
        // read_bytes already checked the length, so this unwrap() compiles away.
        Ok(*<&[u8; N]>::try_from(bytes).unwrap())
    }

    /// Reads a `u8`.
    #[inline(always)]
    pub fn read_u8(&mut self) -> Result<u8> {
        let [b] = self.read_array::<1>()?;
        Ok(b)
    }

    /// Reads an `i8`.
    #[inline(always)]
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Reads a `u16` in the given byte order.
    #[inline(always)]
    pub fn read_u16(&mut self, endian: Endian) -> Result<u16> {
        let bytes = self.read_array()?;
        Ok(match endian {
            Endian::Little => u16::from_le_bytes(bytes),
            Endian::Big => u16::from_be_bytes(bytes),
        })
    }

    /// Reads a `u32` in the given byte order.
    #[inline(always)]
    pub fn read_u32(&mut self, endian: Endian) -> Result<u32> {
        let bytes = self.read_array()?;
        Ok(match endian {
            Endian::Little => u32::from_le_bytes(bytes),
            Endian::Big => u32::from_be_bytes(bytes),
        })
    }

    /// Reads an `i16` in the given byte order.
    #[inline(always)]
    pub fn read_i16(&mut self, endian: Endian) -> Result<i16> {
        let bytes = self.read_array()?;
        Ok(match endian {
            Endian::Little => i16::from_le_bytes(bytes),
            Endian::Big => i16::from_be_bytes(bytes),
        })
    }

    /// Reads an `i32` in the given byte order.
    #[inline(always)]
    pub fn read_i32(&mut self, endian: Endian) -> Result<i32> {
        let bytes = self.read_array()?;
        Ok(match endian {
            Endian::Little => i32::from_le_bytes(bytes),
            Endian::Big => i32::from_be_bytes(bytes),
        })
    }

    /// Reads an `f32` in the given byte order.
    #[inline(always)]
    pub fn read_f32(&mut self, endian: Endian) -> Result<f32> {
        let bytes = self.read_array()?;
        Ok(match endian {
            Endian::Little => f32::from_le_bytes(bytes),
            Endian::Big => f32::from_be_bytes(bytes),
        })
    }

    /// Reads an `f64` in the given byte order.
    #[inline(always)]
    pub fn read_f64(&mut self, endian: Endian) -> Result<f64> {
        let bytes = self.read_array()?;
        Ok(match endian {
            Endian::Little => f64::from_le_bytes(bytes),
            Endian::Big => f64::from_be_bytes(bytes),
        })
    }

    /// Reads exactly `len` bytes and decodes them as a string, one
    /// character per byte. There is no length prefix; the caller supplies
    /// the length.
    pub fn read_str(&mut self, len: usize) -> Result<String> {
        Ok(ascii::from_bytes(self.read_bytes(len)?))
    }

    /// Reads a zero-terminated string.
    ///
    /// Scans forward from the current position until a `0x00` byte or the
    /// end of the backing slice. The terminator is consumed but not
    /// included in the result. If no terminator exists, everything up to
    /// the end is returned and the reader is left exhausted; this is not
    /// an error.
    pub fn read_strz(&mut self) -> String {
        ascii::from_bytes(self.take_until_nul())
    }

    /// Reads `len` raw string bytes as a borrowed byte string, without
    /// decoding or copying.
    #[cfg(feature = "bstr")]
    pub fn read_str_raw(&mut self, len: usize) -> Result<&'a bstr::BStr> {
        Ok(bstr::BStr::new(self.read_bytes(len)?))
    }

    /// Reads a zero-terminated string as a borrowed byte string, without
    /// decoding or copying. Terminator handling matches
    /// [`read_strz`](BufferReader::read_strz).
    #[cfg(feature = "bstr")]
    pub fn read_strz_raw(&mut self) -> &'a bstr::BStr {
        bstr::BStr::new(self.take_until_nul())
    }

    /// Consumes up to and including the next `0x00` byte, or through the
    /// end of the slice, and returns the bytes before the terminator.
    fn take_until_nul(&mut self) -> &'a [u8] {
        let rest = &self.data[self.pos..];
        match rest.iter().position(|&b| b == 0) {
            Some(n) => {
                self.pos += n + 1;
                &rest[..n]
            }
            None => {
                self.pos = self.data.len();
                rest
            }
        }
    }
}

/// Error type for `BufferReader`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ReaderError {
    /// A `read_*` method would have read past the end of the backing
    /// slice. The read position is left unchanged.
    OutOfBounds,
}

impl core::error::Error for ReaderError {}

impl core::fmt::Display for ReaderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("read past the end of the buffer"),
        }
    }
}
