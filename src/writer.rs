use alloc::string::String;
use alloc::vec::Vec;

use crate::ascii::{self, EncodeError};
use crate::kind::{Endian, Value};

/// A queued value together with the byte order it will be encoded with.
#[derive(Clone, Debug)]
struct PendingItem {
    value: Value,
    endian: Endian,
}

/// Accumulates typed values and serializes them into one byte buffer.
///
/// Values are not encoded as they are pushed; the writer only queues them
/// and keeps a running total of the encoded size. [`finalize`] then
/// allocates a buffer of exactly that size and encodes every queued value
/// in insertion order.
///
/// `finalize` does not consume or clear the queue: it can be called any
/// number of times and always produces byte-identical output for the same
/// sequence of pushes.
///
/// [`finalize`]: BufferWriter::finalize
#[derive(Clone, Debug, Default)]
pub struct BufferWriter {
    items: Vec<PendingItem>,
    total_len: usize,
}

impl BufferWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty writer with queue capacity for `items` values.
    pub fn with_capacity(items: usize) -> Self {
        Self {
            items: Vec::with_capacity(items),
            total_len: 0,
        }
    }

    /// Queues a value with the given byte order.
    pub fn push(&mut self, value: Value, endian: Endian) {
        self.total_len += value.encoded_len();
        self.items.push(PendingItem { value, endian });
    }

    /// Queues a `u8`. Byte order does not apply to single-byte kinds.
    pub fn push_u8(&mut self, value: u8) {
        self.push(Value::U8(value), Endian::Little);
    }

    /// Queues an `i8`. Byte order does not apply to single-byte kinds.
    pub fn push_i8(&mut self, value: i8) {
        self.push(Value::I8(value), Endian::Little);
    }

    /// Queues a `u16` with the given byte order.
    pub fn push_u16(&mut self, value: u16, endian: Endian) {
        self.push(Value::U16(value), endian);
    }

    /// Queues a `u32` with the given byte order.
    pub fn push_u32(&mut self, value: u32, endian: Endian) {
        self.push(Value::U32(value), endian);
    }

    /// Queues an `i16` with the given byte order.
    pub fn push_i16(&mut self, value: i16, endian: Endian) {
        self.push(Value::I16(value), endian);
    }

    /// Queues an `i32` with the given byte order.
    pub fn push_i32(&mut self, value: i32, endian: Endian) {
        self.push(Value::I32(value), endian);
    }

    /// Queues an `f32` with the given byte order.
    pub fn push_f32(&mut self, value: f32, endian: Endian) {
        self.push(Value::F32(value), endian);
    }

    /// Queues an `f64` with the given byte order.
    pub fn push_f64(&mut self, value: f64, endian: Endian) {
        self.push(Value::F64(value), endian);
    }

    /// Queues an unterminated string, one byte per character.
    ///
    /// Fails if any character's code point does not fit in 8 bits; nothing
    /// is queued in that case.
    pub fn push_str(&mut self, s: &str) -> Result<(), EncodeError> {
        let bytes = ascii::to_bytes(s)?;
        self.push(Value::Str(bytes), Endian::Little);
        Ok(())
    }

    /// Queues a zero-terminated string, one byte per character plus a
    /// single `0x00` terminator.
    ///
    /// Fails if any character's code point does not fit in 8 bits; nothing
    /// is queued in that case.
    pub fn push_strz(&mut self, s: &str) -> Result<(), EncodeError> {
        let bytes = ascii::to_bytes(s)?;
        self.push(Value::StrZ(bytes), Endian::Little);
        Ok(())
    }

    /// Queues an unterminated string from already-encoded code points.
    pub fn push_str_bytes(&mut self, bytes: &[u8]) {
        self.push(Value::Str(bytes.to_vec()), Endian::Little);
    }

    /// Queues a zero-terminated string from already-encoded code points.
    /// The terminator is added at encode time.
    pub fn push_strz_bytes(&mut self, bytes: &[u8]) {
        self.push(Value::StrZ(bytes.to_vec()), Endian::Little);
    }

    /// The total encoded size in bytes of everything queued so far.
    ///
    /// Always equals the length of the buffer [`finalize`] would return.
    ///
    /// [`finalize`]: BufferWriter::finalize
    pub fn total_len(&self) -> usize {
        self.total_len
    }

    /// Returns `true` if nothing has been queued.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Encodes every queued value, in insertion order, into a buffer of
    /// exactly [`total_len`](BufferWriter::total_len) bytes.
    pub fn finalize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.total_len);
        for item in &self.items {
            match &item.value {
                Value::U8(v) => out.push(*v),
                Value::I8(v) => out.push(*v as u8),
                Value::U16(v) => match item.endian {
                    Endian::Little => out.extend_from_slice(&v.to_le_bytes()),
                    Endian::Big => out.extend_from_slice(&v.to_be_bytes()),
                },
                Value::U32(v) => match item.endian {
                    Endian::Little => out.extend_from_slice(&v.to_le_bytes()),
                    Endian::Big => out.extend_from_slice(&v.to_be_bytes()),
                },
                Value::I16(v) => match item.endian {
                    Endian::Little => out.extend_from_slice(&v.to_le_bytes()),
                    Endian::Big => out.extend_from_slice(&v.to_be_bytes()),
                },
                Value::I32(v) => match item.endian {
                    Endian::Little => out.extend_from_slice(&v.to_le_bytes()),
                    Endian::Big => out.extend_from_slice(&v.to_be_bytes()),
                },
                Value::F32(v) => match item.endian {
                    Endian::Little => out.extend_from_slice(&v.to_le_bytes()),
                    Endian::Big => out.extend_from_slice(&v.to_be_bytes()),
                },
                Value::F64(v) => match item.endian {
                    Endian::Little => out.extend_from_slice(&v.to_le_bytes()),
                    Endian::Big => out.extend_from_slice(&v.to_be_bytes()),
                },
                Value::Str(bytes) => out.extend_from_slice(bytes),
                Value::StrZ(bytes) => {
                    out.extend_from_slice(bytes);
                    out.push(0);
                }
            }
        }
        debug_assert_eq!(out.len(), self.total_len);
        out
    }

    /// Encodes the queue and reinterprets the bytes as a string, one
    /// character per byte.
    pub fn finalize_text(&self) -> String {
        ascii::from_bytes(&self.finalize())
    }
}
