use alloc::vec::Vec;

/// Byte order used to encode or decode a multi-byte value.
///
/// Single-byte kinds ignore the byte order. The default is [`Endian::Little`],
/// matching the default of every multi-byte operation in this crate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

/// The closed set of value kinds a buffer can hold.
///
/// Each numeric kind has a fixed serialized width (see
/// [`fixed_width`](DataKind::fixed_width)); the string kinds are
/// variable-width.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DataKind {
    /// Unsigned 8-bit integer, 1 byte.
    U8,
    /// Unsigned 16-bit integer, 2 bytes.
    U16,
    /// Unsigned 32-bit integer, 4 bytes.
    U32,
    /// Signed 8-bit integer, 1 byte.
    I8,
    /// Signed 16-bit integer, 2 bytes.
    I16,
    /// Signed 32-bit integer, 4 bytes.
    I32,
    /// IEEE-754 single-precision float, 4 bytes.
    F32,
    /// IEEE-754 double-precision float, 8 bytes.
    F64,
    /// String of 8-bit code points, no terminator.
    Str,
    /// String of 8-bit code points followed by one `0x00` terminator byte.
    StrZ,
}

impl DataKind {
    /// The serialized width in bytes of this kind, or `None` for the string
    /// kinds, whose width depends on the value.
    ///
    /// This table is the single source of truth for widths: both the
    /// writer's size bookkeeping and its encoder derive from it (via
    /// [`Value::encoded_len`]).
    pub const fn fixed_width(self) -> Option<usize> {
        match self {
            DataKind::U8 | DataKind::I8 => Some(1),
            DataKind::U16 | DataKind::I16 => Some(2),
            DataKind::U32 | DataKind::I32 | DataKind::F32 => Some(4),
            DataKind::F64 => Some(8),
            DataKind::Str | DataKind::StrZ => None,
        }
    }
}

/// A typed value, carrying both the kind tag and the payload.
///
/// String payloads hold bytes that are already 8-bit code points; use
/// [`crate::ascii::to_bytes`] to produce them from a `&str`, or the
/// validating `push_str`/`push_strz` methods on
/// [`BufferWriter`](crate::BufferWriter).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Unsigned 8-bit integer.
    U8(u8),
    /// Unsigned 16-bit integer.
    U16(u16),
    /// Unsigned 32-bit integer.
    U32(u32),
    /// Signed 8-bit integer.
    I8(i8),
    /// Signed 16-bit integer.
    I16(i16),
    /// Signed 32-bit integer.
    I32(i32),
    /// IEEE-754 single-precision float.
    F32(f32),
    /// IEEE-754 double-precision float.
    F64(f64),
    /// Unterminated string payload, one byte per code point.
    Str(Vec<u8>),
    /// Zero-terminated string payload; the terminator is added at encode
    /// time and must not be part of the payload.
    StrZ(Vec<u8>),
}

impl Value {
    /// The kind tag of this value.
    pub fn kind(&self) -> DataKind {
        match self {
            Value::U8(_) => DataKind::U8,
            Value::U16(_) => DataKind::U16,
            Value::U32(_) => DataKind::U32,
            Value::I8(_) => DataKind::I8,
            Value::I16(_) => DataKind::I16,
            Value::I32(_) => DataKind::I32,
            Value::F32(_) => DataKind::F32,
            Value::F64(_) => DataKind::F64,
            Value::Str(_) => DataKind::Str,
            Value::StrZ(_) => DataKind::StrZ,
        }
    }

    /// The number of bytes this value occupies when encoded.
    pub fn encoded_len(&self) -> usize {
        match self {
            Value::Str(bytes) => bytes.len(),
            Value::StrZ(bytes) => bytes.len() + 1,
            value => match value.kind().fixed_width() {
                Some(width) => width,
                // Every non-string kind has a fixed width.
                None => 0,
            },
        }
    }
}
