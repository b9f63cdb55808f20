//! Builds and parses compact byte buffers holding sequences of typed values.
//!
//! The write side ([`BufferWriter`]) queues typed values without encoding
//! them immediately, tracks the total encoded size as values are added, and
//! serializes everything into a single exactly-sized byte buffer on
//! [`finalize`](BufferWriter::finalize). The read side ([`BufferReader`])
//! wraps an existing byte slice and decodes values sequentially, advancing a
//! read position by the width of each value.
//!
//! Multi-byte values carry their byte order per call (see [`Endian`]);
//! strings are sequences of 8-bit code points (0–255), stored either as raw
//! bytes ([`DataKind::Str`]) or with a single `0x00` terminator
//! ([`DataKind::StrZ`]).
//!
//! ```
//! use typed_buffer::{BufferReader, BufferWriter, Endian};
//!
//! let mut w = BufferWriter::new();
//! w.push_u8(7);
//! w.push_f32(0.5, Endian::Little);
//! w.push_strz("hi").unwrap();
//! let bytes = w.finalize();
//!
//! let mut r = BufferReader::new(&bytes);
//! assert_eq!(r.read_u8(), Ok(7));
//! assert_eq!(r.read_f32(Endian::Little), Ok(0.5));
//! assert_eq!(r.read_strz(), "hi");
//! assert_eq!(r.remaining(), 0);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

extern crate alloc;

pub mod ascii;
mod kind;
mod reader;
mod writer;


pub use kind::{DataKind, Endian, Value};
pub use reader::{BufferReader, ReaderError};
pub use writer::BufferWriter;
