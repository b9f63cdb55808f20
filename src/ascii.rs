//! Conversions between strings and 8-bit code points.
//!
//! The buffer format stores string characters as single bytes holding the
//! character's code point (0–255). These helpers are pure functions; there
//! is no lookup table or shared state.

use alloc::string::String;
use alloc::vec::Vec;

/// Converts a character to its 8-bit code point, or `None` if the code
/// point is above 255.
pub fn char_to_byte(c: char) -> Option<u8> {
    u8::try_from(u32::from(c)).ok()
}

/// Converts an 8-bit code point back to its character.
pub fn byte_to_char(b: u8) -> char {
    char::from(b)
}

/// Encodes a string as one byte per character.
///
/// Fails with [`EncodeError`] on the first character whose code point does
/// not fit in 8 bits.
pub fn to_bytes(s: &str) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::with_capacity(s.len());
    for (index, ch) in s.chars().enumerate() {
        match char_to_byte(ch) {
            Some(b) => out.push(b),
            None => return Err(EncodeError { ch, index }),
        }
    }
    Ok(out)
}

/// Decodes bytes as one character per byte. Total: every byte sequence
/// decodes to a string of the same length.
pub fn from_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| byte_to_char(b)).collect()
}

/// Error returned when a string contains a character whose code point does
/// not fit in 8 bits.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct EncodeError {
    /// The offending character.
    pub ch: char,
    /// Character index of `ch` within the input string.
    pub index: usize,
}

impl core::error::Error for EncodeError {}

impl core::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "character {:?} (U+{:04X}) at index {} is not an 8-bit code point",
            self.ch, self.ch as u32, self.index
        )
    }
}
