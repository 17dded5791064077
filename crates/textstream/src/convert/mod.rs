//! Byte ↔ character conversion.
//!
//! A [`Converter`] turns a run of raw bytes into one character and one
//! character back into raw bytes. The decoder in this crate feeds it the bytes
//! of the character under construction one at a time, so `decode_step` must
//! answer "not enough bytes yet" until it has seen a complete sequence.
//!
//! Malformed input never fails: converters decode it to
//! [`char::REPLACEMENT_CHARACTER`] and encode unmappable characters to a
//! substitute of their choosing.
use alloc::boxed::Box;

use crate::raw_bytes::RawBytes;

mod auto;
mod latin1;
mod utf16;
mod utf32;
mod utf8;

pub use auto::AutoConverter;
pub use latin1::Latin1;
pub use utf8::Utf8;
pub use utf16::Utf16;
pub use utf32::Utf32;

/// Outcome of feeding the bytes read so far to [`Converter::decode_step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStep {
    /// The bytes are a valid prefix; read another byte and try again.
    NeedMore,
    /// The first `consumed` bytes decode to `ch`. Any bytes past `consumed`
    /// were not used and go back to the channel.
    Char {
        /// The decoded character.
        ch: char,
        /// How many of the offered bytes produced `ch`.
        consumed: usize,
    },
    /// The first `n` bytes were consumed without producing a character (a
    /// byte-order mark or a shift sequence).
    Skip(usize),
}

/// Byte order of a multi-byte code unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endian {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

/// Converts between raw bytes and characters for one stream.
///
/// Implementations must be deterministic. Encodings that carry shift state
/// keep it in the converter instance, which is private to a single stream.
pub trait Converter {
    /// Tries to decode one character from the start of `bytes`.
    ///
    /// `bytes` is never empty.
    fn decode_step(&mut self, bytes: &[u8]) -> DecodeStep;

    /// Finishes `bytes`, a sequence [`decode_step`](Self::decode_step)
    /// answered [`DecodeStep::NeedMore`] for, when no more bytes will come.
    ///
    /// The default decodes all of `bytes` to U+FFFD. `bytes` is never empty.
    fn decode_end(&mut self, bytes: &[u8]) -> DecodeStep {
        DecodeStep::Char {
            ch: char::REPLACEMENT_CHARACTER,
            consumed: bytes.len(),
        }
    }

    /// Encodes one character.
    fn encode(&mut self, ch: char) -> RawBytes;
}

impl<C: Converter + ?Sized> Converter for &mut C {
    fn decode_step(&mut self, bytes: &[u8]) -> DecodeStep {
        (**self).decode_step(bytes)
    }

    fn decode_end(&mut self, bytes: &[u8]) -> DecodeStep {
        (**self).decode_end(bytes)
    }

    fn encode(&mut self, ch: char) -> RawBytes {
        (**self).encode(ch)
    }
}

impl<C: Converter + ?Sized> Converter for Box<C> {
    fn decode_step(&mut self, bytes: &[u8]) -> DecodeStep {
        (**self).decode_step(bytes)
    }

    fn decode_end(&mut self, bytes: &[u8]) -> DecodeStep {
        (**self).decode_end(bytes)
    }

    fn encode(&mut self, ch: char) -> RawBytes {
        (**self).encode(ch)
    }
}
