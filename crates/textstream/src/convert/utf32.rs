use super::{Converter, DecodeStep, Endian};
use crate::raw_bytes::RawBytes;

/// UTF-32 in the given byte order, without a byte-order mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Utf32 {
    /// Byte order of each 32-bit unit.
    pub endian: Endian,
}

impl Utf32 {
    /// UTF-32LE.
    #[must_use]
    pub const fn le() -> Self {
        Self {
            endian: Endian::Little,
        }
    }

    /// UTF-32BE.
    #[must_use]
    pub const fn be() -> Self {
        Self {
            endian: Endian::Big,
        }
    }
}

impl Converter for Utf32 {
    fn decode_step(&mut self, bytes: &[u8]) -> DecodeStep {
        let Some(&quad) = bytes.first_chunk::<4>() else {
            return DecodeStep::NeedMore;
        };
        let value = match self.endian {
            Endian::Little => u32::from_le_bytes(quad),
            Endian::Big => u32::from_be_bytes(quad),
        };
        DecodeStep::Char {
            ch: char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER),
            consumed: 4,
        }
    }

    fn encode(&mut self, ch: char) -> RawBytes {
        let value = u32::from(ch);
        let bytes = match self.endian {
            Endian::Little => value.to_le_bytes(),
            Endian::Big => value.to_be_bytes(),
        };
        let mut raw = RawBytes::new();
        raw.extend_from_slice(&bytes);
        raw
    }
}
