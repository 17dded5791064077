use super::{Converter, DecodeStep, Endian};
use crate::raw_bytes::RawBytes;

/// UTF-16 in the given byte order, without a byte-order mark.
///
/// Unpaired surrogates decode to U+FFFD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Utf16 {
    /// Byte order of each 16-bit unit.
    pub endian: Endian,
}

impl Utf16 {
    /// UTF-16LE.
    #[must_use]
    pub const fn le() -> Self {
        Self {
            endian: Endian::Little,
        }
    }

    /// UTF-16BE.
    #[must_use]
    pub const fn be() -> Self {
        Self {
            endian: Endian::Big,
        }
    }

    fn unit(self, bytes: &[u8]) -> u16 {
        let pair = [bytes[0], bytes[1]];
        match self.endian {
            Endian::Little => u16::from_le_bytes(pair),
            Endian::Big => u16::from_be_bytes(pair),
        }
    }
}

impl Converter for Utf16 {
    fn decode_step(&mut self, bytes: &[u8]) -> DecodeStep {
        if bytes.len() < 2 {
            return DecodeStep::NeedMore;
        }
        let first = self.unit(bytes);
        let replacement = DecodeStep::Char {
            ch: char::REPLACEMENT_CHARACTER,
            consumed: 2,
        };
        match first {
            0xD800..=0xDBFF => {
                if bytes.len() < 4 {
                    return DecodeStep::NeedMore;
                }
                let second = self.unit(&bytes[2..]);
                match char::decode_utf16([first, second]).next() {
                    Some(Ok(ch)) => DecodeStep::Char { ch, consumed: 4 },
                    _ => replacement,
                }
            }
            0xDC00..=0xDFFF => replacement,
            _ => DecodeStep::Char {
                ch: char::from_u32(u32::from(first)).unwrap_or(char::REPLACEMENT_CHARACTER),
                consumed: 2,
            },
        }
    }

    fn decode_end(&mut self, bytes: &[u8]) -> DecodeStep {
        // A lone high surrogate, or the odd byte of a cut-off unit.
        DecodeStep::Char {
            ch: char::REPLACEMENT_CHARACTER,
            consumed: bytes.len().min(2),
        }
    }

    fn encode(&mut self, ch: char) -> RawBytes {
        let mut units = [0u16; 2];
        let mut raw = RawBytes::new();
        for unit in ch.encode_utf16(&mut units) {
            let bytes = match self.endian {
                Endian::Little => unit.to_le_bytes(),
                Endian::Big => unit.to_be_bytes(),
            };
            raw.extend_from_slice(&bytes);
        }
        raw
    }
}
