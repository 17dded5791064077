use super::{Converter, DecodeStep};
use crate::raw_bytes::RawBytes;

/// ISO-8859-1: every byte is the code point of the same value.
///
/// Characters above U+00FF cannot be represented and are written as `?`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Latin1;

impl Converter for Latin1 {
    fn decode_step(&mut self, bytes: &[u8]) -> DecodeStep {
        DecodeStep::Char {
            ch: char::from(bytes[0]),
            consumed: 1,
        }
    }

    fn encode(&mut self, ch: char) -> RawBytes {
        let byte = u8::try_from(ch).unwrap_or(b'?');
        let mut raw = RawBytes::new();
        raw.push(byte);
        raw
    }
}
