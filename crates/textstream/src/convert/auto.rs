use super::{Converter, DecodeStep, Latin1, Utf8, Utf16, Utf32, utf8::decode_utf8};
use crate::raw_bytes::RawBytes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Detected {
    Utf8,
    /// UTF-8 turned out to be malformed; the rest of the stream is Latin-1.
    Latin1,
    Utf16(Utf16),
    Utf32(Utf32),
}

// Longer marks first: `FF FE 00 00` must win over `FF FE`.
const BOMS: [(&[u8], Detected); 5] = [
    (&[0x00, 0x00, 0xFE, 0xFF], Detected::Utf32(Utf32::be())),
    (&[0xFF, 0xFE, 0x00, 0x00], Detected::Utf32(Utf32::le())),
    (&[0xFE, 0xFF], Detected::Utf16(Utf16::be())),
    (&[0xFF, 0xFE], Detected::Utf16(Utf16::le())),
    (&[0xEF, 0xBB, 0xBF], Detected::Utf8),
];

/// Detects the encoding of a stream from its byte-order mark.
///
/// Detection runs once, on the first bytes decoded. A UTF-32, UTF-16 or UTF-8
/// byte-order mark selects that encoding and is skipped. Without a mark the
/// stream is read as UTF-8 until the first malformed sequence, after which
/// the converter permanently switches to Latin-1.
///
/// Encoding uses the detected encoding, or UTF-8 if nothing has been decoded.
#[derive(Debug, Clone, Default)]
pub struct AutoConverter {
    detected: Option<Detected>,
}

impl AutoConverter {
    /// Creates a converter that has not detected anything yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn detect(&mut self, bytes: &[u8]) -> Option<DecodeStep> {
        if BOMS
            .iter()
            .any(|(bom, _)| bytes.len() < bom.len() && bom.starts_with(bytes))
        {
            return Some(DecodeStep::NeedMore);
        }
        if let Some((bom, detected)) = BOMS.iter().find(|(bom, _)| bytes.starts_with(bom)) {
            tracing::trace!(?detected, "byte-order mark detected");
            self.detected = Some(*detected);
            return Some(DecodeStep::Skip(bom.len()));
        }
        tracing::trace!("no byte-order mark, assuming UTF-8");
        self.detected = Some(Detected::Utf8);
        None
    }
}

impl Converter for AutoConverter {
    fn decode_step(&mut self, bytes: &[u8]) -> DecodeStep {
        let detected = match self.detected {
            Some(detected) => detected,
            None => {
                if let Some(step) = self.detect(bytes) {
                    return step;
                }
                Detected::Utf8
            }
        };
        match detected {
            Detected::Utf8 => match decode_utf8(bytes) {
                None => DecodeStep::NeedMore,
                Some((Some(ch), consumed)) => DecodeStep::Char { ch, consumed },
                Some((None, _)) => {
                    tracing::debug!("malformed UTF-8, falling back to Latin-1");
                    self.detected = Some(Detected::Latin1);
                    Latin1.decode_step(bytes)
                }
            },
            Detected::Latin1 => Latin1.decode_step(bytes),
            Detected::Utf16(mut conv) => conv.decode_step(bytes),
            Detected::Utf32(mut conv) => conv.decode_step(bytes),
        }
    }

    fn decode_end(&mut self, bytes: &[u8]) -> DecodeStep {
        match self.detected {
            None => {
                if let Some((bom, detected)) = BOMS.iter().find(|(bom, _)| bytes == *bom) {
                    tracing::trace!(?detected, "byte-order mark detected");
                    self.detected = Some(*detected);
                    return DecodeStep::Skip(bom.len());
                }
                tracing::debug!("no byte-order mark in a short stream, falling back to Latin-1");
                self.detected = Some(Detected::Latin1);
                Latin1.decode_step(bytes)
            }
            Some(Detected::Utf8) => {
                tracing::debug!("UTF-8 cut short by end of data, falling back to Latin-1");
                self.detected = Some(Detected::Latin1);
                Latin1.decode_step(bytes)
            }
            Some(Detected::Latin1) => Latin1.decode_step(bytes),
            Some(Detected::Utf16(mut conv)) => conv.decode_end(bytes),
            Some(Detected::Utf32(mut conv)) => conv.decode_end(bytes),
        }
    }

    fn encode(&mut self, ch: char) -> RawBytes {
        match self.detected {
            None | Some(Detected::Utf8) => Utf8.encode(ch),
            Some(Detected::Latin1) => Latin1.encode(ch),
            Some(Detected::Utf16(mut conv)) => conv.encode(ch),
            Some(Detected::Utf32(mut conv)) => conv.encode(ch),
        }
    }
}
