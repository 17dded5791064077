use super::{Converter, DecodeStep};
use crate::raw_bytes::RawBytes;

/// UTF-8 without a byte-order mark.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8;

/// Length of the sequence introduced by `lead`, or 1 for bytes that cannot
/// start one.
pub(crate) fn sequence_len(lead: u8) -> usize {
    match lead {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 1,
    }
}

/// Decodes the first UTF-8 scalar of `bytes`.
///
/// Returns `None` while `bytes` is a valid but incomplete prefix, and
/// `Some((None, n))` when the first `n` bytes are malformed.
pub(crate) fn decode_utf8(bytes: &[u8]) -> Option<(Option<char>, usize)> {
    let (ch, len) = bstr::decode_utf8(bytes);
    match ch {
        Some(_) => Some((ch, len)),
        None if bytes
            .first()
            .is_some_and(|&lead| len == bytes.len() && len < sequence_len(lead)) =>
        {
            None
        }
        None => Some((None, len.max(1))),
    }
}

impl Converter for Utf8 {
    fn decode_step(&mut self, bytes: &[u8]) -> DecodeStep {
        match decode_utf8(bytes) {
            None => DecodeStep::NeedMore,
            Some((ch, consumed)) => DecodeStep::Char {
                ch: ch.unwrap_or(char::REPLACEMENT_CHARACTER),
                consumed,
            },
        }
    }

    fn encode(&mut self, ch: char) -> RawBytes {
        let mut tmp = [0u8; 4];
        let mut raw = RawBytes::new();
        raw.extend_from_slice(ch.encode_utf8(&mut tmp).as_bytes());
        raw
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn feed(bytes: &[u8]) -> DecodeStep {
        let mut conv = Utf8;
        for end in 1..bytes.len() {
            assert_eq!(conv.decode_step(&bytes[..end]), DecodeStep::NeedMore);
        }
        conv.decode_step(bytes)
    }

    #[rstest]
    #[case("A")]
    #[case("é")]
    #[case("€")]
    #[case("😀")]
    fn decodes_one_byte_at_a_time(#[case] text: &str) {
        let expected = text.chars().next().unwrap();
        assert_eq!(
            feed(text.as_bytes()),
            DecodeStep::Char {
                ch: expected,
                consumed: text.len()
            }
        );
    }

    #[test]
    fn invalid_continuation_consumes_only_the_lead() {
        let mut conv = Utf8;
        assert_eq!(conv.decode_step(&[0xE2]), DecodeStep::NeedMore);
        assert_eq!(
            conv.decode_step(&[0xE2, b'A']),
            DecodeStep::Char {
                ch: char::REPLACEMENT_CHARACTER,
                consumed: 1
            }
        );
    }

    #[rstest]
    #[case(&[0x80])]
    #[case(&[0xC0])]
    #[case(&[0xFF])]
    fn stray_bytes_are_replaced(#[case] bytes: &[u8]) {
        let mut conv = Utf8;
        assert_eq!(
            conv.decode_step(bytes),
            DecodeStep::Char {
                ch: char::REPLACEMENT_CHARACTER,
                consumed: 1
            }
        );
    }

    #[test]
    fn cut_off_sequence_is_one_replacement() {
        let bytes = &"😀".as_bytes()[..3];
        assert_eq!(feed(bytes), DecodeStep::NeedMore);
        assert_eq!(
            Utf8.decode_end(bytes),
            DecodeStep::Char {
                ch: char::REPLACEMENT_CHARACTER,
                consumed: 3
            }
        );
    }

    #[test]
    fn encodes_utf8() {
        assert_eq!(Utf8.encode('€').as_slice(), "€".as_bytes());
        assert_eq!(Utf8.encode('😀').len(), 4);
    }
}
