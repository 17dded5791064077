//! Incremental character decoding with single-character unget.
//!
//! [`CharDecoder`] pulls raw bytes from a [`ByteSource`] one at a time and
//! offers them to a [`Converter`] until a character comes out. The exact bytes
//! behind the character most recently returned are kept in a [`RawBytes`] so
//! that [`CharDecoder::unget_last`] can push them back and the next call
//! decodes the same character again.
//!
//! With 16-bit units a character outside the basic multilingual plane is
//! returned as two calls: the high surrogate first, then the low surrogate,
//! which is cached and handed out without reading further bytes.
//!
//! Invariants
//! - At most one low surrogate is pending at any time.
//! - `last_raw` always holds the bytes of the character last returned.
//! - End of data and read errors look the same from here; the channel keeps
//!   whatever detail it has.
use tracing::debug;

use crate::{
    channel::ByteSource,
    convert::{Converter, DecodeStep},
    raw_bytes::RawBytes,
    unit::CodeUnit,
};

/// What [`CharDecoder::unget_last`] would undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookback<U> {
    /// Nothing to undo: no character yet, end of input, or already ungot.
    Empty,
    /// The last unit was decoded from `last_raw`.
    Decoded,
    /// The last unit was the cached low surrogate.
    Low(U),
}

/// Decodes characters from a byte source.
#[derive(Debug)]
pub struct CharDecoder<S, C, U = char> {
    source: S,
    conv: C,
    last_raw: RawBytes,
    lookback: Lookback<U>,
    pending_low: Option<U>,
}

impl<S: ByteSource, C: Converter, U: CodeUnit> CharDecoder<S, C, U> {
    /// Creates a decoder reading from `source` through `conv`.
    pub fn new(source: S, conv: C) -> Self {
        Self {
            source,
            conv,
            last_raw: RawBytes::new(),
            lookback: Lookback::Empty,
            pending_low: None,
        }
    }

    /// Returns the next unit, or `None` at end of input.
    ///
    /// A byte sequence cut short by end of data, or by a failed read, is
    /// finished by [`Converter::decode_end`].
    pub fn next_char(&mut self) -> Option<U> {
        if let Some(low) = self.pending_low.take() {
            self.lookback = Lookback::Low(low);
            return Some(low);
        }

        let mut raw = RawBytes::new();
        loop {
            let byte = match self.source.read_byte() {
                Ok(byte) => byte,
                Err(error) => {
                    debug!(?error, "read failed, treating as end of input");
                    None
                }
            };
            let (step, finished) = match byte {
                Some(byte) => {
                    raw.push(byte);
                    match self.conv.decode_step(&raw) {
                        DecodeStep::NeedMore if raw.is_full() => {
                            debug!(bytes = ?raw, "no character within the byte limit");
                            (self.conv.decode_end(&raw), true)
                        }
                        step => (step, false),
                    }
                }
                None if raw.is_empty() => return self.end_of_input(),
                None => {
                    debug!(bytes = ?raw, "end of data inside a character");
                    (self.conv.decode_end(&raw), true)
                }
            };

            match step {
                DecodeStep::NeedMore if finished => return self.end_of_input(),
                DecodeStep::NeedMore => {}
                DecodeStep::Skip(n) => {
                    self.unget_surplus(&raw, n.clamp(1, raw.len()));
                    raw.clear();
                }
                DecodeStep::Char { ch, consumed } => {
                    let consumed = consumed.clamp(1, raw.len());
                    self.unget_surplus(&raw, consumed);
                    raw.truncate(consumed);
                    self.last_raw = raw;
                    self.lookback = Lookback::Decoded;

                    let (first, second) = U::split(ch);
                    self.pending_low = second;
                    return Some(first);
                }
            }
        }
    }

    /// Undoes the last [`next_char`](Self::next_char) so the next call
    /// returns the same unit again.
    ///
    /// Only one unit of lookback exists: a second call without an intervening
    /// successful read does nothing.
    pub fn unget_last(&mut self) {
        match core::mem::replace(&mut self.lookback, Lookback::Empty) {
            Lookback::Empty => {}
            Lookback::Decoded => {
                self.pending_low = None;
                for &byte in self.last_raw.iter().rev() {
                    self.source.unget_byte(byte);
                }
                self.last_raw.clear();
            }
            Lookback::Low(low) => self.pending_low = Some(low),
        }
    }

    /// Returns the first unit that is neither a line ending nor in
    /// `separators`, or `None` at end of input.
    pub fn next_non_separator(&mut self, separators: &[U]) -> Option<U> {
        loop {
            let c = self.next_char()?;
            if !is_eol_unit(c) && !separators.contains(&c) {
                return Some(c);
            }
        }
    }

    /// Reports whether `c`, the unit just read, starts a line ending, and
    /// consumes the `\n` of a `\r\n` pair.
    ///
    /// `\n`, `\r` and `\r\n` all count as one line ending.
    pub fn eat_end_of_line(&mut self, c: U) -> bool {
        if c == U::from_ascii(b'\n') {
            return true;
        }
        if c != U::from_ascii(b'\r') {
            return false;
        }
        if let Some(next) = self.next_char() {
            if next != U::from_ascii(b'\n') {
                self.unget_last();
            }
        }
        true
    }

    /// The raw bytes behind the unit last returned.
    pub fn last_raw_bytes(&self) -> &[u8] {
        &self.last_raw
    }

    /// Borrows the byte source.
    pub fn get_ref(&self) -> &S {
        &self.source
    }

    /// Mutably borrows the byte source.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Returns the byte source and converter. A cached low surrogate is lost.
    pub fn into_parts(self) -> (S, C) {
        (self.source, self.conv)
    }

    fn end_of_input(&mut self) -> Option<U> {
        self.lookback = Lookback::Empty;
        self.last_raw.clear();
        None
    }

    fn unget_surplus(&mut self, raw: &RawBytes, used: usize) {
        for &byte in raw[used..].iter().rev() {
            self.source.unget_byte(byte);
        }
    }
}

fn is_eol_unit<U: CodeUnit>(c: U) -> bool {
    c == U::from_ascii(b'\n') || c == U::from_ascii(b'\r')
}
