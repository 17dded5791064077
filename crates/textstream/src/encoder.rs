//! Character encoding with surrogate-pair reassembly.
//!
//! [`CharEncoder`] writes one unit at a time. With 16-bit units a high
//! surrogate cannot be encoded alone, so it is held back until its low half
//! arrives and the pair is encoded as one character.
//!
//! An encoder dropped while holding a high surrogate loses that half
//! character; this is logged but not reported.
use tracing::warn;

use crate::{
    channel::ByteSink,
    convert::Converter,
    unit::{CodeUnit, Surrogate},
};

/// Encodes characters into a byte sink.
#[derive(Debug)]
pub struct CharEncoder<W, C, U = char> {
    sink: W,
    conv: C,
    pending_high: Option<U>,
}

impl<W: ByteSink, C: Converter, U: CodeUnit> CharEncoder<W, C, U> {
    /// Creates an encoder writing to `sink` through `conv`.
    pub fn new(sink: W, conv: C) -> Self {
        Self {
            sink,
            conv,
            pending_high: None,
        }
    }

    /// Writes one unit.
    ///
    /// A high surrogate is held until the next call. If that call brings the
    /// matching low surrogate the pair is written as one character; otherwise
    /// the held half is dropped. A low surrogate without a high half is
    /// written as U+FFFD.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if the write failed.
    pub fn put_char(&mut self, unit: U) -> Result<(), W::Error> {
        let pending = self.pending_high.take();
        let ch = match (pending, unit.surrogate()) {
            (Some(high), Surrogate::Low) => {
                U::combine(high, unit).unwrap_or(char::REPLACEMENT_CHARACTER)
            }
            (pending, Surrogate::High) => {
                if let Some(high) = pending {
                    warn!(?high, "dropping unpaired high surrogate");
                }
                self.pending_high = Some(unit);
                return Ok(());
            }
            (pending, _) => {
                if let Some(high) = pending {
                    warn!(?high, "dropping unpaired high surrogate");
                }
                unit.to_char().unwrap_or(char::REPLACEMENT_CHARACTER)
            }
        };
        self.put(ch)
    }

    /// Writes a whole character, bypassing surrogate handling.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if the write failed.
    pub fn put(&mut self, ch: char) -> Result<(), W::Error> {
        let raw = self.conv.encode(ch);
        self.sink.write_bytes(&raw)
    }

    /// Flushes the sink. A held high surrogate stays held.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if the flush failed.
    pub fn flush(&mut self) -> Result<(), W::Error> {
        self.sink.flush()
    }

    /// Whether a high surrogate is waiting for its low half.
    pub fn has_pending_surrogate(&self) -> bool {
        self.pending_high.is_some()
    }

    /// Borrows the byte sink.
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Mutably borrows the byte sink.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }
}

impl<W, C, U> Drop for CharEncoder<W, C, U> {
    fn drop(&mut self) {
        if self.pending_high.is_some() {
            warn!("encoder dropped with an unpaired high surrogate");
        }
    }
}
