//! Byte channels consumed by the readers and writers.
//!
//! A [`ByteSource`] yields bytes one at a time and accepts pushed-back bytes
//! in LIFO order; a [`ByteSink`] accepts runs of bytes. Both report failures
//! through their own error type. Buffering and blocking behaviour belong to
//! the channel.
use alloc::vec::Vec;
use core::convert::Infallible;

/// Input side of a byte channel.
pub trait ByteSource {
    /// Error reported by a failed read.
    type Error: core::fmt::Debug;

    /// Reads one byte. `Ok(None)` signals end of data.
    ///
    /// # Errors
    ///
    /// Returns the channel's error if the read failed.
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error>;

    /// Pushes `byte` back so that the next [`read_byte`](Self::read_byte)
    /// returns it. Bytes pushed back are returned in reverse order of pushing.
    fn unget_byte(&mut self, byte: u8);
}

/// Output side of a byte channel.
pub trait ByteSink {
    /// Error reported by a failed write or flush.
    type Error: core::fmt::Debug;

    /// Writes all of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns the channel's error if the write failed.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Flushes buffered output.
    ///
    /// # Errors
    ///
    /// Returns the channel's error if the flush failed.
    fn flush(&mut self) -> Result<(), Self::Error>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    type Error = S::Error;

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        (**self).read_byte()
    }

    fn unget_byte(&mut self, byte: u8) {
        (**self).unget_byte(byte);
    }
}

impl<W: ByteSink + ?Sized> ByteSink for &mut W {
    type Error = W::Error;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).write_bytes(bytes)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        (**self).flush()
    }
}

impl ByteSink for Vec<u8> {
    type Error = Infallible;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Infallible> {
        self.extend_from_slice(bytes);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}

/// An in-memory byte source over a borrowed slice.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    bytes: &'a [u8],
    pos: usize,
    pushed_back: Vec<u8>,
}

impl<'a> SliceSource<'a> {
    /// Creates a source that yields `bytes` and then reports end of data.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: 0,
            pushed_back: Vec::new(),
        }
    }

    /// Whether every byte, including pushed-back ones, has been read.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.pushed_back.is_empty() && self.pos >= self.bytes.len()
    }

    /// The bytes not read yet, excluding pushed-back ones.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }
}

impl ByteSource for SliceSource<'_> {
    type Error = Infallible;

    fn read_byte(&mut self) -> Result<Option<u8>, Infallible> {
        if let Some(byte) = self.pushed_back.pop() {
            return Ok(Some(byte));
        }
        let byte = self.bytes.get(self.pos).copied();
        if byte.is_some() {
            self.pos += 1;
        }
        Ok(byte)
    }

    fn unget_byte(&mut self, byte: u8) {
        self.pushed_back.push(byte);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_source_reads_then_ends() {
        let mut src = SliceSource::new(b"ab");
        assert_eq!(src.read_byte(), Ok(Some(b'a')));
        assert_eq!(src.read_byte(), Ok(Some(b'b')));
        assert_eq!(src.read_byte(), Ok(None));
        assert!(src.is_exhausted());
    }

    #[test]
    fn pushed_back_bytes_come_out_lifo() {
        let mut src = SliceSource::new(b"xyz");
        let _ = src.read_byte();
        let _ = src.read_byte();
        src.unget_byte(b'y');
        src.unget_byte(b'x');
        assert_eq!(src.remaining(), b"z");
        assert_eq!(src.read_byte(), Ok(Some(b'x')));
        assert_eq!(src.read_byte(), Ok(Some(b'y')));
        assert_eq!(src.read_byte(), Ok(Some(b'z')));
    }

    #[test]
    fn vec_sink_appends() {
        let mut sink = Vec::new();
        sink.write_bytes(b"ab").unwrap();
        sink.write_bytes(b"c").unwrap();
        ByteSink::flush(&mut sink).unwrap();
        assert_eq!(sink, b"abc");
    }
}
