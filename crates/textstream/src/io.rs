//! Channel adapters for `std::io` readers and writers.
use alloc::vec::Vec;
use std::io::{self, ErrorKind, Read, Write};

use crate::channel::{ByteSink, ByteSource};

/// A [`ByteSource`] over any [`Read`].
///
/// Bytes are read one at a time, so wrap unbuffered readers in a
/// [`std::io::BufReader`].
#[derive(Debug)]
pub struct IoSource<R> {
    inner: R,
    pushed_back: Vec<u8>,
}

impl<R: Read> IoSource<R> {
    /// Wraps `inner`.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pushed_back: Vec::new(),
        }
    }

    /// Returns the wrapped reader. Pushed-back bytes are lost.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSource for IoSource<R> {
    type Error = io::Error;

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.pushed_back.pop() {
            return Ok(Some(byte));
        }
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }

    fn unget_byte(&mut self, byte: u8) {
        self.pushed_back.push(byte);
    }
}

/// A [`ByteSink`] over any [`Write`].
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
}

impl<W: Write> IoSink<W> {
    /// Wraps `inner`.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Borrows the wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ByteSink for IoSink<W> {
    type Error = io::Error;

    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.inner.write_all(bytes)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    struct Flaky {
        interrupted: bool,
    }

    impl Read for Flaky {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(ErrorKind::Interrupted.into());
            }
            Err(ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn retries_interrupted_reads() {
        let mut src = IoSource::new(Flaky { interrupted: false });
        let err = src.read_byte().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BrokenPipe);
    }

    #[test]
    fn pushback_precedes_reader() {
        let mut src = IoSource::new(Cursor::new(b"b".to_vec()));
        src.unget_byte(b'a');
        assert_eq!(src.read_byte().unwrap(), Some(b'a'));
        assert_eq!(src.read_byte().unwrap(), Some(b'b'));
        assert_eq!(src.read_byte().unwrap(), None);
    }

    #[test]
    fn sink_writes_through() {
        let mut sink = IoSink::new(Vec::new());
        sink.write_bytes(b"hi").unwrap();
        ByteSink::flush(&mut sink).unwrap();
        assert_eq!(sink.into_inner(), b"hi");
    }
}
