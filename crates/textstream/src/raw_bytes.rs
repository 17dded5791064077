//! Small inline byte buffer for the raw bytes of a single character.
//!
//! Both directions of a text stream move one character at a time, and no
//! supported encoding needs more than [`MAX_CHAR_BYTES`] bytes for one
//! character (a byte-order mark plus a 4-byte unit is the worst case). Keeping
//! those bytes inline avoids an allocation on every character.
use core::{fmt, ops::Deref};

/// Upper bound on the number of raw bytes that make up one character.
pub const MAX_CHAR_BYTES: usize = 10;

/// The raw bytes of one character: an inline array with an explicit length.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct RawBytes {
    buf: [u8; MAX_CHAR_BYTES],
    len: u8,
}

impl RawBytes {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: [0; MAX_CHAR_BYTES],
            len: 0,
        }
    }

    /// Creates a buffer holding a copy of `bytes`.
    ///
    /// Returns `None` if `bytes` is longer than [`MAX_CHAR_BYTES`].
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let mut raw = Self::new();
        raw.extend_from_slice(bytes).then_some(raw)
    }

    /// Appends one byte. Returns `false` (leaving the buffer untouched) when
    /// the buffer is full.
    pub fn push(&mut self, byte: u8) -> bool {
        let len = self.len as usize;
        if len == MAX_CHAR_BYTES {
            return false;
        }
        self.buf[len] = byte;
        self.len += 1;
        true
    }

    /// Appends all of `bytes`, or nothing if they do not fit.
    pub fn extend_from_slice(&mut self, bytes: &[u8]) -> bool {
        let len = self.len as usize;
        let Some(end) = len.checked_add(bytes.len()).filter(|&e| e <= MAX_CHAR_BYTES) else {
            return false;
        };
        self.buf[len..end].copy_from_slice(bytes);
        #[allow(clippy::cast_possible_truncation)]
        {
            self.len = end as u8;
        }
        true
    }

    /// Shortens the buffer to `len` bytes. No-op if it is already shorter.
    pub fn truncate(&mut self, len: usize) {
        if len < self.len as usize {
            #[allow(clippy::cast_possible_truncation)]
            {
                self.len = len as u8;
            }
        }
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Whether the buffer has room for another byte.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len as usize == MAX_CHAR_BYTES
    }

    /// The stored bytes.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }
}

impl Deref for RawBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl fmt::Debug for RawBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawBytes({:?})", bstr::BStr::new(self.as_slice()))
    }
}
