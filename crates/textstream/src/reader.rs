//! Word, line and number reads over a byte source.
//!
//! All reads are total. A read that starts at end of input returns the empty
//! text or zero; a read that runs into end of input halfway returns what it
//! collected. Check the channel for exhaustion *before* each read: an empty
//! line and the end of data look the same from here.
//!
//! Numeric reads take one word and parse its longest numeric prefix; anything
//! after the prefix is discarded with the word, and a word that is not a
//! number reads as zero. The `try_` variants report those cases as
//! [`ScanError`] instead.
use alloc::vec::Vec;

use tracing::warn;

use crate::{
    channel::ByteSource,
    convert::{AutoConverter, Converter},
    decoder::CharDecoder,
    error::ScanError,
    numbers::{ScanInt, is_valid_base, lex_float, lex_int},
    options::ReaderOptions,
    unit::CodeUnit,
};

/// Reads text from a [`ByteSource`].
///
/// `U` is the host character unit: [`char`], or [`u16`] to receive characters
/// outside the basic multilingual plane as surrogate pairs.
///
/// # Examples
///
/// ```rust
/// use textstream::{SliceSource, TextReader};
///
/// let mut reader = TextReader::new(SliceSource::new(b"temp 21.5\nok\r\n"));
/// assert_eq!(reader.read_word(), "temp");
/// assert_eq!(reader.read_f64(), 21.5);
/// assert_eq!(reader.read_line(), "ok");
/// assert!(reader.get_ref().is_exhausted());
/// ```
#[derive(Debug)]
pub struct TextReader<S, C = AutoConverter, U = char> {
    decoder: CharDecoder<S, C, U>,
    separators: Vec<U>,
}

impl<S: ByteSource> TextReader<S> {
    /// Creates a reader with default options that detects the encoding.
    pub fn new(source: S) -> Self {
        Self::with_options(source, ReaderOptions::default())
    }

    /// Creates a reader with `options` that detects the encoding.
    pub fn with_options(source: S, options: ReaderOptions) -> Self {
        Self::with_converter(source, AutoConverter::new(), &options)
    }
}

macro_rules! read_int_fns {
    ($($name:ident => $ty:ty),* $(,)?) => {$(
        #[doc = concat!("Reads a word as a `", stringify!($ty), "` in `base`; see [`read_int`](Self::read_int).")]
        pub fn $name(&mut self, base: u32) -> $ty {
            self.read_int(base)
        }
    )*};
}

impl<S: ByteSource, C: Converter, U: CodeUnit> TextReader<S, C, U> {
    /// Creates a reader decoding through `conv`.
    pub fn with_converter(source: S, conv: C, options: &ReaderOptions) -> Self {
        let mut reader = Self {
            decoder: CharDecoder::new(source, conv),
            separators: Vec::new(),
        };
        reader.set_separators(&options.separators);
        reader
    }

    /// The current word separators.
    pub fn separators(&self) -> &[U] {
        &self.separators
    }

    /// Replaces the word separators. Takes effect on the next read.
    pub fn set_separators(&mut self, separators: &str) {
        self.separators.clear();
        for ch in separators.chars() {
            let (first, second) = U::split(ch);
            self.separators.push(first);
            self.separators.extend(second);
        }
    }

    /// Reads one unit, or `None` at end of input.
    pub fn read_char(&mut self) -> Option<U> {
        self.decoder.next_char()
    }

    /// Pushes the last unit read back; see [`CharDecoder::unget_last`].
    pub fn unget_last(&mut self) {
        self.decoder.unget_last();
    }

    /// Reads up to the next line ending (`\n`, `\r` or `\r\n`), which is
    /// consumed but not returned.
    pub fn read_line(&mut self) -> U::Text {
        let mut line = U::Text::default();
        while let Some(c) = self.decoder.next_char() {
            if self.decoder.eat_end_of_line(c) {
                break;
            }
            U::push(&mut line, c);
        }
        line
    }

    /// Skips separators and line endings, then reads up to the next
    /// separator or line ending, which is consumed but not returned.
    pub fn read_word(&mut self) -> U::Text {
        let mut word = U::Text::default();
        let Some(first) = self.decoder.next_non_separator(&self.separators) else {
            return word;
        };
        U::push(&mut word, first);
        while let Some(c) = self.decoder.next_char() {
            if self.separators.contains(&c) || self.decoder.eat_end_of_line(c) {
                break;
            }
            U::push(&mut word, c);
        }
        word
    }

    /// Reads a word and parses its integer prefix in `base`.
    ///
    /// `base` is 0 (C-style prefixes select hexadecimal, octal or decimal)
    /// or between 2 and 36. A leading sign is accepted. Values that do not
    /// fit `T` wrap around; words without a numeric prefix, end of input and
    /// invalid bases all give zero.
    pub fn read_int<T: ScanInt>(&mut self, base: u32) -> T {
        if !is_valid_base(base) {
            warn!(base, "invalid integer base");
            return T::default();
        }
        let word = U::to_string_lossy(&self.read_word());
        lex_int(&word, base).map_or_else(T::default, |l| T::wrapping_from(l.magnitude, l.negative))
    }

    /// Reads a word that must be exactly one integer in `base` fitting `T`.
    ///
    /// # Errors
    ///
    /// - [`ScanError::InvalidBase`] for a base other than 0 or `2..=36`
    ///   (nothing is read).
    /// - [`ScanError::EndOfInput`] if no word is left.
    /// - [`ScanError::Malformed`] if the word is not entirely a number.
    /// - [`ScanError::OutOfRange`] if the number does not fit `T`.
    pub fn try_read_int<T: ScanInt>(&mut self, base: u32) -> Result<T, ScanError> {
        if !is_valid_base(base) {
            return Err(ScanError::InvalidBase(base));
        }
        let word = self.read_word();
        if U::is_empty(&word) {
            return Err(ScanError::EndOfInput);
        }
        let word = U::to_string_lossy(&word);
        let Some(lexeme) = lex_int(&word, base).filter(|l| l.end == word.len()) else {
            return Err(ScanError::Malformed(word));
        };
        if lexeme.overflowed {
            return Err(ScanError::OutOfRange(word));
        }
        T::checked_from(lexeme.magnitude, lexeme.negative).ok_or(ScanError::OutOfRange(word))
    }

    read_int_fns! {
        read_u8 => u8,
        read_u16 => u16,
        read_u32 => u32,
        read_u64 => u64,
        read_i8 => i8,
        read_i16 => i16,
        read_i32 => i32,
        read_i64 => i64,
    }

    /// Reads a word and parses its floating-point prefix: optional sign,
    /// digits with an optional fraction, optional exponent, or `inf`,
    /// `infinity`, `nan`. Anything else gives `0.0`.
    pub fn read_f64(&mut self) -> f64 {
        let word = U::to_string_lossy(&self.read_word());
        lex_float(&word).map_or(0.0, |(value, _)| value)
    }

    /// [`read_f64`](Self::read_f64) narrowed to `f32`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn read_f32(&mut self) -> f32 {
        self.read_f64() as f32
    }

    /// Reads a word that must be exactly one floating-point number.
    ///
    /// # Errors
    ///
    /// [`ScanError::EndOfInput`] if no word is left, [`ScanError::Malformed`]
    /// if the word is not entirely a number.
    pub fn try_read_f64(&mut self) -> Result<f64, ScanError> {
        let word = self.read_word();
        if U::is_empty(&word) {
            return Err(ScanError::EndOfInput);
        }
        let word = U::to_string_lossy(&word);
        match lex_float(&word) {
            Some((value, len)) if len == word.len() => Ok(value),
            _ => Err(ScanError::Malformed(word)),
        }
    }

    /// Borrows the byte source.
    pub fn get_ref(&self) -> &S {
        self.decoder.get_ref()
    }

    /// Mutably borrows the byte source.
    pub fn get_mut(&mut self) -> &mut S {
        self.decoder.get_mut()
    }

    /// Returns the byte source and converter.
    pub fn into_parts(self) -> (S, C) {
        self.decoder.into_parts()
    }
}
