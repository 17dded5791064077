//! Text writes with line-ending translation.
use alloc::string::String;
use core::fmt;

use crate::{
    channel::ByteSink,
    convert::{AutoConverter, Converter},
    encoder::CharEncoder,
    error::WriteError,
    numbers::format_f64,
    options::{EolMode, WriterOptions},
    unit::CodeUnit,
};

/// Writes text to a [`ByteSink`].
///
/// Every `\n` in text passed to the `write_*` methods is a logical line break
/// and is written with the configured [`EolMode`]; all other characters,
/// `\r` included, are written unchanged.
///
/// # Examples
///
/// ```rust
/// use textstream::{EolMode, TextWriter, WriterOptions};
///
/// let mut out = Vec::new();
/// let mut writer = TextWriter::with_options(&mut out, WriterOptions { eol: EolMode::Dos });
/// writer.write_str("x = ").unwrap();
/// writer.write_i32(-7).unwrap();
/// writer.write_str("\n").unwrap();
/// drop(writer);
/// assert_eq!(out, b"x = -7\r\n");
/// ```
#[derive(Debug)]
pub struct TextWriter<W, C = AutoConverter, U = char> {
    encoder: CharEncoder<W, C, U>,
    eol: EolMode,
}

impl<W: ByteSink> TextWriter<W> {
    /// Creates a UTF-8 writer with native line endings.
    pub fn new(sink: W) -> Self {
        Self::with_options(sink, WriterOptions::default())
    }

    /// Creates a UTF-8 writer with `options`.
    pub fn with_options(sink: W, options: WriterOptions) -> Self {
        Self::with_converter(sink, AutoConverter::new(), options)
    }
}

macro_rules! write_int_fns {
    ($($name:ident => $ty:ty),* $(,)?) => {$(
        #[doc = concat!("Writes a `", stringify!($ty), "` in plain decimal.")]
        ///
        /// # Errors
        ///
        /// Returns the sink's error if the write failed.
        pub fn $name(&mut self, value: $ty) -> Result<(), WriteError<W::Error>> {
            self.write_display(&value)
        }
    )*};
}

impl<W: ByteSink, C: Converter, U: CodeUnit> TextWriter<W, C, U> {
    /// Creates a writer encoding through `conv`.
    pub fn with_converter(sink: W, conv: C, options: WriterOptions) -> Self {
        Self {
            encoder: CharEncoder::new(sink, conv),
            eol: options.eol.resolve(),
        }
    }

    /// Sets the line-ending convention for subsequent writes.
    /// [`EolMode::Native`] is resolved immediately.
    pub fn set_mode(&mut self, mode: EolMode) {
        self.eol = mode.resolve();
    }

    /// The line-ending convention in effect; never [`EolMode::Native`].
    pub fn mode(&self) -> EolMode {
        self.eol
    }

    /// Writes `text`, translating `\n`.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if a write failed.
    pub fn write_str(&mut self, text: &str) -> Result<(), WriteError<W::Error>> {
        for ch in text.chars() {
            let (first, second) = U::split(ch);
            self.write_unit(first)?;
            if let Some(second) = second {
                self.write_unit(second)?;
            }
        }
        Ok(())
    }

    /// Writes host units, translating `\n`.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if a write failed.
    pub fn write_units(&mut self, units: &[U]) -> Result<(), WriteError<W::Error>> {
        for &unit in units {
            self.write_unit(unit)?;
        }
        Ok(())
    }

    /// Writes one unit as is, without line-ending translation.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if the write failed.
    pub fn put_char(&mut self, unit: U) -> Result<(), WriteError<W::Error>> {
        self.encoder.put_char(unit).map_err(WriteError::Channel)
    }

    /// Writes a logical line break and flushes.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if the write or flush failed.
    pub fn end_line(&mut self) -> Result<(), WriteError<W::Error>> {
        self.write_str("\n")?;
        self.flush()
    }

    write_int_fns! {
        write_u8 => u8,
        write_u16 => u16,
        write_u32 => u32,
        write_u64 => u64,
        write_i8 => i8,
        write_i16 => i16,
        write_i32 => i32,
        write_i64 => i64,
    }

    /// Writes `value` as the shortest decimal text that reads back as the
    /// same value; see [`TextReader::read_f64`](crate::TextReader::read_f64).
    ///
    /// # Errors
    ///
    /// Returns the sink's error if the write failed.
    pub fn write_f64(&mut self, value: f64) -> Result<(), WriteError<W::Error>> {
        let mut text = String::new();
        if format_f64(value, &mut text).is_err() {
            return Err(WriteError::Format);
        }
        self.write_str(&text)
    }

    /// [`write_f64`](Self::write_f64) for an `f32`, written with `f32`
    /// precision.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if the write failed.
    pub fn write_f32(&mut self, value: f32) -> Result<(), WriteError<W::Error>> {
        let magnitude = value.abs();
        if value == 0.0 || !value.is_finite() || (1e-5..1e16).contains(&magnitude) {
            self.write_display(&value)
        } else {
            self.write_fmt(format_args!("{value:e}"))
        }
    }

    /// Writes the [`Display`](fmt::Display) form of `value`.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if a write failed, or [`WriteError::Format`]
    /// if the `Display` implementation failed.
    pub fn write_display<T: fmt::Display + ?Sized>(
        &mut self,
        value: &T,
    ) -> Result<(), WriteError<W::Error>> {
        self.write_fmt(format_args!("{value}"))
    }

    /// Writes formatted text, so that `write!` works on a writer.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if a write failed, or [`WriteError::Format`]
    /// if a formatting trait implementation failed.
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), WriteError<W::Error>> {
        struct Adapter<'a, W: ByteSink, C, U> {
            writer: &'a mut TextWriter<W, C, U>,
            error: Option<WriteError<W::Error>>,
        }

        impl<W: ByteSink, C: Converter, U: CodeUnit> fmt::Write for Adapter<'_, W, C, U> {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                self.writer.write_str(s).map_err(|e| {
                    self.error = Some(e);
                    fmt::Error
                })
            }
        }

        let mut adapter = Adapter {
            writer: self,
            error: None,
        };
        match fmt::write(&mut adapter, args) {
            Ok(()) => Ok(()),
            Err(fmt::Error) => Err(adapter.error.unwrap_or(WriteError::Format)),
        }
    }

    /// Flushes the sink. A held high surrogate stays held.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if the flush failed.
    pub fn flush(&mut self) -> Result<(), WriteError<W::Error>> {
        self.encoder.flush().map_err(WriteError::Channel)
    }

    /// Borrows the byte sink.
    pub fn get_ref(&self) -> &W {
        self.encoder.get_ref()
    }

    /// Mutably borrows the byte sink.
    pub fn get_mut(&mut self) -> &mut W {
        self.encoder.get_mut()
    }

    fn write_unit(&mut self, unit: U) -> Result<(), WriteError<W::Error>> {
        if unit != U::from_ascii(b'\n') {
            return self.put_char(unit);
        }
        for ch in self.eol.terminator().bytes() {
            self.encoder
                .put_char(U::from_ascii(ch))
                .map_err(WriteError::Channel)?;
        }
        Ok(())
    }
}
