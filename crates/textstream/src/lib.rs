//! Text-oriented readers and writers over byte channels.
//!
//! [`TextReader`] decodes a [`ByteSource`] into characters and splits them
//! into words, lines and numbers on demand. [`TextWriter`] encodes characters
//! and numbers into a [`ByteSink`], translating line breaks to the configured
//! [`EolMode`]. Both go through a [`Converter`] that maps bytes to characters;
//! the default [`AutoConverter`] detects the encoding from a byte-order mark.
//!
//! ```rust
//! use textstream::{EolMode, SliceSource, TextReader, TextWriter, WriterOptions};
//!
//! let mut bytes = Vec::new();
//! let mut writer = TextWriter::with_options(&mut bytes, WriterOptions { eol: EolMode::Dos });
//! writer.write_str("answer ").unwrap();
//! writer.write_u32(42).unwrap();
//! writer.end_line().unwrap();
//! drop(writer);
//!
//! let mut reader = TextReader::new(SliceSource::new(&bytes));
//! assert_eq!(reader.read_word(), "answer");
//! assert_eq!(reader.read_u32(10), 42);
//! ```
//!
//! Characters are handed out as code units of the host character type: [`char`]
//! by default, or [`u16`], in which case characters outside the basic
//! multilingual plane arrive and must be written as surrogate pairs.

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod channel;
pub mod convert;
mod decoder;
mod encoder;
mod error;
#[cfg(feature = "std")]
mod io;
mod numbers;
mod options;
mod raw_bytes;
mod reader;
mod unit;
mod writer;

#[cfg(test)]
mod tests;

pub use channel::{ByteSink, ByteSource, SliceSource};
pub use convert::{AutoConverter, Converter, DecodeStep};
pub use decoder::CharDecoder;
pub use encoder::CharEncoder;
pub use error::{ScanError, WriteError};
#[cfg(feature = "std")]
pub use io::{IoSink, IoSource};
pub use numbers::ScanInt;
pub use options::{EolMode, ReaderOptions, WriterOptions};
pub use raw_bytes::{MAX_CHAR_BYTES, RawBytes};
pub use reader::TextReader;
pub use unit::{CodeUnit, Surrogate};
pub use writer::TextWriter;
