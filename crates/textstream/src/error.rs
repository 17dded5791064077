use alloc::string::String;
use core::fmt;

use thiserror::Error;

/// Why a strict numeric read produced no value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// Input ended before a word was found.
    #[error("unexpected end of input")]
    EndOfInput,
    /// The word read is not a number.
    #[error("malformed number {0:?}")]
    Malformed(String),
    /// The word is a number that does not fit the requested type.
    #[error("number {0:?} out of range")]
    OutOfRange(String),
    /// The base is neither 0 nor in `2..=36`.
    #[error("invalid base {0}")]
    InvalidBase(u32),
}

/// Failure of a text write.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WriteError<E: fmt::Debug> {
    /// The byte sink rejected a write or flush.
    #[error("channel error: {0:?}")]
    Channel(E),
    /// A `Display` implementation reported an error of its own.
    #[error("formatter error")]
    Format,
}
