//! Host character width.
//!
//! Readers and writers hand out characters as code units of the host's
//! character type. With [`char`] every unit is a whole code point. With
//! [`u16`] a code point outside the basic multilingual plane travels as two
//! units, a high surrogate followed by a low surrogate, and the decoder and
//! encoder each buffer one half of such a pair between calls.
use alloc::{string::String, vec::Vec};
use core::fmt;

/// Which half of a surrogate pair a unit is, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surrogate {
    /// Not a surrogate.
    None,
    /// First half of a pair (U+D800..=U+DBFF).
    High,
    /// Second half of a pair (U+DC00..=U+DFFF).
    Low,
}

/// A character unit of the host's character type.
pub trait CodeUnit: Copy + Eq + fmt::Debug {
    /// Accumulated units, as returned by line and word reads.
    type Text: Default + Clone + PartialEq + fmt::Debug;

    /// Splits `ch` into its first unit and, for a surrogate pair, the second.
    fn split(ch: char) -> (Self, Option<Self>);

    /// The unit for an ASCII byte.
    fn from_ascii(byte: u8) -> Self;

    /// Classifies the unit as a surrogate half.
    fn surrogate(self) -> Surrogate;

    /// The character this unit stands for alone, or `None` for a surrogate
    /// half.
    fn to_char(self) -> Option<char>;

    /// Joins a high and a low surrogate back into one character.
    fn combine(high: Self, low: Self) -> Option<char>;

    /// Appends `unit` to `text`.
    fn push(text: &mut Self::Text, unit: Self);

    /// Whether `text` holds no units.
    fn is_empty(text: &Self::Text) -> bool;

    /// Converts `text` to a string, replacing unpaired surrogates with U+FFFD.
    fn to_string_lossy(text: &Self::Text) -> String;
}

impl CodeUnit for char {
    type Text = String;

    fn split(ch: char) -> (Self, Option<Self>) {
        (ch, None)
    }

    fn from_ascii(byte: u8) -> Self {
        char::from(byte)
    }

    fn surrogate(self) -> Surrogate {
        Surrogate::None
    }

    fn to_char(self) -> Option<char> {
        Some(self)
    }

    fn combine(_high: Self, _low: Self) -> Option<char> {
        None
    }

    fn push(text: &mut String, unit: Self) {
        text.push(unit);
    }

    fn is_empty(text: &String) -> bool {
        text.is_empty()
    }

    fn to_string_lossy(text: &String) -> String {
        text.clone()
    }
}

impl CodeUnit for u16 {
    type Text = Vec<u16>;

    fn split(ch: char) -> (Self, Option<Self>) {
        let mut buf = [0u16; 2];
        let units = ch.encode_utf16(&mut buf);
        (units[0], units.get(1).copied())
    }

    fn from_ascii(byte: u8) -> Self {
        u16::from(byte)
    }

    fn surrogate(self) -> Surrogate {
        match self {
            0xD800..=0xDBFF => Surrogate::High,
            0xDC00..=0xDFFF => Surrogate::Low,
            _ => Surrogate::None,
        }
    }

    fn to_char(self) -> Option<char> {
        char::from_u32(u32::from(self))
    }

    fn combine(high: Self, low: Self) -> Option<char> {
        match char::decode_utf16([high, low]).next() {
            Some(Ok(ch)) if high.surrogate() == Surrogate::High => Some(ch),
            _ => None,
        }
    }

    fn push(text: &mut Vec<u16>, unit: Self) {
        text.push(unit);
    }

    fn is_empty(text: &Vec<u16>) -> bool {
        text.is_empty()
    }

    fn to_string_lossy(text: &Vec<u16>) -> String {
        char::decode_utf16(text.iter().copied())
            .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }
}
