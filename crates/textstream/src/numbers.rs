//! Number lexing and formatting for word-oriented reads and writes.
//!
//! Integers follow the C `strtol` conventions: an optional sign, then for
//! base 16 an optional `0x`/`0X` prefix, and for base 0 a prefix that picks
//! the base (`0x` hexadecimal, `0` octal, decimal otherwise). Parsing stops at
//! the first character that is not a digit of the base. Values wider than the
//! target type wrap around.
use alloc::string::String;
use core::fmt::{self, Write};

/// Whether `base` is accepted by integer reads: 0 or 2 through 36.
pub(crate) fn is_valid_base(base: u32) -> bool {
    base == 0 || (2..=36).contains(&base)
}

/// The integer prefix of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IntLexeme {
    pub negative: bool,
    /// Magnitude, wrapped modulo 2^64.
    pub magnitude: u64,
    /// Whether the magnitude did not fit in 64 bits.
    pub overflowed: bool,
    /// Byte offset just past the last digit.
    pub end: usize,
}

/// Lexes the longest integer prefix of `text`.
///
/// Returns `None` if `text` does not start with a number in `base`. `base`
/// must satisfy [`is_valid_base`].
pub(crate) fn lex_int(text: &str, base: u32) -> Option<IntLexeme> {
    debug_assert!(is_valid_base(base));
    let bytes = text.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let has_hex_prefix = matches!(bytes.get(pos..pos + 2), Some([b'0', b'x' | b'X']))
        && bytes.get(pos + 2).is_some_and(u8::is_ascii_hexdigit);
    let base = match base {
        0 if has_hex_prefix => {
            pos += 2;
            16
        }
        16 if has_hex_prefix => {
            pos += 2;
            16
        }
        0 if bytes.get(pos) == Some(&b'0') => 8,
        0 => 10,
        base => base,
    };

    let digits_start = pos;
    let mut magnitude = 0u64;
    let mut overflowed = false;
    while let Some(digit) = bytes.get(pos).and_then(|&b| char::from(b).to_digit(base)) {
        let (shifted, o1) = magnitude.overflowing_mul(u64::from(base));
        let (sum, o2) = shifted.overflowing_add(u64::from(digit));
        overflowed |= o1 || o2;
        magnitude = sum;
        pos += 1;
    }

    (pos > digits_start).then_some(IntLexeme {
        negative,
        magnitude,
        overflowed,
        end: pos,
    })
}

/// Byte length of the longest floating-point prefix of `text`: sign,
/// digits, optional fraction, optional exponent, or one of `inf`,
/// `infinity` and `nan` in any case.
pub(crate) fn float_prefix_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut pos = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    for word in ["infinity", "inf", "nan"] {
        if bytes
            .get(pos..pos + word.len())
            .is_some_and(|s| s.eq_ignore_ascii_case(word.as_bytes()))
        {
            return Some(pos + word.len());
        }
    }

    let count_digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let int_digits = count_digits(pos);
    pos += int_digits;
    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(pos + 1);
        if int_digits + frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(exp);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }
    Some(pos)
}

/// Parses the longest floating-point prefix of `text`.
///
/// Returns the value and the byte length of the prefix.
pub(crate) fn lex_float(text: &str) -> Option<(f64, usize)> {
    let len = float_prefix_len(text)?;
    text[..len].parse().ok().map(|v| (v, len))
}

/// Appends the shortest text that reads back as exactly `value`.
///
/// Magnitudes in `[1e-5, 1e16)` and zero are written positionally, everything
/// else in exponent form, so neither tiny nor huge values expand into long
/// runs of zeros.
pub(crate) fn format_f64(value: f64, out: &mut String) -> fmt::Result {
    let magnitude = value.abs();
    if value == 0.0 || !value.is_finite() || (1e-5..1e16).contains(&magnitude) {
        write!(out, "{value}")
    } else {
        write!(out, "{value:e}")
    }
}

/// Integer types that word-oriented reads can produce.
pub trait ScanInt: Copy + Default + fmt::Debug {
    /// Converts a lexed magnitude, wrapping modulo the width of `Self`.
    fn wrapping_from(magnitude: u64, negative: bool) -> Self;

    /// Converts a lexed magnitude, or `None` if it is out of range.
    fn checked_from(magnitude: u64, negative: bool) -> Option<Self>;
}

macro_rules! impl_scan_int {
    ($($ty:ty),*) => {$(
        impl ScanInt for $ty {
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            fn wrapping_from(magnitude: u64, negative: bool) -> Self {
                let value = magnitude as $ty;
                if negative { value.wrapping_neg() } else { value }
            }

            fn checked_from(magnitude: u64, negative: bool) -> Option<Self> {
                let wide = i128::from(magnitude);
                <$ty>::try_from(if negative { -wide } else { wide }).ok()
            }
        }
    )*};
}

impl_scan_int!(u8, u16, u32, u64, i8, i16, i32, i64);
