use alloc::{string::String, vec::Vec};

use quickcheck::QuickCheck;

use crate::{
    EolMode, ReaderOptions, SliceSource, TextReader, TextWriter, WriterOptions,
    convert::{Utf8, Utf16},
};

fn checker() -> QuickCheck {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new().tests(tests)
}

fn writer(out: &mut Vec<u8>, eol: EolMode) -> TextWriter<&mut Vec<u8>, Utf8> {
    TextWriter::with_converter(out, Utf8, WriterOptions { eol })
}

fn reader(bytes: &[u8]) -> TextReader<SliceSource<'_>, Utf8> {
    TextReader::with_converter(SliceSource::new(bytes), Utf8, &ReaderOptions::default())
}

/// Property: every integer width reads back what was written, separated by
/// a single space.
#[test]
fn integer_roundtrip_quickcheck() {
    type Ints = (u8, u16, u32, u64, i8, i16, i32, i64);

    fn prop(values: Ints) -> bool {
        let mut out = Vec::new();
        let mut w = writer(&mut out, EolMode::Unix);
        w.write_u8(values.0).unwrap();
        w.write_str(" ").unwrap();
        w.write_u16(values.1).unwrap();
        w.write_str(" ").unwrap();
        w.write_u32(values.2).unwrap();
        w.write_str(" ").unwrap();
        w.write_u64(values.3).unwrap();
        w.write_str(" ").unwrap();
        w.write_i8(values.4).unwrap();
        w.write_str(" ").unwrap();
        w.write_i16(values.5).unwrap();
        w.write_str(" ").unwrap();
        w.write_i32(values.6).unwrap();
        w.write_str(" ").unwrap();
        w.write_i64(values.7).unwrap();
        drop(w);

        let mut r = reader(&out);
        let read = (
            r.read_u8(10),
            r.read_u16(10),
            r.read_u32(10),
            r.read_u64(10),
            r.read_i8(10),
            r.read_i16(10),
            r.read_i32(10),
            r.read_i64(10),
        );
        read == values && r.get_ref().is_exhausted()
    }

    checker().quickcheck(prop as fn(Ints) -> bool);
}

/// Property: doubles written one per line read back bit for bit; NaNs read
/// back as some NaN.
#[test]
fn double_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(values: Vec<f64>, eol: u8) -> bool {
        let eol = [EolMode::Unix, EolMode::Mac, EolMode::Dos][usize::from(eol % 3)];
        let mut out = Vec::new();
        let mut w = writer(&mut out, eol);
        for &v in &values {
            w.write_f64(v).unwrap();
            w.end_line().unwrap();
        }
        drop(w);

        let mut r = reader(&out);
        values.iter().all(|&v| {
            let got = r.read_f64();
            (v.is_nan() && got.is_nan()) || got.to_bits() == v.to_bits()
        }) && r.get_ref().is_exhausted()
    }

    checker().quickcheck(prop as fn(Vec<f64>, u8) -> bool);
}

/// Property: lines free of line-break characters survive a write and read
/// under every line-ending convention.
#[test]
fn line_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(lines: Vec<String>, eol: u8) -> bool {
        let eol = [EolMode::Native, EolMode::Unix, EolMode::Mac, EolMode::Dos][usize::from(eol % 4)];
        let lines: Vec<String> = lines
            .into_iter()
            .map(|l| l.chars().filter(|c| !matches!(c, '\r' | '\n')).collect())
            .collect();

        let mut out = Vec::new();
        let mut w = writer(&mut out, eol);
        for line in &lines {
            w.write_str(line).unwrap();
            w.write_str("\n").unwrap();
        }
        drop(w);

        let mut r = reader(&out);
        lines.iter().all(|line| r.read_line() == *line) && r.get_ref().is_exhausted()
    }

    checker().quickcheck(prop as fn(Vec<String>, u8) -> bool);
}

/// Property: with 16-bit units, text written as code units reads back as the
/// same code units, so surrogate pairs are never split or lost.
#[test]
fn surrogate_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String, big_endian: bool) -> bool {
        let conv = if big_endian { Utf16::be() } else { Utf16::le() };
        let units: Vec<u16> = text.encode_utf16().collect();

        let mut out = Vec::new();
        let mut w: TextWriter<_, _, u16> =
            TextWriter::with_converter(&mut out, conv, WriterOptions { eol: EolMode::Unix });
        w.write_units(&units).unwrap();
        drop(w);

        let mut r: TextReader<_, _, u16> =
            TextReader::with_converter(SliceSource::new(&out), conv, &ReaderOptions::default());
        let read: Vec<u16> = core::iter::from_fn(|| r.read_char()).collect();
        read == units
    }

    checker().quickcheck(prop as fn(String, bool) -> bool);
}

/// Property: ungetting the last unit and reading again yields the same unit,
/// wherever in the text the unget happens.
#[test]
fn unget_idempotence_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String, ungets: Vec<bool>) -> bool {
        let expected: Vec<u16> = text.encode_utf16().collect();
        let mut r: TextReader<_, _, u16> = TextReader::with_converter(
            SliceSource::new(text.as_bytes()),
            Utf8,
            &ReaderOptions::default(),
        );

        let mut flags = ungets.iter().copied().cycle();
        let mut read = Vec::new();
        while let Some(unit) = r.read_char() {
            if flags.next().unwrap_or(false) {
                r.unget_last();
                if r.read_char() != Some(unit) {
                    return false;
                }
            }
            read.push(unit);
        }
        read == expected
    }

    checker().quickcheck(prop as fn(String, Vec<bool>) -> bool);
}
