#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use textstream::{
    AutoConverter, Converter, ReaderOptions, SliceSource, TextReader,
    convert::{Latin1, Utf8, Utf16, Utf32},
};

#[derive(Debug, Arbitrary)]
enum Encoding {
    Auto,
    Latin1,
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
}

#[derive(Debug, Arbitrary)]
enum Op {
    Char,
    Unget,
    Word,
    Line,
    Int(u8),
    TryInt(u8),
    Double,
    TryDouble,
}

#[derive(Debug, Arbitrary)]
struct Input {
    encoding: Encoding,
    separators: String,
    ops: Vec<Op>,
    bytes: Vec<u8>,
}

fn is_well_formed(units: &[u16]) -> bool {
    char::decode_utf16(units.iter().copied()).all(|r| r.is_ok())
}

fn run<C: Converter>(input: &Input, conv: C) {
    let options = ReaderOptions {
        separators: input.separators.clone(),
    };
    let mut reader: TextReader<_, _, u16> =
        TextReader::with_converter(SliceSource::new(&input.bytes), conv, &options);

    for op in &input.ops {
        match op {
            Op::Char => {
                reader.read_char();
            }
            Op::Unget => reader.unget_last(),
            Op::Word => assert!(is_well_formed(&reader.read_word())),
            Op::Line => assert!(is_well_formed(&reader.read_line())),
            Op::Int(base) => {
                reader.read_i64(u32::from(*base));
            }
            Op::TryInt(base) => {
                let _ = reader.try_read_int::<u32>(u32::from(*base));
            }
            Op::Double => {
                reader.read_f64();
            }
            Op::TryDouble => {
                let _ = reader.try_read_f64();
            }
        }
    }

    // Whatever happened above, line reads drain the rest of the input.
    while !reader.get_ref().is_exhausted() {
        assert!(is_well_formed(&reader.read_line()));
    }
}

fuzz_target!(|input: Input| match input.encoding {
    Encoding::Auto => run(&input, AutoConverter::new()),
    Encoding::Latin1 => run(&input, Latin1),
    Encoding::Utf8 => run(&input, Utf8),
    Encoding::Utf16Le => run(&input, Utf16::le()),
    Encoding::Utf16Be => run(&input, Utf16::be()),
    Encoding::Utf32Le => run(&input, Utf32::le()),
    Encoding::Utf32Be => run(&input, Utf32::be()),
});
