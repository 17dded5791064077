#![expect(missing_docs)]

use std::io::Cursor;

use textstream::{
    EolMode, IoSink, IoSource, ReaderOptions, TextReader, TextWriter, WriterOptions,
    convert::{Utf8, Utf16},
};

#[test]
fn file_like_roundtrip() {
    let mut writer = TextWriter::<_, _, char>::with_converter(
        IoSink::new(Vec::new()),
        Utf16::be(),
        WriterOptions { eol: EolMode::Dos },
    );
    writer.put_char('\u{FEFF}').unwrap();
    writer.write_str("id\tscore\n").unwrap();
    for (id, score) in [(1u32, 0.5f64), (2, -12.25)] {
        writer.write_u32(id).unwrap();
        writer.write_str("\t").unwrap();
        writer.write_f64(score).unwrap();
        writer.end_line().unwrap();
    }
    let bytes = writer.get_ref().get_ref().clone();
    drop(writer);
    assert_eq!(&bytes[..4], [0xFE, 0xFF, 0x00, b'i']);

    let mut reader = TextReader::new(IoSource::new(Cursor::new(bytes)));
    assert_eq!(reader.read_line(), "id\tscore");
    assert_eq!(reader.read_u32(10), 1);
    assert_eq!(reader.read_f64(), 0.5);
    assert_eq!(reader.read_u32(10), 2);
    assert_eq!(reader.read_f64(), -12.25);
    assert_eq!(reader.read_word(), "");

    let (source, _) = reader.into_parts();
    let cursor = source.into_inner();
    assert_eq!(cursor.position(), cursor.get_ref().len() as u64);
}

#[test]
fn pushed_back_bytes_survive_the_adapter() {
    let mut reader: TextReader<_, _, char> = TextReader::with_converter(
        IoSource::new(Cursor::new("a\r\rb".as_bytes())),
        Utf8,
        &ReaderOptions::default(),
    );
    assert_eq!(reader.read_line(), "a");
    assert_eq!(reader.read_line(), "");
    assert_eq!(reader.read_line(), "b");
}
