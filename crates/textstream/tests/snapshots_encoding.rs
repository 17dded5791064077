#![expect(missing_docs)]

use insta::assert_snapshot;
use textstream::{
    Converter, EolMode, SliceSource, TextReader, TextWriter, WriterOptions,
    convert::{Latin1, Utf8, Utf16, Utf32},
};

const SAMPLE: &str = "né\n1😀";

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render<C: Converter>(conv: C, eol: EolMode) -> String {
    let mut out = Vec::new();
    let mut writer = TextWriter::<_, _, char>::with_converter(&mut out, conv, WriterOptions { eol });
    writer.write_str(SAMPLE).unwrap();
    drop(writer);
    hex(&out)
}

#[test]
fn line_endings() {
    let lines = [
        format!("unix: {}", render(Utf8, EolMode::Unix)),
        format!("mac:  {}", render(Utf8, EolMode::Mac)),
        format!("dos:  {}", render(Utf8, EolMode::Dos)),
    ]
    .join("\n");
    assert_snapshot!(lines, @r"
    unix: 6E C3 A9 0A 31 F0 9F 98 80
    mac:  6E C3 A9 0D 31 F0 9F 98 80
    dos:  6E C3 A9 0D 0A 31 F0 9F 98 80
    ");
}

#[test]
fn converters() {
    let lines = [
        format!("utf8:    {}", render(Utf8, EolMode::Unix)),
        format!("latin1:  {}", render(Latin1, EolMode::Unix)),
        format!("utf16le: {}", render(Utf16::le(), EolMode::Unix)),
        format!("utf16be: {}", render(Utf16::be(), EolMode::Unix)),
        format!("utf32le: {}", render(Utf32::le(), EolMode::Unix)),
        format!("utf32be: {}", render(Utf32::be(), EolMode::Unix)),
    ]
    .join("\n");
    assert_snapshot!(lines, @r"
    utf8:    6E C3 A9 0A 31 F0 9F 98 80
    latin1:  6E E9 0A 31 3F
    utf16le: 6E 00 E9 00 0A 00 31 00 3D D8 00 DE
    utf16be: 00 6E 00 E9 00 0A 00 31 D8 3D DE 00
    utf32le: 6E 00 00 00 E9 00 00 00 0A 00 00 00 31 00 00 00 00 F6 01 00
    utf32be: 00 00 00 6E 00 00 00 E9 00 00 00 0A 00 00 00 31 00 01 F6 00
    ");
}

#[test]
fn detected_encodings() {
    let inputs: [(&str, &[u8]); 6] = [
        ("utf8 bom", b"\xEF\xBB\xBFn\xC3\xA9 1"),
        ("utf16le", b"\xFF\xFEn\x00\xE9\x00 \x001\x00"),
        ("utf16be", b"\xFE\xFF\x00n\x00\xE9\x00 \x001"),
        ("utf32le", b"\xFF\xFE\x00\x00n\x00\x00\x00\xE9\x00\x00\x00"),
        ("no bom", b"n\xC3\xA9 1"),
        ("latin1", b"n\xC3\xA9 caf\xE9 \xC3\xA9"),
    ];
    let lines = inputs
        .iter()
        .map(|(name, bytes)| {
            let mut reader = TextReader::new(SliceSource::new(bytes));
            let words: Vec<String> = std::iter::from_fn(|| Some(reader.read_word()))
                .take_while(|w| !w.is_empty())
                .collect();
            format!("{name}: {words:?}")
        })
        .collect::<Vec<_>>()
        .join("\n");
    assert_snapshot!(lines, @r#"
    utf8 bom: ["né", "1"]
    utf16le: ["né", "1"]
    utf16be: ["né", "1"]
    utf32le: ["né"]
    no bom: ["né", "1"]
    latin1: ["né", "café", "Ã©"]
    "#);
}
