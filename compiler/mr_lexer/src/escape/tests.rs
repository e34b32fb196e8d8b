use mr_lexer_core::SourceBuffer;
use pretty_assertions::assert_eq;

use super::*;

/// Decode the escape that follows the leading backslash of `source`.
fn decode(source: &str) -> (String, u32, u32) {
    let buffer = SourceBuffer::new(source);
    let mut cursor = buffer.cursor();
    assert_eq!(cursor.current(), b'\\');
    cursor.advance();
    let mut out = String::new();
    decode_escape(&mut cursor, &mut out);
    (out, cursor.pos(), cursor.line())
}

#[test]
fn named_escapes() {
    let cases = [
        ('0', '\0'),
        ('a', '\x07'),
        ('b', '\x08'),
        ('f', '\x0C'),
        ('n', '\n'),
        ('r', '\r'),
        ('t', '\t'),
        ('v', '\x0B'),
    ];
    for (letter, expected) in cases {
        assert_eq!(named_escape(letter as u8), Some(expected), "\\{letter}");
    }
}

#[test]
fn other_bytes_are_not_named() {
    for byte in [b'\\', b'"', b'\'', b'{', b'x', b'u', b'e'] {
        assert_eq!(named_escape(byte), None);
    }
}

#[test]
fn decodes_named_escape() {
    assert_eq!(decode("\\nrest"), ("\n".to_owned(), 2, 1));
}

#[test]
fn unknown_escape_passes_through() {
    assert_eq!(decode("\\q"), ("q".to_owned(), 2, 1));
    assert_eq!(decode("\\\""), ("\"".to_owned(), 2, 1));
    assert_eq!(decode("\\\\"), ("\\".to_owned(), 2, 1));
}

#[test]
fn escaped_line_break_bumps_line() {
    assert_eq!(decode("\\\nx"), ("\n".to_owned(), 2, 2));
}

#[test]
fn escaped_multibyte_character_is_kept_whole() {
    assert_eq!(decode("\\λ"), ("λ".to_owned(), 3, 1));
}
