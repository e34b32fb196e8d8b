use pretty_assertions::assert_eq;

use super::*;
use mr_lexer::LexConfig;
use mr_lexer_core::MAX_SOURCE_LEN;

fn scratch_file(name: &str, contents: &[u8]) -> String {
    let path = std::env::temp_dir().join(format!("mrc-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn read_source_missing_file() {
    assert_eq!(
        read_source("/definitely/not/here.mr"),
        Err("cannot find file '/definitely/not/here.mr'".to_string())
    );
}

#[test]
fn read_source_invalid_utf8() {
    let path = scratch_file("bad.mr", &[b'x', 0xFF, 0xFE]);
    assert_eq!(
        read_source(&path),
        Err(format!("'{path}' contains invalid UTF-8 data"))
    );
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn read_source_ok() {
    let path = scratch_file("ok.mr", b"var x = 1\n");
    assert_eq!(read_source(&path), Ok("var x = 1\n".to_string()));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn read_source_accepts_largest_file() {
    let contents = vec![b'x'; MAX_SOURCE_LEN as usize];
    let path = scratch_file("max.mr", &contents);
    assert_eq!(read_source(&path).map(|s| s.len()), Ok(MAX_SOURCE_LEN as usize));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn read_source_rejects_oversized_file() {
    let contents = vec![b'x'; MAX_SOURCE_LEN as usize + 1];
    let path = scratch_file("huge.mr", &contents);
    assert_eq!(
        read_source(&path),
        Err(format!(
            "'{path}' is too large ({} bytes, limit is {MAX_SOURCE_LEN})",
            MAX_SOURCE_LEN as usize + 1
        ))
    );
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn lex_dump_one_token_per_line() {
    let dump = lex_to_string("t.mr", "x + 1", &LexConfig::default()).unwrap();
    assert_eq!(dump, "IDENTIFIER: x\nADD\nINT: 1\nEOF\n");
}

#[test]
fn lex_error_is_rendered() {
    let err = lex_to_string("t.mr", "x @ 1", &LexConfig::default()).unwrap_err();
    assert_eq!(err, "t.mr:1:3: error: illegal character `@`\n 1 | x @ 1\n   |   ^\n");
}
