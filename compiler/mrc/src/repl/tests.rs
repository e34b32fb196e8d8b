use pretty_assertions::assert_eq;

use super::*;

fn session(input: &str) -> String {
    let mut out = Vec::new();
    run(input.as_bytes(), &mut out, &LexConfig::default()).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn empty_input_prints_one_prompt() {
    assert_eq!(session(""), ">>> \n");
}

#[test]
fn blank_lines_print_nothing() {
    assert_eq!(session("\n   \n"), ">>> >>> >>> \n");
}

#[test]
fn each_line_is_lexed() {
    assert_eq!(session("1\nx\n"), ">>> INT: 1\nEOF\n>>> IDENTIFIER: x\nEOF\n>>> \n");
}

#[test]
fn errors_do_not_end_the_session() {
    let out = session("\"open\n2\n");
    assert!(out.contains("<stdin>:1:6: error: missing `\"`"));
    assert!(out.ends_with(">>> INT: 2\nEOF\n>>> \n"));
}

#[test]
fn last_line_without_newline() {
    assert_eq!(session("y"), ">>> IDENTIFIER: y\nEOF\n>>> \n");
}
