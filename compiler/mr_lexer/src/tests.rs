use mr_ir::TokenKind;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

/// Bytes that exercise every sub-scanner, including the error paths.
const ALPHABET: &[char] = &[
    'a', 'f', 'i', 'e', 'x', '_', '0', '1', '9', '.', ' ', '\t', '\n', ';', '#', '*', '+', '-',
    '/', '=', '<', '>', '!', '&', '|', '{', '}', '(', ')', '[', ']', ',', ':', '\'', '"', '\\',
    'λ', '@',
];

fn source_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET), 0..48)
        .prop_map(|chars| chars.into_iter().collect())
}

#[test]
fn token_list_chunk_follows_config() {
    let source = "a b c d e f g h";
    let tokens = lex(source, &LexConfig::new().with_chunk_divisor(4)).unwrap();
    assert_eq!(tokens.chunk(), source.len() / 4 + 1);
    assert_eq!(tokens.len(), 9);
    assert!(tokens.capacity() >= tokens.len());

    let tokens = lex(source, &LexConfig::default()).unwrap();
    assert_eq!(tokens.chunk(), 1);
}

#[test]
fn config_defaults() {
    let config = LexConfig::default();
    assert_eq!(config.chunk_divisor, 16);
    assert_eq!(config.max_interpolation_depth, 64);
    assert_eq!(config.token_chunk(160), 11);
    assert_eq!(LexConfig::new().with_chunk_divisor(0).token_chunk(5), 6);
}

#[test]
fn statement_sample() {
    let source = "var x: int = 1_0 ** 2\nif x >= 10 { print(f\"x = {x}\") }\n";
    let tokens = lex(source, &LexConfig::default()).unwrap();
    let dump: Vec<String> = tokens.iter().map(ToString::to_string).collect();
    assert_eq!(dump, vec![
        "var",
        "IDENTIFIER: x",
        "COLON",
        "int",
        "ASSIGN",
        "INT: 10",
        "POW",
        "INT: 2",
        "NEWLINE",
        "if",
        "IDENTIFIER: x",
        "GTE",
        "INT: 10",
        "LCURLY",
        "IDENTIFIER: print",
        "LPAREN",
        "FSTR_START",
        "FSTR_FRAGMENT: x = ",
        "LCURLY",
        "IDENTIFIER: x",
        "RCURLY",
        "FSTR_END",
        "RPAREN",
        "RCURLY",
        "NEWLINE",
        "EOF",
    ]);
}

#[test]
fn error_is_returned_alone() {
    let err = lex("a b c $ \"open", &LexConfig::default()).unwrap_err();
    assert_eq!(err.position().map(|p| p.offset), Some(13));
}

proptest! {
    #[test]
    fn relexing_is_deterministic(source in source_strategy()) {
        let config = LexConfig::default();
        prop_assert_eq!(lex(&source, &config), lex(&source, &config));
    }

    #[test]
    fn eof_is_last_and_unique(source in source_strategy()) {
        if let Ok(tokens) = lex(&source, &LexConfig::default()) {
            let eofs = tokens.kinds().filter(|&k| k == TokenKind::Eof).count();
            prop_assert_eq!(eofs, 1);
            prop_assert_eq!(tokens.last_kind(), Some(TokenKind::Eof));
            let eof = tokens.last().unwrap();
            prop_assert_eq!(eof.start.offset as usize, source.len());
            prop_assert_eq!(eof.end.offset, eof.start.offset + 1);
        }
    }

    #[test]
    fn tokens_are_ordered_and_non_empty(source in source_strategy()) {
        if let Ok(tokens) = lex(&source, &LexConfig::default()) {
            let mut previous_end = 0;
            for token in tokens.iter().filter(|t| t.kind != TokenKind::Eof) {
                prop_assert!(token.end.offset > token.start.offset, "{:?}", token);
                prop_assert!(token.start.offset >= previous_end, "{:?}", token);
                previous_end = token.end.offset;
            }
        }
    }

    #[test]
    fn lines_count_consumed_newlines(source in source_strategy()) {
        if let Ok(tokens) = lex(&source, &LexConfig::default()) {
            for token in &tokens {
                let before = &source.as_bytes()[..token.start.offset as usize];
                let newlines = before.iter().filter(|&&b| b == b'\n').count();
                prop_assert_eq!(token.start.line as usize, newlines + 1, "{:?}", token);
            }
        }
    }

    #[test]
    fn errors_point_inside_or_at_end_of_source(source in source_strategy()) {
        if let Err(err) = lex(&source, &LexConfig::default()) {
            let position = err.position().unwrap();
            prop_assert!(position.offset as usize <= source.len());
        }
    }

    #[test]
    fn identifiers_round_trip(name in "[a-z_][a-z0-9_]{0,20}") {
        let tokens = lex(&name, &LexConfig::default()).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        if tokens[0].kind == TokenKind::Ident {
            prop_assert_eq!(tokens[0].text(), Some(name.as_str()));
        } else {
            prop_assert!(tokens[0].kind.is_keyword() || tokens[0].kind.is_type_name());
        }
    }
}
