use pretty_assertions::assert_eq;

use super::*;

fn pos(offset: u32) -> Position {
    Position::new(offset, 1)
}

// === TokenKind layout ===

#[test]
fn from_u8_round_trips_every_kind() {
    for &kind in TokenKind::ALL {
        assert_eq!(TokenKind::from_u8(kind.tag()), Some(kind));
    }
}

#[test]
fn from_u8_rejects_gaps() {
    assert_eq!(TokenKind::from_u8(9), None);
    assert_eq!(TokenKind::from_u8(51), None);
    assert_eq!(TokenKind::from_u8(255), None);
}

#[test]
fn keyword_range_is_contiguous() {
    assert_eq!(TokenKind::KEYWORD_COUNT, 35);
    for index in 0..TokenKind::KEYWORD_COUNT {
        let kind = TokenKind::keyword(index);
        assert!(kind.is_some_and(TokenKind::is_keyword), "keyword {index} missing");
    }
    assert_eq!(TokenKind::keyword(0), Some(TokenKind::If));
    assert_eq!(TokenKind::keyword(34), Some(TokenKind::Protected));
    assert_eq!(TokenKind::keyword(35), None);
}

#[test]
fn type_range_is_contiguous() {
    assert_eq!(TokenKind::TYPE_COUNT, 11);
    assert_eq!(TokenKind::type_name(0), Some(TokenKind::IntType));
    assert_eq!(TokenKind::type_name(10), Some(TokenKind::ComplexType));
    assert_eq!(TokenKind::type_name(11), None);
    assert!(TokenKind::FloatType.is_type_name());
    assert!(!TokenKind::Float.is_type_name());
}

#[test]
fn categories_do_not_overlap() {
    for &kind in TokenKind::ALL {
        let categories = [
            kind.is_literal(),
            kind.is_keyword(),
            kind.is_type_name(),
            kind.is_compound_assign(),
            kind.is_separator(),
        ];
        let count = categories.iter().filter(|&&c| c).count();
        assert!(count <= 1, "{kind:?} is in {count} categories");
    }
}

#[test]
fn payload_kinds() {
    assert!(TokenKind::Ident.has_payload());
    assert!(TokenKind::FStrFragment.has_payload());
    assert!(!TokenKind::FStrStart.has_payload());
    assert!(!TokenKind::If.has_payload());
    assert!(!TokenKind::Add.has_payload());
}

#[test]
fn value_ending_kinds() {
    for kind in [
        TokenKind::Ident,
        TokenKind::Int,
        TokenKind::Str,
        TokenKind::RParen,
        TokenKind::RBracket,
        TokenKind::RCurly,
        TokenKind::FStrEnd,
        TokenKind::True,
        TokenKind::None,
        TokenKind::Return,
        TokenKind::Continue,
        TokenKind::DictType,
    ] {
        assert!(kind.ends_value(), "{kind:?} should end a value");
    }
    for kind in [
        TokenKind::Add,
        TokenKind::LParen,
        TokenKind::Comma,
        TokenKind::If,
        TokenKind::Var,
        TokenKind::FStrStart,
        TokenKind::Newline,
    ] {
        assert!(!kind.ends_value(), "{kind:?} should not end a value");
    }
}

#[test]
fn labels() {
    assert_eq!(TokenKind::Ident.label(), "IDENTIFIER");
    assert_eq!(TokenKind::While.label(), "while");
    assert_eq!(TokenKind::TupleType.label(), "tuple");
    assert_eq!(TokenKind::PowAssign.label(), "POW_ASSIGN");
    assert_eq!(TokenKind::Eof.to_string(), "EOF");
}

// === Token ===

#[test]
fn token_display_matches_dump_format() {
    let ident = Token::with_text(TokenKind::Ident, pos(0), pos(3), "abc");
    let plus = Token::new(TokenKind::Add, pos(4), pos(5));
    let chr = Token::with_char(pos(6), pos(9), 'x');
    assert_eq!(ident.to_string(), "IDENTIFIER: abc");
    assert_eq!(plus.to_string(), "ADD");
    assert_eq!(chr.to_string(), "CHAR: x");
}

#[test]
fn token_text_and_len() {
    let token = Token::with_text(TokenKind::Int, pos(2), pos(7), "1000");
    assert_eq!(token.text(), Some("1000"));
    assert_eq!(token.len(), 5);
    assert_eq!(Token::new(TokenKind::Dot, pos(0), pos(1)).text(), None);
}

#[test]
fn token_idx_sentinel() {
    assert!(!TokenIdx::INVALID.is_valid());
    assert!(TokenIdx::from_raw(0).is_valid());
    assert_eq!(TokenIdx::default(), TokenIdx::INVALID);
}

// === TokenList ===

#[test]
fn push_returns_sequential_indices() {
    let mut list = TokenList::new();
    let a = list.push(Token::new(TokenKind::Add, pos(0), pos(1)));
    let b = list.push(Token::new(TokenKind::Sub, pos(1), pos(2)));
    assert_eq!(a, Ok(TokenIdx::from_raw(0)));
    assert_eq!(b, Ok(TokenIdx::from_raw(1)));
    assert_eq!(list[TokenIdx::from_raw(1)].kind, TokenKind::Sub);
    assert_eq!(list.last_kind(), Some(TokenKind::Sub));
}

#[test]
fn tags_parallel_tokens() {
    let mut list = TokenList::new();
    for kind in [TokenKind::Ident, TokenKind::Assign, TokenKind::Int] {
        list.push(Token::new(kind, pos(0), pos(1))).unwrap();
    }
    let expected: Vec<u8> = list.kinds().map(TokenKind::tag).collect();
    assert_eq!(list.tags(), expected.as_slice());
}

#[test]
fn grows_by_fixed_chunk() {
    let mut list = TokenList::with_chunk(2, 5).unwrap();
    assert_eq!(list.capacity(), 2);
    for i in 0..3 {
        list.push(Token::new(TokenKind::Comma, pos(i), pos(i + 1))).unwrap();
    }
    // 2 initial + one chunk of 5.
    assert_eq!(list.capacity(), 7);
    for i in 3..8 {
        list.push(Token::new(TokenKind::Comma, pos(i), pos(i + 1))).unwrap();
    }
    assert_eq!(list.capacity(), 12);
    assert_eq!(list.len(), 8);
}

#[test]
fn equality_ignores_growth_settings() {
    let mut a = TokenList::with_chunk(1, 1).unwrap();
    let mut b = TokenList::with_chunk(64, 64).unwrap();
    for list in [&mut a, &mut b] {
        list.push(Token::with_text(TokenKind::Ident, pos(0), pos(1), "x"))
            .unwrap();
    }
    assert_eq!(a, b);
}

#[test]
fn display_dumps_one_token_per_line() {
    let mut list = TokenList::new();
    list.push(Token::with_text(TokenKind::Int, pos(0), pos(1), "1"))
        .unwrap();
    list.push(Token::new(TokenKind::Eof, pos(1), pos(2))).unwrap();
    assert_eq!(list.to_string(), "INT: 1\nEOF\n");
}
