//! Keyword and type-name classification.
//!
//! Two tables, each sorted by word length. An identifier is first rejected
//! if it is longer than the table's longest word, then compared only
//! against the words of its own length. The keyword table is checked
//! before the type table.
//!
//! Table order is the `TokenKind` discriminant order: word `i` of the
//! keyword table is `KEYWORD_BASE + i`, word `i` of the type table is
//! `TYPE_BASE + i`.

use mr_ir::TokenKind;

const KEYWORDS: [&str; TokenKind::KEYWORD_COUNT as usize] = [
    "if", "in", "is", "or", "to", "do", //
    "and", "for", "not", "var", //
    "elif", "else", "case", "func", "none", "true", "step", //
    "while", "false", "break", "const", "class", //
    "global", "import", "static", "public", "switch", "return", "struct", //
    "default", "private", "include", //
    "continue", "readonly", //
    "protected",
];

/// `(first, end)` table indices of the keywords of each length.
const KEYWORD_BUCKETS: [(u8, u8); 10] = [
    (0, 0),
    (0, 0),
    (0, 6),
    (6, 10),
    (10, 17),
    (17, 22),
    (22, 29),
    (29, 32),
    (32, 34),
    (34, 35),
];

const TYPES: [&str; TokenKind::TYPE_COUNT as usize] = [
    "int", "str", "set", //
    "char", "bool", "list", "dict", "type", //
    "float", "tuple", //
    "complex",
];

/// `(first, end)` table indices of the type names of each length.
const TYPE_BUCKETS: [(u8, u8); 8] = [
    (0, 0),
    (0, 0),
    (0, 0),
    (0, 3),
    (3, 8),
    (8, 10),
    (10, 10),
    (10, 11),
];

/// Kind of an identifier-shaped word: a keyword, a type name, or
/// [`TokenKind::Ident`].
#[inline]
pub(crate) fn classify(text: &str) -> TokenKind {
    lookup(text, &KEYWORDS, &KEYWORD_BUCKETS)
        .and_then(TokenKind::keyword)
        .or_else(|| lookup(text, &TYPES, &TYPE_BUCKETS).and_then(TokenKind::type_name))
        .unwrap_or(TokenKind::Ident)
}

/// Table index of `text`, comparing only against same-length words.
fn lookup(text: &str, table: &[&str], buckets: &[(u8, u8)]) -> Option<u8> {
    let &(first, end) = buckets.get(text.len())?;
    (first..end).find(|&i| table[usize::from(i)] == text)
}
