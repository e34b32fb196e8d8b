//! Token types for the MetaReal lexer.

mod kind;
mod list;

pub use kind::{TokenKind, KEYWORD_BASE, TYPE_BASE};
pub use list::TokenList;

use std::fmt;

use crate::Position;

/// Payload of a token.
///
/// Only identifier, literal and string-fragment tokens own a payload;
/// symbols and keywords carry [`TokenValue::None`].
#[derive(Clone, Eq, PartialEq, Hash, Default)]
pub enum TokenValue {
    #[default]
    None,
    /// Decoded text: identifier name, number digits (separators removed),
    /// or escape-decoded string contents.
    Text(Box<str>),
    /// Decoded character literal.
    Char(char),
}

impl fmt::Debug for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::None => f.write_str("None"),
            TokenValue::Text(text) => write!(f, "{text:?}"),
            TokenValue::Char(c) => write!(f, "{c:?}"),
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::None => Ok(()),
            TokenValue::Text(text) => f.write_str(text),
            TokenValue::Char(c) => write!(f, "{c}"),
        }
    }
}

/// A token with its source extent and optional payload.
///
/// `end.offset > start.offset` for every kind except [`TokenKind::Eof`],
/// whose extent is the single sentinel byte past the source.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub start: Position,
    pub end: Position,
    pub value: TokenValue,
}

impl Token {
    /// Token without a payload.
    #[inline]
    pub fn new(kind: TokenKind, start: Position, end: Position) -> Self {
        Token {
            kind,
            start,
            end,
            value: TokenValue::None,
        }
    }

    #[inline]
    pub fn with_text(
        kind: TokenKind,
        start: Position,
        end: Position,
        text: impl Into<Box<str>>,
    ) -> Self {
        Token {
            kind,
            start,
            end,
            value: TokenValue::Text(text.into()),
        }
    }

    #[inline]
    pub fn with_char(start: Position, end: Position, c: char) -> Self {
        Token {
            kind: TokenKind::Char,
            start,
            end,
            value: TokenValue::Char(c),
        }
    }

    /// Text payload, if any.
    #[inline]
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Source bytes covered by this token.
    #[inline]
    pub fn len(&self) -> u32 {
        self.end.offset - self.start.offset
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if !matches!(self.value, TokenValue::None) {
            write!(f, "({:?})", self.value)?;
        }
        write!(f, " @ {}..{}", self.start.offset, self.end.offset)
    }
}

/// One line of a token dump: `KIND` or `KIND: payload`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            TokenValue::None => f.write_str(self.kind.label()),
            value => write!(f, "{}: {value}", self.kind.label()),
        }
    }
}

/// Typed index into a [`TokenList`].
///
/// Scalar AST nodes and name fields of records refer to their producing
/// token through this index. `u32::MAX` is the "no token" sentinel.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct TokenIdx(u32);

impl TokenIdx {
    /// Sentinel value indicating no token.
    pub const INVALID: TokenIdx = TokenIdx(u32::MAX);

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        TokenIdx(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl Default for TokenIdx {
    fn default() -> Self {
        Self::INVALID
    }
}

static_assert_size!(TokenIdx, 4);
static_assert_size!(TokenKind, 1);

#[cfg(test)]
mod tests;
