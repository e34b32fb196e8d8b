//! Token list with fixed-chunk growth.

use std::fmt;

use super::{Token, TokenIdx, TokenKind};
use crate::ArenaError;

/// Tokens produced by one lexical pass.
///
/// Includes a parallel `tags` array of `u8` discriminants, so the parser can
/// dispatch on kinds without touching the full token.
///
/// The list grows by the same fixed chunk every time it fills, never
/// geometrically. A failed growth request surfaces as
/// [`ArenaError::OutOfMemory`] instead of aborting.
#[derive(Clone)]
pub struct TokenList {
    tokens: Vec<Token>,
    /// `tags[i] == tokens[i].kind.tag()` for all `i`.
    tags: Vec<u8>,
    /// Growth increment in tokens.
    chunk: usize,
}

impl TokenList {
    /// Growth increment used when none is configured.
    pub const DEFAULT_CHUNK: usize = 16;

    /// Create an empty list with the default chunk.
    #[inline]
    pub fn new() -> Self {
        TokenList {
            tokens: Vec::new(),
            tags: Vec::new(),
            chunk: Self::DEFAULT_CHUNK,
        }
    }

    /// Create a list holding `initial` tokens before the first growth,
    /// growing by `chunk` tokens afterwards.
    pub fn with_chunk(initial: usize, chunk: usize) -> Result<Self, ArenaError> {
        let mut tokens = Vec::new();
        let mut tags = Vec::new();
        tokens
            .try_reserve_exact(initial)
            .map_err(|_| ArenaError::OutOfMemory { requested: initial })?;
        tags.try_reserve_exact(initial)
            .map_err(|_| ArenaError::OutOfMemory { requested: initial })?;
        Ok(TokenList {
            tokens,
            tags,
            chunk: chunk.max(1),
        })
    }

    /// Append a token, growing by one chunk when full.
    pub fn push(&mut self, token: Token) -> Result<TokenIdx, ArenaError> {
        if self.tokens.len() == self.tokens.capacity() {
            self.grow()?;
        }
        let idx = TokenIdx::from_raw(to_u32(self.tokens.len())?);
        self.tags.push(token.kind.tag());
        self.tokens.push(token);
        Ok(idx)
    }

    #[cold]
    fn grow(&mut self) -> Result<(), ArenaError> {
        let chunk = self.chunk;
        tracing::trace!(len = self.tokens.len(), chunk, "growing token list");
        self.tokens
            .try_reserve_exact(chunk)
            .map_err(|_| ArenaError::OutOfMemory { requested: chunk })?;
        self.tags
            .try_reserve_exact(chunk)
            .map_err(|_| ArenaError::OutOfMemory { requested: chunk })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Current capacity in tokens.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.tokens.capacity()
    }

    /// Growth increment in tokens.
    #[inline]
    pub fn chunk(&self) -> usize {
        self.chunk
    }

    #[inline]
    pub fn get(&self, idx: TokenIdx) -> Option<&Token> {
        self.tokens.get(idx.index())
    }

    /// Most recently pushed token.
    #[inline]
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// Kind of the most recently pushed token.
    #[inline]
    pub fn last_kind(&self) -> Option<TokenKind> {
        self.tags.last().copied().and_then(TokenKind::from_u8)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Dense tag array, one discriminant per token.
    #[inline]
    pub fn tags(&self) -> &[u8] {
        &self.tags
    }

    /// Token kinds in order.
    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.tokens.iter().map(|token| token.kind)
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl Default for TokenList {
    fn default() -> Self {
        Self::new()
    }
}

// Growth settings are not part of the content.
impl PartialEq for TokenList {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}
impl Eq for TokenList {}

fn to_u32(len: usize) -> Result<u32, ArenaError> {
    u32::try_from(len).map_err(|_| ArenaError::IndexOverflow { len })
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenList({} tokens)", self.tokens.len())
    }
}

/// Token dump: one token per line, ending with `EOF`.
impl fmt::Display for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            writeln!(f, "{token}")?;
        }
        Ok(())
    }
}

impl std::ops::Index<TokenIdx> for TokenList {
    type Output = Token;

    #[inline]
    #[track_caller]
    fn index(&self, idx: TokenIdx) -> &Self::Output {
        &self.tokens[idx.index()]
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl IntoIterator for TokenList {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
