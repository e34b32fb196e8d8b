//! Lexer for MetaReal.
//!
//! A single hand-written pass over a sentinel-terminated
//! [`SourceBuffer`](mr_lexer_core::SourceBuffer), producing a
//! [`TokenList`] that ends in exactly one `Eof` token.
//!
//! # Pipeline
//!
//! ```text
//! source → SourceBuffer → Cursor → Scanner → TokenList
//! ```
//!
//! - **Scanner**: byte dispatch with per-operator lookahead, literal
//!   decoding, and recursive re-entry for `{...}` in interpolated strings
//! - **Keywords**: length-bucketed keyword and type-name tables
//! - **Separators**: a line break becomes a `Newline` token only after a
//!   token that can end a statement
//!
//! Lexing stops at the first error; see [`LexError`].

mod config;
mod escape;
mod keywords;
mod lex_error;
mod scanner;

pub use config::LexConfig;
pub use lex_error::LexError;

use mr_ir::TokenList;
use mr_lexer_core::SourceBuffer;
use tracing::debug;

use crate::scanner::Scanner;

/// Lex `source` into tokens.
///
/// On error every token scanned so far is dropped with the list.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &str, config: &LexConfig) -> Result<TokenList, LexError> {
    let buffer = SourceBuffer::new(source);
    let tokens = Scanner::new(buffer.cursor(), config)?.run()?;
    debug!(
        tokens = tokens.len(),
        capacity = tokens.capacity(),
        "lexed"
    );
    Ok(tokens)
}

#[cfg(test)]
mod tests;
