//! Lexer errors.
//!
//! Lexing stops at the first error: the partial token list is dropped and
//! the error is returned alone.

use mr_ir::{ArenaError, Position};

/// Why a lexical pass failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A byte that starts no token, including an interior `0x00`.
    #[error("illegal character `{}`", show_byte(*byte))]
    IllegalCharacter { byte: u8, position: Position },

    /// End of input (or the enclosing quote of an interpolated string)
    /// reached before the closing `expected` byte.
    #[error("missing `{}`", show_byte(*expected))]
    MissingTerminator { expected: u8, position: Position },

    /// Growing the token list failed.
    #[error(transparent)]
    OutOfMemory(#[from] ArenaError),

    /// Interpolated strings nested deeper than the configured limit.
    #[error("interpolated strings nested deeper than {limit} levels")]
    NestingTooDeep { limit: u32, position: Position },
}

impl LexError {
    /// Source position of the error, if it has one.
    pub fn position(&self) -> Option<Position> {
        match *self {
            LexError::IllegalCharacter { position, .. }
            | LexError::MissingTerminator { position, .. }
            | LexError::NestingTooDeep { position, .. } => Some(position),
            LexError::OutOfMemory(_) => None,
        }
    }
}

/// Printable ASCII as itself, anything else as `\xNN`.
fn show_byte(byte: u8) -> String {
    if byte.is_ascii_graphic() {
        char::from(byte).to_string()
    } else {
        format!("\\x{byte:02X}")
    }
}

#[cfg(test)]
mod tests;
