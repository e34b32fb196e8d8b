//! Number, character, string and interpolated-string literals.

use mr_ir::{Position, Token, TokenKind};

use super::{Mode, Quote, Scanner};
use crate::escape;
use crate::LexError;

/// Why literal text stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Stop {
    /// On the closing quote (not consumed).
    Close,
    /// On an unescaped `{` of an interpolated string (not consumed).
    Brace,
}

impl Scanner<'_> {
    // ─── Numbers ───────────────────────────────────────────────────

    /// Digits with `_` separators, at most one `.`, an optional exponent,
    /// and an optional imaginary `i`. Separators and the `i` are left out of
    /// the payload.
    pub(super) fn number(&mut self, start: Position) -> Result<(), LexError> {
        self.scratch.clear();
        let mut kind = TokenKind::Int;

        self.digits();
        if self.cursor.current() == b'.' {
            self.cursor.advance();
            self.scratch.push('.');
            self.digits();
            kind = TokenKind::Float;
        }
        if matches!(self.cursor.current(), b'e' | b'E') && self.exponent_follows() {
            self.scratch.push(char::from(self.cursor.current()));
            self.cursor.advance();
            if matches!(self.cursor.current(), b'+' | b'-') {
                self.scratch.push(char::from(self.cursor.current()));
                self.cursor.advance();
            }
            self.digits();
            kind = TokenKind::Float;
        }
        if self.cursor.current() == b'i' && !self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            kind = TokenKind::Imaginary;
        }

        let token = Token::with_text(kind, start, self.position(), self.scratch.as_str());
        self.push(token)
    }

    fn digits(&mut self) {
        loop {
            match self.cursor.current() {
                digit @ b'0'..=b'9' => {
                    self.scratch.push(char::from(digit));
                    self.cursor.advance();
                }
                b'_' => self.cursor.advance(),
                _ => return,
            }
        }
    }

    /// `e`/`E` starts an exponent only when digits follow, after at most
    /// one sign.
    fn exponent_follows(&self) -> bool {
        match self.cursor.peek() {
            b'0'..=b'9' => true,
            b'+' | b'-' => self.cursor.peek2().is_ascii_digit(),
            _ => false,
        }
    }

    // ─── Characters & Strings ──────────────────────────────────────

    /// A quoted literal. Single quotes around exactly one (possibly escaped)
    /// character make a `Char`; anything else is a `Str`.
    pub(super) fn quoted(
        &mut self,
        start: Position,
        quote: Quote,
        mode: Mode,
    ) -> Result<(), LexError> {
        self.cursor.advance_n(quote.len());
        if quote.byte == b'\'' {
            if let Some(c) = self.char_literal(quote, mode.fence()) {
                return self.push(Token::with_char(start, self.position(), c));
            }
        }

        let stop = self.literal_text(quote, mode.fence(), false)?;
        debug_assert_eq!(stop, Stop::Close);
        self.cursor.advance_n(quote.len());
        let token = Token::with_text(TokenKind::Str, start, self.position(), self.scratch.as_str());
        self.push(token)
    }

    /// Scan one character and the closing quote on a copy of the cursor,
    /// committing only if both are there.
    fn char_literal(&mut self, quote: Quote, fence: Option<u8>) -> Option<char> {
        let mut probe = self.cursor;
        let c = match probe.current() {
            0 => return None,
            _ if quote.at(&probe) => return None,
            b'\\' => {
                probe.advance();
                if probe.is_eof() {
                    return None;
                }
                self.scratch.clear();
                escape::decode_escape(&mut probe, &mut self.scratch);
                self.scratch.chars().next()?
            }
            byte if Some(byte) == fence => return None,
            _ => {
                let from = probe.pos();
                probe.bump_char();
                probe.slice_from(from).chars().next()?
            }
        };
        if !quote.at(&probe) {
            return None;
        }
        probe.advance_n(quote.len());
        self.cursor = probe;
        Some(c)
    }

    /// Decode literal text into `scratch` up to the closing quote, or, for
    /// interpolated strings, an unescaped `{`.
    ///
    /// Reaching end of input, or a bare `fence` quote, is a missing closing
    /// quote. An interior `0x00` is an illegal character.
    fn literal_text(
        &mut self,
        quote: Quote,
        fence: Option<u8>,
        interpolated: bool,
    ) -> Result<Stop, LexError> {
        self.scratch.clear();
        let mut run = self.cursor.pos();
        loop {
            let byte = self.cursor.current();
            let stop = if quote.at(&self.cursor) {
                Some(Stop::Close)
            } else if interpolated && byte == b'{' {
                Some(Stop::Brace)
            } else {
                None
            };
            if let Some(stop) = stop {
                self.flush(run);
                return Ok(stop);
            }

            match byte {
                0 if self.cursor.is_eof() => return Err(self.missing(quote.byte)),
                0 => {
                    return Err(LexError::IllegalCharacter {
                        byte,
                        position: self.position(),
                    })
                }
                b'\\' => {
                    self.flush(run);
                    self.cursor.advance();
                    if self.cursor.is_eof() {
                        return Err(self.missing(quote.byte));
                    }
                    escape::decode_escape(&mut self.cursor, &mut self.scratch);
                    run = self.cursor.pos();
                }
                _ if Some(byte) == fence => return Err(self.missing(quote.byte)),
                _ => self.cursor.bump(),
            }
        }
    }

    /// Append the undecoded source run from `run` to the cursor.
    #[inline]
    fn flush(&mut self, run: u32) {
        let text = self.cursor.slice_from(run);
        self.scratch.push_str(text);
    }

    fn missing(&self, expected: u8) -> LexError {
        LexError::MissingTerminator {
            expected,
            position: self.position(),
        }
    }

    // ─── Interpolated Strings ──────────────────────────────────────

    /// `f"..."`: `FStrStart`, then literal fragments alternating with
    /// `{...}` interpolations, then `FStrEnd`.
    pub(super) fn interpolated_string(
        &mut self,
        start: Position,
        quote: Quote,
        mode: Mode,
    ) -> Result<(), LexError> {
        self.cursor.advance_n(1 + quote.len()); // consume 'f' and the quote
        self.push(Token::new(TokenKind::FStrStart, start, self.position()))?;

        let base = match mode {
            Mode::TopLevel => quote.byte,
            Mode::Interpolation { base, .. } => base,
        };
        let inner = Mode::Interpolation { quote, base };

        loop {
            let fragment_start = self.position();
            let stop = self.literal_text(quote, mode.fence(), true)?;
            if self.cursor.pos() > fragment_start.offset {
                let token = Token::with_text(
                    TokenKind::FStrFragment,
                    fragment_start,
                    self.position(),
                    self.scratch.as_str(),
                );
                self.push(token)?;
            }
            match stop {
                Stop::Close => {
                    let close = self.position();
                    return self.op(close, quote.len(), TokenKind::FStrEnd);
                }
                Stop::Brace => self.interpolation(inner)?,
            }
        }
    }

    /// `{ expr }` inside an interpolated string: re-enter the dispatch one
    /// token at a time until the `}` that balances the opening `{`.
    fn interpolation(&mut self, mode: Mode) -> Result<(), LexError> {
        let start = self.position();
        if self.depth >= self.config.max_interpolation_depth {
            return Err(LexError::NestingTooDeep {
                limit: self.config.max_interpolation_depth,
                position: start,
            });
        }
        self.op(start, 1, TokenKind::LCurly)?;

        self.depth += 1;
        tracing::trace!(depth = self.depth, offset = start.offset, "enter interpolation");
        let result = mr_stack::ensure_sufficient_stack(|| self.interpolation_body(mode));
        self.depth -= 1;
        result
    }

    fn interpolation_body(&mut self, mode: Mode) -> Result<(), LexError> {
        let mut braces = 0u32;
        loop {
            let start = self.position();
            if self.cursor.is_eof() || mode.closes(&self.cursor) {
                return Err(self.missing(b'}'));
            }
            match self.cursor.current() {
                b'{' => {
                    braces += 1;
                    self.op(start, 1, TokenKind::LCurly)?;
                }
                b'}' => {
                    self.op(start, 1, TokenKind::RCurly)?;
                    if braces == 0 {
                        return Ok(());
                    }
                    braces -= 1;
                }
                _ => self.next_token(mode)?,
            }
        }
    }
}
