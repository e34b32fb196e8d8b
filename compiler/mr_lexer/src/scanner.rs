//! Byte-dispatch scanner.
//!
//! One `match` on the current byte selects the sub-scanner for the next
//! token. Operators are resolved with at most two bytes of lookahead,
//! longest match first. Literal scanning (numbers, characters, strings and
//! interpolated strings) lives in [`literal`].
//!
//! Interpolated strings re-enter [`Scanner::next_token`] for every token
//! between `{` and the matching `}`, so the scanner is recursive in the
//! nesting depth of interpolations and nothing else.

mod literal;

use mr_ir::{Position, Token, TokenKind, TokenList};
use mr_lexer_core::Cursor;

use crate::keywords;
use crate::{LexConfig, LexError};

/// Closing delimiter of a quoted literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Quote {
    /// `'` or `"`.
    byte: u8,
    /// Written `\'` or `\"`, as literals inside an interpolation are.
    escaped: bool,
}

impl Quote {
    const fn bare(byte: u8) -> Self {
        Quote {
            byte,
            escaped: false,
        }
    }

    const fn escaped(byte: u8) -> Self {
        Quote {
            byte,
            escaped: true,
        }
    }

    /// Bytes the delimiter occupies.
    const fn len(self) -> u32 {
        if self.escaped {
            2
        } else {
            1
        }
    }

    /// Whether the cursor sits on this delimiter.
    #[inline]
    fn at(self, cursor: &Cursor<'_>) -> bool {
        if self.escaped {
            cursor.current() == b'\\' && cursor.peek() == self.byte
        } else {
            cursor.current() == self.byte
        }
    }
}

/// Where the scanner is dispatching from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Mode {
    TopLevel,
    /// Inside `{...}` of an interpolated string closed by `quote`. `base` is
    /// the bare quote of the outermost interpolated string.
    Interpolation { quote: Quote, base: u8 },
}

impl Mode {
    /// Whether `quote` opens a nested literal here, rather than closing the
    /// enclosing interpolated string.
    fn opens(self, quote: Quote) -> bool {
        match self {
            Mode::TopLevel => !quote.escaped,
            Mode::Interpolation {
                quote: enclosing,
                base,
            } => {
                if quote.escaped {
                    quote != enclosing
                } else {
                    quote.byte != base
                }
            }
        }
    }

    /// Whether the cursor sits on the closing quote of the enclosing
    /// interpolated string.
    fn closes(self, cursor: &Cursor<'_>) -> bool {
        match self {
            Mode::TopLevel => false,
            Mode::Interpolation { quote, base } => quote.at(cursor) || cursor.current() == base,
        }
    }

    /// Bare quote that no literal scanned in this mode may contain.
    fn fence(self) -> Option<u8> {
        match self {
            Mode::TopLevel => None,
            Mode::Interpolation { base, .. } => Some(base),
        }
    }
}

/// Single-pass scanner producing a [`TokenList`].
pub(crate) struct Scanner<'a> {
    cursor: Cursor<'a>,
    tokens: TokenList,
    config: LexConfig,
    /// Interpolations currently open.
    depth: u32,
    /// Decoded payload of the literal being scanned.
    scratch: String,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(cursor: Cursor<'a>, config: &LexConfig) -> Result<Self, LexError> {
        let chunk = config.token_chunk(cursor.source_len() as usize);
        Ok(Scanner {
            cursor,
            tokens: TokenList::with_chunk(chunk, chunk)?,
            config: *config,
            depth: 0,
            scratch: String::new(),
        })
    }

    /// Scan to end of input and append the `Eof` token.
    pub(crate) fn run(mut self) -> Result<TokenList, LexError> {
        while !self.cursor.is_eof() {
            self.next_token(Mode::TopLevel)?;
        }
        self.eof()?;
        Ok(self.tokens)
    }

    /// Scan from the current byte. Emits no token for whitespace, comments
    /// and suppressed separators, and several for an interpolated string.
    ///
    /// Must not be called at end of input.
    fn next_token(&mut self, mode: Mode) -> Result<(), LexError> {
        let start = self.position();
        match self.cursor.current() {
            b' ' | b'\t' | b'\r' => {
                self.cursor.eat_whitespace();
                Ok(())
            }
            b'\n' => self.newline(start, mode),
            b';' => self.semicolon(start),
            b'#' => self.comment(),

            b'f' => self.f_prefix(start, mode),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'.' if self.cursor.peek().is_ascii_digit() => self.number(start),
            b'.' => self.dot(start),

            quote @ (b'\'' | b'"') => self.quoted(start, Quote::bare(quote), mode),
            b'\\' if matches!(self.cursor.peek(), b'\'' | b'"')
                && mode.opens(Quote::escaped(self.cursor.peek())) =>
            {
                self.quoted(start, Quote::escaped(self.cursor.peek()), mode)
            }

            b'+' => self.plus(start),
            b'-' => self.minus(start),
            b'*' => self.star(start),
            b'/' => self.slash(start),
            b'%' => self.percent(start),
            b'&' => self.ampersand(start),
            b'|' => self.pipe(start),
            b'^' => self.caret(start),
            b'<' => self.less(start),
            b'>' => self.greater(start),
            b'=' => self.equal(start),
            b'!' => self.bang(start),
            b'~' => self.op(start, 1, TokenKind::BitNot),

            b'(' => self.op(start, 1, TokenKind::LParen),
            b')' => self.op(start, 1, TokenKind::RParen),
            b'[' => self.op(start, 1, TokenKind::LBracket),
            b']' => self.op(start, 1, TokenKind::RBracket),
            b'{' => self.op(start, 1, TokenKind::LCurly),
            b'}' => self.op(start, 1, TokenKind::RCurly),
            b',' => self.op(start, 1, TokenKind::Comma),
            b':' => self.op(start, 1, TokenKind::Colon),
            b'?' => self.op(start, 1, TokenKind::Question),
            b'$' => self.op(start, 1, TokenKind::Dollar),

            byte => Err(LexError::IllegalCharacter {
                byte,
                position: start,
            }),
        }
    }

    // ─── Bookkeeping ───────────────────────────────────────────────

    #[inline]
    fn position(&self) -> Position {
        Position::new(self.cursor.pos(), self.cursor.line())
    }

    #[inline]
    fn push(&mut self, token: Token) -> Result<(), LexError> {
        self.tokens.push(token)?;
        Ok(())
    }

    /// Consume `len` bytes and emit a payload-free `kind` token over them.
    #[inline]
    fn op(&mut self, start: Position, len: u32, kind: TokenKind) -> Result<(), LexError> {
        self.cursor.advance_n(len);
        self.push(Token::new(kind, start, self.position()))
    }

    /// The end-of-input token spans the sentinel byte.
    fn eof(&mut self) -> Result<(), LexError> {
        let start = self.position();
        let end = Position::new(start.offset + 1, start.line);
        self.push(Token::new(TokenKind::Eof, start, end))
    }

    // ─── Separators & Comments ─────────────────────────────────────

    /// A line break ends the statement only after a value-ending token;
    /// elsewhere, and anywhere inside an interpolation, it is whitespace.
    fn newline(&mut self, start: Position, mode: Mode) -> Result<(), LexError> {
        self.cursor.newline();
        if mode != Mode::TopLevel {
            return Ok(());
        }
        if self.tokens.last_kind().is_some_and(TokenKind::ends_value) {
            self.push(Token::new(TokenKind::Newline, start, self.position()))?;
        }
        Ok(())
    }

    /// `;` is dropped at the start of input and after another separator.
    fn semicolon(&mut self, start: Position) -> Result<(), LexError> {
        match self.tokens.last_kind() {
            Some(kind) if !kind.is_separator() => self.op(start, 1, TokenKind::Semicolon),
            _ => {
                self.cursor.advance();
                Ok(())
            }
        }
    }

    /// `# ...` to end of line, or `#* ... *#` (not nesting).
    fn comment(&mut self) -> Result<(), LexError> {
        self.cursor.advance(); // consume '#'
        if self.cursor.current() != b'*' {
            self.cursor.eat_until_newline_or_eof();
            return Ok(());
        }
        self.cursor.advance(); // consume '*'
        if self.cursor.eat_past(b"*#") {
            Ok(())
        } else {
            Err(LexError::MissingTerminator {
                expected: b'#',
                position: self.position(),
            })
        }
    }

    // ─── Identifiers ───────────────────────────────────────────────

    /// `f` directly followed by an opening quote starts an interpolated
    /// string; otherwise it starts an identifier.
    fn f_prefix(&mut self, start: Position, mode: Mode) -> Result<(), LexError> {
        let quote = match self.cursor.peek() {
            byte @ (b'\'' | b'"') => Some(Quote::bare(byte)),
            b'\\' if matches!(self.cursor.peek2(), b'\'' | b'"') => {
                Some(Quote::escaped(self.cursor.peek2()))
            }
            _ => None,
        };
        match quote {
            Some(quote) if mode.opens(quote) => self.interpolated_string(start, quote, mode),
            _ => self.identifier(start),
        }
    }

    fn identifier(&mut self, start: Position) -> Result<(), LexError> {
        self.cursor
            .eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        let text = self.cursor.slice_from(start.offset);
        let end = self.position();
        let token = match keywords::classify(text) {
            TokenKind::Ident => Token::with_text(TokenKind::Ident, start, end, text),
            kind => Token::new(kind, start, end),
        };
        self.push(token)
    }

    // ─── Operators ─────────────────────────────────────────────────

    fn dot(&mut self, start: Position) -> Result<(), LexError> {
        if self.cursor.peek() == b'.' && self.cursor.peek2() == b'.' {
            self.op(start, 3, TokenKind::Ellipsis)
        } else {
            self.op(start, 1, TokenKind::Dot)
        }
    }

    fn plus(&mut self, start: Position) -> Result<(), LexError> {
        match self.cursor.peek() {
            b'+' => self.op(start, 2, TokenKind::Inc),
            b'=' => self.op(start, 2, TokenKind::AddAssign),
            _ => self.op(start, 1, TokenKind::Add),
        }
    }

    fn minus(&mut self, start: Position) -> Result<(), LexError> {
        match self.cursor.peek() {
            b'-' => self.op(start, 2, TokenKind::Dec),
            b'>' => self.op(start, 2, TokenKind::Link),
            b'=' => self.op(start, 2, TokenKind::SubAssign),
            _ => self.op(start, 1, TokenKind::Sub),
        }
    }

    fn star(&mut self, start: Position) -> Result<(), LexError> {
        match (self.cursor.peek(), self.cursor.peek2()) {
            (b'*', b'=') => self.op(start, 3, TokenKind::PowAssign),
            (b'*', _) => self.op(start, 2, TokenKind::Pow),
            (b'=', _) => self.op(start, 2, TokenKind::MulAssign),
            _ => self.op(start, 1, TokenKind::Mul),
        }
    }

    fn slash(&mut self, start: Position) -> Result<(), LexError> {
        match (self.cursor.peek(), self.cursor.peek2()) {
            (b'/', b'=') => self.op(start, 3, TokenKind::QuotAssign),
            (b'/', _) => self.op(start, 2, TokenKind::Quot),
            (b'=', _) => self.op(start, 2, TokenKind::DivAssign),
            _ => self.op(start, 1, TokenKind::Div),
        }
    }

    fn percent(&mut self, start: Position) -> Result<(), LexError> {
        if self.cursor.peek() == b'=' {
            self.op(start, 2, TokenKind::ModAssign)
        } else {
            self.op(start, 1, TokenKind::Mod)
        }
    }

    /// `&&` is the `and` keyword.
    fn ampersand(&mut self, start: Position) -> Result<(), LexError> {
        match self.cursor.peek() {
            b'&' => self.op(start, 2, TokenKind::And),
            b'=' => self.op(start, 2, TokenKind::BitAndAssign),
            _ => self.op(start, 1, TokenKind::BitAnd),
        }
    }

    /// `||` is the `or` keyword.
    fn pipe(&mut self, start: Position) -> Result<(), LexError> {
        match self.cursor.peek() {
            b'|' => self.op(start, 2, TokenKind::Or),
            b'=' => self.op(start, 2, TokenKind::BitOrAssign),
            _ => self.op(start, 1, TokenKind::BitOr),
        }
    }

    fn caret(&mut self, start: Position) -> Result<(), LexError> {
        if self.cursor.peek() == b'=' {
            self.op(start, 2, TokenKind::BitXorAssign)
        } else {
            self.op(start, 1, TokenKind::BitXor)
        }
    }

    fn less(&mut self, start: Position) -> Result<(), LexError> {
        match (self.cursor.peek(), self.cursor.peek2()) {
            (b'<', b'=') => self.op(start, 3, TokenKind::ShlAssign),
            (b'<', _) => self.op(start, 2, TokenKind::Shl),
            (b'=', _) => self.op(start, 2, TokenKind::LessEq),
            _ => self.op(start, 1, TokenKind::Less),
        }
    }

    fn greater(&mut self, start: Position) -> Result<(), LexError> {
        match (self.cursor.peek(), self.cursor.peek2()) {
            (b'>', b'=') => self.op(start, 3, TokenKind::ShrAssign),
            (b'>', _) => self.op(start, 2, TokenKind::Shr),
            (b'=', _) => self.op(start, 2, TokenKind::GreaterEq),
            _ => self.op(start, 1, TokenKind::Greater),
        }
    }

    fn equal(&mut self, start: Position) -> Result<(), LexError> {
        match (self.cursor.peek(), self.cursor.peek2()) {
            (b'=', b'=') => self.op(start, 3, TokenKind::ExEq),
            (b'=', _) => self.op(start, 2, TokenKind::Eq),
            _ => self.op(start, 1, TokenKind::Assign),
        }
    }

    /// A lone `!` is the `not` keyword.
    fn bang(&mut self, start: Position) -> Result<(), LexError> {
        match (self.cursor.peek(), self.cursor.peek2()) {
            (b'=', b'=') => self.op(start, 3, TokenKind::ExNotEq),
            (b'=', _) => self.op(start, 2, TokenKind::NotEq),
            _ => self.op(start, 1, TokenKind::Not),
        }
    }
}
