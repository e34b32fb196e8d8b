//! Position-tracking cursor over a sentinel-terminated buffer.
//!
//! The cursor is the position tracker for the whole lexical pass: it holds
//! the byte offset and the 1-based line number, and nothing else mutates
//! them. The line number moves only through [`Cursor::newline`] (directly or
//! via [`Cursor::bump`]), once per consumed `\n` byte.
//!
//! End of input is the sentinel byte (`0x00`) at an offset at or past the
//! source length. A `0x00` before that is an interior null byte, which the
//! scanner reports as an illegal character.

/// Cursor over a [`SourceBuffer`](crate::SourceBuffer).
///
/// [`Copy`], so the scanner can snapshot it for lookahead.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and every byte after it is `0x00`, with at
/// least two bytes of padding past the sentinel.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// The same source as UTF-8 text, used for slicing.
    text: &'a str,
    /// Current byte offset.
    pos: u32,
    /// Current line, starting at 1.
    line: u32,
    /// Length of the source content (excludes sentinel and padding).
    source_len: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], text: &'a str, source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            text,
            pos: 0,
            line: 1,
            source_len,
        }
    }

    /// Byte at the current offset (`0x00` at end of input).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Byte one past the current offset.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Byte two past the current offset.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.buf[self.pos as usize + 2]
    }

    /// Byte at `offset` bytes past the current position, or `0x00` beyond
    /// the buffer.
    #[inline]
    pub fn peek_at(&self, offset: u32) -> u8 {
        self.buf
            .get((self.pos + offset) as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Move forward one byte. Must not be used to consume `\n`.
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(
            self.current() != b'\n',
            "newline bytes must be consumed through newline()"
        );
        self.pos += 1;
    }

    /// Move forward `n` bytes that contain no `\n`.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Consume a `\n` byte: offset moves by one, line by one.
    #[inline]
    pub fn newline(&mut self) {
        self.pos += 1;
        self.line += 1;
    }

    /// Consume one byte, bumping the line if it is `\n`.
    #[inline]
    pub fn bump(&mut self) {
        if self.current() == b'\n' {
            self.newline();
        } else {
            self.pos += 1;
        }
    }

    /// Returns `true` at end of input (sentinel, not an interior null).
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Length of the source content.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Source text between two offsets.
    ///
    /// The scanner only cuts at ASCII delimiters, so both ends are always
    /// character boundaries; an invalid range yields `""`.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.text.get(start as usize..end as usize).unwrap_or_default()
    }

    /// Source text from `start` to the current offset.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// `pred(b'\n')` and `pred(0)` must both be `false`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Number of bytes in the UTF-8 character starting with `byte`.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Consume one full UTF-8 character, bumping the line on `\n`.
    #[inline]
    pub fn bump_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        if width == 1 {
            self.bump();
        } else {
            self.advance_n(width);
        }
    }

    /// Skip spaces, tabs and carriage returns.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        while matches!(self.buf[self.pos as usize], b' ' | b'\t' | b'\r') {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` (not consumed) or to end of input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr(b'\n', remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.source_len;
        }
    }

    /// Advance past the first occurrence of `needle`, counting every `\n`
    /// skipped on the way.
    ///
    /// Returns `false` (cursor at end of input, lines still counted) when the
    /// needle never appears.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_past(&mut self, needle: &[u8]) -> bool {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        let (skipped, found) = match memchr::memmem::find(remaining, needle) {
            Some(offset) => (offset + needle.len(), true),
            None => (remaining.len(), false),
        };
        self.line += memchr::memchr_iter(b'\n', &remaining[..skipped]).count() as u32;
        self.pos += skipped as u32;
        found
    }
}
