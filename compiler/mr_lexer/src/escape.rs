//! Backslash escapes in character, string and interpolated-string literals.
//!
//! | Escape | Result |
//! |--------|--------|
//! | `\0`   | NUL    |
//! | `\a`   | BEL    |
//! | `\b`   | BS     |
//! | `\f`   | FF     |
//! | `\n`   | LF     |
//! | `\r`   | CR     |
//! | `\t`   | TAB    |
//! | `\v`   | VT     |
//!
//! Any other escaped character stands for itself, so `\\`, `\"`, `\{` and
//! an escaped line break are all literal.

use mr_lexer_core::Cursor;

/// Character denoted by `\` + `byte`, for the named escapes only.
#[inline]
pub(crate) fn named_escape(byte: u8) -> Option<char> {
    match byte {
        b'0' => Some('\0'),
        b'a' => Some('\x07'),
        b'b' => Some('\x08'),
        b'f' => Some('\x0C'),
        b'n' => Some('\n'),
        b'r' => Some('\r'),
        b't' => Some('\t'),
        b'v' => Some('\x0B'),
        _ => None,
    }
}

/// Decode the escape whose backslash was just consumed, appending the
/// result to `out`.
///
/// The cursor must not be at end of input. It moves past the escaped
/// character; an escaped `\n` bumps the line.
pub(crate) fn decode_escape(cursor: &mut Cursor<'_>, out: &mut String) {
    if let Some(c) = named_escape(cursor.current()) {
        cursor.advance();
        out.push(c);
        return;
    }
    let start = cursor.pos();
    cursor.bump_char();
    out.push_str(cursor.slice_from(start));
}

#[cfg(test)]
mod tests;
