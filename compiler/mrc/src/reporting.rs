//! Rendering lexer errors for the terminal.
//!
//! ```text
//! main.mr:2:9: error: missing `"`
//!  2 | print("hi
//!    |          ^
//! ```

use std::fmt::Write;

use mr_lexer::LexError;

/// Render `error` against the source it came from.
///
/// Errors without a position (allocation failures) get the header line only.
pub fn render_lex_error(name: &str, source: &str, error: &LexError) -> String {
    let Some(position) = error.position() else {
        return format!("{name}: error: {error}\n");
    };
    let mut offset = (position.offset as usize).min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[line_start..]
        .find('\n')
        .map_or(source.len(), |i| line_start + i);
    let text = source[line_start..line_end].trim_end_matches('\r');
    let before = &source[line_start..offset];
    let column = before.chars().count() + 1;

    let number = position.line.to_string();
    let gutter = " ".repeat(number.len());
    // Keep tabs so the caret lines up with the echoed line.
    let indent: String = before
        .chars()
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "{name}:{number}:{column}: error: {error}");
    let _ = writeln!(out, " {number} | {text}");
    let _ = writeln!(out, " {gutter} | {indent}^");
    out
}
