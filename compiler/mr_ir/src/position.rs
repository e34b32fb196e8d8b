//! Source positions.

use std::fmt;

/// A point in the source: byte offset plus 1-based line number.
///
/// Layout: 8 bytes total
/// - offset: u32 - byte offset from file start
/// - line: u32 - line number, starting at 1
///
/// Within one lexical pass positions never move backwards: the line grows
/// by exactly one per consumed `\n` byte.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(C)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
}

impl Position {
    /// Start of every source: offset 0, line 1.
    pub const START: Position = Position { offset: 0, line: 1 };

    #[inline]
    pub const fn new(offset: u32, line: u32) -> Self {
        Position { offset, line }
    }

    /// 1-based column of this position within `source`, counted in
    /// characters from the start of its line.
    ///
    /// Offsets past the end or inside a character clamp to the nearest
    /// preceding boundary.
    pub fn column(self, source: &str) -> u32 {
        let mut offset = (self.offset as usize).min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        let line_start = source[..offset].rfind('\n').map_or(0, |nl| nl + 1);
        let chars = source[line_start..offset].chars().count();
        u32::try_from(chars).map_or(u32::MAX, |c| c.saturating_add(1))
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.offset, self.line)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}", self.line)
    }
}

static_assert_size!(Position, 8);

#[cfg(test)]
mod tests;
