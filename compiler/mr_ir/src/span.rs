//! Byte spans for AST records.

use std::fmt;

/// Half-open byte range `start..end` in the source.
///
/// Layout: 8 bytes total
/// - start: u32 - byte offset of the first byte
/// - end: u32 - byte offset one past the last byte
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(C)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Dummy span for synthesized records.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Smallest span covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

static_assert_size!(Span, 8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_contains() {
        let span = Span::new(10, 20);
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());
        assert!(span.contains(10));
        assert!(!span.contains(20));
    }

    #[test]
    fn merge_covers_both() {
        assert_eq!(Span::new(10, 20).merge(Span::new(4, 12)), Span::new(4, 20));
    }

    #[test]
    fn to_range_slices_source() {
        let source = "var x = 10";
        assert_eq!(&source[Span::new(4, 5).to_range()], "x");
    }
}
