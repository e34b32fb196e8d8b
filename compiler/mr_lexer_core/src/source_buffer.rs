//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! which lets the scanner detect end of input by looking at the current byte
//! instead of comparing offsets. The total size is rounded up to the next
//! 64-byte boundary with at least three zero bytes after the content, so
//! `peek()` and `peek2()` can read past the end even from the sentinel.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Zero bytes guaranteed after the last source byte: the sentinel plus
/// enough padding for `peek2()` while sitting on the sentinel.
const MIN_TAIL: usize = 3;

/// Largest source file the compiler accepts, in bytes.
///
/// Checked by the driver before a file reaches the lexer; token and node
/// offsets are `u32`, so this leaves plenty of headroom.
pub const MAX_SOURCE_LEN: u32 = 0x00FF_FFFF;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, 0x00, 0x00, padding_zeros...]
///  ^                ^                 ^
///  0                |                 rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer<'src> {
    /// The original text, kept for UTF-8 slicing.
    source: &'src str,
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl<'src> SourceBuffer<'src> {
    /// Copy `source` into a padded, sentinel-terminated buffer.
    ///
    /// Sources longer than `u32::MAX` bytes saturate `len()`; the driver
    /// rejects anything above [`MAX_SOURCE_LEN`] long before that.
    pub fn new(source: &'src str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        let padded_len = (source_len + MIN_TAIL + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        Self {
            source,
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the full buffer including sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the original source text.
    pub fn as_str(&self) -> &'src str {
        self.source
    }

    /// Create a [`Cursor`] at offset 0, line 1.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
