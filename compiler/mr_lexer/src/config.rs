//! Lexer configuration.

/// Sizing and limits for one lexical pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LexConfig {
    /// The token list starts with room for `len / chunk_divisor + 1` tokens
    /// and grows by the same amount whenever it fills.
    pub chunk_divisor: usize,
    /// Deepest allowed nesting of interpolated strings.
    pub max_interpolation_depth: u32,
}

impl LexConfig {
    pub const DEFAULT_CHUNK_DIVISOR: usize = 16;
    pub const DEFAULT_MAX_INTERPOLATION_DEPTH: u32 = 64;

    pub const fn new() -> Self {
        LexConfig {
            chunk_divisor: Self::DEFAULT_CHUNK_DIVISOR,
            max_interpolation_depth: Self::DEFAULT_MAX_INTERPOLATION_DEPTH,
        }
    }

    #[must_use]
    pub const fn with_chunk_divisor(mut self, chunk_divisor: usize) -> Self {
        self.chunk_divisor = chunk_divisor;
        self
    }

    #[must_use]
    pub const fn with_max_interpolation_depth(mut self, depth: u32) -> Self {
        self.max_interpolation_depth = depth;
        self
    }

    /// Token-list capacity (and growth step) for a source of `source_len`
    /// bytes. A zero divisor counts as one.
    pub fn token_chunk(&self, source_len: usize) -> usize {
        source_len / self.chunk_divisor.max(1) + 1
    }
}

impl Default for LexConfig {
    fn default() -> Self {
        Self::new()
    }
}
