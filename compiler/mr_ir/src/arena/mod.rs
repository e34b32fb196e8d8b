//! Bump arena for out-of-line AST records.
//!
//! - One contiguous region per record shape
//! - Records addressed by `u32` handle, never by pointer
//! - Fixed-increment growth, sized from the source length
//! - Bulk deallocation only

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Allocation failure in a [`BumpArena`] or token list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArenaError {
    /// The allocator refused to grow the region.
    #[error("out of memory: cannot grow region by {requested} slots")]
    OutOfMemory { requested: usize },
    /// More records than a `u32` handle can address.
    #[error("arena holds {len} records, more than a u32 handle can address")]
    IndexOverflow { len: usize },
}

/// Sizing policy for record arenas.
///
/// The whole tree gets a budget of `source_len * size_factor` bytes; every
/// record shape grows by an equal share of it, and never by less than
/// `min_chunk` records.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    pub size_factor: usize,
    pub min_chunk: usize,
}

impl ArenaConfig {
    pub const fn new() -> Self {
        ArenaConfig {
            size_factor: 8,
            min_chunk: 64,
        }
    }

    #[must_use]
    pub const fn with_size_factor(mut self, size_factor: usize) -> Self {
        self.size_factor = size_factor;
        self
    }

    #[must_use]
    pub const fn with_min_chunk(mut self, min_chunk: usize) -> Self {
        self.min_chunk = min_chunk;
        self
    }

    /// Growth increment, in records, for one of `shapes` record shapes of
    /// `record_size` bytes each.
    pub fn chunk_len(&self, source_len: usize, record_size: usize, shapes: usize) -> usize {
        let budget = source_len.saturating_mul(self.size_factor);
        let share = budget / shapes.max(1) / record_size.max(1);
        share.max(self.min_chunk).max(1)
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a record in a [`BumpArena<T>`].
///
/// Stays valid for the life of the arena, across any number of growth
/// events.
#[repr(transparent)]
pub struct Idx<T> {
    raw: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Idx<T> {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Idx {
            raw,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.raw
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.raw as usize
    }
}

// Manual impls: derives would require `T: Copy + Eq + ...`.
impl<T> Copy for Idx<T> {}
impl<T> Clone for Idx<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> PartialEq for Idx<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}
impl<T> Eq for Idx<T> {}
impl<T> Hash for Idx<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}
impl<T> fmt::Debug for Idx<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Idx({})", self.raw)
    }
}

/// Contiguous run of records in a [`BumpArena<T>`].
#[repr(C)]
pub struct IdxRange<T> {
    pub start: u32,
    pub len: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> IdxRange<T> {
    pub const EMPTY: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(start: u32, len: u32) -> Self {
        IdxRange {
            start,
            len,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Handles of every record in the range.
    pub fn iter(&self) -> impl Iterator<Item = Idx<T>> {
        (self.start..self.start.saturating_add(self.len)).map(Idx::from_raw)
    }
}

impl<T> Copy for IdxRange<T> {}
impl<T> Clone for IdxRange<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> PartialEq for IdxRange<T> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.len == other.len
    }
}
impl<T> Eq for IdxRange<T> {}
impl<T> Hash for IdxRange<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.len.hash(state);
    }
}
impl<T> Default for IdxRange<T> {
    fn default() -> Self {
        Self::EMPTY
    }
}
impl<T> fmt::Debug for IdxRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdxRange({}..{})", self.start, self.start.saturating_add(self.len))
    }
}

/// Bulk-freed storage for one record shape.
///
/// Records are written at the high-water mark and never freed one by one.
/// When the region is full it grows by exactly `chunk` records; a refused
/// growth request is reported as [`ArenaError::OutOfMemory`] and the arena
/// is left unchanged.
pub struct BumpArena<T> {
    items: Vec<T>,
    chunk: usize,
}

impl<T> BumpArena<T> {
    /// Growth increment used when none is configured.
    pub const DEFAULT_CHUNK: usize = 64;

    /// Empty arena; nothing is allocated until the first record.
    pub const fn new() -> Self {
        Self::with_chunk(Self::DEFAULT_CHUNK)
    }

    pub const fn with_chunk(chunk: usize) -> Self {
        BumpArena {
            items: Vec::new(),
            chunk: if chunk == 0 { 1 } else { chunk },
        }
    }

    /// Make room for `additional` more records in one allocation.
    pub fn reserve(&mut self, additional: usize) -> Result<(), ArenaError> {
        self.items
            .try_reserve_exact(additional)
            .map_err(|_| ArenaError::OutOfMemory {
                requested: additional,
            })
    }

    /// Store `value` and return its handle.
    pub fn alloc(&mut self, value: T) -> Result<Idx<T>, ArenaError> {
        if self.items.len() == self.items.capacity() {
            self.grow(1)?;
        }
        let idx = Idx::from_raw(to_u32(self.items.len())?);
        self.items.push(value);
        Ok(idx)
    }

    /// Store every value of `values` contiguously and return the range.
    ///
    /// On failure the records pushed so far are dropped again.
    pub fn alloc_extend(
        &mut self,
        values: impl IntoIterator<Item = T>,
    ) -> Result<IdxRange<T>, ArenaError> {
        let start = to_u32(self.items.len())?;
        for value in values {
            if let Err(e) = self.alloc(value) {
                self.items.truncate(start as usize);
                return Err(e);
            }
        }
        let len = to_u32(self.items.len())? - start;
        Ok(IdxRange::new(start, len))
    }

    #[cold]
    fn grow(&mut self, needed: usize) -> Result<(), ArenaError> {
        // Whole chunks only, so growth stays independent of request size.
        let chunks = needed.div_ceil(self.chunk);
        let additional = chunks * self.chunk;
        tracing::trace!(
            len = self.items.len(),
            additional,
            record = std::any::type_name::<T>(),
            "growing arena"
        );
        self.reserve(additional)
    }

    #[inline]
    pub fn get(&self, idx: Idx<T>) -> Option<&T> {
        self.items.get(idx.index())
    }

    /// Records covered by `range`, or an empty slice if out of bounds.
    #[inline]
    pub fn slice(&self, range: IdxRange<T>) -> &[T] {
        let start = range.start as usize;
        self.items
            .get(start..start.saturating_add(range.len()))
            .unwrap_or_default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    #[inline]
    pub fn chunk(&self) -> usize {
        self.chunk
    }

    /// Free the whole region at once. Every handle issued so far becomes
    /// dangling.
    pub fn release(&mut self) {
        self.items = Vec::new();
    }
}

impl<T> Default for BumpArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::ops::Index<Idx<T>> for BumpArena<T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, idx: Idx<T>) -> &T {
        &self.items[idx.index()]
    }
}

impl<T> fmt::Debug for BumpArena<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BumpArena<{}>({} records)",
            std::any::type_name::<T>(),
            self.items.len()
        )
    }
}

fn to_u32(len: usize) -> Result<u32, ArenaError> {
    u32::try_from(len).map_err(|_| ArenaError::IndexOverflow { len })
}
