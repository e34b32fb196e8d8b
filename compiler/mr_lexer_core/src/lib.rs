//! Low-level source access for the MetaReal lexer.
//!
//! This crate owns the two pieces every scanner pass threads through:
//!
//! - [`SourceBuffer`]: the source bytes followed by a `0x00` sentinel and
//!   zero padding, so lookahead never needs a bounds check.
//! - [`Cursor`]: the position tracker. It carries the byte offset *and* the
//!   line number, and is the only thing allowed to move either of them.
//!
//! It has no `mr_*` dependencies, so tools that only need byte-level access
//! (highlighters, the REPL) can use it without pulling in the token model.

mod cursor;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::{SourceBuffer, MAX_SOURCE_LEN};
