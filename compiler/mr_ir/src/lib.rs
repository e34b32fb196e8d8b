//! MetaReal IR - tokens and the compact AST encoding.
//!
//! This crate holds the data structures shared by the lexer and the parser:
//! - [`Position`] and [`Span`] for source locations
//! - [`Token`], [`TokenKind`] and [`TokenList`] for lexer output
//! - [`BumpArena`] and [`Idx`] for bulk-freed record storage
//! - [`Node`] and the variant records in [`ast`]
//!
//! # Design
//!
//! - **Flatten Everything**: no `Box<Node>`; composite nodes hold a `u32`
//!   handle into a per-shape arena.
//! - **Fixed-size nodes**: a [`Node`] is 9 bytes whatever its shape.
//! - **Bulk lifetime**: every record of one parse lives in one
//!   [`AstArena`] and is freed with it.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod position;
mod span;
mod token;

pub use arena::{ArenaConfig, ArenaError, BumpArena, Idx, IdxRange};
pub use ast::{AstArena, Node, NodeKind, NodeView};
pub use position::Position;
pub use span::Span;
pub use token::{Token, TokenIdx, TokenKind, TokenList, TokenValue, KEYWORD_BASE, TYPE_BASE};
