//! Compact AST node encoding.
//!
//! A [`Node`] is a one-byte [`NodeKind`] tag plus a `u64` payload, packed
//! to 9 bytes whatever the syntax it stands for. Scalar kinds keep the index
//! of their producing token inline; composite kinds keep a handle into the
//! [`AstArena`] table selected by the kind. The kind alone decides how the
//! payload is read; [`AstArena::view`] turns a node into the matching typed
//! [`NodeView`].

mod ast_arena;
mod dump;
mod operators;
mod records;

use std::fmt;

pub use ast_arena::{AstArena, ImportKind, NodeView, SequenceKind, TupleKind};
pub use operators::{BinaryOp, UnaryOp};
pub use records::{
    Access, BinaryOpRecord, CallArg, CallArgRange, Case, CaseRange, DictRecord,
    DollarMethodRecord, EntryRange, ExDollarMethodRecord, ExFuncCallRecord, FuncCallRecord,
    IfElifRecord, IfElseRecord, IfRecord, ImportRecord, KeyValue, Modifiers, NodeRange,
    SequenceRecord, SubscriptEndRecord, SubscriptRecord, SubscriptStepRecord,
    SwitchDefaultRecord, SwitchRecord, TernaryOpRecord, TokenIdxRange, TupleRecord,
    UnaryOpRecord, VarAssignRecord,
};

use crate::TokenIdx;

/// Node kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum NodeKind {
    /// Missing node (absent `else`, bare declaration).
    Null,
    None,
    Int,
    Float,
    Imaginary,
    Bool,
    Char,
    FStrFragment,
    Str,
    FStr,
    List,
    Tuple,
    Dict,
    Set,
    /// Built-in type name used as a value.
    Type,

    BinaryOp,
    UnaryOp,
    TernaryOp,

    Subscript,
    SubscriptEnd,
    SubscriptStep,

    VarAccess,
    VarAssign,

    FuncCall,
    /// Call with an empty argument list.
    ExFuncCall,

    DollarMethod,
    /// Dollar method with no parameters.
    ExDollarMethod,

    /// Statement body.
    Multiline,
    /// Statement body that also yields a tuple.
    MultilineTuple,

    If,
    IfElse,
    IfElif,

    Switch,
    SwitchDefault,

    Import,
    Include,
}

impl NodeKind {
    /// Kinds whose payload is a token index rather than a record handle.
    pub const fn is_scalar(self) -> bool {
        matches!(
            self,
            NodeKind::Null
                | NodeKind::None
                | NodeKind::Int
                | NodeKind::Float
                | NodeKind::Imaginary
                | NodeKind::Bool
                | NodeKind::Char
                | NodeKind::FStrFragment
                | NodeKind::Str
                | NodeKind::Type
                | NodeKind::VarAccess
        )
    }

    #[inline]
    pub const fn is_composite(self) -> bool {
        !self.is_scalar()
    }
}

/// A tagged AST value.
///
/// Equality is bitwise: two nodes are `==` when kind and payload match.
/// Compare trees with [`AstArena::structurally_eq`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(C, packed)]
pub struct Node {
    data: u64,
    kind: NodeKind,
}

impl Node {
    /// The missing node.
    pub const NULL: Node = Node {
        data: 0,
        kind: NodeKind::Null,
    };

    /// Scalar node produced by the token at `token`.
    ///
    /// Returns `None` for composite kinds, which only the arena can build.
    pub const fn scalar(kind: NodeKind, token: TokenIdx) -> Option<Node> {
        if kind.is_composite() {
            return None;
        }
        Some(Node {
            data: token.raw() as u64,
            kind,
        })
    }

    pub(crate) const fn composite(kind: NodeKind, handle: u32) -> Node {
        Node {
            data: handle as u64,
            kind,
        }
    }

    #[inline]
    pub const fn kind(self) -> NodeKind {
        self.kind
    }

    /// Raw payload: a token index or a record handle, per [`Node::kind`].
    #[inline]
    pub const fn data(self) -> u64 {
        self.data
    }

    #[inline]
    pub const fn is_null(self) -> bool {
        matches!(self.kind(), NodeKind::Null)
    }

    /// Producing token of a scalar node (never for `Null`).
    #[allow(clippy::cast_possible_truncation, reason = "range checked first")]
    pub const fn token(self) -> Option<TokenIdx> {
        let data = self.data;
        if self.kind().is_composite() || self.is_null() || data > u32::MAX as u64 {
            return None;
        }
        Some(TokenIdx::from_raw(data as u32))
    }

    /// Record handle of a composite node.
    #[allow(clippy::cast_possible_truncation, reason = "handles are built from u32")]
    pub(crate) const fn handle(self) -> u32 {
        self.data as u32
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::NULL
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, data) = (self.kind, self.data);
        if kind.is_scalar() {
            write!(f, "{kind:?}(token {data})")
        } else {
            write!(f, "{kind:?}(#{data})")
        }
    }
}

static_assert_size!(Node, 9);

#[cfg(test)]
mod tests;
