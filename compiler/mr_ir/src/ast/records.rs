//! Out-of-line variant records.
//!
//! One fixed-layout record per composite [`NodeKind`](super::NodeKind).
//! Every record carries its own [`Span`], so a node's source extent is one
//! read away. Child lists live in shared pools of the
//! [`AstArena`](super::AstArena) and are referenced by range.

use bitflags::bitflags;

use super::{BinaryOp, Node, UnaryOp};
use crate::{IdxRange, Span, TokenIdx, TokenKind};

/// Run of nodes in the node-list pool.
pub type NodeRange = IdxRange<Node>;
/// Run of dict entries in the entry pool.
pub type EntryRange = IdxRange<KeyValue>;
/// Run of call arguments in the argument pool.
pub type CallArgRange = IdxRange<CallArg>;
/// Run of cases in the case pool.
pub type CaseRange = IdxRange<Case>;
/// Run of token indices in the name pool.
pub type TokenIdxRange = IdxRange<TokenIdx>;

// === Collections ===

/// `FStr`, `List` and `Set`: ordered elements.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SequenceRecord {
    pub elements: NodeRange,
    pub span: Span,
}

/// `Tuple`, `Multiline` and `MultilineTuple`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TupleRecord {
    pub elements: NodeRange,
    pub span: Span,
}

/// One `key: value` pair of a dict literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyValue {
    pub key: Node,
    pub value: Node,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DictRecord {
    pub entries: EntryRange,
    pub span: Span,
}

// === Operators ===

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BinaryOpRecord {
    pub left: Node,
    pub right: Node,
    pub op: BinaryOp,
    pub span: Span,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnaryOpRecord {
    pub operand: Node,
    pub op: UnaryOp,
    pub span: Span,
}

/// `condition ? left : right`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TernaryOpRecord {
    pub condition: Node,
    pub left: Node,
    pub right: Node,
    pub span: Span,
}

// === Subscripts ===

/// `target[index]`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SubscriptRecord {
    pub target: Node,
    pub index: Node,
    pub span: Span,
}

/// `target[from:to]`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SubscriptEndRecord {
    pub target: Node,
    pub from: Node,
    pub to: Node,
    pub span: Span,
}

/// `target[from:to:step]`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SubscriptStepRecord {
    pub target: Node,
    pub from: Node,
    pub to: Node,
    pub step: Node,
    pub span: Span,
}

// === Variables ===

/// Access modifier of a declaration. Four distinct states.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Access {
    #[default]
    None,
    Private,
    Public,
    Protected,
}

impl Access {
    /// Access named by a keyword token.
    pub const fn from_token(kind: TokenKind) -> Option<Access> {
        match kind {
            TokenKind::Private => Some(Access::Private),
            TokenKind::Public => Some(Access::Public),
            TokenKind::Protected => Some(Access::Protected),
            _ => None,
        }
    }
}

bitflags! {
    /// Keyword flags of a declaration.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const GLOBAL = 1 << 0;
        const READONLY = 1 << 1;
        const CONST = 1 << 2;
        const STATIC = 1 << 3;
        /// Bound with `->` rather than `=`.
        const LINK = 1 << 4;
    }
}

impl Modifiers {
    /// Flag named by a keyword token.
    pub const fn from_token(kind: TokenKind) -> Option<Modifiers> {
        match kind {
            TokenKind::Global => Some(Modifiers::GLOBAL),
            TokenKind::Readonly => Some(Modifiers::READONLY),
            TokenKind::Const => Some(Modifiers::CONST),
            TokenKind::Static => Some(Modifiers::STATIC),
            _ => None,
        }
    }
}

/// `var name: type = value` and its modifier forms.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VarAssignRecord {
    pub name: TokenIdx,
    pub access: Access,
    pub modifiers: Modifiers,
    /// Value node; `Node::NULL` for a bare declaration.
    pub value: Node,
    /// Declared type name, if annotated.
    pub declared_type: Option<TokenKind>,
    pub span: Span,
}

// === Calls ===

/// One argument of a call. `name` is [`TokenIdx::INVALID`] for positional
/// arguments.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CallArg {
    pub value: Node,
    pub name: TokenIdx,
}

impl CallArg {
    pub const fn positional(value: Node) -> Self {
        CallArg {
            value,
            name: TokenIdx::INVALID,
        }
    }

    pub const fn is_named(&self) -> bool {
        self.name.is_valid()
    }
}

/// `callee(args...)`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FuncCallRecord {
    pub args: CallArgRange,
    pub callee: Node,
    pub span: Span,
}

/// `callee()` with an empty argument list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExFuncCallRecord {
    pub callee: Node,
    pub span: Span,
}

/// `$name(params...)`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DollarMethodRecord {
    pub params: NodeRange,
    pub name: TokenIdx,
    pub span: Span,
}

/// `$name` with no parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExDollarMethodRecord {
    pub name: TokenIdx,
    pub span: Span,
}

// === Control flow ===

/// A guarded body: an `elif` branch or a `case` arm.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Case {
    pub condition: Node,
    pub body: Node,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IfRecord {
    pub condition: Node,
    pub body: Node,
    pub span: Span,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IfElseRecord {
    pub condition: Node,
    pub body: Node,
    pub else_body: Node,
    pub span: Span,
}

/// `if`/`elif` chain; the first case is the `if`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IfElifRecord {
    pub cases: CaseRange,
    /// `Node::NULL` when there is no `else`.
    pub else_body: Node,
    pub span: Span,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SwitchRecord {
    pub scrutinee: Node,
    pub cases: CaseRange,
    pub span: Span,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SwitchDefaultRecord {
    pub scrutinee: Node,
    pub cases: CaseRange,
    pub default_body: Node,
    pub span: Span,
}

// === Modules ===

/// `import a, b` / `include a, b`: library name tokens.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ImportRecord {
    pub libraries: TokenIdxRange,
    pub span: Span,
}
