//! Per-parse storage for every out-of-line AST record.

use smallvec::SmallVec;

use super::records::{
    BinaryOpRecord, CallArg, CallArgRange, Case, CaseRange, DictRecord, DollarMethodRecord,
    EntryRange, ExDollarMethodRecord, ExFuncCallRecord, FuncCallRecord, IfElifRecord,
    IfElseRecord, IfRecord, ImportRecord, KeyValue, NodeRange, SequenceRecord,
    SubscriptEndRecord, SubscriptRecord, SubscriptStepRecord, SwitchDefaultRecord, SwitchRecord,
    TernaryOpRecord, TokenIdxRange, TupleRecord, UnaryOpRecord, VarAssignRecord,
};
use super::{Node, NodeKind};
use crate::{ArenaConfig, ArenaError, BumpArena, Idx, Span, TokenIdx, TokenList};

/// Kinds backed by a [`SequenceRecord`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SequenceKind {
    FStr,
    List,
    Set,
}

impl SequenceKind {
    pub const fn node_kind(self) -> NodeKind {
        match self {
            SequenceKind::FStr => NodeKind::FStr,
            SequenceKind::List => NodeKind::List,
            SequenceKind::Set => NodeKind::Set,
        }
    }
}

/// Kinds backed by a [`TupleRecord`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TupleKind {
    Tuple,
    Multiline,
    MultilineTuple,
}

impl TupleKind {
    pub const fn node_kind(self) -> NodeKind {
        match self {
            TupleKind::Tuple => NodeKind::Tuple,
            TupleKind::Multiline => NodeKind::Multiline,
            TupleKind::MultilineTuple => NodeKind::MultilineTuple,
        }
    }
}

/// Kinds backed by an [`ImportRecord`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ImportKind {
    Import,
    Include,
}

impl ImportKind {
    pub const fn node_kind(self) -> NodeKind {
        match self {
            ImportKind::Import => NodeKind::Import,
            ImportKind::Include => NodeKind::Include,
        }
    }
}

/// Typed view of a node: the only way to read a payload.
///
/// Every composite view carries its record; list-holding records also carry
/// the resolved slice of their pool.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeView<'a> {
    Null,
    Scalar {
        kind: NodeKind,
        token: TokenIdx,
    },
    Sequence {
        kind: SequenceKind,
        record: &'a SequenceRecord,
        elements: &'a [Node],
    },
    Tuple {
        kind: TupleKind,
        record: &'a TupleRecord,
        elements: &'a [Node],
    },
    Dict {
        record: &'a DictRecord,
        entries: &'a [KeyValue],
    },
    BinaryOp(&'a BinaryOpRecord),
    UnaryOp(&'a UnaryOpRecord),
    TernaryOp(&'a TernaryOpRecord),
    Subscript(&'a SubscriptRecord),
    SubscriptEnd(&'a SubscriptEndRecord),
    SubscriptStep(&'a SubscriptStepRecord),
    VarAssign(&'a VarAssignRecord),
    FuncCall {
        record: &'a FuncCallRecord,
        args: &'a [CallArg],
    },
    ExFuncCall(&'a ExFuncCallRecord),
    DollarMethod {
        record: &'a DollarMethodRecord,
        params: &'a [Node],
    },
    ExDollarMethod(&'a ExDollarMethodRecord),
    If(&'a IfRecord),
    IfElse(&'a IfElseRecord),
    IfElif {
        record: &'a IfElifRecord,
        cases: &'a [Case],
    },
    Switch {
        record: &'a SwitchRecord,
        cases: &'a [Case],
    },
    SwitchDefault {
        record: &'a SwitchDefaultRecord,
        cases: &'a [Case],
    },
    Import {
        kind: ImportKind,
        record: &'a ImportRecord,
        libraries: &'a [TokenIdx],
    },
}

impl NodeView<'_> {
    /// Span stored in the record; `None` for scalar and null views.
    pub fn record_span(&self) -> Option<Span> {
        Some(match self {
            NodeView::Null | NodeView::Scalar { .. } => return None,
            NodeView::Sequence { record, .. } => record.span,
            NodeView::Tuple { record, .. } => record.span,
            NodeView::Dict { record, .. } => record.span,
            NodeView::BinaryOp(record) => record.span,
            NodeView::UnaryOp(record) => record.span,
            NodeView::TernaryOp(record) => record.span,
            NodeView::Subscript(record) => record.span,
            NodeView::SubscriptEnd(record) => record.span,
            NodeView::SubscriptStep(record) => record.span,
            NodeView::VarAssign(record) => record.span,
            NodeView::FuncCall { record, .. } => record.span,
            NodeView::ExFuncCall(record) => record.span,
            NodeView::DollarMethod { record, .. } => record.span,
            NodeView::ExDollarMethod(record) => record.span,
            NodeView::If(record) => record.span,
            NodeView::IfElse(record) => record.span,
            NodeView::IfElif { record, .. } => record.span,
            NodeView::Switch { record, .. } => record.span,
            NodeView::SwitchDefault { record, .. } => record.span,
            NodeView::Import { record, .. } => record.span,
        })
    }
}

/// Storage for every record of one parse.
///
/// One [`BumpArena`] per record shape plus shared pools for child lists.
/// A record is written once, reachable through exactly one node, and freed
/// with the whole arena.
#[derive(Debug, Default)]
pub struct AstArena {
    // Child-list pools
    node_lists: BumpArena<Node>,
    entries: BumpArena<KeyValue>,
    call_args: BumpArena<CallArg>,
    cases: BumpArena<Case>,
    names: BumpArena<TokenIdx>,

    // Records
    sequences: BumpArena<SequenceRecord>,
    tuples: BumpArena<TupleRecord>,
    dicts: BumpArena<DictRecord>,
    binary_ops: BumpArena<BinaryOpRecord>,
    unary_ops: BumpArena<UnaryOpRecord>,
    ternary_ops: BumpArena<TernaryOpRecord>,
    subscripts: BumpArena<SubscriptRecord>,
    subscript_ends: BumpArena<SubscriptEndRecord>,
    subscript_steps: BumpArena<SubscriptStepRecord>,
    var_assigns: BumpArena<VarAssignRecord>,
    func_calls: BumpArena<FuncCallRecord>,
    ex_func_calls: BumpArena<ExFuncCallRecord>,
    dollar_methods: BumpArena<DollarMethodRecord>,
    ex_dollar_methods: BumpArena<ExDollarMethodRecord>,
    ifs: BumpArena<IfRecord>,
    if_elses: BumpArena<IfElseRecord>,
    if_elifs: BumpArena<IfElifRecord>,
    switches: BumpArena<SwitchRecord>,
    switch_defaults: BumpArena<SwitchDefaultRecord>,
    imports: BumpArena<ImportRecord>,
}

/// Number of separate regions in an [`AstArena`].
const SHAPES: usize = 25;

fn sized<T>(source_len: usize, config: &ArenaConfig) -> BumpArena<T> {
    BumpArena::with_chunk(config.chunk_len(source_len, size_of::<T>(), SHAPES))
}

/// Record allocators for shapes backing exactly one node kind.
macro_rules! single_kind_allocators {
    ($($(#[$doc:meta])* $method:ident($record:ty) => $field:ident, $kind:ident;)*) => {
        impl AstArena {
            $(
                $(#[$doc])*
                pub fn $method(&mut self, record: $record) -> Result<Node, ArenaError> {
                    let idx = self.$field.alloc(record)?;
                    Ok(Node::composite(NodeKind::$kind, idx.raw()))
                }
            )*
        }
    };
}

single_kind_allocators! {
    alloc_dict(DictRecord) => dicts, Dict;
    alloc_binary_op(BinaryOpRecord) => binary_ops, BinaryOp;
    alloc_unary_op(UnaryOpRecord) => unary_ops, UnaryOp;
    alloc_ternary_op(TernaryOpRecord) => ternary_ops, TernaryOp;
    alloc_subscript(SubscriptRecord) => subscripts, Subscript;
    alloc_subscript_end(SubscriptEndRecord) => subscript_ends, SubscriptEnd;
    alloc_subscript_step(SubscriptStepRecord) => subscript_steps, SubscriptStep;
    alloc_var_assign(VarAssignRecord) => var_assigns, VarAssign;
    alloc_func_call(FuncCallRecord) => func_calls, FuncCall;
    alloc_ex_func_call(ExFuncCallRecord) => ex_func_calls, ExFuncCall;
    alloc_dollar_method(DollarMethodRecord) => dollar_methods, DollarMethod;
    alloc_ex_dollar_method(ExDollarMethodRecord) => ex_dollar_methods, ExDollarMethod;
    alloc_if(IfRecord) => ifs, If;
    alloc_if_else(IfElseRecord) => if_elses, IfElse;
    alloc_if_elif(IfElifRecord) => if_elifs, IfElif;
    alloc_switch(SwitchRecord) => switches, Switch;
    alloc_switch_default(SwitchDefaultRecord) => switch_defaults, SwitchDefault;
}

impl AstArena {
    /// Empty arena with default growth chunks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty arena whose regions grow in chunks sized from `source_len`.
    ///
    /// Nothing is allocated until the first record of each shape.
    pub fn with_config(source_len: usize, config: &ArenaConfig) -> Self {
        AstArena {
            node_lists: sized(source_len, config),
            entries: sized(source_len, config),
            call_args: sized(source_len, config),
            cases: sized(source_len, config),
            names: sized(source_len, config),
            sequences: sized(source_len, config),
            tuples: sized(source_len, config),
            dicts: sized(source_len, config),
            binary_ops: sized(source_len, config),
            unary_ops: sized(source_len, config),
            ternary_ops: sized(source_len, config),
            subscripts: sized(source_len, config),
            subscript_ends: sized(source_len, config),
            subscript_steps: sized(source_len, config),
            var_assigns: sized(source_len, config),
            func_calls: sized(source_len, config),
            ex_func_calls: sized(source_len, config),
            dollar_methods: sized(source_len, config),
            ex_dollar_methods: sized(source_len, config),
            ifs: sized(source_len, config),
            if_elses: sized(source_len, config),
            if_elifs: sized(source_len, config),
            switches: sized(source_len, config),
            switch_defaults: sized(source_len, config),
            imports: sized(source_len, config),
        }
    }

    // ===== Child lists =====

    pub fn alloc_nodes(
        &mut self,
        nodes: impl IntoIterator<Item = Node>,
    ) -> Result<NodeRange, ArenaError> {
        self.node_lists.alloc_extend(nodes)
    }

    pub fn alloc_entries(
        &mut self,
        entries: impl IntoIterator<Item = KeyValue>,
    ) -> Result<EntryRange, ArenaError> {
        self.entries.alloc_extend(entries)
    }

    pub fn alloc_call_args(
        &mut self,
        args: impl IntoIterator<Item = CallArg>,
    ) -> Result<CallArgRange, ArenaError> {
        self.call_args.alloc_extend(args)
    }

    pub fn alloc_cases(
        &mut self,
        cases: impl IntoIterator<Item = Case>,
    ) -> Result<CaseRange, ArenaError> {
        self.cases.alloc_extend(cases)
    }

    pub fn alloc_names(
        &mut self,
        names: impl IntoIterator<Item = TokenIdx>,
    ) -> Result<TokenIdxRange, ArenaError> {
        self.names.alloc_extend(names)
    }

    // ===== Shared-shape records =====

    pub fn alloc_sequence(
        &mut self,
        kind: SequenceKind,
        record: SequenceRecord,
    ) -> Result<Node, ArenaError> {
        let idx = self.sequences.alloc(record)?;
        Ok(Node::composite(kind.node_kind(), idx.raw()))
    }

    pub fn alloc_tuple(&mut self, kind: TupleKind, record: TupleRecord) -> Result<Node, ArenaError> {
        let idx = self.tuples.alloc(record)?;
        Ok(Node::composite(kind.node_kind(), idx.raw()))
    }

    pub fn alloc_import(
        &mut self,
        kind: ImportKind,
        record: ImportRecord,
    ) -> Result<Node, ArenaError> {
        let idx = self.imports.alloc(record)?;
        Ok(Node::composite(kind.node_kind(), idx.raw()))
    }

    // ===== Reading =====

    /// Typed view of `node`, or `None` if its handle does not belong to
    /// this arena.
    pub fn view(&self, node: Node) -> Option<NodeView<'_>> {
        let handle = node.handle();
        Some(match node.kind() {
            NodeKind::Null => NodeView::Null,
            kind if kind.is_scalar() => NodeView::Scalar {
                kind,
                token: node.token()?,
            },
            NodeKind::FStr | NodeKind::List | NodeKind::Set => {
                let kind = match node.kind() {
                    NodeKind::FStr => SequenceKind::FStr,
                    NodeKind::List => SequenceKind::List,
                    _ => SequenceKind::Set,
                };
                let record = self.sequences.get(Idx::from_raw(handle))?;
                NodeView::Sequence {
                    kind,
                    record,
                    elements: self.node_lists.slice(record.elements),
                }
            }
            NodeKind::Tuple | NodeKind::Multiline | NodeKind::MultilineTuple => {
                let kind = match node.kind() {
                    NodeKind::Tuple => TupleKind::Tuple,
                    NodeKind::Multiline => TupleKind::Multiline,
                    _ => TupleKind::MultilineTuple,
                };
                let record = self.tuples.get(Idx::from_raw(handle))?;
                NodeView::Tuple {
                    kind,
                    record,
                    elements: self.node_lists.slice(record.elements),
                }
            }
            NodeKind::Dict => {
                let record = self.dicts.get(Idx::from_raw(handle))?;
                NodeView::Dict {
                    record,
                    entries: self.entries.slice(record.entries),
                }
            }
            NodeKind::BinaryOp => NodeView::BinaryOp(self.binary_ops.get(Idx::from_raw(handle))?),
            NodeKind::UnaryOp => NodeView::UnaryOp(self.unary_ops.get(Idx::from_raw(handle))?),
            NodeKind::TernaryOp => {
                NodeView::TernaryOp(self.ternary_ops.get(Idx::from_raw(handle))?)
            }
            NodeKind::Subscript => {
                NodeView::Subscript(self.subscripts.get(Idx::from_raw(handle))?)
            }
            NodeKind::SubscriptEnd => {
                NodeView::SubscriptEnd(self.subscript_ends.get(Idx::from_raw(handle))?)
            }
            NodeKind::SubscriptStep => {
                NodeView::SubscriptStep(self.subscript_steps.get(Idx::from_raw(handle))?)
            }
            NodeKind::VarAssign => {
                NodeView::VarAssign(self.var_assigns.get(Idx::from_raw(handle))?)
            }
            NodeKind::FuncCall => {
                let record = self.func_calls.get(Idx::from_raw(handle))?;
                NodeView::FuncCall {
                    record,
                    args: self.call_args.slice(record.args),
                }
            }
            NodeKind::ExFuncCall => {
                NodeView::ExFuncCall(self.ex_func_calls.get(Idx::from_raw(handle))?)
            }
            NodeKind::DollarMethod => {
                let record = self.dollar_methods.get(Idx::from_raw(handle))?;
                NodeView::DollarMethod {
                    record,
                    params: self.node_lists.slice(record.params),
                }
            }
            NodeKind::ExDollarMethod => {
                NodeView::ExDollarMethod(self.ex_dollar_methods.get(Idx::from_raw(handle))?)
            }
            NodeKind::If => NodeView::If(self.ifs.get(Idx::from_raw(handle))?),
            NodeKind::IfElse => NodeView::IfElse(self.if_elses.get(Idx::from_raw(handle))?),
            NodeKind::IfElif => {
                let record = self.if_elifs.get(Idx::from_raw(handle))?;
                NodeView::IfElif {
                    record,
                    cases: self.cases.slice(record.cases),
                }
            }
            NodeKind::Switch => {
                let record = self.switches.get(Idx::from_raw(handle))?;
                NodeView::Switch {
                    record,
                    cases: self.cases.slice(record.cases),
                }
            }
            NodeKind::SwitchDefault => {
                let record = self.switch_defaults.get(Idx::from_raw(handle))?;
                NodeView::SwitchDefault {
                    record,
                    cases: self.cases.slice(record.cases),
                }
            }
            NodeKind::Import | NodeKind::Include => {
                let kind = if node.kind() == NodeKind::Import {
                    ImportKind::Import
                } else {
                    ImportKind::Include
                };
                let record = self.imports.get(Idx::from_raw(handle))?;
                NodeView::Import {
                    kind,
                    record,
                    libraries: self.names.slice(record.libraries),
                }
            }
            // Remaining kinds are scalar and handled by the guard above.
            NodeKind::None
            | NodeKind::Int
            | NodeKind::Float
            | NodeKind::Imaginary
            | NodeKind::Bool
            | NodeKind::Char
            | NodeKind::FStrFragment
            | NodeKind::Str
            | NodeKind::Type
            | NodeKind::VarAccess => return None,
        })
    }

    /// Source extent of `node` in O(1): from its record, or from the
    /// producing token for scalar kinds. `None` for `Null`.
    pub fn span(&self, node: Node, tokens: &TokenList) -> Option<Span> {
        match self.view(node)? {
            NodeView::Null => None,
            NodeView::Scalar { token, .. } => {
                let token = tokens.get(token)?;
                Some(Span::new(token.start.offset, token.end.offset))
            }
            view => view.record_span(),
        }
    }

    /// Start offset of `node`.
    pub fn start(&self, node: Node, tokens: &TokenList) -> Option<u32> {
        self.span(node, tokens).map(|span| span.start)
    }

    /// End offset of `node`.
    pub fn end(&self, node: Node, tokens: &TokenList) -> Option<u32> {
        self.span(node, tokens).map(|span| span.end)
    }

    /// Direct children of `node`, in source order. `Null` children are
    /// skipped.
    pub fn children(&self, node: Node) -> SmallVec<[Node; 4]> {
        let mut out = SmallVec::new();
        let Some(view) = self.view(node) else {
            return out;
        };
        match view {
            NodeView::Null | NodeView::Scalar { .. } => {}
            NodeView::Sequence { elements, .. } | NodeView::Tuple { elements, .. } => {
                out.extend_from_slice(elements);
            }
            NodeView::Dict { entries, .. } => {
                for entry in entries {
                    out.push(entry.key);
                    out.push(entry.value);
                }
            }
            NodeView::BinaryOp(r) => out.extend([r.left, r.right]),
            NodeView::UnaryOp(r) => out.push(r.operand),
            NodeView::TernaryOp(r) => out.extend([r.condition, r.left, r.right]),
            NodeView::Subscript(r) => out.extend([r.target, r.index]),
            NodeView::SubscriptEnd(r) => out.extend([r.target, r.from, r.to]),
            NodeView::SubscriptStep(r) => out.extend([r.target, r.from, r.to, r.step]),
            NodeView::VarAssign(r) => out.push(r.value),
            NodeView::FuncCall { record, args } => {
                out.push(record.callee);
                out.extend(args.iter().map(|arg| arg.value));
            }
            NodeView::ExFuncCall(r) => out.push(r.callee),
            NodeView::DollarMethod { params, .. } => out.extend_from_slice(params),
            NodeView::ExDollarMethod(_) | NodeView::Import { .. } => {}
            NodeView::If(r) => out.extend([r.condition, r.body]),
            NodeView::IfElse(r) => out.extend([r.condition, r.body, r.else_body]),
            NodeView::IfElif { record, cases } => {
                push_cases(&mut out, cases);
                out.push(record.else_body);
            }
            NodeView::Switch { record, cases } => {
                out.push(record.scrutinee);
                push_cases(&mut out, cases);
            }
            NodeView::SwitchDefault { record, cases } => {
                out.push(record.scrutinee);
                push_cases(&mut out, cases);
                out.push(record.default_body);
            }
        }
        out.retain(|child| !child.is_null());
        out
    }

    /// Structural equality of `a` (in `self`) and `b` (in `other`).
    ///
    /// Kinds must match; scalar kinds then compare their inline payload,
    /// composite kinds compare their records field by field, following
    /// child nodes recursively. Handles are never compared.
    pub fn structurally_eq(&self, a: Node, other: &AstArena, b: Node) -> bool {
        if a.kind() != b.kind() {
            return false;
        }
        if a.kind().is_scalar() {
            return a.data() == b.data();
        }
        let (Some(va), Some(vb)) = (self.view(a), other.view(b)) else {
            return false;
        };
        mr_stack::ensure_sufficient_stack(|| self.views_eq(va, other, vb))
    }

    fn views_eq(&self, a: NodeView<'_>, other: &AstArena, b: NodeView<'_>) -> bool {
        let eq = |x: Node, y: Node| self.structurally_eq(x, other, y);
        let all_eq = |xs: &[Node], ys: &[Node]| {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(&x, &y)| eq(x, y))
        };
        let cases_eq = |xs: &[Case], ys: &[Case]| {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .zip(ys)
                    .all(|(x, y)| eq(x.condition, y.condition) && eq(x.body, y.body))
        };
        match (a, b) {
            (
                NodeView::Sequence { record: ra, elements: ea, .. },
                NodeView::Sequence { record: rb, elements: eb, .. },
            ) => ra.span == rb.span && all_eq(ea, eb),
            (
                NodeView::Tuple { record: ra, elements: ea, .. },
                NodeView::Tuple { record: rb, elements: eb, .. },
            ) => ra.span == rb.span && all_eq(ea, eb),
            (
                NodeView::Dict { record: ra, entries: ea },
                NodeView::Dict { record: rb, entries: eb },
            ) => {
                ra.span == rb.span
                    && ea.len() == eb.len()
                    && ea
                        .iter()
                        .zip(eb)
                        .all(|(x, y)| eq(x.key, y.key) && eq(x.value, y.value))
            }
            (NodeView::BinaryOp(x), NodeView::BinaryOp(y)) => {
                x.op == y.op && x.span == y.span && eq(x.left, y.left) && eq(x.right, y.right)
            }
            (NodeView::UnaryOp(x), NodeView::UnaryOp(y)) => {
                x.op == y.op && x.span == y.span && eq(x.operand, y.operand)
            }
            (NodeView::TernaryOp(x), NodeView::TernaryOp(y)) => {
                x.span == y.span
                    && eq(x.condition, y.condition)
                    && eq(x.left, y.left)
                    && eq(x.right, y.right)
            }
            (NodeView::Subscript(x), NodeView::Subscript(y)) => {
                x.span == y.span && eq(x.target, y.target) && eq(x.index, y.index)
            }
            (NodeView::SubscriptEnd(x), NodeView::SubscriptEnd(y)) => {
                x.span == y.span
                    && eq(x.target, y.target)
                    && eq(x.from, y.from)
                    && eq(x.to, y.to)
            }
            (NodeView::SubscriptStep(x), NodeView::SubscriptStep(y)) => {
                x.span == y.span
                    && eq(x.target, y.target)
                    && eq(x.from, y.from)
                    && eq(x.to, y.to)
                    && eq(x.step, y.step)
            }
            (NodeView::VarAssign(x), NodeView::VarAssign(y)) => {
                x.name == y.name
                    && x.access == y.access
                    && x.modifiers == y.modifiers
                    && x.declared_type == y.declared_type
                    && x.span == y.span
                    && eq(x.value, y.value)
            }
            (
                NodeView::FuncCall { record: ra, args: aa },
                NodeView::FuncCall { record: rb, args: ab },
            ) => {
                ra.span == rb.span
                    && eq(ra.callee, rb.callee)
                    && aa.len() == ab.len()
                    && aa
                        .iter()
                        .zip(ab)
                        .all(|(x, y)| x.name == y.name && eq(x.value, y.value))
            }
            (NodeView::ExFuncCall(x), NodeView::ExFuncCall(y)) => {
                x.span == y.span && eq(x.callee, y.callee)
            }
            (
                NodeView::DollarMethod { record: ra, params: pa },
                NodeView::DollarMethod { record: rb, params: pb },
            ) => ra.name == rb.name && ra.span == rb.span && all_eq(pa, pb),
            (NodeView::ExDollarMethod(x), NodeView::ExDollarMethod(y)) => x == y,
            (NodeView::If(x), NodeView::If(y)) => {
                x.span == y.span && eq(x.condition, y.condition) && eq(x.body, y.body)
            }
            (NodeView::IfElse(x), NodeView::IfElse(y)) => {
                x.span == y.span
                    && eq(x.condition, y.condition)
                    && eq(x.body, y.body)
                    && eq(x.else_body, y.else_body)
            }
            (
                NodeView::IfElif { record: ra, cases: ca },
                NodeView::IfElif { record: rb, cases: cb },
            ) => ra.span == rb.span && cases_eq(ca, cb) && eq(ra.else_body, rb.else_body),
            (
                NodeView::Switch { record: ra, cases: ca },
                NodeView::Switch { record: rb, cases: cb },
            ) => ra.span == rb.span && eq(ra.scrutinee, rb.scrutinee) && cases_eq(ca, cb),
            (
                NodeView::SwitchDefault { record: ra, cases: ca },
                NodeView::SwitchDefault { record: rb, cases: cb },
            ) => {
                ra.span == rb.span
                    && eq(ra.scrutinee, rb.scrutinee)
                    && cases_eq(ca, cb)
                    && eq(ra.default_body, rb.default_body)
            }
            (
                NodeView::Import { record: ra, libraries: la, .. },
                NodeView::Import { record: rb, libraries: lb, .. },
            ) => ra.span == rb.span && la == lb,
            _ => false,
        }
    }

    /// Number of records allocated, excluding child-list pools.
    pub fn record_count(&self) -> usize {
        self.sequences.len()
            + self.tuples.len()
            + self.dicts.len()
            + self.binary_ops.len()
            + self.unary_ops.len()
            + self.ternary_ops.len()
            + self.subscripts.len()
            + self.subscript_ends.len()
            + self.subscript_steps.len()
            + self.var_assigns.len()
            + self.func_calls.len()
            + self.ex_func_calls.len()
            + self.dollar_methods.len()
            + self.ex_dollar_methods.len()
            + self.ifs.len()
            + self.if_elses.len()
            + self.if_elifs.len()
            + self.switches.len()
            + self.switch_defaults.len()
            + self.imports.len()
    }

    /// Free every record and pool at once.
    pub fn release(&mut self) {
        tracing::trace!(records = self.record_count(), "releasing AST arena");
        self.node_lists.release();
        self.entries.release();
        self.call_args.release();
        self.cases.release();
        self.names.release();
        self.sequences.release();
        self.tuples.release();
        self.dicts.release();
        self.binary_ops.release();
        self.unary_ops.release();
        self.ternary_ops.release();
        self.subscripts.release();
        self.subscript_ends.release();
        self.subscript_steps.release();
        self.var_assigns.release();
        self.func_calls.release();
        self.ex_func_calls.release();
        self.dollar_methods.release();
        self.ex_dollar_methods.release();
        self.ifs.release();
        self.if_elses.release();
        self.if_elifs.release();
        self.switches.release();
        self.switch_defaults.release();
        self.imports.release();
    }
}

fn push_cases(out: &mut SmallVec<[Node; 4]>, cases: &[Case]) {
    for case in cases {
        out.push(case.condition);
        out.push(case.body);
    }
}
