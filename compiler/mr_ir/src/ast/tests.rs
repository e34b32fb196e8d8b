use pretty_assertions::assert_eq;

use super::*;
use crate::{ArenaConfig, Position, Span, Token, TokenKind, TokenList};

/// Token list for `1 + 2` followed by `x`.
fn tokens() -> TokenList {
    let mut list = TokenList::new();
    let p = |offset| Position::new(offset, 1);
    list.push(Token::with_text(TokenKind::Int, p(0), p(1), "1"))
        .unwrap();
    list.push(Token::new(TokenKind::Add, p(2), p(3))).unwrap();
    list.push(Token::with_text(TokenKind::Int, p(4), p(5), "2"))
        .unwrap();
    list.push(Token::with_text(TokenKind::Ident, p(6), p(7), "x"))
        .unwrap();
    list.push(Token::new(TokenKind::Eof, p(7), p(8))).unwrap();
    list
}

fn int(token: u32) -> Node {
    Node::scalar(NodeKind::Int, TokenIdx::from_raw(token)).unwrap()
}

fn add(arena: &mut AstArena) -> Node {
    arena
        .alloc_binary_op(BinaryOpRecord {
            left: int(0),
            right: int(2),
            op: BinaryOp::Add,
            span: Span::new(0, 5),
        })
        .unwrap()
}

// === Node encoding ===

#[test]
fn node_is_nine_bytes() {
    assert_eq!(size_of::<Node>(), 9);
}

#[test]
fn scalar_node_keeps_token_index() {
    let node = int(7);
    assert_eq!(node.kind(), NodeKind::Int);
    assert_eq!(node.token(), Some(TokenIdx::from_raw(7)));
}

#[test]
fn scalar_rejects_composite_kinds() {
    assert_eq!(Node::scalar(NodeKind::List, TokenIdx::from_raw(0)), None);
}

#[test]
fn null_has_no_token() {
    assert!(Node::NULL.is_null());
    assert_eq!(Node::NULL.token(), None);
    assert_eq!(Node::default(), Node::NULL);
}

#[test]
fn composite_nodes_have_no_token() {
    let mut arena = AstArena::new();
    let node = add(&mut arena);
    assert_eq!(node.kind(), NodeKind::BinaryOp);
    assert_eq!(node.token(), None);
}

// === Views ===

#[test]
fn view_binary_op() {
    let mut arena = AstArena::new();
    let node = add(&mut arena);
    let Some(NodeView::BinaryOp(record)) = arena.view(node) else {
        panic!("expected binary op view");
    };
    assert_eq!(record.op, BinaryOp::Add);
    assert_eq!(record.left, int(0));
}

#[test]
fn view_scalar() {
    let arena = AstArena::new();
    assert_eq!(
        arena.view(int(2)),
        Some(NodeView::Scalar {
            kind: NodeKind::Int,
            token: TokenIdx::from_raw(2)
        })
    );
    assert_eq!(arena.view(Node::NULL), Some(NodeView::Null));
}

#[test]
fn view_shared_shapes_keep_their_kind() {
    let mut arena = AstArena::new();
    let elements = arena.alloc_nodes([int(0), int(2)]).unwrap();
    let record = SequenceRecord {
        elements,
        span: Span::new(0, 6),
    };
    let list = arena.alloc_sequence(SequenceKind::List, record).unwrap();
    let set = arena.alloc_sequence(SequenceKind::Set, record).unwrap();
    assert_eq!(list.kind(), NodeKind::List);
    assert_eq!(set.kind(), NodeKind::Set);
    let Some(NodeView::Sequence { kind, elements, .. }) = arena.view(set) else {
        panic!("expected sequence view");
    };
    assert_eq!(kind, SequenceKind::Set);
    assert_eq!(elements, &[int(0), int(2)]);
}

#[test]
fn every_composite_node_gets_its_own_record() {
    let mut arena = AstArena::new();
    let a = add(&mut arena);
    let b = add(&mut arena);
    assert_ne!(a, b);
    assert_eq!(arena.record_count(), 2);
}

#[test]
fn dangling_handle_has_no_view() {
    let mut arena = AstArena::new();
    let node = add(&mut arena);
    let empty = AstArena::new();
    assert_eq!(empty.view(node), None);
    arena.release();
    assert_eq!(arena.view(node), None);
    assert_eq!(arena.record_count(), 0);
}

// === Source positions ===

#[test]
fn span_of_scalar_comes_from_token() {
    let tokens = tokens();
    let arena = AstArena::new();
    assert_eq!(arena.span(int(2), &tokens), Some(Span::new(4, 5)));
    assert_eq!(arena.start(int(2), &tokens), Some(4));
    assert_eq!(arena.end(int(2), &tokens), Some(5));
}

#[test]
fn span_of_composite_comes_from_record() {
    let tokens = tokens();
    let mut arena = AstArena::new();
    let node = add(&mut arena);
    assert_eq!(arena.start(node, &tokens), Some(0));
    assert_eq!(arena.end(node, &tokens), Some(5));
}

#[test]
fn span_of_null_is_none() {
    let arena = AstArena::new();
    assert_eq!(arena.span(Node::NULL, &tokens()), None);
}

// === Children ===

#[test]
fn children_in_source_order() {
    let mut arena = AstArena::new();
    let sum = add(&mut arena);
    let var = Node::scalar(NodeKind::VarAccess, TokenIdx::from_raw(3)).unwrap();
    let cases = arena
        .alloc_cases([Case {
            condition: var,
            body: sum,
        }])
        .unwrap();
    let chain = arena
        .alloc_if_elif(IfElifRecord {
            cases,
            else_body: Node::NULL,
            span: Span::new(0, 20),
        })
        .unwrap();
    assert_eq!(arena.children(chain).as_slice(), &[var, sum]);
    assert_eq!(arena.children(sum).as_slice(), &[int(0), int(2)]);
    assert!(arena.children(int(0)).is_empty());
}

#[test]
fn call_children_are_callee_then_argument_values() {
    let mut arena = AstArena::new();
    let callee = Node::scalar(NodeKind::VarAccess, TokenIdx::from_raw(3)).unwrap();
    let args = arena
        .alloc_call_args([
            CallArg::positional(int(0)),
            CallArg {
                value: int(2),
                name: TokenIdx::from_raw(3),
            },
        ])
        .unwrap();
    let call = arena
        .alloc_func_call(FuncCallRecord {
            args,
            callee,
            span: Span::new(0, 10),
        })
        .unwrap();
    assert_eq!(arena.children(call).as_slice(), &[callee, int(0), int(2)]);
    let Some(NodeView::FuncCall { args, .. }) = arena.view(call) else {
        panic!("expected call view");
    };
    assert!(!args[0].is_named());
    assert!(args[1].is_named());
}

// === Structural equality ===

#[test]
fn equal_trees_in_different_arenas() {
    let mut a = AstArena::new();
    let mut b = AstArena::new();
    // Shift b's handles so identity comparison would fail.
    add(&mut b);
    let left = add(&mut a);
    let right = add(&mut b);
    assert_ne!(left.data(), right.data());
    assert!(a.structurally_eq(left, &b, right));
}

#[test]
fn different_operators_are_not_equal() {
    let mut arena = AstArena::new();
    let sum = add(&mut arena);
    let diff = arena
        .alloc_binary_op(BinaryOpRecord {
            left: int(0),
            right: int(2),
            op: BinaryOp::Sub,
            span: Span::new(0, 5),
        })
        .unwrap();
    assert!(!arena.structurally_eq(sum, &arena, diff));
}

#[test]
fn nested_difference_is_found() {
    let mut arena = AstArena::new();
    let inner_a = add(&mut arena);
    let inner_b = arena
        .alloc_binary_op(BinaryOpRecord {
            left: int(0),
            right: int(0),
            op: BinaryOp::Add,
            span: Span::new(0, 5),
        })
        .unwrap();
    let wrap = |arena: &mut AstArena, operand| {
        arena
            .alloc_unary_op(UnaryOpRecord {
                operand,
                op: UnaryOp::Neg,
                span: Span::new(0, 6),
            })
            .unwrap()
    };
    let a = wrap(&mut arena, inner_a);
    let b = wrap(&mut arena, inner_b);
    let c = wrap(&mut arena, inner_a);
    assert!(!arena.structurally_eq(a, &arena, b));
    assert!(arena.structurally_eq(a, &arena, c));
}

#[test]
fn deep_chains_compare_without_overflow() {
    let mut a = AstArena::new();
    let mut b = AstArena::new();
    let mut left = int(0);
    let mut right = int(0);
    for _ in 0..20_000 {
        let record = |operand| UnaryOpRecord {
            operand,
            op: UnaryOp::Not,
            span: Span::new(0, 1),
        };
        left = a.alloc_unary_op(record(left)).unwrap();
        right = b.alloc_unary_op(record(right)).unwrap();
    }
    assert!(a.structurally_eq(left, &b, right));
}

// === Records ===

#[test]
fn var_assign_modifiers_and_access() {
    let mut arena = AstArena::new();
    let node = arena
        .alloc_var_assign(VarAssignRecord {
            name: TokenIdx::from_raw(3),
            access: Access::Protected,
            modifiers: Modifiers::CONST | Modifiers::STATIC,
            value: int(0),
            declared_type: Some(TokenKind::IntType),
            span: Span::new(0, 7),
        })
        .unwrap();
    let Some(NodeView::VarAssign(record)) = arena.view(node) else {
        panic!("expected var assign view");
    };
    assert_eq!(record.access, Access::Protected);
    assert!(record.modifiers.contains(Modifiers::CONST));
    assert!(!record.modifiers.contains(Modifiers::GLOBAL));
    assert_eq!(Access::from_token(TokenKind::Public), Some(Access::Public));
    assert_eq!(Modifiers::from_token(TokenKind::Readonly), Some(Modifiers::READONLY));
}

#[test]
fn operators_from_tokens() {
    assert_eq!(BinaryOp::from_token(TokenKind::And), Some(BinaryOp::And));
    assert_eq!(BinaryOp::from_token(TokenKind::ExNotEq), Some(BinaryOp::ExNotEq));
    assert_eq!(BinaryOp::from_token(TokenKind::Assign), None);
    assert_eq!(
        BinaryOp::from_compound_assign(TokenKind::PowAssign),
        Some(BinaryOp::Pow)
    );
    assert_eq!(UnaryOp::from_prefix_token(TokenKind::Not), Some(UnaryOp::Not));
    assert_eq!(UnaryOp::from_postfix_token(TokenKind::Inc), Some(UnaryOp::PostInc));
    assert!(UnaryOp::PostDec.is_postfix());
    assert_eq!(BinaryOp::Quot.as_symbol(), "//");
}

// === Arena sizing ===

#[test]
fn configured_arena_allocates_lazily() {
    let mut arena = AstArena::with_config(4096, &ArenaConfig::default());
    assert_eq!(arena.record_count(), 0);
    let node = add(&mut arena);
    assert!(arena.view(node).is_some());
}

// === Dump ===

#[test]
fn dump_indents_children() {
    let tokens = tokens();
    let mut arena = AstArena::new();
    let sum = add(&mut arena);
    let libraries = arena.alloc_names([TokenIdx::from_raw(3)]).unwrap();
    let import = arena
        .alloc_import(
            ImportKind::Include,
            ImportRecord {
                libraries,
                span: Span::new(0, 9),
            },
        )
        .unwrap();
    assert_eq!(arena.dump(sum, &tokens), "BinaryOp +\n  Int 1\n  Int 2\n");
    assert_eq!(arena.dump(import, &tokens), "Include x\n");
}
