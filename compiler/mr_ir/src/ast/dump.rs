//! Indented debug rendering of a tree.

use std::fmt::Write;

use super::{AstArena, Node, NodeView};
use crate::TokenList;

impl AstArena {
    /// Render `node` and its subtree, one node per line, children indented
    /// by two spaces. Scalar nodes show their token payload.
    pub fn dump(&self, node: Node, tokens: &TokenList) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, node, tokens, 0);
        out
    }

    fn dump_into(&self, out: &mut String, node: Node, tokens: &TokenList, depth: usize) {
        let indent = depth * 2;
        let kind = node.kind();
        let label = match self.view(node) {
            None => format!("{kind:?} <dangling>"),
            Some(NodeView::Null) => "Null".to_owned(),
            Some(NodeView::Scalar { token, .. }) => match tokens.get(token) {
                Some(token) => format!("{kind:?} {}", token.value),
                None => format!("{kind:?} <token {}>", token.raw()),
            },
            Some(NodeView::BinaryOp(record)) => format!("{kind:?} {}", record.op.as_symbol()),
            Some(NodeView::UnaryOp(record)) => format!("{kind:?} {}", record.op.as_symbol()),
            Some(NodeView::VarAssign(record)) => {
                let name = tokens.get(record.name).map(|t| t.value.to_string());
                format!(
                    "{kind:?} {} {:?} {:?}",
                    name.unwrap_or_default(),
                    record.access,
                    record.modifiers
                )
            }
            Some(NodeView::Import { libraries, .. }) => {
                let names: Vec<String> = libraries
                    .iter()
                    .filter_map(|&idx| tokens.get(idx).map(|t| t.value.to_string()))
                    .collect();
                format!("{kind:?} {}", names.join(", "))
            }
            Some(_) => format!("{kind:?}"),
        };
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{:indent$}{label}", "");
        mr_stack::ensure_sufficient_stack(|| {
            for child in self.children(node) {
                self.dump_into(out, child, tokens, depth + 1);
            }
        });
    }
}
