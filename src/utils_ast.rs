//! Extension trait for tree-sitter nodes providing ergonomic helper methods.

use tree_sitter::Node;

/// Common structural checks shared by the walker and the rules.
pub trait NodeExt<'t> {
    /// Returns true if this node is a call expression.
    fn is_call(&self) -> bool;

    /// Returns true if this node is a member or subscript access.
    fn is_member_access(&self) -> bool;

    /// Returns the node with any wrapping parentheses removed.
    fn skip_parens(self) -> Node<'t>;

    /// Returns true if this node is the callee of its parent call.
    fn is_callee(&self) -> bool;

    /// Returns true if this node terminates a chain walk: a statement of
    /// any kind or a variable declarator.
    fn is_chain_boundary(&self) -> bool;
}

impl<'t> NodeExt<'t> for Node<'t> {
    fn is_call(&self) -> bool {
        self.kind() == "call_expression"
    }

    fn is_member_access(&self) -> bool {
        matches!(self.kind(), "member_expression" | "subscript_expression")
    }

    fn skip_parens(self) -> Node<'t> {
        let mut node = self;
        while node.kind() == "parenthesized_expression" {
            let inner = (0..node.named_child_count())
                .filter_map(|i| node.named_child(i))
                .find(|n| n.kind() != "comment");
            match inner {
                Some(inner) => node = inner,
                None => break,
            }
        }
        node
    }

    fn is_callee(&self) -> bool {
        self.parent().is_some_and(|parent| {
            parent.kind() == "call_expression"
                && parent
                    .child_by_field_name("function")
                    .is_some_and(|callee| callee.id() == self.id())
        })
    }

    fn is_chain_boundary(&self) -> bool {
        self.kind().ends_with("statement") || self.kind() == "variable_declarator"
    }
}
