use tree_sitter::{Node, Tree};

use crate::tokens::{Token, TokenStream};

/// One parsed file: its contents, syntax tree and flattened token stream.
///
/// Everything here is read-only for the duration of the file's analysis;
/// rules borrow it and never mutate it.
pub struct SourceFile {
    contents: String,
    tree: Tree,
    tokens: TokenStream,
}

impl SourceFile {
    pub fn new(contents: &str, tree: Tree) -> Self {
        let tokens = TokenStream::from_root(tree.root_node());
        SourceFile {
            contents: contents.to_string(),
            tree,
            tokens,
        }
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Source text covered by `node`.
    pub fn text(&self, node: Node) -> &str {
        &self.contents[node.start_byte()..node.end_byte()]
    }

    /// First non-comment token starting at or after `offset` for which
    /// `predicate` holds.
    pub fn token_after<P>(&self, offset: usize, predicate: P) -> Option<Token>
    where
        P: Fn(&Token) -> bool,
    {
        self.tokens.token_after(offset, predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_javascript;

    #[test]
    fn extracts_node_text() {
        let contents = "foo.bar(1, 2);";
        let tree = parse_javascript(contents).unwrap();
        let source = SourceFile::new(contents, tree);

        let statement = source.root().named_child(0).unwrap();
        let call = statement.named_child(0).unwrap();
        assert_eq!(call.kind(), "call_expression");
        assert_eq!(source.text(call), "foo.bar(1, 2)");
    }
}
