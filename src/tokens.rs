use tree_sitter::Node;

/// One leaf token of the parsed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: &'static str,
    pub start: usize,
    pub end: usize,
    /// 0-based row of the token's first character.
    pub row: usize,
    /// 0-based row of the token's last character.
    pub end_row: usize,
    pub is_comment: bool,
}

/// All leaf tokens of a file in source order.
///
/// Comments are kept in the stream but flagged, and every positional query
/// skips them: a comment never becomes an insertion target.
#[derive(Debug, Default)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn from_root(root: Node) -> Self {
        let mut tokens = Vec::new();
        collect_tokens(root, &mut tokens);
        TokenStream { tokens }
    }

    /// First non-comment token starting at or after `offset` for which
    /// `predicate` holds.
    pub fn token_after<P>(&self, offset: usize, predicate: P) -> Option<Token>
    where
        P: Fn(&Token) -> bool,
    {
        let from = self.tokens.partition_point(|t| t.start < offset);
        self.tokens[from..]
            .iter()
            .find(|t| !t.is_comment && predicate(t))
            .copied()
    }

    /// Are two tokens on the same source line?
    pub fn same_line(a: &Token, b: &Token) -> bool {
        a.end_row == b.row
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

fn collect_tokens(node: Node, tokens: &mut Vec<Token>) {
    if node.child_count() == 0 {
        // Missing nodes are zero-width error recovery artifacts.
        if !node.is_missing() && node.end_byte() > node.start_byte() {
            tokens.push(Token {
                kind: node.kind(),
                start: node.start_byte(),
                end: node.end_byte(),
                row: node.start_position().row,
                end_row: node.end_position().row,
                is_comment: node.kind() == "comment",
            });
        }
        return;
    }

    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    for child in children {
        collect_tokens(child, tokens);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_javascript;

    #[test]
    fn tokens_are_in_source_order() {
        let contents = "foo.bar();";
        let tree = parse_javascript(contents).unwrap();
        let stream = TokenStream::from_root(tree.root_node());

        let mut last = 0;
        assert!(!stream.is_empty());
        for token in &stream.tokens {
            assert!(token.start >= last);
            last = token.start;
        }
    }

    #[test]
    fn token_after_skips_comments_and_filtered_kinds() {
        let contents = "foo.bar() /* note */ .baz();";
        let tree = parse_javascript(contents).unwrap();
        let stream = TokenStream::from_root(tree.root_node());

        // After `foo.bar()` the next insertion target is the dot, not the
        // comment and not the call's closing parenthesis.
        let object_end = contents.find(')').unwrap() + 1;
        let token = stream
            .token_after(object_end, |t| t.kind != ")")
            .unwrap();
        assert_eq!(token.kind, ".");
        assert_eq!(&contents[token.start..token.end], ".");
        assert!(token.start > contents.find("note").unwrap());
    }

    #[test]
    fn same_line_compares_physical_rows() {
        let contents = "foo\n.bar();";
        let tree = parse_javascript(contents).unwrap();
        let stream = TokenStream::from_root(tree.root_node());

        let foo = stream.token_after(0, |t| t.kind == "identifier").unwrap();
        let dot = stream.token_after(foo.end, |t| t.kind == ".").unwrap();
        let bar = stream.token_after(dot.end, |_| true).unwrap();
        assert!(!TokenStream::same_line(&foo, &dot));
        assert!(TokenStream::same_line(&dot, &bar));
    }
}
