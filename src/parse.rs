use anyhow::{Context, Result};
use tree_sitter::{Parser, Tree};

/// Parses JavaScript source text into a tree-sitter syntax tree.
///
/// The returned tree may contain error nodes; callers decide whether a
/// partially parsed file is acceptable (linting rejects it, see
/// `check::get_checks`).
pub fn parse_javascript(contents: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    let language: tree_sitter::Language = tree_sitter_javascript::LANGUAGE.into();
    parser
        .set_language(&language)
        .context("Failed to load the JavaScript grammar")?;

    parser
        .parse(contents, None)
        .context("The parser did not return a syntax tree")
}
