use tree_sitter::Node;

use crate::diagnostic::{Diagnostic, Fix, Violation};
use crate::location::{Location, TextRange};
use crate::settings::{ChainPolicy, DepthCalculationStyle};
use crate::source::SourceFile;
use crate::utils_ast::NodeExt;

use super::chain::{extract, Access, Link};

struct ExpectedLineBreak {
    accessor: String,
}

impl Violation for ExpectedLineBreak {
    fn name(&self) -> String {
        "newline_per_chained_call".to_string()
    }

    fn body(&self) -> String {
        format!("Expected line break before `{}`.", self.accessor)
    }

    fn suggestion(&self) -> Option<String> {
        Some("Put each chained call on its own line.".to_string())
    }
}

/// ## What it does
///
/// Requires a line break before each call or access in a method chain that
/// is deeper than `ignoreChainWithDepth` (default 2). Which accesses count
/// toward depth and which may be broken is configurable: method calls
/// (`includeMethodCalls`, default true), plain property accesses
/// (`includeProperties`, default false) and bracket accesses
/// (`includeBrackets`, default true).
///
/// With `depthCalculationStyle: "perLine"` (the default) every over-depth
/// link still sharing a line with its object is reported as the walk
/// reaches it. With `"all"`, the whole statement-level chain is evaluated
/// once and every same-line link in it is reported together.
///
/// ## Why is this bad?
///
/// Long chains crammed onto one line are hard to scan and produce noisy
/// diffs when one step changes. Breaking before each accessor gives every
/// step its own line.
///
/// ## Example
///
/// ```js
/// _.chain({}).map(foo).filter(bar).value();
/// ```
///
/// Use instead:
/// ```js
/// _.chain({})
///   .map(foo)
///   .filter(bar)
///   .value();
/// ```
///
/// The fix inserts a newline before each reported accessor and leaves
/// indentation to a formatter. Accesses already on their own line are
/// never touched, so applying fixes and re-linting converges immediately.
pub fn newline_per_chained_call(
    node: Node,
    source: &SourceFile,
    policy: &ChainPolicy,
) -> anyhow::Result<Vec<Diagnostic>> {
    let diagnostics = match policy.style {
        DepthCalculationStyle::PerLine => check_per_line(node, source, policy),
        DepthCalculationStyle::All => check_whole_chain(node, source, policy),
    };
    Ok(diagnostics)
}

// Evaluated at every member/subscript node. Reports the node's own link
// when the chain behind it is deep enough and the link still shares a
// line with its object.
fn check_per_line(node: Node, source: &SourceFile, policy: &ChainPolicy) -> Vec<Diagnostic> {
    let chain = extract(node, policy, source);
    // The first link is the visited node itself; an empty chain means the
    // node is not a countable link.
    let Some(current) = chain.links.first() else {
        return vec![];
    };
    if chain.len() <= policy.ignore_chain_with_depth {
        return vec![];
    }
    if !current.reportable || !current.same_line() {
        return vec![];
    }

    report(current, source).into_iter().collect()
}

// Evaluated once per logical chain, at the outermost access of a full
// statement. Reports every link still sharing a line with its object.
fn check_whole_chain(node: Node, source: &SourceFile, policy: &ChainPolicy) -> Vec<Diagnostic> {
    if !is_statement_level(node) {
        return vec![];
    }

    let chain = extract(node, policy, source);
    if chain.len() <= policy.ignore_chain_with_depth {
        return vec![];
    }
    // A chain with a bracket the policy refuses to break is left whole:
    // splitting everything around the bracket gives a lopsided layout.
    if chain.has_suppressed_link() {
        return vec![];
    }
    if !chain.has_same_line_link() {
        return vec![];
    }

    chain
        .links
        .iter()
        .filter(|link| link.reportable && link.same_line())
        .filter_map(|link| report(link, source))
        .collect()
}

// The termination test for whole-chain evaluation: after unwrapping one
// enclosing call, the parent must be a statement or variable declarator.
// Inner accesses of the same chain fail this test, so each logical chain
// is evaluated exactly once.
fn is_statement_level(node: Node) -> bool {
    let Some(parent) = node.parent() else {
        return false;
    };

    let boundary = if parent.is_call()
        && parent
            .child_by_field_name("function")
            .is_some_and(|callee| callee.id() == node.id())
    {
        match parent.parent() {
            Some(grandparent) => grandparent,
            None => return false,
        }
    } else {
        parent
    };

    boundary.is_chain_boundary()
}

fn report(link: &Link, source: &SourceFile) -> Option<Diagnostic> {
    let access = &link.access;
    let fix = synthesize_fix(access, source)?;
    let range = TextRange::new(access.property.start_byte(), access.property.end_byte());
    let location = Location::from(access.property.start_position());

    Some(Diagnostic::new(
        ExpectedLineBreak { accessor: accessor_text(access, source) },
        range,
        location,
        fix,
    ))
}

// The newline goes before the first token after the object that is not a
// closing parenthesis, so it lands on the accessor itself even when the
// object ends in wrapped or already-fixed layout. Comments are skipped by
// the token query.
fn synthesize_fix(access: &Access, source: &SourceFile) -> Option<Fix> {
    let token = source.token_after(access.object.end_byte(), |t| t.kind != ")")?;
    Some(Fix::insertion("\n", token.start))
}

// `.name` for dot access, `[key]` for subscripts. A multi-line key
// contributes only its first line, without the closing bracket.
fn accessor_text(access: &Access, source: &SourceFile) -> String {
    if !access.computed {
        return format!(".{}", source.text(access.property));
    }

    let key = source.text(access.property);
    match key.split_once('\n') {
        Some((first_line, _)) => format!("[{}", first_line.trim_end()),
        None => format!("[{key}]"),
    }
}
