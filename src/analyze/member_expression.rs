use tree_sitter::Node;

use crate::check::Checker;
use crate::lints::newline_per_chained_call::newline_per_chained_call::newline_per_chained_call;
use crate::source::SourceFile;

/// Entry point for member and subscript accesses, the node kinds the
/// chained-call rule cares about.
pub fn member_expression(
    node: Node,
    checker: &mut Checker,
    source: &SourceFile,
) -> anyhow::Result<()> {
    if checker.is_rule_enabled("newline_per_chained_call") {
        let diagnostics = newline_per_chained_call(node, source, &checker.chained_call)?;
        checker.report_diagnostics(diagnostics);
    }
    Ok(())
}
