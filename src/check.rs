use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tree_sitter::Node;

use crate::analyze;
use crate::config::Config;
use crate::diagnostic::{Diagnostic, Fix};
use crate::error::ParseError;
use crate::fix::apply_fixes;
use crate::parse::parse_javascript;
use crate::rule_table::RuleTable;
use crate::settings::ChainPolicy;
use crate::source::SourceFile;
use crate::utils_ast::NodeExt;

pub fn check(config: Config) -> Vec<(String, Result<Vec<Diagnostic>, anyhow::Error>)> {
    // Wrap config in Arc to avoid expensive clones in parallel execution
    let config = Arc::new(config);
    tracing::debug!("checking {} files", config.paths.len());

    config
        .paths
        .par_iter()
        .map(|file| {
            let res = check_path(file, Arc::clone(&config));
            (file.display().to_string(), res)
        })
        .collect()
}

pub fn check_path(path: &PathBuf, config: Arc<Config>) -> Result<Vec<Diagnostic>, anyhow::Error> {
    if config.apply_fixes {
        lint_fix(path, config)
    } else {
        lint_only(path, config)
    }
}

pub fn lint_only(path: &PathBuf, config: Arc<Config>) -> Result<Vec<Diagnostic>, anyhow::Error> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let checks = get_checks(&contents, path, &config)
        .with_context(|| format!("Failed to get checks for file: {}", path.display()))?;

    Ok(checks)
}

pub fn lint_fix(path: &PathBuf, config: Arc<Config>) -> Result<Vec<Diagnostic>, anyhow::Error> {
    let mut has_skipped_fixes = true;
    let mut checks: Vec<Diagnostic>;
    let mut passes = 0usize;

    loop {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        checks = get_checks(&contents, path, &config)
            .with_context(|| format!("Failed to get checks for file: {}", path.display()))?;

        if !has_skipped_fixes {
            break;
        }

        let (new_has_skipped_fixes, fixed_text) = apply_fixes(&checks, &contents);
        has_skipped_fixes = new_has_skipped_fixes;
        passes += 1;

        fs::write(path, fixed_text)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
    }

    tracing::debug!("fixed {} in {passes} passes", path.display());
    Ok(checks)
}

#[derive(Debug)]
// The object that collects diagnostics while walking one file's tree. One
// per analyzed file.
pub struct Checker {
    // The diagnostics to report (possibly empty).
    pub diagnostics: Vec<Diagnostic>,
    // Enabled rules and whether their violations should be fixed.
    pub rules: RuleTable,
    // Resolved options for the chained-call rule.
    pub chained_call: ChainPolicy,
}

impl Checker {
    fn new(rules: RuleTable, chained_call: ChainPolicy) -> Self {
        Self {
            diagnostics: vec![],
            rules,
            chained_call,
        }
    }

    // This takes a Vec<Diagnostic> because one rule invocation may report
    // several links of the same chain at once.
    pub(crate) fn report_diagnostics(&mut self, diagnostics: Vec<Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    pub(crate) fn is_rule_enabled(&self, rule: &str) -> bool {
        self.rules.enabled(rule)
    }
}

// Takes the JavaScript code as a string, parses it, and obtains a
// (possibly empty) vector of `Diagnostic`s, sorted by position.
pub fn get_checks(contents: &str, file: &Path, config: &Config) -> Result<Vec<Diagnostic>> {
    let tree = parse_javascript(contents)?;
    if tree.root_node().has_error() {
        return Err(ParseError { filename: file.to_path_buf() }.into());
    }

    let source = SourceFile::new(contents, tree);
    let mut checker = Checker::new(config.rules_to_apply.clone(), config.chained_call);
    check_node(source.root(), &mut checker, &source)?;

    // Rules may have a fix available in their implementation while the
    // caller asked not to fix them; filter those fixes out before they
    // ever reach apply_fixes().
    let mut diagnostics: Vec<Diagnostic> = checker
        .diagnostics
        .into_iter()
        .map(|mut x| {
            x.filename = file.to_path_buf();
            if !config.rules_to_apply.should_fix(&x.message.name) {
                x.fix = Fix::empty();
            }
            x
        })
        .collect();

    // The walk reports outer accesses before inner ones; fixes are applied
    // front to back.
    diagnostics.sort();
    tracing::trace!("{}: {} diagnostics", file.display(), diagnostics.len());

    Ok(diagnostics)
}

// This function does two things:
// - dispatch a node to its appropriate set of rules: member and subscript
//   accesses go to analyze::member_expression.
// - apply itself recursively to the node's children, so that chains inside
//   arguments, bodies and declarations are all visited.
pub fn check_node(node: Node, checker: &mut Checker, source: &SourceFile) -> Result<()> {
    if node.is_member_access() {
        analyze::member_expression::member_expression(node, checker, source)?;
    }

    let mut cursor = node.walk();
    let children: Vec<Node> = node.named_children(&mut cursor).collect();
    drop(cursor);

    for child in children {
        check_node(child, checker, source)?;
    }

    Ok(())
}
