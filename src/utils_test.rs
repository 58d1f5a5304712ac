use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::Builder;

use crate::check::check;
use crate::config::{build_config, ArgsConfig};
use crate::diagnostic::Diagnostic;

fn write_temp_file(text: &str) -> (tempfile::NamedTempFile, PathBuf) {
    let temp_file = Builder::new()
        .prefix("test-chainline")
        .suffix(".js")
        .tempfile()
        .unwrap();

    fs::write(&temp_file, text).expect("Failed to write initial content");
    let path = temp_file.path().to_path_buf();
    (temp_file, path)
}

fn args_config(path: PathBuf, rule: &str, fix: bool, options: Option<Value>) -> ArgsConfig {
    ArgsConfig {
        files: vec![path],
        fix,
        select_rules: rule.to_string(),
        ignore_rules: String::new(),
        options,
    }
}

/// Run the linter on a code snippet and return its diagnostics.
pub fn check_code(text: &str, rule: &str, options: Option<Value>) -> Vec<Diagnostic> {
    let (_guard, path) = write_temp_file(text);
    let config =
        build_config(&args_config(path, rule, false, options)).expect("Failed to build config");

    let results = check(config);
    for (_, result) in results {
        if let Ok(diagnostics) = result {
            return diagnostics;
        }
    }
    Vec::new()
}

/// Test utility function to check if a given JS code contains a specific lint
pub fn has_lint(text: &str, msg: &str, rule: &str, options: Option<Value>) -> bool {
    check_code(text, rule, options).iter().any(|diagnostic| {
        let message = match &diagnostic.message.suggestion {
            Some(suggestion) => format!("{} {}", diagnostic.message.body, suggestion),
            None => diagnostic.message.body.clone(),
        };
        message.contains(msg)
    })
}

/// Test utility function to check if a given JS code does NOT contain any lint
pub fn has_no_lint(text: &str, rule: &str, options: Option<Value>) -> bool {
    check_code(text, rule, options).is_empty()
}

/// Convenience function to assert that code has a specific lint
pub fn expect_lint(text: &str, msg: &str, rule: &str, options: Option<Value>) {
    assert!(
        has_lint(text, msg, rule, options.clone()),
        "Expected lint containing '{msg}' for code: {text}"
    );
}

/// Convenience function to assert that code has no lint
pub fn expect_no_lint(text: &str, rule: &str, options: Option<Value>) {
    let diagnostics = check_code(text, rule, options);
    assert!(
        diagnostics.is_empty(),
        "Expected no lint for code: {text}, got: {:?}",
        diagnostics
            .iter()
            .map(|d| d.message.body.clone())
            .collect::<Vec<_>>()
    );
}

/// Test utility to apply fixes to JS code and return the fixed version
pub fn apply_fixes(text: &str, rule: &str, options: Option<Value>) -> String {
    let (_guard, path) = write_temp_file(text);
    let config = build_config(&args_config(path.clone(), rule, true, options))
        .expect("Failed to build config");

    let _results = check(config);

    // Read the fixed content back
    fs::read_to_string(&path).expect("Failed to read fixed content")
}

/// Get fixed text for a series of code snippets
pub fn get_fixed_text(text: Vec<&str>, rule: &str, options: Option<Value>) -> String {
    let mut output: String = String::new();

    for txt in text.iter() {
        let original_content = txt;
        let modified_content = apply_fixes(txt, rule, options.clone());

        output.push_str(
            format!("OLD:\n====\n{original_content}\nNEW:\n====\n{modified_content}\n\n").as_str(),
        );
    }

    output.trim_end().to_string()
}
