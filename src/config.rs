use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::lints::all_rules_and_safety;
use crate::rule_table::RuleTable;
use crate::settings::{ChainPolicy, RawChainOptions};

/// Programmatic equivalent of command-line arguments. There is no CLI in
/// this crate; callers fill this in directly.
#[derive(Debug, Clone, Default)]
pub struct ArgsConfig {
    pub files: Vec<PathBuf>,
    pub fix: bool,
    /// Comma-separated rule names to check; empty means all rules.
    pub select_rules: String,
    /// Comma-separated rule names to skip.
    pub ignore_rules: String,
    /// Options object for `newline_per_chained_call`.
    pub options: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Paths to files to lint.
    pub paths: Vec<PathBuf>,
    /// List of rules to use and whether their fix should be applied.
    pub rules_to_apply: RuleTable,
    /// Did the caller ask for fixes to be written back?
    pub apply_fixes: bool,
    /// Resolved options for the chained-call rule.
    pub chained_call: ChainPolicy,
}

pub fn build_config(args: &ArgsConfig) -> Result<Config> {
    let rules_to_apply = parse_rules(&args.select_rules, &args.ignore_rules);

    let chained_call = match &args.options {
        Some(value) => {
            let raw: RawChainOptions = serde_json::from_value(value.clone())
                .context("Invalid options for `newline_per_chained_call`")?;
            raw.resolve()
        }
        None => ChainPolicy::default(),
    };

    Ok(Config {
        paths: args.files.clone(),
        rules_to_apply,
        apply_fixes: args.fix,
        chained_call,
    })
}

pub fn parse_rules(select: &str, ignore: &str) -> RuleTable {
    let selected: Vec<&str> = split_rule_list(select);
    let ignored: Vec<&str> = split_rule_list(ignore);

    let mut table = RuleTable::empty();
    for (name, has_safe_fix) in all_rules_and_safety() {
        if !selected.is_empty() && !selected.contains(&name) {
            continue;
        }
        if ignored.contains(&name) {
            continue;
        }
        table.enable(name, has_safe_fix);
    }
    table
}

fn split_rule_list(list: &str) -> Vec<&str> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_enables_everything() {
        let table = parse_rules("", "");
        assert!(table.enabled("newline_per_chained_call"));
        assert!(table.should_fix("newline_per_chained_call"));
    }

    #[test]
    fn ignore_wins_over_select() {
        let table = parse_rules("newline_per_chained_call", "newline_per_chained_call");
        assert!(!table.enabled("newline_per_chained_call"));
    }

    #[test]
    fn unknown_selection_enables_nothing() {
        let table = parse_rules("no_such_rule", "");
        assert!(!table.enabled("newline_per_chained_call"));
    }

    #[test]
    fn options_flow_into_the_policy() {
        let args = ArgsConfig {
            options: Some(serde_json::json!({ "ignoreChainWithDepth": 4 })),
            ..ArgsConfig::default()
        };
        let config = build_config(&args).unwrap();
        assert_eq!(config.chained_call.ignore_chain_with_depth, 4);
    }

    #[test]
    fn bad_options_error_out() {
        let args = ArgsConfig {
            options: Some(serde_json::json!({ "ignoreChainWithDepth": -1 })),
            ..ArgsConfig::default()
        };
        assert!(build_config(&args).is_err());
    }
}
