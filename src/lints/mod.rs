use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::OnceLock;

pub(crate) mod newline_per_chained_call;

/// List of supported rules and whether they have a safe fix.
pub fn all_rules_and_safety() -> FxHashMap<&'static str, bool> {
    let mut rules = FxHashMap::default();
    rules.insert("newline_per_chained_call", true);
    rules
}

/// Cached set of safe rule names for O(1) lookup
static SAFE_RULES: OnceLock<FxHashSet<String>> = OnceLock::new();

/// Cached set of no-fix rule names for O(1) lookup
static NOFIX_RULES: OnceLock<FxHashSet<String>> = OnceLock::new();

/// Get the cached set of safe rule names
pub fn safe_rules_set() -> &'static FxHashSet<String> {
    SAFE_RULES.get_or_init(|| {
        all_rules_and_safety()
            .iter()
            .filter(|(_, safe)| **safe)
            .map(|(name, _)| name.to_string())
            .collect()
    })
}

/// Get the cached set of no-fix rule names
pub fn nofix_rules_set() -> &'static FxHashSet<String> {
    NOFIX_RULES.get_or_init(|| {
        all_rules_and_safety()
            .iter()
            .filter(|(_, safe)| !**safe)
            .map(|(name, _)| name.to_string())
            .collect()
    })
}

pub fn all_safe_rules() -> Vec<String> {
    safe_rules_set().iter().cloned().collect()
}

pub fn all_nofix_rules() -> Vec<String> {
    nofix_rules_set().iter().cloned().collect()
}
