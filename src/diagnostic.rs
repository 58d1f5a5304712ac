use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::PathBuf;

use crate::lints::{all_nofix_rules, all_safe_rules};
use crate::location::{Location, TextRange};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
// The fix to apply to the violation.
pub struct Fix {
    pub content: String,
    pub start: usize,
    pub end: usize,
    // A fix that must not be applied, e.g. because the user disabled fixes
    // for this rule.
    pub to_skip: bool,
}

impl Fix {
    pub fn empty() -> Self {
        Self {
            content: "".to_string(),
            start: 0usize,
            end: 0usize,
            to_skip: true,
        }
    }

    /// A pure insertion of `content` immediately before the byte `offset`.
    pub fn insertion(content: &str, offset: usize) -> Self {
        Self {
            content: content.to_string(),
            start: offset,
            end: offset,
            to_skip: false,
        }
    }
}

/// Details on the violated rule.
pub trait Violation {
    /// Name of the rule.
    fn name(&self) -> String;
    /// Explanation of the rule.
    fn body(&self) -> String;
    /// Optional suggestion for how to fix the violation.
    fn suggestion(&self) -> Option<String> {
        None
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ViolationData {
    pub name: String,
    pub body: String,
    pub suggestion: Option<String>,
}

impl<T: Violation> From<T> for ViolationData {
    fn from(value: T) -> Self {
        Self {
            name: Violation::name(&value),
            body: Violation::body(&value),
            suggestion: Violation::suggestion(&value),
        }
    }
}

impl ViolationData {
    pub fn new(name: String, body: String, suggestion: Option<String>) -> Self {
        Self { name, body, suggestion }
    }

    pub fn empty() -> Self {
        Self {
            name: "".to_string(),
            body: "".to_string(),
            suggestion: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
// The object that is eventually reported to the caller.
pub struct Diagnostic {
    // The name and description of the violated rule.
    pub message: ViolationData,
    // Location of the violated rule.
    pub filename: PathBuf,
    pub range: TextRange,
    pub location: Location,
    // Fix to apply if the caller asked for fixes.
    pub fix: Fix,
}

impl Diagnostic {
    pub fn new<T: Into<ViolationData>>(
        message: T,
        range: TextRange,
        location: Location,
        fix: Fix,
    ) -> Self {
        Self {
            message: message.into(),
            range,
            location,
            fix,
            filename: "".into(),
        }
    }

    pub fn has_safe_fix(&self) -> bool {
        !self.fix.to_skip && all_safe_rules().contains(&self.message.name)
    }

    pub fn has_no_fix(&self) -> bool {
        self.fix.to_skip || all_nofix_rules().contains(&self.message.name)
    }
}

impl Ord for Diagnostic {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare first by filename, then by range
        match self.filename.cmp(&other.filename) {
            Ordering::Equal => self.range.cmp(&other.range),
            other => other,
        }
    }
}

impl PartialOrd for Diagnostic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
