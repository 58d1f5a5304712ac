//! Core functionality for the chainline JavaScript linter
//!
//! This crate provides the core linting functionality including:
//! - Syntax-tree analysis and rule checking
//! - Diagnostic generation with line-break fixes
//! - Configuration management for the chained-call rule
//! - Parallel file checking and fix application

pub mod analyze;
pub mod check;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod fix;
pub mod lints;
pub mod location;
pub mod parse;
pub mod rule_table;
pub mod settings;
pub mod source;
pub mod tokens;
pub mod utils_ast;

#[cfg(test)]
pub mod utils_test;

// Re-export commonly used types for convenience
pub use check::{check, get_checks, Checker};
pub use config::{build_config, ArgsConfig, Config};
pub use diagnostic::{Diagnostic, Fix};
pub use error::ParseError;
pub use location::Location;
pub use rule_table::RuleTable;
pub use settings::{ChainPolicy, DepthCalculationStyle, RawChainOptions};
pub use source::SourceFile;
