use serde::Deserialize;

/// Depth accounting strategy for the chained-call rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum DepthCalculationStyle {
    /// Evaluate the whole statement-level chain once and report every
    /// over-depth link still sharing a line with its object.
    #[serde(rename = "all")]
    All,
    /// Evaluate each link independently as the walk visits it.
    #[default]
    #[serde(rename = "perLine")]
    PerLine,
}

/// Options for `newline_per_chained_call` as provided by the caller, before
/// defaulting.
///
/// Uses `None` to indicate an absent field, so that an explicit `false`
/// (e.g. `includeBrackets: false`) is distinguishable from "not set" and
/// always takes effect.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawChainOptions {
    pub depth_calculation_style: Option<DepthCalculationStyle>,
    pub ignore_chain_with_depth: Option<usize>,
    pub include_brackets: Option<bool>,
    pub include_method_calls: Option<bool>,
    pub include_properties: Option<bool>,
}

impl RawChainOptions {
    /// Fills in the documented default for every absent field.
    pub fn resolve(&self) -> ChainPolicy {
        ChainPolicy {
            style: self.depth_calculation_style.unwrap_or_default(),
            ignore_chain_with_depth: self.ignore_chain_with_depth.unwrap_or(2),
            include_brackets: self.include_brackets.unwrap_or(true),
            include_method_calls: self.include_method_calls.unwrap_or(true),
            include_properties: self.include_properties.unwrap_or(false),
        }
    }
}

/// Fully resolved, validated configuration for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainPolicy {
    pub style: DepthCalculationStyle,
    /// Chains of exactly this depth are left alone; only strictly deeper
    /// chains report.
    pub ignore_chain_with_depth: usize,
    pub include_brackets: bool,
    pub include_method_calls: bool,
    pub include_properties: bool,
}

impl Default for ChainPolicy {
    fn default() -> Self {
        RawChainOptions::default().resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let policy = ChainPolicy::default();
        assert_eq!(policy.style, DepthCalculationStyle::PerLine);
        assert_eq!(policy.ignore_chain_with_depth, 2);
        assert!(policy.include_brackets);
        assert!(policy.include_method_calls);
        assert!(!policy.include_properties);
    }

    #[test]
    fn explicit_false_is_not_re_defaulted() {
        let raw: RawChainOptions = serde_json::from_value(serde_json::json!({
            "includeBrackets": false,
            "includeMethodCalls": false,
        }))
        .unwrap();
        let policy = raw.resolve();
        assert!(!policy.include_brackets);
        assert!(!policy.include_method_calls);
        // Untouched fields still take their defaults.
        assert_eq!(policy.ignore_chain_with_depth, 2);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let parsed: Result<RawChainOptions, _> = serde_json::from_value(serde_json::json!({
            "ignoreChainDepth": 3,
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn style_names_are_camel_case() {
        let raw: RawChainOptions = serde_json::from_value(serde_json::json!({
            "depthCalculationStyle": "all",
        }))
        .unwrap();
        assert_eq!(raw.resolve().style, DepthCalculationStyle::All);

        let parsed: Result<RawChainOptions, _> = serde_json::from_value(serde_json::json!({
            "depthCalculationStyle": "per_line",
        }));
        assert!(parsed.is_err());
    }
}
