//! Configuration management for `unstyle-core`.
//!
//! This module defines the data structures for style rules and rule sets.
//! It handles deserialization of YAML rule files, the embedded default
//! catalog, and utilities for merging, filtering and validating rule sets.
//!
//! Rule order is significant everywhere in this module: rules are applied
//! one after another, so every operation here preserves the order it was given.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use log::{debug, info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// Maximum allowed length for a pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

lazy_static! {
    /// Capture references in a replacement template: `$$` escapes, `${N}`,
    /// and bare `$N` together with the character that follows its digits.
    static ref CAPTURE_REF_REGEX: Regex = Regex::new(r"\$\$|\$\{(\d+)\}|\$(\d+)(\w?)").unwrap();
}

/// How a rule's `pattern` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    /// Matched byte-for-byte. The replacement is inserted verbatim.
    #[default]
    Literal,
    /// A regular expression. The replacement may reference captures as `$1` or `${1}`.
    Regex,
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PatternType::Literal => write!(f, "literal"),
            PatternType::Regex => write!(f, "regex"),
        }
    }
}

/// A single inline-style rewrite rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct StyleRule {
    /// Unique identifier for the rule (e.g., "margin_top_md").
    pub name: String,
    /// Human-readable description of what the rule targets.
    pub description: Option<String>,
    /// The attribute fragment to look for, leading space included.
    pub pattern: Option<String>,
    pub pattern_type: PatternType,
    /// What the matched fragment becomes. Empty removes the attribute.
    pub replace_with: String,
    /// Explicit override for enabling/disabling the rule.
    pub enabled: Option<bool>,
    /// If true, the rule is skipped unless explicitly enabled.
    pub opt_in: bool,
    pub tags: Option<Vec<String>>,
}

impl Default for StyleRule {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            pattern: None,
            pattern_type: PatternType::Literal,
            replace_with: String::new(),
            enabled: None,
            opt_in: false,
            tags: None,
        }
    }
}

impl StyleRule {
    /// Convenience constructor for a literal rule.
    pub fn literal(name: &str, pattern: &str, replace_with: &str) -> Self {
        Self {
            name: name.to_string(),
            pattern: Some(pattern.to_string()),
            replace_with: replace_with.to_string(),
            ..Default::default()
        }
    }

    /// Convenience constructor for a regex rule.
    pub fn regex(name: &str, pattern: &str, replace_with: &str) -> Self {
        Self {
            pattern_type: PatternType::Regex,
            ..Self::literal(name, pattern, replace_with)
        }
    }

    /// Whether the rule takes part in a rewrite pass.
    pub fn is_active(&self) -> bool {
        self.enabled.unwrap_or(!self.opt_in)
    }
}

/// An ordered set of style rules.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct RewriteConfig {
    #[serde(default)]
    pub rules: Vec<StyleRule>,
}

/// Per-rule outcome of a rewrite pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteSummaryItem {
    pub rule_name: String,
    pub occurrences: usize,
    pub original_texts: Vec<String>,
    pub replaced_texts: Vec<String>,
}

impl RewriteConfig {
    /// Loads style rules from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom rules from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: RewriteConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_rules(&config.rules)?;
        info!("Loaded {} rules from file {}.", config.rules.len(), path.display());

        Ok(config)
    }

    /// Loads the built-in inline style catalog.
    pub fn load_default_rules() -> Result<Self> {
        debug!("Loading default rules from embedded string...");
        let default_yaml = include_str!("../config/default_rules.yaml");
        let config: RewriteConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default rules")?;

        debug!("Loaded {} default rules.", config.rules.len());
        Ok(config)
    }

    /// Filters active rules based on enable/disable lists provided via CLI.
    ///
    /// Disabled names always win. Opt-in rules and rules marked
    /// `enabled: false` survive only when named in `enable_rules`.
    pub fn set_active_rules(&mut self, enable_rules: &[String], disable_rules: &[String]) {
        let enable_set: HashSet<&str> = enable_rules.iter().map(String::as_str).collect();
        let disable_set: HashSet<&str> = disable_rules.iter().map(String::as_str).collect();

        debug!("Initial rules count before filtering: {}", self.rules.len());

        let all_rule_names: HashSet<&str> = self.rules.iter().map(|r| r.name.as_str()).collect();

        for rule_name in enable_set.difference(&all_rule_names) {
            warn!("Rule '{}' in `enable_rules` list does not exist.", rule_name);
        }

        for rule_name in disable_set.difference(&all_rule_names) {
            warn!("Rule '{}' in `disable_rules` list does not exist.", rule_name);
        }

        self.rules.retain(|rule| {
            let name = rule.name.as_str();
            if disable_set.contains(name) {
                return false;
            }
            let off_by_default = rule.opt_in || rule.enabled == Some(false);
            !off_by_default || enable_set.contains(name)
        });

        // Anything that survived is on, including opt-in rules named explicitly.
        for rule in self.rules.iter_mut() {
            rule.enabled = Some(true);
        }

        debug!("Final active rules count after filtering: {}", self.rules.len());
    }

    /// Names of all rules, in application order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name.as_str()).collect()
    }
}

/// Merges user-defined rules into the defaults.
///
/// A user rule whose name already exists replaces that rule at the same
/// position. New user rules are appended after the defaults, in file order.
pub fn merge_rules(default_config: RewriteConfig, user_config: Option<RewriteConfig>) -> RewriteConfig {
    debug!("merge_rules called. Initial default rules count: {}", default_config.rules.len());

    let mut final_rules = default_config.rules;

    if let Some(user_cfg) = user_config {
        debug!("User config provided. Merging {} user rules.", user_cfg.rules.len());
        for user_rule in user_cfg.rules {
            match final_rules.iter_mut().find(|r| r.name == user_rule.name) {
                Some(existing) => {
                    debug!("Overriding rule '{}' in place.", user_rule.name);
                    *existing = user_rule;
                }
                None => final_rules.push(user_rule),
            }
        }
    }

    debug!("Final total rules after merge: {}", final_rules.len());
    RewriteConfig { rules: final_rules }
}

/// Validates rule integrity (names, pattern presence, regex compilation, capture references).
fn validate_rules(rules: &[StyleRule]) -> Result<()> {
    let mut rule_names = HashSet::new();
    let mut errors = Vec::new();

    for rule in rules {
        if rule.name.is_empty() {
            errors.push("A rule has an empty `name` field.".to_string());
        } else if !rule_names.insert(rule.name.clone()) {
            errors.push(format!("Duplicate rule name found: '{}'.", rule.name));
        }

        let pattern = match &rule.pattern {
            Some(p) if !p.is_empty() => p,
            Some(_) => {
                errors.push(format!("Rule '{}' has an empty `pattern` field.", rule.name));
                continue;
            }
            None => {
                errors.push(format!("Rule '{}' is missing the `pattern` field.", rule.name));
                continue;
            }
        };

        if rule.pattern_type == PatternType::Regex {
            let compiled = match Regex::new(pattern) {
                Ok(re) => re,
                Err(e) => {
                    errors.push(format!("Rule '{}' has an invalid regex pattern: {}", rule.name, e));
                    continue;
                }
            };

            let group_count = compiled.captures_len() - 1;
            for cap in CAPTURE_REF_REGEX.captures_iter(&rule.replace_with) {
                // A bare `$1px` names the group `1px`, which expands to nothing.
                if let (Some(digits), Some(next)) = (cap.get(2), cap.get(3)) {
                    if !next.as_str().is_empty() {
                        errors.push(format!(
                            "Rule '{}': capture reference '${}' runs into '{}'; write '${{{}}}{}' instead.",
                            rule.name,
                            digits.as_str(),
                            next.as_str(),
                            digits.as_str(),
                            next.as_str()
                        ));
                        continue;
                    }
                }
                let group_ref = cap.get(1).or_else(|| cap.get(2));
                if let Some(group_num) = group_ref.and_then(|g| g.as_str().parse::<usize>().ok()) {
                    if group_num > group_count {
                        errors.push(format!(
                            "Rule '{}': replacement references non-existent capture group '${}'.",
                            rule.name, group_num
                        ));
                    }
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(anyhow!("Rule validation failed:\n{}", errors.join("\n")))
    }
}
