//! compiler.rs - Manages the compilation and caching of style rules.
//!
//! This module converts a `RewriteConfig` into `CompiledRules`, ready to be
//! applied in order by an engine. Compiled sets are kept in a global,
//! shared cache to avoid redundant compilation.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::{Regex, RegexBuilder};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use crate::config::{PatternType, RewriteConfig, StyleRule, MAX_PATTERN_LENGTH};
use crate::errors::UnstyleError;

/// A single compiled style rule.
#[derive(Debug)]
pub struct CompiledRule {
    /// The compiled matcher. Literal patterns are escaped before compilation.
    pub regex: Regex,
    /// The string that replaces each match.
    pub replace_with: String,
    /// The unique name of the style rule.
    pub name: String,
    /// True when `replace_with` is a template referencing capture groups.
    pub expand_captures: bool,
    /// False for rules that are disabled or opt-in and not enabled.
    pub active: bool,
}

/// All compiled rules of a rule set, in application order.
#[derive(Debug)]
pub struct CompiledRules {
    pub rules: Vec<CompiledRule>,
}

impl CompiledRules {
    /// Number of rules that take part in a rewrite pass.
    pub fn active_count(&self) -> usize {
        self.rules.iter().filter(|r| r.active).count()
    }
}

lazy_static! {
    /// A thread-safe, global cache for compiled rules.
    /// The key is a hash of the ordered rule list.
    static ref COMPILED_RULES_CACHE: RwLock<HashMap<u64, Arc<CompiledRules>>> = RwLock::new(HashMap::new());
}

/// Hashes the `RewriteConfig` to create the cache key.
///
/// Rules are hashed in their given order: two configs holding the same rules
/// in a different order rewrite differently and must not share an entry.
fn hash_config(config: &RewriteConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    config.rules.hash(&mut hasher);
    hasher.finish()
}

fn pattern_source(rule: &StyleRule, pattern: &str) -> String {
    match rule.pattern_type {
        PatternType::Literal => regex::escape(pattern),
        PatternType::Regex => pattern.to_string(),
    }
}

/// Compiles a list of `StyleRule`s into `CompiledRules`, keeping their order.
pub fn compile_rules(rules_to_compile: Vec<StyleRule>) -> Result<CompiledRules, UnstyleError> {
    debug!("Starting compilation of {} rules.", rules_to_compile.len());

    let mut compiled_rules = Vec::with_capacity(rules_to_compile.len());
    let mut compilation_errors = Vec::new();

    for rule in rules_to_compile {
        let Some(pattern) = rule.pattern.as_deref() else {
            warn!("Skipping rule '{}' because its pattern is missing.", &rule.name);
            continue;
        };

        if pattern.len() > MAX_PATTERN_LENGTH {
            compilation_errors.push(UnstyleError::PatternLengthExceeded(
                rule.name.clone(),
                pattern.len(),
                MAX_PATTERN_LENGTH,
            ));
            continue;
        }

        let source = pattern_source(&rule, pattern);
        let regex_result = RegexBuilder::new(&source)
            .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
            .build();

        match regex_result {
            Ok(regex) => {
                debug!(
                    target: "unstyle_core::rules",
                    "Rule '{}' ({}) compiled successfully.",
                    &rule.name, rule.pattern_type
                );
                compiled_rules.push(CompiledRule {
                    regex,
                    expand_captures: rule.pattern_type == PatternType::Regex,
                    active: rule.is_active(),
                    replace_with: rule.replace_with,
                    name: rule.name,
                });
            }
            Err(e) => {
                compilation_errors.push(UnstyleError::RuleCompilationError(rule.name, e));
            }
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        return Err(UnstyleError::Fatal(format!(
            "Failed to compile {} rule(s):\n{}",
            compilation_errors.len(),
            error_message
        )));
    }

    debug!("Finished compiling rules. Total compiled: {}.", compiled_rules.len());
    Ok(CompiledRules { rules: compiled_rules })
}

/// Gets a `CompiledRules` instance from the cache or compiles them if not found.
pub fn get_or_compile_rules(config: &RewriteConfig) -> Result<Arc<CompiledRules>> {
    let cache_key = hash_config(config);

    {
        let cache = COMPILED_RULES_CACHE
            .read()
            .map_err(|e| UnstyleError::CacheUnavailable(e.to_string()))?;
        if let Some(rules) = cache.get(&cache_key) {
            debug!("Serving compiled rules from cache for key: {}", &cache_key);
            return Ok(Arc::clone(rules));
        }
    }

    debug!("Compiled rules not found in cache. Compiling now.");
    let compiled_arc = Arc::new(compile_rules(config.rules.clone())?);

    COMPILED_RULES_CACHE
        .write()
        .map_err(|e| UnstyleError::CacheUnavailable(e.to_string()))?
        .insert(cache_key, Arc::clone(&compiled_arc));

    debug!("Successfully compiled and cached rules for key: {}", &cache_key);
    Ok(compiled_arc)
}
