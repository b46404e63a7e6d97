// unstyle-core/src/engines/regex_engine.rs
//! A `RewriteEngine` implementation that applies compiled rules one after
//! another, each rule rewriting the output of the previous one.
//! License: MIT OR APACHE 2.0

use std::sync::Arc;
use anyhow::{anyhow, Context, Result};
use log::{debug, trace};

use crate::config::{RewriteConfig, RewriteSummaryItem};
use crate::engine::RewriteEngine;
use crate::rules::compiler::{get_or_compile_rules, CompiledRule, CompiledRules};

#[derive(Debug)]
pub struct RegexEngine {
    compiled_rules: Arc<CompiledRules>,
    config: RewriteConfig,
}

impl RegexEngine {
    pub fn new(config: RewriteConfig) -> Result<Self> {
        let compiled_rules = get_or_compile_rules(&config)
            .context("Failed to compile style rules for RegexEngine")?;

        Ok(Self { compiled_rules, config })
    }

    /// Replaces every non-overlapping match of one rule.
    ///
    /// Returns `None` when the rule does not match, so the caller can keep
    /// its current buffer untouched.
    fn apply_rule(
        compiled_rule: &CompiledRule,
        text: &str,
        source_id: &str,
    ) -> Result<Option<(String, RewriteSummaryItem)>> {
        let mut rewritten = String::with_capacity(text.len());
        let mut original_texts = Vec::new();
        let mut replaced_texts = Vec::new();
        let mut last_end = 0usize;

        for caps in compiled_rule.regex.captures_iter(text) {
            let whole = caps.get(0).ok_or_else(|| anyhow!("Regex capture failed"))?;
            let replacement = if compiled_rule.expand_captures {
                let mut expanded = String::new();
                caps.expand(&compiled_rule.replace_with, &mut expanded);
                expanded
            } else {
                compiled_rule.replace_with.clone()
            };

            trace!(
                "{} Rewrite action: Original='{}', Replaced='{}' for rule '{}'",
                source_id, whole.as_str(), replacement, compiled_rule.name
            );

            rewritten.push_str(&text[last_end..whole.start()]);
            rewritten.push_str(&replacement);
            last_end = whole.end();

            original_texts.push(whole.as_str().to_string());
            replaced_texts.push(replacement);
        }

        if original_texts.is_empty() {
            return Ok(None);
        }
        rewritten.push_str(&text[last_end..]);

        let item = RewriteSummaryItem {
            rule_name: compiled_rule.name.clone(),
            occurrences: original_texts.len(),
            original_texts,
            replaced_texts,
        };
        Ok(Some((rewritten, item)))
    }
}

impl RewriteEngine for RegexEngine {
    fn rewrite(&self, content: &str, source_id: &str) -> Result<(String, Vec<RewriteSummaryItem>)> {
        let mut current = content.to_string();
        let mut summary = Vec::new();

        for compiled_rule in self.compiled_rules.rules.iter().filter(|r| r.active) {
            if let Some((rewritten, item)) = Self::apply_rule(compiled_rule, &current, source_id)? {
                debug!(
                    "{} Rule '{}' rewrote {} occurrence(s).",
                    source_id, item.rule_name, item.occurrences
                );
                current = rewritten;
                summary.push(item);
            }
        }

        debug!(
            "{} Rewrite finished: {} of {} active rules matched.",
            source_id,
            summary.len(),
            self.compiled_rules.active_count()
        );
        Ok((current, summary))
    }

    fn analyze_for_stats(&self, content: &str, source_id: &str) -> Result<Vec<RewriteSummaryItem>> {
        let (_, summary) = self.rewrite(content, source_id)?;
        Ok(summary)
    }

    fn compiled_rules(&self) -> &CompiledRules { &self.compiled_rules }
    fn get_rules(&self) -> &RewriteConfig { &self.config }
}
