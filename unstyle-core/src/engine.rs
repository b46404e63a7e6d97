// unstyle-core/src/engine.rs
//! Defines the core RewriteEngine trait.
//!
//! The `RewriteEngine` trait is the pluggable interface between the
//! command-line glue and the code that actually applies style rules. Any
//! engine takes a document and returns the rewritten text together with a
//! per-rule summary of what changed.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;

use crate::config::{RewriteConfig, RewriteSummaryItem};
use crate::rules::compiler::CompiledRules;

/// A trait that defines the core functionality of a rewrite engine.
pub trait RewriteEngine: Send + Sync {
    /// Rewrites `content` with every active rule, in order.
    ///
    /// Returns the rewritten text and one summary item per rule that matched
    /// at least once, in rule order.
    ///
    /// # Arguments
    /// * `content` - The input text, usually an HTML document.
    /// * `source_id` - The name of the source being processed, used in logs.
    fn rewrite(&self, content: &str, source_id: &str) -> Result<(String, Vec<RewriteSummaryItem>)>;

    /// Runs a rewrite pass and reports what would change, discarding the text.
    fn analyze_for_stats(&self, content: &str, source_id: &str) -> Result<Vec<RewriteSummaryItem>>;

    /// Returns the compiled rules used by the engine.
    fn compiled_rules(&self) -> &CompiledRules;

    /// Returns the engine's rule configuration.
    fn get_rules(&self) -> &RewriteConfig;
}
