//! # unstyle Core Library
//!
//! `unstyle-core` replaces known inline `style="..."` attributes in text with
//! equivalent utility class attributes. It knows nothing about HTML
//! structure: a rule is an exact text fragment (or, for the few rules that
//! keep a variable value, a regular expression) and a replacement string.
//! Rules are applied in a fixed order, each one rewriting the output of the
//! previous one.
//!
//! ## Modules
//!
//! * `config`: `StyleRule` and `RewriteConfig`, the embedded catalog, YAML loading, merging and filtering.
//! * `rules`: compilation of rules into matchers, with a process-wide cache.
//! * `engine`: the `RewriteEngine` trait.
//! * `engines`: concrete engines (`RegexEngine`).
//! * `headless`: one-shot helpers.
//! * `errors`: the `UnstyleError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use unstyle_core::rewrite;
//!
//! let html = r#"<p style="color: var(--text-secondary); margin-bottom: 1.5em;">Hi</p>"#;
//! assert_eq!(rewrite(html), r#"<p class="text-secondary mb-lg">Hi</p>"#);
//! ```
//!
//! With a custom rule set:
//!
//! ```rust
//! use unstyle_core::{merge_rules, RewriteConfig, RewriteEngine, RegexEngine, StyleRule};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let user = RewriteConfig {
//!         rules: vec![StyleRule::literal("bold", r#" style="font-weight: bold;""#, r#" class="bold""#)],
//!     };
//!     let config = merge_rules(RewriteConfig::load_default_rules()?, Some(user));
//!     let engine = RegexEngine::new(config)?;
//!     let (out, summary) = engine.rewrite(r#"<b style="font-weight: bold;">x</b>"#, "doc.html")?;
//!     assert_eq!(out, r#"<b class="bold">x</b>"#);
//!     assert_eq!(summary[0].rule_name, "bold");
//!     Ok(())
//! }
//! ```
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod rules;

pub use config::{
    merge_rules,
    PatternType,
    RewriteConfig,
    RewriteSummaryItem,
    StyleRule,
    MAX_PATTERN_LENGTH,
};

pub use errors::UnstyleError;

pub use engine::RewriteEngine;
pub use engines::regex_engine::RegexEngine;

pub use headless::{headless_rewrite_string, rewrite};

pub use rules::compiler::{compile_rules, get_or_compile_rules, CompiledRule, CompiledRules};
