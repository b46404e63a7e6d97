// File: unstyle-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for using the engine without the CLI.
//! Provides one-shot rewriting of strings, either with a caller-supplied
//! rule set or with the built-in catalog.

use anyhow::Result;
use log::warn;
use once_cell::sync::Lazy;

use crate::config::RewriteConfig;
use crate::engine::RewriteEngine;
use crate::engines::regex_engine::RegexEngine;

static DEFAULT_ENGINE: Lazy<RegexEngine> = Lazy::new(|| {
    let config = RewriteConfig::load_default_rules().expect("embedded default rules must parse");
    RegexEngine::new(config).expect("embedded default rules must compile")
});

/// Rewrites an input string with the given rule set in a single call.
///
/// # Arguments
///
/// * `config` - The merged RewriteConfig (defaults + optional user rules).
/// * `content` - The text to rewrite.
/// * `source_id` - A stable identifier for the input (file path or pseudo id).
pub fn headless_rewrite_string(config: RewriteConfig, content: &str, source_id: &str) -> Result<String> {
    let engine = RegexEngine::new(config)?;
    let (rewritten, _) = engine.rewrite(content, source_id)?;
    Ok(rewritten)
}

/// Rewrites `text` with the built-in inline style catalog.
///
/// Styles that no rule recognises are left exactly as they are.
pub fn rewrite(text: &str) -> String {
    match DEFAULT_ENGINE.rewrite(text, "inline") {
        Ok((rewritten, _)) => rewritten,
        Err(e) => {
            warn!("Default rewrite failed, returning input unchanged: {:#}", e);
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StyleRule;

    #[test]
    fn test_headless_rewrite_string() -> Result<()> {
        let config = RewriteConfig {
            rules: vec![StyleRule::literal("mt", r#" style="margin-top: 1em;""#, r#" class="mt-md""#)],
        };
        let out = headless_rewrite_string(config, r#"<div style="margin-top: 1em;"></div>"#, "test_input")?;
        assert_eq!(out, r#"<div class="mt-md"></div>"#);
        Ok(())
    }

    #[test]
    fn test_headless_rewrite_string_rejects_bad_rules() {
        let config = RewriteConfig { rules: vec![StyleRule::regex("bad", "([", "")] };
        assert!(headless_rewrite_string(config, "text", "test_input").is_err());
    }

    #[test]
    fn test_rewrite_uses_default_catalog() {
        assert_eq!(
            rewrite(r#"<span style="color: red;">Error</span>"#),
            r#"<span class="text-error">Error</span>"#
        );
    }
}
