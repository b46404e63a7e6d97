// unstyle/src/ui/rewrite_summary.rs
//! Per-rule summary printed after a rewrite.

use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::Write;

use unstyle_core::RewriteSummaryItem;

use crate::ui::theme::{entry_color, ThemeEntry, ThemeMap};

/// Writes one line per rule that matched, in application order.
pub fn print_summary<W: Write>(
    summary: &[RewriteSummaryItem],
    writer: &mut W,
    theme_map: &ThemeMap,
    use_color: bool,
) -> Result<()> {
    if summary.is_empty() {
        writeln!(writer, "No inline styles were rewritten.")?;
        return Ok(());
    }

    let total: usize = summary.iter().map(|item| item.occurrences).sum();
    let header = format!("Rewrite Summary ({total} replacements):");
    if use_color {
        writeln!(writer, "{}", header.color(entry_color(ThemeEntry::Header, theme_map)))?;
    } else {
        writeln!(writer, "{header}")?;
    }

    let name_width = summary.iter().map(|item| item.rule_name.len()).max().unwrap_or(0);
    for item in summary {
        let name = format!("{:<name_width$}", item.rule_name);
        let count = item.occurrences.to_string();
        if use_color {
            writeln!(
                writer,
                "  {}  {}",
                name.color(entry_color(ThemeEntry::SummaryRuleName, theme_map)),
                count.color(entry_color(ThemeEntry::SummaryOccurrences, theme_map)),
            )?;
        } else {
            writeln!(writer, "  {name}  {count}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    fn item(name: &str, occurrences: usize) -> RewriteSummaryItem {
        RewriteSummaryItem {
            rule_name: name.to_string(),
            occurrences,
            original_texts: Vec::new(),
            replaced_texts: Vec::new(),
        }
    }

    #[test]
    fn summary_lists_rules_and_total() {
        let theme = ThemeStyle::default_theme_map();
        let mut buf = Vec::new();
        print_summary(&[item("margin_top_md", 2), item("text_error", 1)], &mut buf, &theme, false).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.starts_with("Rewrite Summary (3 replacements):"));
        assert!(out.contains("  margin_top_md  2"));
        assert!(out.contains("  text_error     1"));
    }

    #[test]
    fn empty_summary_says_so() {
        let theme = ThemeStyle::default_theme_map();
        let mut buf = Vec::new();
        print_summary(&[], &mut buf, &theme, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "No inline styles were rewritten.\n");
    }
}
