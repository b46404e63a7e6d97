// unstyle/src/ui/diff_viewer.rs
//! Unified diff of a rewrite, for `--diff`.
//!
//! Removed lines are printed in the `diff_removed` colour, added lines in the
//! `diff_added` colour.

use anyhow::Result;
use diffy::{create_patch, Line as DiffLine};
use owo_colors::OwoColorize;
use std::io::Write;

use crate::ui::theme::{entry_color, ThemeEntry, ThemeMap};

/// Writes a hunk-by-hunk diff between `original` and `rewritten`.
pub fn print_diff<W: Write>(
    original: &str,
    rewritten: &str,
    writer: &mut W,
    theme_map: &ThemeMap,
    use_color: bool,
) -> Result<()> {
    let patch = create_patch(original, rewritten);
    let header_color = entry_color(ThemeEntry::DiffHeader, theme_map);

    let header = "--- Diff View ---";
    if use_color {
        writeln!(writer, "{}", header.color(header_color))?;
    } else {
        writeln!(writer, "{header}")?;
    }

    if patch.hunks().is_empty() {
        writeln!(writer, "No changes.")?;
    }

    for hunk in patch.hunks() {
        let range = format!(
            "@@ -{},{} +{},{} @@",
            hunk.old_range().start(),
            hunk.old_range().len(),
            hunk.new_range().start(),
            hunk.new_range().len()
        );
        if use_color {
            writeln!(writer, "{}", range.color(header_color))?;
        } else {
            writeln!(writer, "{range}")?;
        }

        for line_change in hunk.lines() {
            let (marker, text, entry) = match line_change {
                DiffLine::Delete(s) => ("-", *s, Some(ThemeEntry::DiffRemoved)),
                DiffLine::Insert(s) => ("+", *s, Some(ThemeEntry::DiffAdded)),
                DiffLine::Context(s) => (" ", *s, None),
            };
            let line = format!("{marker}{}", text.trim_end_matches('\n'));
            match entry {
                Some(entry) if use_color => writeln!(writer, "{}", line.color(entry_color(entry, theme_map)))?,
                _ => writeln!(writer, "{line}")?,
            }
        }
    }

    if use_color {
        writeln!(writer, "{}", "-----------------".color(header_color))?;
    } else {
        writeln!(writer, "-----------------")?;
    }
    Ok(())
}
