// unstyle/src/ui/output_format.rs
//! Themed one-line status messages.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::theme::{entry_color, ThemeEntry, ThemeMap};

/// Writes `prefix` + `message`, coloured with the entry's theme colour when
/// `use_color` is set.
fn print_message<W: Write>(
    writer: &mut W,
    entry: ThemeEntry,
    prefix: &str,
    message: &str,
    theme_map: &ThemeMap,
    use_color: bool,
) -> io::Result<()> {
    let line = format!("{prefix}{message}");
    if use_color {
        writeln!(writer, "{}", line.color(entry_color(entry, theme_map)))
    } else {
        writeln!(writer, "{line}")
    }
}

pub fn print_success_message<W: Write>(writer: &mut W, message: &str, theme_map: &ThemeMap, use_color: bool) -> io::Result<()> {
    print_message(writer, ThemeEntry::Success, "", message, theme_map, use_color)
}

pub fn print_warn_message<W: Write>(writer: &mut W, message: &str, theme_map: &ThemeMap, use_color: bool) -> io::Result<()> {
    print_message(writer, ThemeEntry::Warn, "Warning: ", message, theme_map, use_color)
}

pub fn print_error_message<W: Write>(writer: &mut W, message: &str, theme_map: &ThemeMap, use_color: bool) -> io::Result<()> {
    print_message(writer, ThemeEntry::Error, "Error: ", message, theme_map, use_color)
}
