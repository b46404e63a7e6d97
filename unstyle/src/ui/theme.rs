//! Module for managing the colour theme of terminal output.
//!
//! Users can customise the colours of the different output elements with a
//! YAML file mapping entries to one of the 16 named ANSI colours. Entries the
//! file leaves out fall back to the defaults.

use anyhow::{Context, Result};
use owo_colors::AnsiColors;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Type alias for the theme map.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    /// Section titles.
    Header,
    /// Successful operation messages.
    Success,
    Warn,
    Error,
    /// Lines added in a diff view.
    DiffAdded,
    /// Lines removed in a diff view.
    DiffRemoved,
    /// Header/footer of a diff view.
    DiffHeader,
    /// Rule names in the rewrite summary.
    SummaryRuleName,
    /// Occurrence counts in the rewrite summary.
    SummaryOccurrences,
}

impl ThemeEntry {
    pub const ALL: [ThemeEntry; 9] = [
        ThemeEntry::Header,
        ThemeEntry::Success,
        ThemeEntry::Warn,
        ThemeEntry::Error,
        ThemeEntry::DiffAdded,
        ThemeEntry::DiffRemoved,
        ThemeEntry::DiffHeader,
        ThemeEntry::SummaryRuleName,
        ThemeEntry::SummaryOccurrences,
    ];
}

/// Colour names accepted in theme files, matched case-insensitively.
const NAMED_COLORS: [(&str, AnsiColors); 16] = [
    ("black", AnsiColors::Black),
    ("red", AnsiColors::Red),
    ("green", AnsiColors::Green),
    ("yellow", AnsiColors::Yellow),
    ("blue", AnsiColors::Blue),
    ("magenta", AnsiColors::Magenta),
    ("cyan", AnsiColors::Cyan),
    ("white", AnsiColors::White),
    ("brightblack", AnsiColors::BrightBlack),
    ("brightred", AnsiColors::BrightRed),
    ("brightgreen", AnsiColors::BrightGreen),
    ("brightyellow", AnsiColors::BrightYellow),
    ("brightblue", AnsiColors::BrightBlue),
    ("brightmagenta", AnsiColors::BrightMagenta),
    ("brightcyan", AnsiColors::BrightCyan),
    ("brightwhite", AnsiColors::BrightWhite),
];

/// A named ANSI colour, checked when the theme file is deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct ThemeColor(AnsiColors);

/// Returned for a colour name outside `NAMED_COLORS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeColorError(String);

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names: Vec<&str> = NAMED_COLORS.iter().map(|(name, _)| *name).collect();
        write!(f, "invalid theme color '{}'; expected one of: {}", self.0, names.join(", "))
    }
}

impl std::error::Error for ParseThemeColorError {}

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAMED_COLORS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s.trim()))
            .map(|(_, color)| ThemeColor(*color))
            .ok_or_else(|| ParseThemeColorError(s.to_string()))
    }
}

impl TryFrom<String> for ThemeColor {
    type Error = ParseThemeColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl ThemeColor {
    pub fn ansi(self) -> AnsiColors {
        self.0
    }
}

/// The style configuration for one `ThemeEntry`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeStyle {
    /// Foreground colour, if any.
    pub fg: Option<ThemeColor>,
}

/// Loads a theme from a YAML file, or returns the default theme.
pub fn build_theme_map(theme_path: Option<&PathBuf>) -> Result<ThemeMap> {
    match theme_path {
        Some(path) => ThemeStyle::load_from_file(path),
        None => Ok(ThemeStyle::default_theme_map()),
    }
}

/// Looks up the foreground colour for an entry, defaulting to white.
pub fn entry_color(entry: ThemeEntry, theme_map: &ThemeMap) -> AnsiColors {
    theme_map
        .get(&entry)
        .and_then(|style| style.fg)
        .map(ThemeColor::ansi)
        .unwrap_or(AnsiColors::White)
}

impl ThemeStyle {
    /// Loads a theme from disk and fills missing entries with the defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let mut custom: ThemeMap = serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;

        for (entry, style) in Self::default_theme_map() {
            custom.entry(entry).or_insert(style);
        }
        Ok(custom)
    }

    /// Returns the default theme.
    pub fn default_theme_map() -> ThemeMap {
        ThemeEntry::ALL
            .into_iter()
            .map(|entry| {
                let color = match entry {
                    ThemeEntry::Header => AnsiColors::Cyan,
                    ThemeEntry::Success | ThemeEntry::DiffAdded => AnsiColors::Green,
                    ThemeEntry::Warn | ThemeEntry::DiffHeader => AnsiColors::Yellow,
                    ThemeEntry::Error | ThemeEntry::DiffRemoved => AnsiColors::Red,
                    ThemeEntry::SummaryRuleName => AnsiColors::BrightBlue,
                    ThemeEntry::SummaryOccurrences => AnsiColors::White,
                };
                (entry, ThemeStyle { fg: Some(ThemeColor(color)) })
            })
            .collect()
    }
}
