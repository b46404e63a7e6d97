//! Terminal output for the unstyle CLI: themed messages, diffs and summaries.

pub mod diff_viewer;
pub mod output_format;
pub mod rewrite_summary;
pub mod theme;
