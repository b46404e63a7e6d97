//! Rewrite command: read one HTML file, apply the style rules, write it back.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use unstyle_core::{RewriteEngine, RewriteSummaryItem};

use crate::ui::diff_viewer;
use crate::ui::output_format;
use crate::ui::rewrite_summary;
use crate::ui::theme::ThemeMap;

/// Options for the run_rewrite_opts API
pub struct RewriteOptions {
    pub path: PathBuf,
    pub dry_run: bool,
    pub diff: bool,
    pub no_summary: bool,
    pub quiet: bool,
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// The main operation runner for the unstyle CLI.
///
/// The file is read completely, rewritten in memory and only then written
/// back, so a failure leaves the original untouched.
pub fn run_rewrite_opts(engine: &dyn RewriteEngine, opts: RewriteOptions, theme_map: &ThemeMap) -> Result<()> {
    info!("Starting unstyle operation.");

    let source_id = opts.path.display().to_string();
    let content = fs::read_to_string(&opts.path)
        .with_context(|| format!("Failed to read input file: {}", source_id))?;

    let (rewritten, summary) = engine
        .rewrite(&content, &source_id)
        .context("Rewrite failed")?;

    debug!(
        "Content rewritten. Original length: {}, rewritten length: {}",
        content.len(),
        rewritten.len()
    );

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    let stdout_supports_color = stdout.is_terminal();

    if opts.diff {
        diff_viewer::print_diff(&content, &rewritten, &mut writer, theme_map, stdout_supports_color)?;
    }

    if opts.dry_run {
        if !opts.diff {
            write!(writer, "{}", rewritten)?;
        }
        writer.flush()?;
        if !opts.quiet {
            let stderr_supports_color = io::stderr().is_terminal();
            output_format::print_warn_message(
                &mut io::stderr(),
                &format!("Dry run: {} was not modified.", source_id),
                theme_map,
                stderr_supports_color,
            )?;
        }
    } else {
        fs::write(&opts.path, &rewritten)
            .with_context(|| format!("Failed to write output file: {}", source_id))?;
        info!("Wrote {} bytes to {}.", rewritten.len(), source_id);
        output_format::print_success_message(
            &mut writer,
            &format!("Updated {}", source_id),
            theme_map,
            stdout_supports_color,
        )?;
        writer.flush()?;
    }

    handle_rewrite_summary(&summary, &opts, theme_map)?;

    info!("unstyle operation completed.");
    Ok(())
}

fn handle_rewrite_summary(summary: &[RewriteSummaryItem], opts: &RewriteOptions, theme_map: &ThemeMap) -> Result<()> {
    if !opts.no_summary && !opts.quiet {
        let stderr_supports_color = io::stderr().is_terminal();
        rewrite_summary::print_summary(summary, &mut io::stderr(), theme_map, stderr_supports_color)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;
    use unstyle_core::{RegexEngine, RewriteConfig};

    fn options(path: PathBuf, dry_run: bool) -> RewriteOptions {
        RewriteOptions { path, dry_run, diff: false, no_summary: true, quiet: true }
    }

    #[test_log::test]
    fn rewrites_file_in_place() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("page.html");
        fs::write(&path, "<div style=\"margin-top: 1em;\">x</div>\n")?;

        let engine = RegexEngine::new(RewriteConfig::load_default_rules()?)?;
        run_rewrite_opts(&engine, options(path.clone(), false), &ThemeStyle::default_theme_map())?;

        assert_eq!(fs::read_to_string(&path)?, "<div class=\"mt-md\">x</div>\n");
        Ok(())
    }

    #[test_log::test]
    fn dry_run_leaves_file_untouched() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("page.html");
        let original = "<span style=\"color: red;\">Error</span>";
        fs::write(&path, original)?;

        let engine = RegexEngine::new(RewriteConfig::load_default_rules()?)?;
        run_rewrite_opts(&engine, options(path.clone(), true), &ThemeStyle::default_theme_map())?;

        assert_eq!(fs::read_to_string(&path)?, original);
        Ok(())
    }

    #[test_log::test]
    fn missing_file_is_an_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let engine = RegexEngine::new(RewriteConfig::load_default_rules()?)?;
        let err = run_rewrite_opts(
            &engine,
            options(dir.path().join("absent.html"), false),
            &ThemeStyle::default_theme_map(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Failed to read input file"));
        Ok(())
    }
}
