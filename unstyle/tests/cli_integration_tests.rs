// unstyle/tests/cli_integration_tests.rs
//! Command-line integration tests for the `unstyle` binary.
//!
//! Each test writes a scratch HTML file into a temporary directory, runs the
//! binary against it with `assert_cmd`, and checks the exit status, the
//! console output and the file left on disk. Output is not a terminal here,
//! so no ANSI colour codes are emitted.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const PAGE: &str = r#"<form style="display: flex; flex-direction: column; gap: 1.5em;">
  <p style="color: var(--text-secondary); margin-bottom: 1.5em;">Pick a preset</p>
  <span style="color: red;">Error</span>
  <div style="margin-top: 3em;">left alone</div>
</form>
"#;

const PAGE_REWRITTEN: &str = r#"<form>
  <p class="text-secondary mb-lg">Pick a preset</p>
  <span class="text-error">Error</span>
  <div style="margin-top: 3em;">left alone</div>
</form>
"#;

fn unstyle_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("unstyle"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn scratch_file(name: &str, content: &str) -> Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(name);
    fs::write(&path, content)?;
    Ok((dir, path))
}

#[test]
fn test_no_arguments_prints_usage_and_exits_1() {
    unstyle_cmd()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: unstyle <html-file>"));
}

#[test]
fn test_too_many_arguments_prints_usage_and_exits_1() {
    unstyle_cmd()
        .args(["a.html", "b.html"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: unstyle <html-file>"));
}

#[test]
fn test_rewrites_file_in_place() -> Result<()> {
    let (_dir, path) = scratch_file("page.html", PAGE)?;
    let expected_confirmation = format!("Updated {}", path.display());

    unstyle_cmd()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(expected_confirmation));

    assert_eq!(fs::read_to_string(&path)?, PAGE_REWRITTEN);
    Ok(())
}

#[test]
fn test_summary_goes_to_stderr() -> Result<()> {
    let (_dir, path) = scratch_file("page.html", PAGE)?;

    unstyle_cmd()
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Rewrite Summary (3 replacements):"))
        .stderr(predicate::str::contains("text_error"));
    Ok(())
}

#[test]
fn test_quiet_suppresses_summary_but_not_confirmation() -> Result<()> {
    let (_dir, path) = scratch_file("page.html", PAGE)?;

    unstyle_cmd()
        .arg("--quiet")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated"))
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[test]
fn test_quiet_overrides_rust_log() -> Result<()> {
    let (_dir, path) = scratch_file("page.html", PAGE)?;

    unstyle_cmd()
        .env("RUST_LOG", "unstyle_core=debug")
        .arg("--quiet")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated"))
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[test]
fn test_rust_log_applies_without_level_flags() -> Result<()> {
    let (_dir, path) = scratch_file("page.html", PAGE)?;

    unstyle_cmd()
        .env("RUST_LOG", "unstyle_core=debug")
        .arg("--no-summary")
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Rewrite finished"));
    Ok(())
}

#[test]
fn test_missing_file_fails() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("absent.html");

    unstyle_cmd()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
    assert!(!path.exists());
    Ok(())
}

#[test]
fn test_dry_run_prints_and_keeps_file() -> Result<()> {
    let (_dir, path) = scratch_file("page.html", PAGE)?;

    unstyle_cmd()
        .args(["--dry-run", "--no-summary"])
        .arg(&path)
        .assert()
        .success()
        .stdout(PAGE_REWRITTEN)
        .stderr(predicate::str::contains("was not modified"));

    assert_eq!(fs::read_to_string(&path)?, PAGE);
    Ok(())
}

#[test]
fn test_diff_shows_changed_lines() -> Result<()> {
    let (_dir, path) = scratch_file("page.html", PAGE)?;

    unstyle_cmd()
        .args(["--diff", "--dry-run", "--no-summary"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Diff View ---"))
        .stdout(predicate::str::contains(r#"-  <span style="color: red;">Error</span>"#))
        .stdout(predicate::str::contains(r#"+  <span class="text-error">Error</span>"#));
    Ok(())
}

#[test]
fn test_disable_rule_leaves_its_style() -> Result<()> {
    let (_dir, path) = scratch_file("page.html", PAGE)?;

    unstyle_cmd()
        .args(["--disable", "text_error", "--no-summary"])
        .arg(&path)
        .assert()
        .success();

    let out = fs::read_to_string(&path)?;
    assert!(out.contains(r#"<span style="color: red;">Error</span>"#));
    assert!(out.contains(r#"<p class="text-secondary mb-lg">"#));
    Ok(())
}

#[test]
fn test_custom_config_adds_rules() -> Result<()> {
    let (dir, path) = scratch_file("page.html", PAGE)?;
    let config_path = dir.path().join("rules.yaml");
    fs::write(
        &config_path,
        r#"
rules:
  - name: margin_top_xxl
    pattern: ' style="margin-top: 3em;"'
    replace_with: ' class="mt-xxl"'
  - name: text_error
    pattern: ' style="color: red;"'
    replace_with: ' class="alert"'
"#,
    )?;

    unstyle_cmd()
        .arg("--config")
        .arg(&config_path)
        .arg("--no-summary")
        .arg(&path)
        .assert()
        .success();

    let out = fs::read_to_string(&path)?;
    assert!(out.contains(r#"<div class="mt-xxl">left alone</div>"#));
    assert!(out.contains(r#"<span class="alert">Error</span>"#));
    Ok(())
}

#[test]
fn test_invalid_config_fails_without_touching_file() -> Result<()> {
    let (dir, path) = scratch_file("page.html", PAGE)?;
    let config_path = dir.path().join("rules.yaml");
    fs::write(
        &config_path,
        "rules:\n  - name: broken\n    pattern_type: regex\n    pattern: '(['\n",
    )?;

    unstyle_cmd()
        .arg("--config")
        .arg(&config_path)
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Rule 'broken' has an invalid regex pattern"));

    assert_eq!(fs::read_to_string(&path)?, PAGE);
    Ok(())
}

#[test]
fn test_unknown_theme_color_fails_without_touching_file() -> Result<()> {
    let (dir, path) = scratch_file("page.html", PAGE)?;
    let theme_path = dir.path().join("theme.yaml");
    fs::write(&theme_path, "header:\n  fg: pinkish\n")?;

    unstyle_cmd()
        .arg("--theme")
        .arg(&theme_path)
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid theme color 'pinkish'"));

    assert_eq!(fs::read_to_string(&path)?, PAGE);
    Ok(())
}
