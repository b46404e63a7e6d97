// unstyle/src/main.rs
//! unstyle entry point.
//!
//! Parses the command line, builds the rule set and rewrites the given file.

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use log::{debug, info};

use unstyle::cli::{Cli, USAGE};
use unstyle::commands::rewrite::{error_msg, run_rewrite_opts, RewriteOptions};
use unstyle::logger;
use unstyle::ui::theme::build_theme_map;
use unstyle_core::{merge_rules, RegexEngine, RewriteConfig};

fn main() -> Result<()> {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            println!("{}", USAGE);
            eprint!("{}", e.render());
            std::process::exit(1);
        }
    };

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }
    info!("unstyle started. Version: {}", env!("CARGO_PKG_VERSION"));

    let theme_map = build_theme_map(args.theme.as_ref()).context("Theme error")?;

    // 1. Built-in catalog
    let default_config = RewriteConfig::load_default_rules()?;

    // 2. Optional user rules, merged by name
    let user_config = match &args.config {
        Some(path) => match RewriteConfig::load_from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                error_msg(format!("Failed to load rules from {}: {:#}", path.display(), e), &theme_map);
                std::process::exit(1);
            }
        },
        None => None,
    };
    let mut config = merge_rules(default_config, user_config);

    // 3. Rule selection
    config.set_active_rules(&args.enable, &args.disable);
    debug!("Active rules: {:?}", config.rule_names());

    let engine = RegexEngine::new(config)?;

    run_rewrite_opts(
        &engine,
        RewriteOptions {
            path: args.html_file,
            dry_run: args.dry_run,
            diff: args.diff,
            no_summary: args.no_summary,
            quiet: args.quiet,
        },
        &theme_map,
    )
}
