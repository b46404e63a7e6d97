// unstyle/src/logger.rs
//! Logging setup for the `unstyle` binary.
//! License: MIT OR APACHE 2.0

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initialises the global logger.
///
/// An explicit `level` (from `--quiet` or `--debug`) is the only filter in
/// effect; `RUST_LOG` is read only when no level is given.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = match level {
        Some(level) => {
            let mut builder = Builder::new();
            builder.filter_level(level);
            builder
        }
        None => Builder::from_env(Env::default().default_filter_or("warn")),
    };
    builder.format_timestamp(None).format_target(true);
    let _ = builder.try_init();
}
