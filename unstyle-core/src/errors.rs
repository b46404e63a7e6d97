//! errors.rs - Custom error types for the unstyle-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific error types that callers can match on programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types produced by the `unstyle-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without a
/// breaking change for downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum UnstyleError {
    #[error("Failed to compile style rule '{0}': {1}")]
    RuleCompilationError(String, regex::Error),

    #[error("Rule '{0}': pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("Compiled rule cache is unavailable: {0}")]
    CacheUnavailable(String),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
