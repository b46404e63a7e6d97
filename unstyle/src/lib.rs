// unstyle/src/lib.rs
//! # unstyle CLI Application
//!
//! This crate provides the command-line front end for `unstyle-core`: it
//! reads one HTML file, replaces the known inline styles with utility
//! classes and writes the file back in place.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::rewrite::{run_rewrite_opts, RewriteOptions};
