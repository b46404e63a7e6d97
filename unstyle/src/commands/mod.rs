//! Command implementations for the unstyle CLI.

pub mod rewrite;
