//! Rule handling for unstyle-core.
//!
//! Rules are described by `config::StyleRule`. This module turns them into
//! compiled matchers that engines apply in order.

pub mod compiler;
