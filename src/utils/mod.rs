//! Shared helpers.

mod pattern;

pub use pattern::compile_pattern;
