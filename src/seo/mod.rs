//! SEO heuristics over extracted page signals.
//!
//! Everything here is pure and deterministic: the same signals always yield
//! the same score, checks and suggestions.

mod meta;
mod score;

pub use meta::{suggest_meta, MetaSuggestion, SuggestionKind};
pub use score::{evaluate, quick_fixes, score, SeoCheck, MAX_SCORE};
