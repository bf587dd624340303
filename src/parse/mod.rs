//! HTML parsing and signal extraction.
//!
//! Extracts the SEO signals (title, meta description, heading counts) from
//! raw HTML using lexical patterns. Extraction is total: any input, including
//! malformed markup or non-HTML text, produces a `PageSignals` value.

mod html;

// Re-export public API
pub use html::{
    count_headings, extract_meta_description, extract_signals, extract_title, HeadingCounts,
    PageSignals,
};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
