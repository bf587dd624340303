//! Lexical HTML signal extraction.
//!
//! Signals are located with regular expressions over the raw markup rather
//! than a DOM parse, so malformed documents still yield best-effort values:
//! - Page title
//! - Meta description
//! - Opening `h1`/`h2`/`h3` tag counts

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::utils::compile_pattern;

// The title body may not contain markup; `<title><b>x</b></title>` yields no title.
const TITLE_PATTERN: &str = r"(?i)<title[^>]*>([^<]+)</title>";
// `name` must precede `content`. The value runs to the matching quote, so
// `content="Don't"` keeps its apostrophe.
const META_DESCRIPTION_PATTERN: &str =
    r#"(?i)<meta[^>]*name=["']description["'][^>]*content=(?:"([^"]*)"|'([^']*)')[^>]*>"#;
const H1_PATTERN: &str = r"(?i)<h1\b[^>]*>";
const H2_PATTERN: &str = r"(?i)<h2\b[^>]*>";
const H3_PATTERN: &str = r"(?i)<h3\b[^>]*>";

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_pattern(TITLE_PATTERN, "title extraction"));
static META_DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_pattern(META_DESCRIPTION_PATTERN, "meta description extraction")
});
static H1_RE: LazyLock<Regex> = LazyLock::new(|| compile_pattern(H1_PATTERN, "h1 counting"));
static H2_RE: LazyLock<Regex> = LazyLock::new(|| compile_pattern(H2_PATTERN, "h2 counting"));
static H3_RE: LazyLock<Regex> = LazyLock::new(|| compile_pattern(H3_PATTERN, "h3 counting"));

/// Number of opening heading tags per level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HeadingCounts {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
}

/// On-page signals used as SEO heuristic inputs.
///
/// `PageSignals::default()` (no title, no description, zero headings) is what
/// a failed fetch degrades to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageSignals {
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub headings: HeadingCounts,
}

/// Extracts all signals from raw HTML. Never fails.
pub fn extract_signals(html: &str) -> PageSignals {
    PageSignals {
        title: extract_title(html),
        meta_description: extract_meta_description(html),
        headings: count_headings(html),
    }
}

/// Returns the trimmed text of the first `<title>` element.
///
/// `None` when the element is absent, contains nested markup, or is blank.
pub fn extract_title(html: &str) -> Option<String> {
    first_capture(&TITLE_RE, html)
}

/// Returns the trimmed `content` of the first `<meta name="description">` tag.
///
/// `None` when the tag is absent, lists `content` before `name`, or is blank.
pub fn extract_meta_description(html: &str) -> Option<String> {
    first_capture(&META_DESCRIPTION_RE, html)
}

/// Counts opening `h1`, `h2` and `h3` tags, ignoring document structure.
pub fn count_headings(html: &str) -> HeadingCounts {
    HeadingCounts {
        h1: H1_RE.find_iter(html).count(),
        h2: H2_RE.find_iter(html).count(),
        h3: H3_RE.find_iter(html).count(),
    }
}

/// Text of the first participating capture group of the first match.
fn first_capture(re: &Regex, html: &str) -> Option<String> {
    let caps = re.captures(html)?;
    caps.iter()
        .skip(1)
        .flatten()
        .next()
        .map(|m| m.as_str().trim())
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
