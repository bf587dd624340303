//! Input validation for tool requests.
//!
//! Every check runs before the quota is charged and before any network work.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::ToolError;
use crate::utils::compile_pattern;

pub const INVALID_URL_MESSAGE: &str = "Valid URL required";
pub const INVALID_DOMAIN_MESSAGE: &str = "Valid domain required";
pub const MISSING_KEYWORD_MESSAGE: &str = "Keyword required";

/// Two or more dot-separated labels of 1-63 letters, digits or hyphens,
/// none starting or ending with a hyphen.
const DOMAIN_PATTERN: &str =
    r"(?i)^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?$";
const MAX_DOMAIN_LENGTH: usize = 253;

static DOMAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_pattern(DOMAIN_PATTERN, "domain validation"));

/// Parses an absolute `http`/`https` URL with a host.
///
/// Unlike a bare parse, relative references, other schemes and URLs longer
/// than `MAX_URL_LENGTH` are rejected.
pub fn validate_url(raw: Option<&str>) -> Result<Url, ToolError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty() && s.len() <= MAX_URL_LENGTH)
        .ok_or_else(|| ToolError::validation(INVALID_URL_MESSAGE))?;

    let parsed = Url::parse(raw).map_err(|_| ToolError::validation(INVALID_URL_MESSAGE))?;
    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some_and(|h| !h.is_empty()) => Ok(parsed),
        _ => Err(ToolError::validation(INVALID_URL_MESSAGE)),
    }
}

/// Checks a bare domain name such as `example.co.uk`.
pub fn validate_domain(raw: Option<&str>) -> Result<String, ToolError> {
    raw.map(str::trim)
        .filter(|d| d.len() <= MAX_DOMAIN_LENGTH && DOMAIN_RE.is_match(d))
        .map(str::to_string)
        .ok_or_else(|| ToolError::validation(INVALID_DOMAIN_MESSAGE))
}

/// Returns the trimmed keyword, rejecting blank input.
pub fn validate_keyword(raw: Option<&str>) -> Result<String, ToolError> {
    raw.map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ToolError::validation(MISSING_KEYWORD_MESSAGE))
}
