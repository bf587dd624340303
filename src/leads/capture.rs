//! Email validation and the capture entry point.

use std::sync::LazyLock;

use log::info;
use regex::Regex;

use super::store::{CaptureOutcome, LeadRecord, LeadRepository};
use crate::error_handling::LeadError;
use crate::tools::ToolKind;
use crate::utils::compile_pattern;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_pattern(EMAIL_PATTERN, "email validation"));

/// Loose `local@domain.tld` check with no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validates `email` and records it against `tool`.
///
/// The email is trimmed before validation and storage. A repeat of an
/// existing (email, tool) pair yields [`CaptureOutcome::AlreadyCaptured`].
///
/// # Errors
///
/// `LeadError::InvalidEmail` for malformed addresses (nothing is stored),
/// `LeadError::Store` if the repository fails.
pub async fn capture_lead(
    repo: &dyn LeadRepository,
    email: &str,
    tool: ToolKind,
    source: Option<&str>,
) -> Result<CaptureOutcome, LeadError> {
    let email = email.trim();
    if !is_valid_email(email) {
        return Err(LeadError::InvalidEmail);
    }

    let outcome = repo
        .record(LeadRecord::new(email, tool, source.map(str::to_string)))
        .await?;
    match outcome {
        CaptureOutcome::Captured => info!("Lead captured: {email} for {tool}"),
        CaptureOutcome::AlreadyCaptured => info!("Lead already on file: {email} for {tool}"),
    }
    Ok(outcome)
}

/// Per-tool upsell line.
pub fn upgrade_message(tool: ToolKind) -> &'static str {
    match tool {
        ToolKind::WebsiteAnalyzer => {
            "Upgrade to Pro for unlimited pages, custom reports, and API access!"
        }
        ToolKind::BacklinkChecker => {
            "Get Pro for competitor analysis, historical data, and bulk checking!"
        }
        ToolKind::KeywordResearch => {
            "Unlock Pro for keyword difficulty analysis, SERP features, and export options!"
        }
        ToolKind::MetaGenerator => {
            "Pro users get AI-powered suggestions, bulk generation, and custom templates!"
        }
    }
}
