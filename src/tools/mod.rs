//! The tool gateway.
//!
//! Each tool request goes through the same pipeline:
//! 1. Validate the input field(s) for the tool
//! 2. Charge the caller's daily quota
//! 3. Fetch and analyse the page, or ask the keyword/backlink service
//! 4. Capture the lead when an email is supplied
//! 5. Wrap the results with the tool's static free-tier metadata
//!
//! Page fetch failures degrade to empty results; only unexpected faults
//! become errors.

mod gateway;
mod kind;
mod reports;
mod request;
mod validate;

pub use gateway::{LeadCaptureReport, LeadCaptureStatus, ToolGateway, ToolResponse};
pub use kind::{ToolKind, TOOLS_PATH_PREFIX};
pub use reports::{BacklinkReport, KeywordReport, MetaReport, WebsiteAnalysis};
pub use request::ToolRequest;
pub use validate::{
    validate_domain, validate_keyword, validate_url, INVALID_DOMAIN_MESSAGE, INVALID_URL_MESSAGE,
    MISSING_KEYWORD_MESSAGE,
};
