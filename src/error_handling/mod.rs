//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (initialization and tool gateway errors)
//! - The JSON shape every gateway error is returned in
//! - Processing statistics tracking (errors, warnings, info metrics)
//!
//! Categories are split into:
//! - **Errors**: fetch failures (degraded, never surfaced) and unexpected faults
//! - **Warnings**: missing page signals (title, meta description)
//! - **Info**: lead capture outcomes, quota and validation rejections

mod response;
mod stats;
mod types;

// Re-export public API
pub use response::DAILY_LIMIT_MESSAGE;
pub use stats::{CounterSet, ProcessingStats};
pub use types::{ErrorType, InfoType, InitializationError, LeadError, ToolError, WarningType};
