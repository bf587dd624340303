//! Error type definitions.
//!
//! This module defines the error enums returned by initialization and the
//! tool gateway, plus the error/warning/info categories counted by
//! [`ProcessingStats`](super::ProcessingStats).

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::tools::ToolKind;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error binding the listening socket.
    #[error("Failed to bind {addr}: {source}")]
    BindError {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Errors a tool request can end in.
///
/// Every variant is turned into a JSON response before reaching the client;
/// see the `IntoResponse` implementation in `error_handling::response`.
#[derive(Error, Debug)]
pub enum ToolError {
    /// The request input is malformed. Carries the field-specific message shown to the client.
    #[error("{0}")]
    Validation(String),

    /// The caller exhausted the tool's free-tier quota for the rolling day.
    #[error("daily limit of {limit} requests reached for {tool}")]
    RateLimited { tool: ToolKind, limit: u32 },

    /// Anything not anticipated. The source is only ever logged.
    #[error("{tool} failed: {source:#}")]
    Unexpected {
        tool: ToolKind,
        #[source]
        source: anyhow::Error,
    },
}

impl ToolError {
    /// Builds a validation error with the given client-facing message.
    pub fn validation(message: impl Into<String>) -> Self {
        ToolError::Validation(message.into())
    }
}

/// Errors from lead capture.
#[derive(Error, Debug)]
pub enum LeadError {
    /// The address does not look like `local@domain.tld`.
    #[error("Invalid email format")]
    InvalidEmail,

    /// The backing store failed.
    #[error("lead store failure: {0:#}")]
    Store(#[from] anyhow::Error),
}

/// Types of errors that can occur while serving tool requests.
///
/// Fetch failures never fail a request (the fetcher degrades to a zeroed
/// result), but they are counted here so operators can see them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    FetchTimeoutError,
    FetchConnectError,
    FetchRequestError,
    FetchBodyError,
    FetchOtherError,
    UnexpectedFault,
}

/// Types of warnings recorded while fetching pages and extracting signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    MissingTitle,
    MissingMetaDescription,
    BodyTruncated,
}

/// Informational events worth counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    LeadCaptured,
    DuplicateLead,
    InvalidLeadEmail,
    RateLimited,
    ValidationRejected,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::FetchTimeoutError => "fetch_timeout",
            ErrorType::FetchConnectError => "fetch_connect",
            ErrorType::FetchRequestError => "fetch_request",
            ErrorType::FetchBodyError => "fetch_body",
            ErrorType::FetchOtherError => "fetch_other",
            ErrorType::UnexpectedFault => "unexpected_fault",
        }
    }
}

impl WarningType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::MissingTitle => "missing_title",
            WarningType::MissingMetaDescription => "missing_meta_description",
            WarningType::BodyTruncated => "body_truncated",
        }
    }
}

impl InfoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::LeadCaptured => "lead_captured",
            InfoType::DuplicateLead => "duplicate_lead",
            InfoType::InvalidLeadEmail => "invalid_lead_email",
            InfoType::RateLimited => "rate_limited",
            InfoType::ValidationRejected => "validation_rejected",
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
