//! Health and index handlers.

use axum::Json;
use chrono::{SecondsFormat, Utc};
use strum::IntoEnumIterator;

use crate::config::{API_TITLE, SERVICE_NAME, SERVICE_VERSION};
use crate::server::types::{HealthResponse, RootResponse};
use crate::tools::ToolKind;

/// `GET /health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
    })
}

/// `GET /`
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: API_TITLE,
        status: "running",
        version: SERVICE_VERSION,
        tools: ToolKind::iter().map(|tool| tool.path()).collect(),
    })
}
