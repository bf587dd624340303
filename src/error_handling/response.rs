//! Conversion of gateway errors into JSON HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use super::types::ToolError;

/// Message returned to callers who exhausted a tool's daily quota.
pub const DAILY_LIMIT_MESSAGE: &str = "Daily limit reached. Upgrade for unlimited access.";

impl IntoResponse for ToolError {
    fn into_response(self) -> Response {
        match self {
            ToolError::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ToolError::RateLimited { tool, limit } => (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({
                    "error": DAILY_LIMIT_MESSAGE,
                    "tool": tool.as_str(),
                    "limit": limit,
                })),
            )
                .into_response(),
            ToolError::Unexpected { tool, source } => {
                log::error!("{tool} failed: {source:#}");
                let (error, message) = tool.failure_messages();
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": error, "message": message })),
                )
                    .into_response()
            }
        }
    }
}
