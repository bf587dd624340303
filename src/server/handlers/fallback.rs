//! Not-found and panic responses.

use std::any::Any;

use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use strum::IntoEnumIterator;

use crate::tools::ToolKind;

/// Every route the server answers, as `METHOD path`.
pub fn available_endpoints() -> Vec<String> {
    ["GET /health", "GET /", "GET /status", "GET /metrics"]
        .into_iter()
        .map(str::to_string)
        .chain(ToolKind::iter().map(|tool| format!("POST {}", tool.path())))
        .collect()
}

/// Fallback for unmatched routes.
pub async fn not_found_handler(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not Found",
            "message": format!("Route {uri} not found"),
            "available_endpoints": available_endpoints(),
        })),
    )
}

/// Turns a handler panic into a generic 500.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    log::error!("Handler panicked: {detail}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "Internal Server Error",
            "message": "Something went wrong",
        })),
    )
        .into_response()
}
