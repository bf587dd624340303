//! Tool route handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use super::fallback::not_found_handler;
use crate::server::client::ClientIdentity;
use crate::server::types::AppState;
use crate::tools::{ToolKind, ToolRequest};

pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON body";

/// `POST /api/tools/{tool}` for canonical slugs and aliases.
pub async fn tool_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    ClientIdentity(client): ClientIdentity,
    uri: Uri,
    body: Result<Json<ToolRequest>, JsonRejection>,
) -> Response {
    let Some(tool) = ToolKind::from_slug(&slug) else {
        return not_found_handler(uri).await.into_response();
    };

    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            log::debug!("{tool} body rejected for {client}: {}", rejection.body_text());
            return json_rejection_response(&rejection);
        }
    };

    match state.gateway.handle(tool, &client, request).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Every unreadable body is a 400, except one over the size limit (413).
fn json_rejection_response(rejection: &JsonRejection) -> Response {
    let (status, error) = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large")
    } else {
        (StatusCode::BAD_REQUEST, INVALID_JSON_MESSAGE)
    };
    (status, Json(json!({ "error": error }))).into_response()
}
