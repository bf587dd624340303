// Shared helpers for router-level tests.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use seo_toolbox::rate_limiter::DailyQuota;
use seo_toolbox::{router, AppState, ToolGateway};

/// Builds a router with a short fetch timeout and the given quota override.
///
/// `trust_forwarded_for` is on so tests can pick their client bucket with
/// an `X-Forwarded-For` header.
#[allow(dead_code)] // Used by other test files
pub fn test_router(daily_limit: Option<u32>, timeout: Duration) -> (Router, AppState) {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(seo_toolbox::config::DEFAULT_USER_AGENT)
        .build()
        .expect("client should build");
    let gateway = ToolGateway::new(client, DailyQuota::new(daily_limit));
    let state = AppState::new(gateway, true);
    (router(state.clone()), state)
}

/// POSTs a JSON body as client `ip` and returns the status and parsed body.
#[allow(dead_code)]
pub async fn post_json(app: &Router, path: &str, ip: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .header("x-forwarded-for", ip)
        .body(Body::from(body.to_string()))
        .expect("request should build");
    send(app, request).await
}

/// GETs `path` and returns the status and parsed body.
#[allow(dead_code)]
pub async fn get_json(app: &Router, path: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(path)
        .body(Body::empty())
        .expect("request should build");
    send(app, request).await
}

#[allow(dead_code)]
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
