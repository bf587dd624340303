//! Panics and collaborator failures must surface as generic JSON 500s.

mod helpers;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::json;

use helpers::{get_json, post_json};
use seo_toolbox::rate_limiter::DailyQuota;
use seo_toolbox::services::{KeywordData, KeywordService};
use seo_toolbox::{router, AppState, ToolGateway};

struct PanickingKeywords;

#[async_trait]
impl KeywordService for PanickingKeywords {
    async fn analyze(&self, _keyword: &str) -> anyhow::Result<KeywordData> {
        panic!("keyword backend blew up");
    }
}

struct FailingKeywords;

#[async_trait]
impl KeywordService for FailingKeywords {
    async fn analyze(&self, _keyword: &str) -> anyhow::Result<KeywordData> {
        Err(anyhow::anyhow!("upstream credentials rejected"))
    }
}

fn app_with(service: Arc<dyn KeywordService>) -> axum::Router {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
        .expect("client should build");
    let gateway =
        ToolGateway::new(client, DailyQuota::new(None)).with_keyword_service(service);
    router(AppState::new(gateway, true))
}

#[tokio::test]
async fn test_handler_panic_becomes_500_json() {
    let app = app_with(Arc::new(PanickingKeywords));
    let (status, body) = post_json(
        &app,
        "/api/tools/keyword-research",
        "192.0.2.50",
        &json!({ "keyword": "genmaicha" }).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "error": "Internal Server Error", "message": "Something went wrong" })
    );

    // The server keeps serving after a panic
    let (status, _) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_collaborator_error_is_opaque_500() {
    let app = app_with(Arc::new(FailingKeywords));
    let (status, body) = post_json(
        &app,
        "/api/tools/keyword-research",
        "192.0.2.51",
        &json!({ "keyword": "hojicha" }).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Keyword research failed");
    assert!(!body.to_string().contains("credentials"));
}
