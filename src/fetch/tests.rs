// Fetch module tests.

use super::*;
use httptest::{matchers::*, responders::*, Expectation, Server};
use std::time::Duration;

use crate::config::DEFAULT_USER_AGENT;

fn test_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(DEFAULT_USER_AGENT)
        .build()
        .expect("client should build")
}

#[tokio::test]
async fn test_fetch_success_returns_body_and_length() {
    let server = Server::run();
    let body = "<html><head><title>Example</title></head><body><h1>Hi</h1></body></html>";
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/"),
            request::headers(contains(("user-agent", DEFAULT_USER_AGENT))),
        ])
        .times(1)
        .respond_with(status_code(200).body(body)),
    );

    let stats = ProcessingStats::new();
    let result = fetch_page(
        &test_client(Duration::from_secs(5)),
        &server.url_str("/"),
        &stats,
    )
    .await;

    assert_eq!(result.status_code, 200);
    assert_eq!(result.content_length, body.len());
    assert_eq!(result.raw_html.as_deref(), Some(body));
    assert!(!result.is_degraded());
    assert_eq!(stats.total_errors(), 0);
}

#[tokio::test]
async fn test_fetch_non_2xx_is_still_a_response() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/missing"))
            .times(1)
            .respond_with(status_code(404).body("<title>Not Found</title>")),
    );

    let stats = ProcessingStats::new();
    let result = fetch_page(
        &test_client(Duration::from_secs(5)),
        &server.url_str("/missing"),
        &stats,
    )
    .await;

    assert_eq!(result.status_code, 404);
    assert_eq!(result.html(), "<title>Not Found</title>");
    assert_eq!(stats.total_errors(), 0);
}

#[tokio::test]
async fn test_fetch_content_length_counts_bytes_not_chars() {
    let server = Server::run();
    let body = "<title>Café</title>";
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .respond_with(status_code(200).body(body)),
    );

    let result = fetch_page(
        &test_client(Duration::from_secs(5)),
        &server.url_str("/"),
        &ProcessingStats::new(),
    )
    .await;

    assert_eq!(result.content_length, body.len());
    assert!(result.content_length > body.chars().count());
}

#[tokio::test]
async fn test_fetch_timeout_degrades() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/slow"))
            .times(1)
            .respond_with(delay_and_then(
                Duration::from_secs(2),
                status_code(200).body("late"),
            )),
    );

    let timeout = Duration::from_millis(200);
    let stats = ProcessingStats::new();
    let result = fetch_page(&test_client(timeout), &server.url_str("/slow"), &stats).await;

    assert_eq!(result.status_code, 0);
    assert_eq!(result.content_length, 0);
    assert!(result.is_degraded());
    assert!(result.response_time_ms >= 200);
    assert_eq!(stats.get_error_count(ErrorType::FetchTimeoutError), 1);
}

#[tokio::test]
async fn test_fetch_connection_refused_degrades() {
    // Reserve a port, then release it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind should succeed");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let stats = ProcessingStats::new();
    let result = fetch_page(
        &test_client(Duration::from_secs(5)),
        &format!("http://{addr}/"),
        &stats,
    )
    .await;

    assert_eq!(result.status_code, 0);
    assert!(result.is_degraded());
    assert_eq!(result.html(), "");
    assert_eq!(stats.get_error_count(ErrorType::FetchConnectError), 1);
}

#[tokio::test]
async fn test_fetch_oversized_body_is_cut_at_cap() {
    let server = Server::run();
    let body = format!("<title>Big page</title>{}", "x".repeat(MAX_RESPONSE_BODY_SIZE + 1024 * 1024));
    server.expect(
        Expectation::matching(request::method_path("GET", "/big"))
            .respond_with(status_code(200).body(body)),
    );

    let stats = ProcessingStats::new();
    let result = fetch_page(
        &test_client(Duration::from_secs(5)),
        &server.url_str("/big"),
        &stats,
    )
    .await;

    assert_eq!(result.status_code, 200);
    assert_eq!(result.content_length, MAX_RESPONSE_BODY_SIZE);
    assert_eq!(result.html().len(), MAX_RESPONSE_BODY_SIZE);
    assert!(result.truncated);
    assert!(result.html().starts_with("<title>Big page</title>"));
    assert_eq!(stats.get_warning_count(WarningType::BodyTruncated), 1);
}

#[tokio::test]
async fn test_fetch_body_exactly_at_cap_is_not_truncated() {
    let server = Server::run();
    let body = "y".repeat(512);
    server.expect(
        Expectation::matching(request::method_path("GET", "/fits"))
            .respond_with(status_code(200).body(body.clone())),
    );

    let stats = ProcessingStats::new();
    let result = fetch_page_capped(
        &test_client(Duration::from_secs(5)),
        &server.url_str("/fits"),
        &stats,
        512,
    )
    .await;

    assert_eq!(result.content_length, 512);
    assert!(!result.truncated);
    assert_eq!(result.html(), body);
    assert_eq!(stats.total_warnings(), 0);
}
